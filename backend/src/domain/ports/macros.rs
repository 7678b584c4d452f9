//! Helper macro for declaring port error enums.
//!
//! Every variant carries named fields and a display message. The macro
//! derives `thiserror::Error` and emits one snake_case constructor per
//! variant whose parameters accept `impl Into<FieldType>`.

macro_rules! define_port_error {
    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*)) => {
        ::paste::paste! {
            #[doc = "Construct the `" $variant "` variant."]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant () () $($field : $ty,)*);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum LookupError {
            Unreachable { message: String } => "unreachable: {message}",
            BadRow { row: usize } => "bad row {row}",
            Rejected { message: String, row: usize } => "rejected row {row}: {message}",
        }
    }

    #[test]
    fn string_fields_accept_str() {
        assert_eq!(
            LookupError::unreachable("timeout").to_string(),
            "unreachable: timeout"
        );
    }

    #[test]
    fn other_fields_keep_their_type() {
        assert_eq!(LookupError::bad_row(7_usize).to_string(), "bad row 7");
    }

    #[test]
    fn mixed_fields_are_passed_in_order() {
        let err = LookupError::rejected("negative weight", 3_usize);
        assert_eq!(
            err,
            LookupError::Rejected {
                message: "negative weight".to_owned(),
                row: 3
            }
        );
        assert_eq!(err.to_string(), "rejected row 3: negative weight");
    }
}
