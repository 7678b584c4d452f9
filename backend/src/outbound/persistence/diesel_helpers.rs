//! Error message extraction shared by Diesel adapters.

use tracing::debug;

use super::pool::PoolError;

/// Readable message from a pool error.
pub fn map_pool_error_message(error: PoolError) -> String {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    }
}

/// Readable message from a Diesel error, logged at debug with `operation`.
pub fn map_diesel_error_message(error: diesel::result::Error, operation: &str) -> String {
    let error_message = error.to_string();
    debug!(%error_message, %operation, "diesel operation failed");
    error_message
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(PoolError::checkout("timed out"))]
    #[case(PoolError::build("timed out"))]
    fn pool_messages_drop_the_variant_prefix(#[case] error: PoolError) {
        assert_eq!(map_pool_error_message(error), "timed out");
    }

    #[rstest]
    fn diesel_messages_are_preserved() {
        let message = map_diesel_error_message(diesel::result::Error::NotFound, "load towns");
        assert_eq!(message, diesel::result::Error::NotFound.to_string());
    }
}
