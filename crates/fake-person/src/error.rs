//! Error types for the fake-person crate.
//!
//! Reference data problems are configuration errors: they surface once, at
//! load time, and abort initialisation. Generation itself draws only from
//! bounded ranges and cannot fail.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating reference data.
///
/// Any of these means the generator cannot be built, so callers should treat
/// them as fatal deployment problems rather than retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceDataError {
    /// A reference data file could not be read.
    #[error("failed to read reference data at '{path}': {message}")]
    Io {
        /// Path to the file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The reference data JSON is malformed or missing required fields.
    #[error("invalid reference data JSON: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
    },

    /// The name corpus contains no entries.
    #[error("name corpus contains no entries")]
    EmptyNameCorpus,

    /// A name corpus entry has a blank first or last name.
    #[error("name corpus entry at index {index} has a blank {field}")]
    InvalidName {
        /// Index of the offending entry.
        index: usize,
        /// Which name field is blank.
        field: &'static str,
    },

    /// The town table contains no towns.
    #[error("town reference table is empty")]
    EmptyTownTable,

    /// A town row violates the table constraints.
    #[error("invalid town '{postal_code}': {reason}")]
    InvalidTown {
        /// Postal code of the offending row, as supplied.
        postal_code: String,
        /// Which constraint failed.
        reason: &'static str,
    },

    /// The summed town weights do not fit in a `u64`.
    #[error("total town weight overflows")]
    WeightOverflow,
}

/// Errors raised when a batch size is rejected by [`BatchPolicy::Strict`].
///
/// [`BatchPolicy::Strict`]: crate::BatchPolicy::Strict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BatchSizeError {
    /// The requested amount lies outside the supported batch range.
    #[error("batch size {requested} is outside {min}..={max}")]
    OutOfRange {
        /// Amount that was requested.
        requested: i64,
        /// Smallest accepted batch.
        min: usize,
        /// Largest accepted batch.
        max: usize,
    },
}
