//! Driving port for person record generation.
//!
//! HTTP handlers depend on this port only; the production implementation is
//! [`crate::domain::PersonService`].

use fake_person::PersonRecord;

use crate::domain::Error;

/// Use-case port producing fresh person records.
#[cfg_attr(test, mockall::automock)]
pub trait PersonQuery: Send + Sync {
    /// Generate one record.
    fn person(&self) -> PersonRecord;

    /// Generate a batch of `amount` records.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::InvalidRequest`] when the batch
    /// policy rejects `amount`.
    fn persons(&self, amount: i64) -> Result<Vec<PersonRecord>, Error>;
}
