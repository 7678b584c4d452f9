//! Port for loading the weighted town reference table.
//!
//! The table is read once at startup and handed to the record generator. A
//! load failure is fatal: no address can be produced without it.

use async_trait::async_trait;
use fake_person::{Town, TownTable};

use super::define_port_error;

define_port_error! {
    /// Errors raised while loading town reference rows.
    pub enum TownReferenceError {
        /// The backing store could not be reached.
        Connection { message: String } =>
            "town reference connection failed: {message}",
        /// The query failed or returned an unusable row.
        Query { message: String } =>
            "town reference query failed: {message}",
    }
}

/// Port supplying `(postal code, town name, weight)` rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TownReferenceProvider: Send + Sync {
    /// Load every town row. Order is not significant.
    async fn load_towns(&self) -> Result<Vec<Town>, TownReferenceError>;

    /// Short label naming the source, used in startup logs.
    fn source(&self) -> &'static str;
}

/// In-memory provider over the town table bundled with `fake-person`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTownReferenceProvider;

#[async_trait]
impl TownReferenceProvider for FixtureTownReferenceProvider {
    async fn load_towns(&self) -> Result<Vec<Town>, TownReferenceError> {
        TownTable::bundled()
            .map(|table| table.towns().to_vec())
            .map_err(|err| TownReferenceError::query(err.to_string()))
    }

    fn source(&self) -> &'static str {
        "fixture"
    }
}
