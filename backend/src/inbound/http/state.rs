//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the
//! [`PersonQuery`] port, so they can be tested without reference data files.

use std::sync::Arc;

use crate::domain::ports::PersonQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Record generation use-case.
    pub persons: Arc<dyn PersonQuery>,
}

impl HttpState {
    /// Wrap the person query port.
    pub fn new(persons: Arc<dyn PersonQuery>) -> Self {
        Self { persons }
    }
}
