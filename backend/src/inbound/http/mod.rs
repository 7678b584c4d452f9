//! HTTP inbound adapter exposing the person endpoints and health checks.

pub mod error;
pub mod health;
pub mod persons;
pub mod query;
pub mod routes;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
