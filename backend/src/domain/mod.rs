//! Domain types and use-cases.
//!
//! Public surface:
//! - [`Error`] and [`ErrorCode`]: transport-agnostic failure payload.
//! - [`PersonService`]: record generation over shared reference data.
//! - [`ports`]: the town reference and person query boundaries.

pub mod error;
mod person_service;
pub mod ports;

pub use self::error::{
    Error, ErrorCode, INCORRECT_API_ENDPOINT, INCORRECT_GET_PARAMETER, INCORRECT_HTTP_METHOD,
};
pub use self::person_service::PersonService;
