//! HTTP service serving synthetic Danish person records.
//!
//! The service wraps the `fake-person` engine behind a small REST surface.
//! Reference data is loaded once by [`startup`]; [`domain`] holds the use
//! case and ports; [`inbound`] and [`outbound`] hold the adapters.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod startup;

pub use middleware::RequestTrace;
pub use middleware::trace::TraceId;
