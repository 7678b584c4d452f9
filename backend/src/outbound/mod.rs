//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL town reference table via Diesel.

pub mod persistence;
