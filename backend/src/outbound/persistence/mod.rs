//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private; adapters translate rows into engine types and map every
//! database failure into the port's error enum.
//!
//! # Example
//!
//! ```no_run
//! use fake_person_api::domain::ports::TownReferenceProvider;
//! use fake_person_api::outbound::persistence::{
//!     DbPool, DieselTownReferenceProvider, PoolConfig,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/towns")).await?;
//! let towns = DieselTownReferenceProvider::new(pool).load_towns().await?;
//! # let _ = towns;
//! # Ok(())
//! # }
//! ```

pub(crate) mod diesel_helpers;
mod diesel_town_reference_provider;
mod models;
mod pool;
mod schema;

pub use diesel_town_reference_provider::DieselTownReferenceProvider;
pub use pool::{DbPool, PoolConfig, PoolError};
