//! Process startup: settings and reference data loading.

mod config;
mod reference_data;

pub use config::{DATABASE_URL_ENV, ServiceSettings};
pub use reference_data::{StartupError, connect_database, load_generator, town_provider};
