//! Reference data bootstrapping.
//!
//! The name corpus and town table are loaded once, before the listener is
//! bound. Any failure aborts startup; the service never runs without them.

use std::path::Path;
use std::sync::Arc;

use fake_person::{NameCorpus, PersonGenerator, ReferenceDataError, TownTable};
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::ports::{
    FixtureTownReferenceProvider, TownReferenceError, TownReferenceProvider,
};
use crate::outbound::persistence::{DbPool, DieselTownReferenceProvider, PoolConfig, PoolError};

const BUNDLED_ORIGIN: &str = "bundled corpus";

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The name corpus could not be loaded.
    #[error("failed to load name corpus from {origin}: {source}")]
    NameCorpus {
        /// Corpus path, or `bundled corpus` for the embedded one.
        origin: String,
        /// Underlying load error.
        #[source]
        source: ReferenceDataError,
    },
    /// The town provider failed.
    #[error("failed to load towns from {source_name}: {source}")]
    Towns {
        /// Provider label.
        source_name: &'static str,
        /// Underlying provider error.
        #[source]
        source: TownReferenceError,
    },
    /// The loaded towns do not form a usable table.
    #[error("town reference data is invalid: {0}")]
    TownTable(#[source] ReferenceDataError),
    /// The database pool could not be built.
    #[error("database pool error: {0}")]
    Pool(#[from] PoolError),
}

/// Build a pool when a database URL is configured.
///
/// # Errors
///
/// Returns [`StartupError::Pool`] when the pool cannot be built.
pub async fn connect_database(database_url: Option<&str>) -> Result<Option<DbPool>, StartupError> {
    let Some(url) = database_url else {
        return Ok(None);
    };
    let pool = DbPool::new(PoolConfig::new(url)).await?;
    info!("database pool ready");
    Ok(Some(pool))
}

/// Pick the town provider: PostgreSQL when a pool exists, else the fixture.
pub fn town_provider(db_pool: Option<DbPool>) -> Arc<dyn TownReferenceProvider> {
    match db_pool {
        Some(pool) => Arc::new(DieselTownReferenceProvider::new(pool)),
        None => {
            warn!("no database configured; using bundled fixture towns");
            Arc::new(FixtureTownReferenceProvider)
        }
    }
}

/// Load both reference datasets and build the generator.
///
/// `names_path` replaces the corpus embedded in `fake-person` when set.
///
/// # Errors
///
/// Returns [`StartupError`] when either dataset is missing or invalid.
///
/// # Examples
///
/// ```no_run
/// use fake_person_api::domain::ports::FixtureTownReferenceProvider;
/// use fake_person_api::startup::load_generator;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let generator = load_generator(None, &FixtureTownReferenceProvider).await?;
/// assert!(!generator.towns().is_empty());
/// # Ok(())
/// # }
/// ```
pub async fn load_generator(
    names_path: Option<&Path>,
    towns: &dyn TownReferenceProvider,
) -> Result<PersonGenerator, StartupError> {
    let (names, origin) = match names_path {
        Some(path) => (NameCorpus::from_file(path), path.display().to_string()),
        None => (NameCorpus::bundled(), BUNDLED_ORIGIN.to_owned()),
    };
    let names = names.map_err(|source| StartupError::NameCorpus {
        origin: origin.clone(),
        source,
    })?;

    let rows = towns
        .load_towns()
        .await
        .map_err(|source| StartupError::Towns {
            source_name: towns.source(),
            source,
        })?;
    let table = TownTable::new(rows).map_err(StartupError::TownTable)?;

    info!(
        names = names.len(),
        towns = table.len(),
        town_source = towns.source(),
        names_origin = %origin,
        "reference data loaded"
    );
    Ok(PersonGenerator::new(names, table))
}
