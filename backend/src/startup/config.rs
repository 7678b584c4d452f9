//! Service settings loaded via OrthoConfig.
//!
//! Values come from `FAKE_PERSON_*` environment variables, CLI flags or a
//! configuration file, in OrthoConfig's usual precedence.

use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::path::{Path, PathBuf};

use fake_person::BatchPolicy;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Environment variable consulted when `database_url` is not set.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Configuration controlling the listener and reference data sources.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FAKE_PERSON")]
pub struct ServiceSettings {
    /// Socket address to bind.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL for the town table.
    pub database_url: Option<String>,
    /// Path to a name corpus JSON file replacing the bundled corpus.
    pub names_path: Option<PathBuf>,
    /// Clamp out-of-range `n` on `/person` instead of rejecting it.
    #[ortho_config(default = false)]
    pub clamp_batches: bool,
}

impl ServiceSettings {
    /// Listener address, defaulting to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`AddrParseError`] when the configured value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR).parse()
    }

    /// Database URL from settings, falling back to `DATABASE_URL`.
    pub fn database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| env::var(DATABASE_URL_ENV).ok())
            .filter(|url| !url.trim().is_empty())
    }

    /// Configured name corpus path; `None` selects the embedded corpus.
    pub fn names_path(&self) -> Option<&Path> {
        self.names_path.as_deref()
    }

    /// Batch policy for `/person?n=`; strict unless clamping is enabled.
    pub fn batch_policy(&self) -> BatchPolicy {
        if self.clamp_batches {
            BatchPolicy::Clamping
        } else {
            BatchPolicy::Strict
        }
    }
}
