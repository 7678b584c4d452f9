//! Backend entry-point: loads reference data and serves the person endpoints.

mod server;

use std::io;
use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use fake_person_api::inbound::http::health::HealthState;
use fake_person_api::startup::{ServiceSettings, connect_database, load_generator, town_provider};

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load().map_err(io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;

    let db_pool = connect_database(settings.database_url().as_deref())
        .await
        .map_err(|err| {
            error!(error = %err, "database setup failed");
            io::Error::other(err)
        })?;
    let provider = town_provider(db_pool);
    let generator = load_generator(settings.names_path(), provider.as_ref())
        .await
        .map_err(|err| {
            error!(error = %err, "reference data failed to load");
            io::Error::other(err)
        })?;

    let config = ServerConfig::new(bind_addr, Arc::new(generator))
        .with_batch_policy(settings.batch_policy());
    let health_state = web::Data::new(HealthState::new());

    info!(%bind_addr, "starting fake person api");
    create_server(health_state, config)?.await
}
