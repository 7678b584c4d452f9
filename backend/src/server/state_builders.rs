//! Builders for HTTP handler state.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use fake_person_api::domain::PersonService;
use fake_person_api::inbound::http::state::HttpState;

use super::ServerConfig;

/// Wrap the configured generator in a [`PersonService`] using the system
/// clock.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let service = PersonService::new(
        Arc::clone(&config.generator),
        Arc::new(DefaultClock),
        config.batch_policy,
    );
    web::Data::new(HttpState::new(Arc::new(service)))
}
