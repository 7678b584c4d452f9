//! Shared helpers for HTTP adapter tests.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::middleware::NormalizePath;
use actix_web::{App, test as actix_test, web};
use fake_person::{BatchPolicy, NameCorpus, PersonGenerator, Town, TownTable};
use mockable::DefaultClock;
use serde_json::Value;

use crate::domain::PersonService;
use crate::inbound::http::health::HealthState;
use crate::inbound::http::routes::{configure, default_headers};
use crate::inbound::http::state::HttpState;

/// Generator over a four-name corpus and two towns.
pub fn fixture_generator() -> PersonGenerator {
    let names = NameCorpus::from_json(
        r#"{"persons": [
            {"name": "Mette", "surname": "Kristensen", "gender": "female"},
            {"name": "Søren", "surname": "Andersen", "gender": "male"},
            {"name": "Ida", "surname": "Thomsen", "gender": "female"},
            {"name": "Niels", "surname": "Rasmussen", "gender": "male"}
        ]}"#,
    )
    .expect("valid fixture corpus");
    let towns = TownTable::new(vec![
        Town::new("2100", "København Ø", 3).expect("valid town"),
        Town::new("9000", "Aalborg", 1).expect("valid town"),
    ])
    .expect("valid fixture towns");
    PersonGenerator::new(names, towns)
}

/// State backed by a strict-policy [`PersonService`] over the fixture data.
pub fn fixture_state() -> HttpState {
    let service = PersonService::new(
        Arc::new(fixture_generator()),
        Arc::new(DefaultClock),
        BatchPolicy::Strict,
    );
    HttpState::new(Arc::new(service))
}

/// Application wired the same way as the server, minus request tracing.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let health = HealthState::new();
    health.mark_ready();
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::Data::new(health))
        .wrap(default_headers())
        .wrap(NormalizePath::trim())
        .configure(configure)
}

/// Send `request` and decode the JSON body.
pub async fn call<S>(app: &S, request: actix_test::TestRequest) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let response = actix_test::call_service(app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body_json(response).await;
    (status, body)
}
