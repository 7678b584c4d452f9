//! Route table, method and endpoint fallbacks, and response headers.
//!
//! Only `GET` is served. Any other method is answered with 405 before the
//! path is considered, so an unknown path with a bad method is still a 405.
//! Unknown `GET` paths are 404.

use actix_web::http::{Method, header};
use actix_web::middleware::DefaultHeaders;
use actix_web::{HttpRequest, HttpResponse, Resource, Route, web};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::query::query_config;
use crate::inbound::http::{health, persons};

/// API version advertised on every response.
pub const API_VERSION: &str = "v1";

/// Register every endpoint and the fallback on `cfg`.
///
/// The application must also supply `web::Data<HttpState>` and
/// `web::Data<HealthState>`, and should be wrapped in
/// [`default_headers`] and `NormalizePath::trim()`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config())
        .service(get_only("/cpr", web::get().to(persons::cpr)))
        .service(get_only("/name-gender", web::get().to(persons::name_gender)))
        .service(get_only(
            "/name-gender-dob",
            web::get().to(persons::name_gender_dob),
        ))
        .service(get_only(
            "/cpr-name-gender",
            web::get().to(persons::cpr_name_gender),
        ))
        .service(get_only(
            "/cpr-name-gender-dob",
            web::get().to(persons::cpr_name_gender_dob),
        ))
        .service(get_only("/address", web::get().to(persons::address)))
        .service(get_only("/phone", web::get().to(persons::phone)))
        .service(get_only("/person", web::get().to(persons::person)))
        .service(get_only("/health/ready", web::get().to(health::ready)))
        .service(get_only("/health/live", web::get().to(health::live)))
        .default_service(web::to(unmatched));
}

/// Headers added to every response, errors included.
pub fn default_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add(("Accept-version", API_VERSION))
}

fn get_only(path: &str, route: Route) -> Resource {
    web::resource(path)
        .route(route)
        .default_service(web::to(method_not_allowed))
}

async fn method_not_allowed() -> ApiResult<HttpResponse> {
    Err(Error::incorrect_method())
}

async fn unmatched(req: HttpRequest) -> ApiResult<HttpResponse> {
    if req.method() == Method::GET {
        Err(Error::incorrect_endpoint())
    } else {
        Err(Error::incorrect_method())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use regex::Regex;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::inbound::http::test_utils::{call, fixture_state, test_app};

    fn object_keys(value: &Value) -> Vec<&str> {
        let mut keys: Vec<&str> = value
            .as_object()
            .expect("json object")
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        keys
    }

    #[rstest]
    #[case("/cpr", &["CPR"])]
    #[case("/name-gender", &["firstName", "gender", "lastName"])]
    #[case("/name-gender-dob", &["birthDate", "firstName", "gender", "lastName"])]
    #[case("/cpr-name-gender", &["CPR", "firstName", "gender", "lastName"])]
    #[case(
        "/cpr-name-gender-dob",
        &["CPR", "birthDate", "firstName", "gender", "lastName"]
    )]
    #[case("/address", &["address"])]
    #[case("/phone", &["phoneNumber"])]
    #[case(
        "/person",
        &["CPR", "address", "birthDate", "firstName", "gender", "lastName", "phoneNumber"]
    )]
    #[actix_web::test]
    async fn endpoints_return_their_projection(#[case] uri: &str, #[case] expected: &[&str]) {
        let app = actix_test::init_service(test_app(fixture_state())).await;
        let (status, body) = call(&app, actix_test::TestRequest::get().uri(uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(object_keys(&body), expected);
    }

    #[rstest]
    #[actix_web::test]
    async fn cpr_is_ten_digits() {
        let app = actix_test::init_service(test_app(fixture_state())).await;
        let (_, body) = call(&app, actix_test::TestRequest::get().uri("/cpr")).await;
        let pattern = Regex::new(r"^\d{10}$").expect("valid regex");
        assert!(pattern.is_match(body["CPR"].as_str().expect("string CPR")));
    }

    #[rstest]
    #[actix_web::test]
    async fn address_uses_snake_case_keys() {
        let app = actix_test::init_service(test_app(fixture_state())).await;
        let (_, body) = call(&app, actix_test::TestRequest::get().uri("/address")).await;
        assert_eq!(
            object_keys(&body["address"]),
            ["door", "floor", "number", "postal_code", "street", "town_name"]
        );
    }

    #[rstest]
    #[case("/person?n=5", 5)]
    #[case("/person?n=2", 2)]
    #[case("/person?n=100", 100)]
    #[case("/person?n=5.5", 5)]
    #[case("/person/?n=3", 3)]
    #[actix_web::test]
    async fn bulk_requests_return_arrays(#[case] uri: &str, #[case] expected: usize) {
        let app = actix_test::init_service(test_app(fixture_state())).await;
        let (status, body) = call(&app, actix_test::TestRequest::get().uri(uri)).await;
        assert_eq!(status, StatusCode::OK);
        let people = body.as_array().expect("json array");
        assert_eq!(people.len(), expected);
        let cprs: HashSet<&str> = people
            .iter()
            .map(|p| p["CPR"].as_str().expect("string CPR"))
            .collect();
        assert!(cprs.len() > 1, "records should differ");
    }

    #[rstest]
    #[case("/person?n=1")]
    #[case("/person?n=1.9")]
    #[case("/person?other=7")]
    #[actix_web::test]
    async fn single_amount_returns_one_object(#[case] uri: &str) {
        let app = actix_test::init_service(test_app(fixture_state())).await;
        let (status, body) = call(&app, actix_test::TestRequest::get().uri(uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_object(), "{body}");
    }

    #[rstest]
    #[case("/person?n=0")]
    #[case("/person?n=-5")]
    #[case("/person?n=101")]
    #[case("/person?n=abc")]
    #[case("/person?n=")]
    #[case("/person?n=1&n=2")]
    #[actix_web::test]
    async fn bad_amounts_are_rejected(#[case] uri: &str) {
        let app = actix_test::init_service(test_app(fixture_state())).await;
        let (status, body) = call(&app, actix_test::TestRequest::get().uri(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Incorrect GET parameter value" }));
    }

    #[rstest]
    #[case("/unknown")]
    #[case("/")]
    #[case("/cpr/extra")]
    #[actix_web::test]
    async fn unknown_endpoints_are_not_found(#[case] uri: &str) {
        let app = actix_test::init_service(test_app(fixture_state())).await;
        let (status, body) = call(&app, actix_test::TestRequest::get().uri(uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Incorrect API endpoint" }));
    }

    #[rstest]
    #[case(Method::POST, "/person")]
    #[case(Method::PUT, "/cpr")]
    #[case(Method::DELETE, "/phone")]
    #[case(Method::PATCH, "/unknown")]
    #[case(Method::HEAD, "/address")]
    #[case(Method::POST, "/health/ready")]
    #[actix_web::test]
    async fn other_methods_are_not_allowed(#[case] method: Method, #[case] uri: &str) {
        let app = actix_test::init_service(test_app(fixture_state())).await;
        let request = actix_test::TestRequest::default().method(method).uri(uri);
        let response = actix_test::call_service(&app, request.to_request()).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[rstest]
    #[case("/cpr")]
    #[case("/nope")]
    #[actix_web::test]
    async fn responses_carry_cors_and_version_headers(#[case] uri: &str) {
        let app = actix_test::init_service(test_app(fixture_state())).await;
        let request = actix_test::TestRequest::get().uri(uri).to_request();
        let response = actix_test::call_service(&app, request).await;
        let headers = response.headers();
        assert_eq!(
            headers
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
        assert_eq!(
            headers.get("Accept-version").and_then(|v| v.to_str().ok()),
            Some(API_VERSION)
        );
    }
}
