//! Person record endpoints.
//!
//! ```text
//! GET /cpr                  {"CPR"}
//! GET /name-gender          {"firstName", "lastName", "gender"}
//! GET /name-gender-dob      ... plus "birthDate"
//! GET /cpr-name-gender      ... plus "CPR"
//! GET /cpr-name-gender-dob  CPR, names, gender and birth date
//! GET /address              {"address": {...}}
//! GET /phone                {"phoneNumber"}
//! GET /person[?n=N]         full record, or an array of N records
//! ```
//!
//! Every endpoint generates a fresh record and projects the requested
//! fields from it, so partial views stay internally consistent.

use actix_web::{HttpResponse, web};
use fake_person::{Address, Cpr, PhoneNumber};
use serde::Serialize;

use crate::inbound::http::ApiResult;
use crate::inbound::http::query::PersonCountQuery;
use crate::inbound::http::state::HttpState;

#[derive(Serialize)]
struct CprResponse<'a> {
    #[serde(rename = "CPR")]
    cpr: &'a Cpr,
}

#[derive(Serialize)]
struct AddressResponse<'a> {
    address: &'a Address,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PhoneResponse<'a> {
    phone_number: &'a PhoneNumber,
}

/// `GET /cpr`
pub async fn cpr(state: web::Data<HttpState>) -> HttpResponse {
    let person = state.persons.person();
    HttpResponse::Ok().json(CprResponse { cpr: person.cpr() })
}

/// `GET /name-gender`
pub async fn name_gender(state: web::Data<HttpState>) -> HttpResponse {
    let person = state.persons.person();
    HttpResponse::Ok().json(person.name_gender())
}

/// `GET /name-gender-dob`
pub async fn name_gender_dob(state: web::Data<HttpState>) -> HttpResponse {
    let person = state.persons.person();
    HttpResponse::Ok().json(person.name_gender_birth_date())
}

/// `GET /cpr-name-gender`
pub async fn cpr_name_gender(state: web::Data<HttpState>) -> HttpResponse {
    let person = state.persons.person();
    HttpResponse::Ok().json(person.cpr_name_gender())
}

/// `GET /cpr-name-gender-dob`
pub async fn cpr_name_gender_dob(state: web::Data<HttpState>) -> HttpResponse {
    let person = state.persons.person();
    HttpResponse::Ok().json(person.cpr_name_gender_birth_date())
}

/// `GET /address`
pub async fn address(state: web::Data<HttpState>) -> HttpResponse {
    let person = state.persons.person();
    HttpResponse::Ok().json(AddressResponse {
        address: person.address(),
    })
}

/// `GET /phone`
pub async fn phone(state: web::Data<HttpState>) -> HttpResponse {
    let person = state.persons.person();
    HttpResponse::Ok().json(PhoneResponse {
        phone_number: person.phone_number(),
    })
}

/// `GET /person` and `GET /person?n=N`.
///
/// Without `n`, or with `n` coercing to `1`, a single object is returned.
/// Any other amount goes through the configured batch policy and yields an
/// array.
pub async fn person(
    state: web::Data<HttpState>,
    query: web::Query<PersonCountQuery>,
) -> ApiResult<HttpResponse> {
    match query.amount() {
        None | Some(1) => Ok(HttpResponse::Ok().json(state.persons.person())),
        Some(amount) => {
            let people = state.persons.persons(amount)?;
            Ok(HttpResponse::Ok().json(people))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use mockall::predicate::eq;
    use rstest::rstest;
    use serde_json::json;

    use crate::domain::Error;
    use crate::domain::ports::MockPersonQuery;
    use crate::inbound::http::state::HttpState;
    use crate::inbound::http::test_utils::{call, fixture_generator, test_app};

    #[rstest]
    #[actix_web::test]
    async fn bulk_amount_is_forwarded_to_the_port() {
        let mut query = MockPersonQuery::new();
        query.expect_persons().with(eq(7)).times(1).returning(|amount| {
            let generator = fixture_generator();
            let today = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date");
            let count = usize::try_from(amount).expect("positive amount");
            Ok((0..count)
                .map(|_| generator.person(&mut rand::rng(), today))
                .collect())
        });
        let app = actix_test::init_service(test_app(HttpState::new(Arc::new(query)))).await;

        let (status, body) = call(&app, actix_test::TestRequest::get().uri("/person?n=7")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(7));
    }

    #[rstest]
    #[actix_web::test]
    async fn internal_port_failures_are_redacted() {
        let mut query = MockPersonQuery::new();
        query
            .expect_persons()
            .returning(|_| Err(Error::internal("generator poisoned")));
        let app = actix_test::init_service(test_app(HttpState::new(Arc::new(query)))).await;

        let (status, body) = call(&app, actix_test::TestRequest::get().uri("/person?n=3")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }

    #[rstest]
    #[actix_web::test]
    async fn single_record_never_touches_the_batch_path() {
        let mut query = MockPersonQuery::new();
        query.expect_persons().never();
        query.expect_person().times(1).returning(|| {
            let today = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date");
            fixture_generator().person(&mut rand::rng(), today)
        });
        let app = actix_test::init_service(test_app(HttpState::new(Arc::new(query)))).await;

        let (status, body) = call(&app, actix_test::TestRequest::get().uri("/person")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.get("phoneNumber").is_some());
    }
}
