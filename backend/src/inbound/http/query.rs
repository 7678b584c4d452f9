//! Query-string handling for bulk person requests.
//!
//! The `n` parameter is coerced the lenient way older clients expect: the
//! leading integer is taken and anything after it is ignored, so `5.5` is
//! `5` and `abc` is `0`. Values beyond `i64` saturate.

use actix_web::error::QueryPayloadError;
use actix_web::{HttpRequest, web};
use serde::Deserialize;
use tracing::debug;

use crate::domain::Error;

/// Query parameters accepted by `GET /person`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonCountQuery {
    /// Raw `n` parameter, if present.
    pub n: Option<String>,
}

impl PersonCountQuery {
    /// Coerced amount, or `None` when `n` is absent.
    pub fn amount(&self) -> Option<i64> {
        self.n.as_deref().map(parse_amount)
    }
}

/// Coerce a raw parameter to its leading integer.
///
/// Leading whitespace and a single sign are accepted. A string without
/// leading digits is `0`.
///
/// # Examples
/// ```
/// use fake_person_api::inbound::http::query::parse_amount;
///
/// assert_eq!(parse_amount("42"), 42);
/// assert_eq!(parse_amount(" 5.5"), 5);
/// assert_eq!(parse_amount("-3abc"), -3);
/// assert_eq!(parse_amount("many"), 0);
/// ```
pub fn parse_amount(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let magnitude = unsigned
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0_i64, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(i64::from(digit - b'0'))
        });

    if negative {
        magnitude.saturating_neg()
    } else {
        magnitude
    }
}

/// Query extractor configuration mapping malformed query strings to 400.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(reject_query)
}

fn reject_query(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, query = req.query_string(), "query string rejected");
    Error::incorrect_parameter().into()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("1", 1)]
    #[case("37", 37)]
    #[case("100", 100)]
    #[case("007", 7)]
    #[case("5.5", 5)]
    #[case("  12", 12)]
    #[case("+8", 8)]
    #[case("-5", -5)]
    #[case("12abc", 12)]
    #[case("abc", 0)]
    #[case("", 0)]
    #[case("-", 0)]
    #[case("+-3", 0)]
    #[case("99999999999999999999999", i64::MAX)]
    #[case("-99999999999999999999999", -i64::MAX)]
    fn coerces_leading_integer(#[case] raw: &str, #[case] expected: i64) {
        assert_eq!(parse_amount(raw), expected);
    }

    #[rstest]
    fn absent_parameter_has_no_amount() {
        assert_eq!(PersonCountQuery::default().amount(), None);
    }

    #[rstest]
    fn present_parameter_is_coerced() {
        let query = PersonCountQuery {
            n: Some("3.9".to_owned()),
        };
        assert_eq!(query.amount(), Some(3));
    }
}
