//! Danish CPR numbers derived from a resolved birth date and gender.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use serde::Serialize;

use crate::person::Gender;

/// Number of digits in a CPR number.
const CPR_LENGTH: usize = 10;

/// Number of leading digits encoding the birth date.
const DATE_DIGITS: usize = 6;

/// Number of free random digits between the date and the parity digit.
const SERIAL_DIGITS: usize = 3;

/// A ten-digit CPR number: `DDMMYY`, three serial digits, one parity digit.
///
/// There is deliberately no way to build a `Cpr` from a bare string; the
/// only constructor takes the birth date and gender it must encode.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use fake_person::{Cpr, Gender};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let born = NaiveDate::from_ymd_opt(1975, 4, 9).expect("valid date");
/// let cpr = Cpr::generate(&mut rng, born, Gender::Male);
///
/// assert!(cpr.as_str().starts_with("090475"));
/// assert_eq!(cpr.gender(), Gender::Male);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cpr(String);

impl Cpr {
    /// Builds a CPR number for the given birth date and gender.
    ///
    /// The parity digit is drawn uniformly from `{0, 2, 4, 6, 8}` for
    /// [`Gender::Female`] and from `{1, 3, 5, 7, 9}` for [`Gender::Male`].
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, birth_date: NaiveDate, gender: Gender) -> Self {
        let mut digits = String::with_capacity(CPR_LENGTH);
        digits.push_str(&format!(
            "{:02}{:02}{:02}",
            birth_date.day(),
            birth_date.month(),
            birth_date.year().rem_euclid(100)
        ));
        for _ in 0..SERIAL_DIGITS {
            digits.push(random_digit(rng, 0..=9));
        }
        let parity_offset = if gender.is_female() { 0 } else { 1 };
        let parity = rng.random_range(0..5_u8) * 2 + parity_offset;
        digits.push(digit_char(parity));
        Self(digits)
    }

    /// The number as a digit string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The leading `DDMMYY` digits.
    #[must_use]
    pub fn date_digits(&self) -> &str {
        self.0.get(..DATE_DIGITS).unwrap_or_default()
    }

    /// Returns `true` if the leading digits encode `date` as `DDMMYY`.
    #[must_use]
    pub fn encodes_birth_date(&self, date: NaiveDate) -> bool {
        let expected = format!(
            "{:02}{:02}{:02}",
            date.day(),
            date.month(),
            date.year().rem_euclid(100)
        );
        self.date_digits() == expected
    }

    /// Gender decoded from the parity of the final digit.
    #[must_use]
    pub fn gender(&self) -> Gender {
        match self.0.bytes().last() {
            Some(last) if last & 1 == 0 => Gender::Female,
            _ => Gender::Male,
        }
    }
}

impl fmt::Display for Cpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Cpr {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Draws one decimal digit from `range` as a character.
pub(crate) fn random_digit<R: Rng + ?Sized>(
    rng: &mut R,
    range: std::ops::RangeInclusive<u8>,
) -> char {
    digit_char(rng.random_range(range))
}

fn digit_char(value: u8) -> char {
    char::from(b'0' + value.min(9))
}
