//! Eight-digit Danish phone numbers.

use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::cpr::random_digit;

/// Number of digits in a phone number.
pub const PHONE_NUMBER_LENGTH: usize = 8;

/// Number-plan prefixes a generated phone number may start with.
pub const PHONE_PREFIXES: &[&str] = &[
    "2", "30", "31", "40", "41", "42", "50", "51", "52", "53", "60", "61", "71", "81", "91", "92",
    "93", "342", "344", "345", "346", "347", "348", "349", "356", "357", "359", "362", "365",
    "366", "389", "398", "431", "441", "462", "466", "468", "472", "474", "476", "478", "485",
    "486", "488", "489", "493", "494", "495", "496", "498", "499", "542", "543", "545", "551",
    "552", "556", "571", "572", "573", "574", "577", "579", "584", "586", "587", "589", "597",
    "598", "627", "629", "641", "649", "658", "662", "663", "664", "665", "667", "692", "693",
    "694", "697", "771", "772", "782", "783", "785", "786", "788", "789", "826", "827", "829",
];

/// An eight-digit phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// The number as a digit string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The listed prefix this number starts with.
    #[must_use]
    pub fn prefix(&self) -> Option<&'static str> {
        PHONE_PREFIXES
            .iter()
            .copied()
            .find(|prefix| self.0.starts_with(prefix))
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Picks a prefix uniformly from [`PHONE_PREFIXES`] and pads it with random
/// digits to [`PHONE_NUMBER_LENGTH`].
///
/// # Examples
///
/// ```
/// use fake_person::{PHONE_NUMBER_LENGTH, phone_number};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(8);
/// let number = phone_number(&mut rng);
/// assert_eq!(number.as_str().len(), PHONE_NUMBER_LENGTH);
/// assert!(number.prefix().is_some());
/// ```
#[expect(
    clippy::indexing_slicing,
    reason = "index is drawn from the prefix list's own bounds"
)]
pub fn phone_number<R: Rng + ?Sized>(rng: &mut R) -> PhoneNumber {
    let prefix = PHONE_PREFIXES[rng.random_range(0..PHONE_PREFIXES.len())];
    let mut digits = String::with_capacity(PHONE_NUMBER_LENGTH);
    digits.push_str(prefix);
    while digits.len() < PHONE_NUMBER_LENGTH {
        digits.push(random_digit(rng, 0..=9));
    }
    PhoneNumber(digits)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use regex::Regex;
    use rstest::rstest;

    use super::*;

    #[test]
    fn prefixes_are_short_digit_strings() {
        let unique: HashSet<_> = PHONE_PREFIXES.iter().collect();
        assert_eq!(unique.len(), PHONE_PREFIXES.len(), "duplicate prefix");
        for prefix in PHONE_PREFIXES {
            assert!((1..=3).contains(&prefix.len()), "bad prefix {prefix}");
            assert!(prefix.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[rstest]
    #[case(1)]
    #[case(99)]
    fn numbers_have_eight_digits_and_a_listed_prefix(#[case] seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let pattern = Regex::new(r"^\d{8}$").expect("valid regex");

        for _ in 0..1_000 {
            let number = phone_number(&mut rng);
            assert!(pattern.is_match(number.as_str()), "bad number {number}");
            assert!(number.prefix().is_some(), "unlisted prefix in {number}");
        }
    }

    #[test]
    fn single_digit_prefix_is_reachable() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let seen = (0..2_000).any(|_| phone_number(&mut rng).prefix() == Some("2"));
        assert!(seen);
    }
}
