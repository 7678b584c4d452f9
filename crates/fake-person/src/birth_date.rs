//! Calendar-valid random birth dates.

use chrono::{Datelike, NaiveDate};
use rand::Rng;

/// Earliest year a generated person can be born in.
pub const EARLIEST_BIRTH_YEAR: i32 = 1900;

/// Number of days the generator allows in `month`.
///
/// February always has 28 days here, so 29 February is never produced, even
/// in leap years.
///
/// # Examples
///
/// ```
/// use fake_person::days_in_month;
///
/// assert_eq!(days_in_month(1), 31);
/// assert_eq!(days_in_month(4), 30);
/// assert_eq!(days_in_month(2), 28);
/// ```
#[must_use]
pub const fn days_in_month(month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => 28,
        _ => 31,
    }
}

/// Draws a birth date between 1 January 1900 and `today`.
///
/// The year is uniform in `[1900, today.year()]`, the month uniform in
/// `[1, 12]`, and the day uniform over [`days_in_month`]. A draw that lands
/// after `today` (only possible within the current year) is discarded and
/// redrawn.
///
/// When `today` itself falls before 1900 no date in range exists, and
/// `today` is returned unchanged so a birth date never lies in the future.
pub fn birth_date<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> NaiveDate {
    let latest_year = today.year();
    if latest_year < EARLIEST_BIRTH_YEAR {
        return today;
    }
    loop {
        let year = rng.random_range(EARLIEST_BIRTH_YEAR..=latest_year);
        let month = rng.random_range(1..=12);
        let day = rng.random_range(1..=days_in_month(month));
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day).filter(|d| *d <= today) {
            return date;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
    }

    #[rstest]
    fn dates_stay_within_bounds(today: NaiveDate) {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let earliest = NaiveDate::from_ymd_opt(EARLIEST_BIRTH_YEAR, 1, 1).expect("valid date");

        for _ in 0..5_000 {
            let date = birth_date(&mut rng, today);
            assert!(date >= earliest, "{date} is before 1900");
            assert!(date <= today, "{date} is in the future");
        }
    }

    #[rstest]
    fn never_produces_leap_day(today: NaiveDate) {
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..20_000 {
            let date = birth_date(&mut rng, today);
            assert!(
                !(date.month() == 2 && date.day() == 29),
                "unexpected leap day {date}"
            );
        }
    }

    #[test]
    fn first_of_january_1900_is_the_only_option_on_that_day() {
        let today = NaiveDate::from_ymd_opt(1900, 1, 1).expect("valid date");
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert_eq!(birth_date(&mut rng, today), today);
    }

    #[rstest]
    #[case(1899, 12, 31)]
    #[case(1850, 6, 1)]
    #[case(-44, 3, 15)]
    fn dates_before_1900_return_today(#[case] year: i32, #[case] month: u32, #[case] day: u32) {
        let today = NaiveDate::from_ymd_opt(year, month, day).expect("valid date");
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert_eq!(birth_date(&mut rng, today), today);
    }

    #[rstest]
    #[case(1, 31)]
    #[case(2, 28)]
    #[case(3, 31)]
    #[case(6, 30)]
    #[case(11, 30)]
    #[case(12, 31)]
    fn month_lengths(#[case] month: u32, #[case] days: u32) {
        assert_eq!(days_in_month(month), days);
    }

    #[rstest]
    fn formats_as_iso_date(today: NaiveDate) {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let text = birth_date(&mut rng, today).format("%Y-%m-%d").to_string();
        let pattern = regex::Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex");

        assert!(pattern.is_match(&text), "unexpected format {text}");
    }
}
