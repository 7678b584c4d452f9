//! Whole-record and batch generation.
//!
//! [`PersonGenerator`] owns the read-only reference data and wires the field
//! generators together. It holds no mutable state, so a single instance can
//! be shared across threads and requests.

use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::address::address;
use crate::batch::{BatchPolicy, clamp_batch_size};
use crate::birth_date::birth_date;
use crate::cpr::Cpr;
use crate::error::BatchSizeError;
use crate::names::NameCorpus;
use crate::person::{PersonParts, PersonRecord};
use crate::phone::phone_number;
use crate::towns::TownTable;

/// Builds consistent person records from shared reference data.
#[derive(Debug, Clone)]
pub struct PersonGenerator {
    names: NameCorpus,
    towns: TownTable,
}

impl PersonGenerator {
    /// Wraps validated reference data.
    #[must_use]
    pub const fn new(names: NameCorpus, towns: TownTable) -> Self {
        Self { names, towns }
    }

    /// Name corpus in use.
    #[must_use]
    pub const fn names(&self) -> &NameCorpus {
        &self.names
    }

    /// Town table in use.
    #[must_use]
    pub const fn towns(&self) -> &TownTable {
        &self.towns
    }

    /// Generates one record.
    ///
    /// Name and gender are drawn first, then the birth date, then the CPR
    /// number that encodes both. Address and phone number are independent.
    pub fn person<R: Rng + ?Sized>(&self, rng: &mut R, today: NaiveDate) -> PersonRecord {
        let name = self.names.choose(rng);
        let born = birth_date(rng, today);
        let cpr = Cpr::generate(rng, born, name.gender);
        let home = address(rng, &self.towns);
        let phone = phone_number(rng);

        PersonRecord::assemble(PersonParts {
            cpr,
            first_name: name.first_name.clone(),
            last_name: name.last_name.clone(),
            gender: name.gender,
            birth_date: born,
            address: home,
            phone_number: phone,
        })
    }

    /// Generates `amount` records, silently clamped to
    /// `[MIN_BATCH_SIZE, MAX_BATCH_SIZE]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use fake_person::{NameCorpus, PersonGenerator, Town, TownTable};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let names = NameCorpus::from_json(
    ///     r#"{"persons": [{"name": "Jens", "surname": "Olsen", "gender": "male"}]}"#,
    /// )
    /// .expect("valid corpus");
    /// let towns = TownTable::new(vec![Town::new("9000", "Aalborg", 1).expect("valid")])
    ///     .expect("valid table");
    /// let generator = PersonGenerator::new(names, towns);
    /// let today = NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date");
    /// let mut rng = ChaCha8Rng::seed_from_u64(0);
    ///
    /// assert_eq!(generator.persons(&mut rng, today, -5).len(), 2);
    /// assert_eq!(generator.persons(&mut rng, today, 150).len(), 100);
    /// ```
    ///
    /// [`MIN_BATCH_SIZE`]: crate::MIN_BATCH_SIZE
    /// [`MAX_BATCH_SIZE`]: crate::MAX_BATCH_SIZE
    pub fn persons<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        today: NaiveDate,
        amount: i64,
    ) -> Vec<PersonRecord> {
        let count = clamp_batch_size(amount);
        self.generate_many(rng, today, count)
    }

    /// Generates a batch after resolving `amount` with `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`BatchSizeError`] when `policy` rejects `amount`.
    pub fn batch<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        today: NaiveDate,
        amount: i64,
        policy: BatchPolicy,
    ) -> Result<Vec<PersonRecord>, BatchSizeError> {
        let count = policy.resolve(amount)?;
        Ok(self.generate_many(rng, today, count))
    }

    /// Generates a clamped batch on the rayon pool.
    ///
    /// Record `i` draws from its own `ChaCha8Rng` seeded with `seed` on
    /// stream `i`, so the output depends only on `seed` and not on thread
    /// scheduling.
    #[must_use]
    pub fn persons_parallel(&self, today: NaiveDate, amount: i64, seed: u64) -> Vec<PersonRecord> {
        let count = clamp_batch_size(amount);
        (0..count)
            .into_par_iter()
            .map(|index| {
                let mut rng = record_rng(seed, index);
                self.person(&mut rng, today)
            })
            .collect()
    }

    fn generate_many<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        today: NaiveDate,
        count: usize,
    ) -> Vec<PersonRecord> {
        (0..count).map(|_| self.person(&mut *rng, today)).collect()
    }
}

fn record_rng(seed: u64, index: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(u64::try_from(index).unwrap_or(u64::MAX));
    rng
}
