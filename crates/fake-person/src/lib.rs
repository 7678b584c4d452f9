//! Synthetic Danish personal records for test data.
//!
//! Every generated [`PersonRecord`] is internally consistent: the CPR number
//! encodes the birth date and the gender, the address follows Danish postal
//! conventions, and the town is drawn in proportion to its population weight.
//! Nothing here is persisted; each call produces a fresh, disposable record.
//!
//! # Overview
//!
//! - [`NameCorpus`] and [`TownTable`] hold the read-only reference data.
//!   Load them once and share them between requests.
//! - [`PersonGenerator`] orchestrates the field generators into whole
//!   records and batches.
//! - [`BatchPolicy`] makes the choice between silently clamping and strictly
//!   rejecting out-of-range batch sizes explicit.
//!
//! All generators take an explicit random-number generator, so a seeded
//! `ChaCha8Rng` yields reproducible output.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use fake_person::{NameCorpus, PersonGenerator, Town, TownTable};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let names = NameCorpus::from_json(
//!     r#"{"persons": [{"name": "Mette", "surname": "Jensen", "gender": "female"}]}"#,
//! )
//! .expect("valid corpus");
//! let towns = TownTable::new(vec![
//!     Town::new("8000", "Aarhus C", 60_000).expect("valid town"),
//! ])
//! .expect("non-empty table");
//!
//! let generator = PersonGenerator::new(names, towns);
//! let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let person = generator.person(&mut rng, today);
//!
//! assert_eq!(person.first_name(), "Mette");
//! assert!(person.cpr().gender().is_female());
//! assert!(person.cpr().encodes_birth_date(person.birth_date()));
//! ```

mod address;
mod batch;
mod birth_date;
mod cpr;
mod error;
mod generator;
mod names;
mod person;
mod phone;
mod towns;

pub use address::{
    Address, Door, Floor, HOUSE_NUMBER_MAX, STREET_LENGTH, address, door, floor, house_number,
    street,
};
pub use batch::{BatchPolicy, MAX_BATCH_SIZE, MIN_BATCH_SIZE, clamp_batch_size};
pub use birth_date::{EARLIEST_BIRTH_YEAR, birth_date, days_in_month};
pub use cpr::Cpr;
pub use error::{BatchSizeError, ReferenceDataError};
pub use generator::PersonGenerator;
pub use names::{NameCorpus, NameEntry};
pub use person::{
    CprNameGender, CprNameGenderBirthDate, Gender, NameGender, NameGenderBirthDate, PersonRecord,
};
pub use phone::{PHONE_NUMBER_LENGTH, PHONE_PREFIXES, PhoneNumber, phone_number};
pub use towns::{Town, TownTable};
