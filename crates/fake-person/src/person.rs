//! Generated person types.
//!
//! A [`PersonRecord`] is assembled in one step by
//! [`PersonGenerator::person`](crate::PersonGenerator::person) and never
//! mutated afterwards. The partial projections borrow from a record so that
//! every field an endpoint exposes comes from the same consistent person.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::cpr::Cpr;
use crate::phone::PhoneNumber;

/// Registered gender of a generated person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Encoded by an even final CPR digit.
    Female,
    /// Encoded by an odd final CPR digit.
    Male,
}

impl Gender {
    /// Returns `true` for [`Gender::Female`].
    #[must_use]
    pub const fn is_female(self) -> bool {
        matches!(self, Self::Female)
    }
}

/// A complete synthetic person.
///
/// ## Invariants
/// - The first six CPR digits encode `birth_date` as `DDMMYY`.
/// - The final CPR digit is even exactly when `gender` is
///   [`Gender::Female`].
///
/// Both hold by construction; the fields are private so they cannot drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    #[serde(rename = "CPR")]
    cpr: Cpr,
    first_name: String,
    last_name: String,
    gender: Gender,
    birth_date: NaiveDate,
    address: Address,
    phone_number: PhoneNumber,
}

/// Field bundle handed to [`PersonRecord::assemble`].
pub(crate) struct PersonParts {
    pub cpr: Cpr,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
    pub address: Address,
    pub phone_number: PhoneNumber,
}

impl PersonRecord {
    pub(crate) fn assemble(parts: PersonParts) -> Self {
        let PersonParts {
            cpr,
            first_name,
            last_name,
            gender,
            birth_date,
            address,
            phone_number,
        } = parts;
        Self {
            cpr,
            first_name,
            last_name,
            gender,
            birth_date,
            address,
            phone_number,
        }
    }

    /// The person's CPR number.
    #[must_use]
    pub const fn cpr(&self) -> &Cpr {
        &self.cpr
    }

    /// Given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Registered gender.
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Date of birth.
    #[must_use]
    pub const fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Postal address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    /// Eight-digit phone number.
    #[must_use]
    pub const fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    /// Name and gender only.
    #[must_use]
    pub fn name_gender(&self) -> NameGender<'_> {
        NameGender {
            first_name: &self.first_name,
            last_name: &self.last_name,
            gender: self.gender,
        }
    }

    /// Name, gender and birth date.
    #[must_use]
    pub fn name_gender_birth_date(&self) -> NameGenderBirthDate<'_> {
        NameGenderBirthDate {
            first_name: &self.first_name,
            last_name: &self.last_name,
            gender: self.gender,
            birth_date: self.birth_date,
        }
    }

    /// CPR, name and gender.
    #[must_use]
    pub fn cpr_name_gender(&self) -> CprNameGender<'_> {
        CprNameGender {
            cpr: &self.cpr,
            first_name: &self.first_name,
            last_name: &self.last_name,
            gender: self.gender,
        }
    }

    /// CPR, name, gender and birth date.
    #[must_use]
    pub fn cpr_name_gender_birth_date(&self) -> CprNameGenderBirthDate<'_> {
        CprNameGenderBirthDate {
            cpr: &self.cpr,
            first_name: &self.first_name,
            last_name: &self.last_name,
            gender: self.gender,
            birth_date: self.birth_date,
        }
    }
}

/// `{firstName, lastName, gender}` view of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameGender<'a> {
    /// Given name.
    pub first_name: &'a str,
    /// Family name.
    pub last_name: &'a str,
    /// Registered gender.
    pub gender: Gender,
}

/// `{firstName, lastName, gender, birthDate}` view of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameGenderBirthDate<'a> {
    /// Given name.
    pub first_name: &'a str,
    /// Family name.
    pub last_name: &'a str,
    /// Registered gender.
    pub gender: Gender,
    /// Date of birth.
    pub birth_date: NaiveDate,
}

/// `{CPR, firstName, lastName, gender}` view of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CprNameGender<'a> {
    /// CPR number.
    #[serde(rename = "CPR")]
    pub cpr: &'a Cpr,
    /// Given name.
    pub first_name: &'a str,
    /// Family name.
    pub last_name: &'a str,
    /// Registered gender.
    pub gender: Gender,
}

/// `{CPR, firstName, lastName, gender, birthDate}` view of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CprNameGenderBirthDate<'a> {
    /// CPR number.
    #[serde(rename = "CPR")]
    pub cpr: &'a Cpr,
    /// Given name.
    pub first_name: &'a str,
    /// Family name.
    pub last_name: &'a str,
    /// Registered gender.
    pub gender: Gender,
    /// Date of birth.
    pub birth_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_serializes_lowercase() {
        let female = serde_json::to_string(&Gender::Female).expect("serialize");
        let male = serde_json::to_string(&Gender::Male).expect("serialize");
        assert_eq!(female, "\"female\"");
        assert_eq!(male, "\"male\"");
    }

    #[test]
    fn gender_deserializes_lowercase() {
        let gender: Gender = serde_json::from_str("\"male\"").expect("deserialize");
        assert_eq!(gender, Gender::Male);
        assert!(!gender.is_female());
    }

    #[test]
    fn name_gender_birth_date_serializes_iso_date() {
        let view = NameGenderBirthDate {
            first_name: "Anna",
            last_name: "Hansen",
            gender: Gender::Female,
            birth_date: NaiveDate::from_ymd_opt(1984, 3, 7).expect("valid date"),
        };
        let json = serde_json::to_value(view).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "firstName": "Anna",
                "lastName": "Hansen",
                "gender": "female",
                "birthDate": "1984-03-07"
            })
        );
    }
}
