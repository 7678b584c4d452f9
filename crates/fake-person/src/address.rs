//! Danish postal addresses.
//!
//! Street names are random text, while house number, floor and door follow
//! the shapes used on Danish letterboxes. The postal code and town come from
//! the weighted [`TownTable`].

use std::fmt;

use rand::Rng;
use serde::{Serialize, Serializer};

use crate::towns::TownTable;

/// Length of a generated street name, in characters.
pub const STREET_LENGTH: usize = 40;

/// Largest numeric part of a house number.
pub const HOUSE_NUMBER_MAX: u16 = 999;

/// Largest floor above ground.
const FLOOR_MAX: u8 = 99;

/// Largest bare door number.
const DOOR_NUMBER_MAX: u8 = 50;

/// Largest number after a door letter.
const DOOR_SUFFIX_MAX: u16 = 999;

/// Token for the ground floor.
const GROUND_FLOOR: &str = "st";

/// Street alphabet; index 0 is the space, which never starts a street.
const STREET_CHARACTERS: [char; 59] = [
    ' ', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K',
    'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'æ', 'ø', 'å', 'Æ',
    'Ø', 'Å',
];

/// Letters used on lettered doors.
const DOOR_LETTERS: std::ops::RangeInclusive<char> = 'a'..='p';

/// Floor of an apartment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Floor {
    /// Ground floor, written `st` (stuen).
    Ground,
    /// Numbered floor from 1 to 99.
    Level(u8),
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ground => f.write_str(GROUND_FLOOR),
            Self::Level(level) => write!(f, "{level}"),
        }
    }
}

/// Serialises as `"st"` or as a JSON integer.
impl Serialize for Floor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Ground => serializer.serialize_str(GROUND_FLOOR),
            Self::Level(level) => serializer.serialize_u8(*level),
        }
    }
}

/// Door designation within a floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Door {
    /// `th` (til højre, right).
    Right,
    /// `tv` (til venstre, left).
    Left,
    /// `mf` (midtfor, middle).
    Middle,
    /// A bare door number from 1 to 50.
    Numbered(u8),
    /// A lowercase letter followed by a number, optionally hyphenated,
    /// such as `c12` or `c-12`.
    Lettered {
        /// Letter from `a` to `p`.
        letter: char,
        /// Whether a hyphen separates letter and number.
        hyphen: bool,
        /// Number from 1 to 999.
        number: u16,
    },
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Right => f.write_str("th"),
            Self::Left => f.write_str("tv"),
            Self::Middle => f.write_str("mf"),
            Self::Numbered(number) => write!(f, "{number}"),
            Self::Lettered {
                letter,
                hyphen: true,
                number,
            } => write!(f, "{letter}-{number}"),
            Self::Lettered {
                letter,
                hyphen: false,
                number,
            } => write!(f, "{letter}{number}"),
        }
    }
}

/// Serialises numbered doors as JSON integers and every other shape as a
/// string.
impl Serialize for Door {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Numbered(number) => serializer.serialize_u8(*number),
            other => serializer.collect_str(other),
        }
    }
}

/// A complete postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    street: String,
    number: String,
    floor: Floor,
    door: Door,
    postal_code: String,
    town_name: String,
}

impl Address {
    /// Street name.
    #[must_use]
    pub fn street(&self) -> &str {
        &self.street
    }

    /// House number: one to three digits plus an optional capital letter.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Floor.
    #[must_use]
    pub const fn floor(&self) -> Floor {
        self.floor
    }

    /// Door.
    #[must_use]
    pub const fn door(&self) -> Door {
        self.door
    }

    /// Four-digit postal code.
    #[must_use]
    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    /// Town matching the postal code.
    #[must_use]
    pub fn town_name(&self) -> &str {
        &self.town_name
    }
}

/// Draws a full address, delegating the town to `towns`.
pub fn address<R: Rng + ?Sized>(rng: &mut R, towns: &TownTable) -> Address {
    let street = street(rng);
    let number = house_number(rng);
    let floor = floor(rng);
    let door = door(rng);
    let town = towns.choose(rng);
    Address {
        street,
        number,
        floor,
        door,
        postal_code: town.postal_code().to_owned(),
        town_name: town.town_name().to_owned(),
    }
}

/// Random street text of [`STREET_LENGTH`] characters that never starts with
/// a space.
#[expect(
    clippy::indexing_slicing,
    reason = "indices are drawn from the alphabet's own bounds"
)]
pub fn street<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut text = String::with_capacity(STREET_LENGTH * 2);
    text.push(STREET_CHARACTERS[rng.random_range(1..STREET_CHARACTERS.len())]);
    for _ in 1..STREET_LENGTH {
        text.push(STREET_CHARACTERS[rng.random_range(0..STREET_CHARACTERS.len())]);
    }
    text
}

/// House number in `1..=999`, with a capital letter appended one time in
/// five.
pub fn house_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut number = rng.random_range(1..=HOUSE_NUMBER_MAX).to_string();
    if rng.random_ratio(2, 10) {
        number.push(rng.random_range('A'..='Z'));
    }
    number
}

/// Ground floor three times in ten, otherwise a floor in `1..=99`.
pub fn floor<R: Rng + ?Sized>(rng: &mut R) -> Floor {
    if rng.random_ratio(3, 10) {
        Floor::Ground
    } else {
        Floor::Level(rng.random_range(1..=FLOOR_MAX))
    }
}

/// Door drawn over twenty equally likely slots: seven `th`, seven `tv`, two
/// `mf`, two bare numbers and two lettered doors (one of them hyphenated).
pub fn door<R: Rng + ?Sized>(rng: &mut R) -> Door {
    match rng.random_range(1..=20_u8) {
        1..=7 => Door::Right,
        8..=14 => Door::Left,
        15..=16 => Door::Middle,
        17..=18 => Door::Numbered(rng.random_range(1..=DOOR_NUMBER_MAX)),
        slot => Door::Lettered {
            letter: rng.random_range(DOOR_LETTERS),
            hyphen: slot == 20,
            number: rng.random_range(1..=DOOR_SUFFIX_MAX),
        },
    }
}
