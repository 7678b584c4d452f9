//! Town reference table and population-weighted town selection.
//!
//! Unlike every other field, the town must follow real-world proportions:
//! a town's chance of being picked is its weight divided by the total weight
//! of the table. The cumulative weights are computed once when the table is
//! built, so each draw is a single binary search.

use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ReferenceDataError;
use crate::names::read_reference_file;

/// Number of digits in a Danish postal code.
const POSTAL_CODE_LENGTH: usize = 4;

const BUNDLED_TOWNS: &str = include_str!("../data/towns.json");

/// One row of the town reference table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Town {
    postal_code: String,
    town_name: String,
    weight: u64,
}

impl Town {
    /// Validates and builds a town row.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceDataError::InvalidTown`] when the postal code is not
    /// four ASCII digits, the name is blank, or the weight is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use fake_person::Town;
    ///
    /// let town = Town::new("5000", "Odense C", 180_000).expect("valid town");
    /// assert_eq!(town.postal_code(), "5000");
    /// assert!(Town::new("500", "Odense C", 1).is_err());
    /// ```
    pub fn new(
        postal_code: impl Into<String>,
        town_name: impl Into<String>,
        weight: u64,
    ) -> Result<Self, ReferenceDataError> {
        let code: String = postal_code.into();
        let name: String = town_name.into();
        let invalid = |reason: &'static str| ReferenceDataError::InvalidTown {
            postal_code: code.clone(),
            reason,
        };

        if code.len() != POSTAL_CODE_LENGTH || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("postal code must be four digits"));
        }
        if name.trim().is_empty() {
            return Err(invalid("town name must not be blank"));
        }
        if weight == 0 {
            return Err(invalid("weight must be positive"));
        }

        Ok(Self {
            postal_code: code,
            town_name: name,
            weight,
        })
    }

    /// Four-digit postal code.
    #[must_use]
    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    /// Town name as used in postal addresses.
    #[must_use]
    pub fn town_name(&self) -> &str {
        &self.town_name
    }

    /// Relative selection weight (population or proxy).
    #[must_use]
    pub const fn weight(&self) -> u64 {
        self.weight
    }
}

/// Validated, non-empty town table with precomputed cumulative weights.
///
/// # Example
///
/// ```
/// use fake_person::{Town, TownTable};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let table = TownTable::new(vec![
///     Town::new("1000", "København K", 30).expect("valid"),
///     Town::new("9000", "Aalborg", 10).expect("valid"),
/// ])
/// .expect("non-empty");
///
/// assert_eq!(table.total_weight(), 40);
/// let mut rng = ChaCha8Rng::seed_from_u64(3);
/// let town = table.choose(&mut rng);
/// assert!(["1000", "9000"].contains(&town.postal_code()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TownTable {
    towns: Vec<Town>,
    cumulative: Vec<u64>,
    total_weight: u64,
}

impl TownTable {
    /// Builds the table and its cumulative weight index.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceDataError::EmptyTownTable`] for an empty list and
    /// [`ReferenceDataError::WeightOverflow`] if the weights do not fit in a
    /// `u64`.
    pub fn new(towns: Vec<Town>) -> Result<Self, ReferenceDataError> {
        if towns.is_empty() {
            return Err(ReferenceDataError::EmptyTownTable);
        }

        let mut cumulative = Vec::with_capacity(towns.len());
        let mut running: u64 = 0;
        for town in &towns {
            running = running
                .checked_add(town.weight)
                .ok_or(ReferenceDataError::WeightOverflow)?;
            cumulative.push(running);
        }

        Ok(Self {
            towns,
            cumulative,
            total_weight: running,
        })
    }

    /// Parses a table from a JSON array of
    /// `{"postalCode", "townName", "weight"}` objects.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceDataError::Parse`] for malformed JSON, plus the
    /// validation errors of [`Town::new`] and [`TownTable::new`].
    pub fn from_json(json: &str) -> Result<Self, ReferenceDataError> {
        let raw: Vec<RawTown> =
            serde_json::from_str(json).map_err(|e| ReferenceDataError::Parse {
                message: e.to_string(),
            })?;
        let towns = raw
            .into_iter()
            .map(|t| Town::new(t.postal_code, t.town_name, t.weight))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(towns)
    }

    /// Parses the Danish town table shipped with this crate.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`TownTable::from_json`].
    pub fn bundled() -> Result<Self, ReferenceDataError> {
        Self::from_json(BUNDLED_TOWNS)
    }

    /// Loads a table from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceDataError::Io`] if the file cannot be read, plus
    /// the errors of [`TownTable::from_json`].
    pub fn from_file(path: &Path) -> Result<Self, ReferenceDataError> {
        let contents = read_reference_file(path)?;
        Self::from_json(&contents)
    }

    /// All towns in table order.
    #[must_use]
    pub fn towns(&self) -> &[Town] {
        &self.towns
    }

    /// Number of towns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.towns.len()
    }

    /// Always `false`; an empty table cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.towns.is_empty()
    }

    /// Sum of all town weights.
    #[must_use]
    pub const fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Picks a town with probability `weight / total_weight`.
    ///
    /// Draws `r` uniformly from `[0, total_weight)` and returns the first
    /// town whose cumulative weight exceeds `r`.
    #[expect(
        clippy::indexing_slicing,
        reason = "r < total_weight, so some cumulative entry exceeds it"
    )]
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Town {
        let r = rng.random_range(0..self.total_weight);
        let index = self.cumulative.partition_point(|&c| c <= r);
        &self.towns[index]
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTown {
    postal_code: String,
    town_name: String,
    weight: u64,
}
