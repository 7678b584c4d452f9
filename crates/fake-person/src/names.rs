//! Name corpus loading and uniform name selection.
//!
//! The corpus is a JSON document listing persons with their gender:
//!
//! ```json
//! {"persons": [{"name": "Mette", "surname": "Jensen", "gender": "female"}]}
//! ```
//!
//! It is parsed and validated once, then shared read-only.

use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ReferenceDataError;
use crate::person::Gender;

const BUNDLED_NAMES: &str = include_str!("../data/person-names.json");

/// One corpus entry: a full name paired with its registered gender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameEntry {
    /// Given name, possibly several words.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Registered gender.
    pub gender: Gender,
}

/// A validated, non-empty name corpus.
///
/// # Example
///
/// ```
/// use fake_person::{Gender, NameCorpus};
///
/// let corpus = NameCorpus::from_json(
///     r#"{"persons": [{"name": "Lars", "surname": "Nielsen", "gender": "male"}]}"#,
/// )
/// .expect("valid corpus");
///
/// assert_eq!(corpus.len(), 1);
/// assert_eq!(corpus.entries()[0].gender, Gender::Male);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCorpus {
    entries: Vec<NameEntry>,
}

impl NameCorpus {
    /// Builds a corpus from already-parsed entries.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceDataError::EmptyNameCorpus`] when `entries` is
    /// empty and [`ReferenceDataError::InvalidName`] when an entry has a
    /// blank first or last name.
    pub fn new(entries: Vec<NameEntry>) -> Result<Self, ReferenceDataError> {
        if entries.is_empty() {
            return Err(ReferenceDataError::EmptyNameCorpus);
        }
        for (index, entry) in entries.iter().enumerate() {
            if entry.first_name.trim().is_empty() {
                return Err(ReferenceDataError::InvalidName {
                    index,
                    field: "name",
                });
            }
            if entry.last_name.trim().is_empty() {
                return Err(ReferenceDataError::InvalidName {
                    index,
                    field: "surname",
                });
            }
        }
        Ok(Self { entries })
    }

    /// Parses a corpus from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceDataError::Parse`] for malformed JSON or unknown
    /// genders, plus the validation errors of [`NameCorpus::new`].
    pub fn from_json(json: &str) -> Result<Self, ReferenceDataError> {
        let raw: RawNameCorpus =
            serde_json::from_str(json).map_err(|e| ReferenceDataError::Parse {
                message: e.to_string(),
            })?;

        let entries = raw
            .persons
            .into_iter()
            .map(|p| NameEntry {
                first_name: p.name,
                last_name: p.surname,
                gender: p.gender,
            })
            .collect();

        Self::new(entries)
    }

    /// Parses the corpus shipped with this crate.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`NameCorpus::from_json`]; the bundled data is
    /// covered by tests and does not produce them in practice.
    pub fn bundled() -> Result<Self, ReferenceDataError> {
        Self::from_json(BUNDLED_NAMES)
    }

    /// Loads a corpus from a JSON file.
    ///
    /// The file is opened through a capability handle on its parent
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceDataError::Io`] if the file cannot be read, plus
    /// the errors of [`NameCorpus::from_json`].
    pub fn from_file(path: &Path) -> Result<Self, ReferenceDataError> {
        let contents = read_reference_file(path)?;
        Self::from_json(&contents)
    }

    /// All entries in corpus order.
    #[must_use]
    pub fn entries(&self) -> &[NameEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; an empty corpus cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Picks one entry uniformly at random.
    #[expect(
        clippy::indexing_slicing,
        reason = "the constructor rejects empty corpora, so the index is in range"
    )]
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &NameEntry {
        let index = rng.random_range(0..self.entries.len());
        &self.entries[index]
    }
}

#[derive(Debug, Deserialize)]
struct RawNameCorpus {
    persons: Vec<RawPerson>,
}

#[derive(Debug, Deserialize)]
struct RawPerson {
    name: String,
    surname: String,
    gender: Gender,
}

/// Reads a UTF-8 reference file through a capability handle on its parent.
pub(crate) fn read_reference_file(path: &Path) -> Result<String, ReferenceDataError> {
    let io_error = |message: String| ReferenceDataError::Io {
        path: path.to_path_buf(),
        message,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io_error("path must name a file".to_owned()))?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|e| io_error(e.to_string()))?;
    dir.read_to_string(Path::new(file_name))
        .map_err(|e| io_error(e.to_string()))
}
