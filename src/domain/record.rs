//! Upstream records and export categories
//!
//! A [`Record`] is one resource object returned by the source API, kept
//! exactly as received. Flatteners read it through the accessors here so a
//! missing key surfaces as [`SourceApiError::InvalidFormat`].

use crate::domain::errors::SourceApiError;
use crate::domain::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// One resource object as returned by the source API
///
/// Serializes back to the identical JSON (key order included).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Value);

impl Record {
    /// Wrap a raw JSON value
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the raw JSON value
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the record and return the raw JSON value
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Top-level field (e.g. `id`, `data_updated_at`)
    pub fn field(&self, name: &str) -> Result<&Value> {
        self.0.get(name).ok_or_else(|| {
            SourceApiError::InvalidFormat(format!("record is missing top-level field '{name}'"))
                .into()
        })
    }

    /// Field of the nested `data` object
    pub fn data_field(&self, name: &str) -> Result<&Value> {
        let data = self.field("data")?;
        if !data.is_object() {
            return Err(SourceApiError::InvalidFormat(
                "record field 'data' is not an object".to_string(),
            )
            .into());
        }
        data.get(name).ok_or_else(|| {
            SourceApiError::InvalidFormat(format!("record is missing data field '{name}'")).into()
        })
    }

    /// `data.subject_type` as a string
    pub fn subject_type(&self) -> Result<&str> {
        self.data_field("subject_type")?.as_str().ok_or_else(|| {
            SourceApiError::InvalidFormat("data.subject_type is not a string".to_string()).into()
        })
    }
}

/// Subject type as used by the `types` filter of the subjects collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectType {
    Radical,
    Kanji,
    KanaVocabulary,
    Vocabulary,
}

impl SubjectType {
    /// All types, in export order
    pub const ALL: [SubjectType; 4] = [
        SubjectType::Radical,
        SubjectType::Kanji,
        SubjectType::KanaVocabulary,
        SubjectType::Vocabulary,
    ];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectType::Radical => "radical",
            SubjectType::Kanji => "kanji",
            SubjectType::KanaVocabulary => "kana_vocabulary",
            SubjectType::Vocabulary => "vocabulary",
        }
    }
}

impl fmt::Display for SubjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubjectType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        SubjectType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid subject type '{s}'. Must be one of: radical, kanji, kana_vocabulary, vocabulary"
                )
            })
    }
}

/// Export category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Reviews,
    StudyMaterials,
    LevelProgressions,
    Subjects,
}

impl Category {
    /// Name used for artifact files and repository folders
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Reviews => "reviews",
            Category::StudyMaterials => "study_materials",
            Category::LevelProgressions => "level_progressions",
            Category::Subjects => "subjects",
        }
    }

    /// Source API collection the category is read from
    pub fn collection(&self) -> &'static str {
        match self {
            Category::Reviews => "review_statistics",
            Category::StudyMaterials => "study_materials",
            Category::LevelProgressions => "level_progressions",
            Category::Subjects => "subjects",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
