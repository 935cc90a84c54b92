//! Domain identifier types with validation
//!
//! Newtype wrappers for dataset repository identifiers and run dates.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dataset repository identifier newtype wrapper
///
/// Format: `{owner}/{name}`, as used by the dataset hub.
///
/// # Examples
///
/// ```
/// use kanilog::domain::ids::RepoId;
/// use std::str::FromStr;
///
/// let repo = RepoId::from_str("osbm/wanikani-logs").unwrap();
/// assert_eq!(repo.owner(), "osbm");
/// assert_eq!(repo.name(), "wanikani-logs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepoId(String);

impl RepoId {
    /// Creates a new RepoId from a string
    ///
    /// Returns `Err` unless the value has exactly one `/` with non-empty,
    /// whitespace-free parts on both sides.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        let parts: Vec<&str> = id.split('/').collect();
        if parts.len() != 2 {
            return Err(format!(
                "Invalid repository id. Expected format: {{owner}}/{{name}}, got: {id}"
            ));
        }
        if parts
            .iter()
            .any(|part| part.is_empty() || part.chars().any(char::is_whitespace))
        {
            return Err(format!(
                "Invalid repository id '{id}': owner and name must be non-empty and contain no whitespace"
            ));
        }
        Ok(Self(id))
    }

    /// Returns the repository id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Owner (user or organisation) part
    pub fn owner(&self) -> &str {
        self.0.split('/').next().unwrap_or_default()
    }

    /// Repository name part
    pub fn name(&self) -> &str {
        self.0.split('/').nth(1).unwrap_or_default()
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RepoId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RepoId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RepoId> for String {
    fn from(id: RepoId) -> Self {
        id.0
    }
}

impl AsRef<str> for RepoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Calendar date a run's artifacts are named after
///
/// Displays as ISO 8601 (`YYYY-MM-DD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunDate(NaiveDate);

impl RunDate {
    /// Today's date in the local timezone
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Wrap an explicit date
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Inner date
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for RunDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for RunDate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|e| format!("Invalid run date '{s}', expected YYYY-MM-DD: {e}"))
    }
}
