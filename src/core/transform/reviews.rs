//! Review statistics flattening
//!
//! Every review row carries the meaning counters. Kanji and vocabulary
//! reviews also have a reading side, so those rows get four more columns.

use crate::domain::{Record, Result, Row};

/// Meaning columns copied from `data`, after the identifying fields
const MEANING_FIELDS: [&str; 7] = [
    "subject_id",
    "hidden",
    "percentage_correct",
    "meaning_correct",
    "meaning_current_streak",
    "meaning_incorrect",
    "meaning_max_streak",
];

/// Reading columns, present only for subject types with readings
const READING_FIELDS: [&str; 4] = [
    "reading_correct",
    "reading_current_streak",
    "reading_incorrect",
    "reading_max_streak",
];

/// Subject types whose reviews have a reading side
pub fn has_reading(subject_type: &str) -> bool {
    matches!(subject_type, "kanji" | "vocabulary")
}

/// Flatten one `review_statistic` record
///
/// # Examples
///
/// ```
/// use kanilog::core::transform::reviews::flatten_review;
/// use kanilog::domain::Record;
/// use serde_json::json;
///
/// let record = Record::new(json!({
///     "id": 7,
///     "data_updated_at": "2024-01-02T00:00:00Z",
///     "data": {
///         "created_at": "2024-01-01T00:00:00Z",
///         "subject_type": "radical",
///         "subject_id": 1,
///         "hidden": false,
///         "percentage_correct": 100,
///         "meaning_correct": 3,
///         "meaning_current_streak": 3,
///         "meaning_incorrect": 0,
///         "meaning_max_streak": 3
///     }
/// }));
///
/// let row = flatten_review(&record).unwrap();
/// assert_eq!(row.len(), 11);
/// assert!(!row.contains("reading_correct"));
/// ```
pub fn flatten_review(record: &Record) -> Result<Row> {
    let subject_type = record.subject_type()?;

    let mut row = Row::new()
        .with("review_id", record.field("id")?.clone())
        .with("created_at", record.data_field("created_at")?.clone())
        .with("data_updated_at", record.field("data_updated_at")?.clone())
        .with("subject_type", record.data_field("subject_type")?.clone());

    for name in MEANING_FIELDS {
        row.insert(name, record.data_field(name)?.clone());
    }

    if has_reading(subject_type) {
        for name in READING_FIELDS {
            row.insert(name, record.data_field(name)?.clone());
        }
    }

    Ok(row)
}
