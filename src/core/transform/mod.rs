//! Record flattening
//!
//! Each tabular category has a stateless flattener mapping one nested
//! [`Record`] to one [`Row`]. Subjects have no flattener; they are exported
//! raw.
//!
//! | Category | Flattener |
//! |---|---|
//! | reviews | [`reviews::flatten_review`] |
//! | study materials | [`study_materials::flatten_study_material`] |
//! | level progressions | [`level_progressions::flatten_level_progression`] |

pub mod level_progressions;
pub mod reviews;
pub mod study_materials;

use crate::domain::{Category, KanilogError, Record, Result, Row};

/// Signature shared by all flatteners
pub type Flattener = fn(&Record) -> Result<Row>;

/// Flattener for a category, or `None` for raw categories
pub fn flattener(category: Category) -> Option<Flattener> {
    match category {
        Category::Reviews => Some(reviews::flatten_review),
        Category::StudyMaterials => Some(study_materials::flatten_study_material),
        Category::LevelProgressions => Some(level_progressions::flatten_level_progression),
        Category::Subjects => None,
    }
}

/// Flatten all records of a category, preserving order
///
/// # Errors
///
/// Fails on the first record missing a required field, or when called for
/// a category that is exported raw.
///
/// # Examples
///
/// ```
/// use kanilog::core::transform::flatten_records;
/// use kanilog::domain::{Category, Record};
/// use serde_json::json;
///
/// let records = vec![Record::new(json!({
///     "id": 1,
///     "data": {
///         "level": 1,
///         "created_at": "2024-01-01T00:00:00Z",
///         "unlocked_at": null,
///         "started_at": null,
///         "passed_at": null,
///         "completed_at": null,
///         "abandoned_at": null
///     }
/// }))];
///
/// let rows = flatten_records(Category::LevelProgressions, &records).unwrap();
/// assert_eq!(rows.len(), 1);
/// ```
pub fn flatten_records(category: Category, records: &[Record]) -> Result<Vec<Row>> {
    let flatten = flattener(category).ok_or_else(|| {
        KanilogError::Validation(format!("{category} records are exported raw, not flattened"))
    })?;

    records.iter().map(flatten).collect()
}
