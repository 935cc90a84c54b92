use crate::domain::{Record, Result, Row};

const FIELDS: [&str; 7] = [
    "level",
    "created_at",
    "unlocked_at",
    "started_at",
    "passed_at",
    "completed_at",
    "abandoned_at",
];

/// Project a `level_progression` record's `data` onto the fixed columns
pub fn flatten_level_progression(record: &Record) -> Result<Row> {
    let mut row = Row::new();
    for name in FIELDS {
        row.insert(name, record.data_field(name)?.clone());
    }
    Ok(row)
}
