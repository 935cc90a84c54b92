//! CSV rendering of flattened rows
//!
//! The column set is the union of every row's fields in first-seen order.
//! A row lacking a column gets an empty cell. Booleans render as
//! `True`/`False` and null as an empty cell. Numbers are written as received,
//! so an integer column with gaps stays integer (`5`, not `5.0` as in older
//! dataset files).

use crate::domain::{Result, Row};
use serde_json::Value;
use std::io;

/// Union of row fields in first-seen order
pub fn columns(rows: &[Row]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !seen.iter().any(|c| c == key) {
                seen.push(key.to_string());
            }
        }
    }
    seen
}

/// Text of one CSV cell
pub fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Write `rows` as CSV with a header row
///
/// Rows without any fields produce an empty output.
pub fn write_csv<W: io::Write>(writer: W, rows: &[Row]) -> Result<()> {
    let columns = columns(rows);
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    if columns.is_empty() {
        wtr.flush()?;
        return Ok(());
    }

    wtr.write_record(&columns)?;
    for row in rows {
        let record: Vec<String> = columns
            .iter()
            .map(|c| row.get(c).map(cell).unwrap_or_default())
            .collect();
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
