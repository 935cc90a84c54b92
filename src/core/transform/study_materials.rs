//! Study material flattening
//!
//! `meaning_synonyms` is derived from `reading_note`, not from the record's
//! own synonym list: it holds the characters of the reading note rendered as
//! a Python tuple literal. Existing exports carry this layout and it is kept
//! as is.

use crate::domain::{Record, Result, Row, SourceApiError};
use serde_json::Value;

/// Flatten one `study_material` record
pub fn flatten_study_material(record: &Record) -> Result<Row> {
    let reading_note = record.data_field("reading_note")?;
    // A note is required to derive the synonyms; null aborts like any other shape
    let synonyms = match reading_note {
        Value::String(note) => python_char_tuple(note),
        other => {
            return Err(SourceApiError::InvalidFormat(format!(
                "data.reading_note must be a string, got {other}"
            ))
            .into())
        }
    };

    Ok(Row::new()
        .with("data_updated_at", record.field("data_updated_at")?.clone())
        .with("created_at", record.data_field("created_at")?.clone())
        .with("subject_id", record.data_field("subject_id")?.clone())
        .with("subject_type", record.data_field("subject_type")?.clone())
        .with("meaning_note", record.data_field("meaning_note")?.clone())
        .with("reading_note", reading_note.clone())
        .with("meaning_synonyms", Value::String(synonyms)))
}

/// Render the characters of `text` as a Python tuple of one-character strings
///
/// # Examples
///
/// ```
/// use kanilog::core::transform::study_materials::python_char_tuple;
///
/// assert_eq!(python_char_tuple(""), "()");
/// assert_eq!(python_char_tuple("a"), "('a',)");
/// assert_eq!(python_char_tuple("ab"), "('a', 'b')");
/// ```
pub fn python_char_tuple(text: &str) -> String {
    let items: Vec<String> = text.chars().map(python_char_repr).collect();
    match items.len() {
        0 => "()".to_string(),
        1 => format!("({},)", items[0]),
        _ => format!("({})", items.join(", ")),
    }
}

/// `repr()` of a one-character Python string
fn python_char_repr(c: char) -> String {
    match c {
        '\'' => "\"'\"".to_string(),
        '\\' => "'\\\\'".to_string(),
        '\n' => "'\\n'".to_string(),
        '\r' => "'\\r'".to_string(),
        '\t' => "'\\t'".to_string(),
        c if is_printable(c) => format!("'{c}'"),
        c => match c as u32 {
            code @ 0..=0xff => format!("'\\x{code:02x}'"),
            code @ 0x100..=0xffff => format!("'\\u{code:04x}'"),
            code => format!("'\\U{code:08x}'"),
        },
    }
}

/// `str.isprintable` for assigned characters
///
/// Covers control, format, separator and private-use characters. Unassigned
/// code points are treated as printable, so `repr` of those differs from
/// Python's escaped form.
fn is_printable(c: char) -> bool {
    let code = c as u32;
    !matches!(
        code,
        // Cc
        0x00..=0x1f
            | 0x7f..=0x9f
            // Zs, Zl, Zp other than the ASCII space
            | 0xa0
            | 0x1680
            | 0x2000..=0x200a
            | 0x2028..=0x2029
            | 0x202f
            | 0x205f
            | 0x3000
            // Cf
            | 0xad
            | 0x600..=0x605
            | 0x61c
            | 0x6dd
            | 0x70f
            | 0x890..=0x891
            | 0x8e2
            | 0x180e
            | 0x200b..=0x200f
            | 0x202a..=0x202e
            | 0x2060..=0x2064
            | 0x2066..=0x206f
            | 0xfeff
            | 0xfff9..=0xfffb
            | 0x110bd
            | 0x110cd
            | 0x13430..=0x1343f
            | 0x1bca0..=0x1bca3
            | 0x1d173..=0x1d17a
            | 0xe0001
            | 0xe0020..=0xe007f
            // Co
            | 0xe000..=0xf8ff
            | 0xf0000..=0x10ffff
    )
}
