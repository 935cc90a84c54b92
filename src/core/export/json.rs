//! JSON dumps of raw records
//!
//! Dumps use `", "` and `": "` as separators and escape every character
//! outside printable ASCII as `\uXXXX`, matching the files already in the
//! dataset repository.

use crate::domain::{KanilogError, Record, Result};
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io;

/// serde_json formatter producing the dataset's JSON layout
#[derive(Debug, Default, Clone, Copy)]
pub struct DatasetFormatter;

impl Formatter for DatasetFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if (' '..='~').contains(&c) {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Write records as one JSON array
pub fn write_json<W: io::Write>(writer: W, records: &[Record]) -> Result<()> {
    let mut ser = Serializer::with_formatter(writer, DatasetFormatter);
    records.serialize(&mut ser)?;
    Ok(())
}

/// Render records to a string
pub fn to_json_string(records: &[Record]) -> Result<String> {
    let mut out = Vec::new();
    write_json(&mut out, records)?;
    String::from_utf8(out).map_err(|e| KanilogError::Serialization(e.to_string()))
}
