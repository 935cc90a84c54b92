//! Artifact files in the output directory
//!
//! Naming:
//!
//! | Artifact | Local file | Path in the logs repository |
//! |---|---|---|
//! | reviews | `<date>_reviews.csv` | `reviews/<date>_reviews.csv` |
//! | study materials | `<date>_study_materials.csv` | `study_materials/<date>_study_materials.csv` |
//! | level progressions | `<date>_level_progressions.csv` | `level_progressions/<date>_level_progressions.csv` |
//! | all subjects | `everything.json` | |
//! | subjects of one type | `<type>.json` | |

use super::json::write_json;
use super::table::write_csv;
use crate::domain::{Category, KanilogError, Record, Result, Row, RunDate, SubjectType};
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Dump of all subjects
pub const EVERYTHING_FILE: &str = "everything.json";

/// `<date>_<category>.csv`
pub fn csv_file_name(date: RunDate, category: Category) -> String {
    format!("{date}_{category}.csv")
}

/// `<type>.json`, or `everything.json` for the unfiltered dump
pub fn subject_file_name(subject_type: Option<SubjectType>) -> String {
    match subject_type {
        Some(t) => format!("{t}.json"),
        None => EVERYTHING_FILE.to_string(),
    }
}

/// `<category>/<file name>`
pub fn repo_path(category: Category, file_name: &str) -> String {
    format!("{category}/{file_name}")
}

/// Hex SHA-256 of a file's bytes
pub fn file_checksum(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}

/// Writes dated artifacts into one output directory
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    output_dir: PathBuf,
    date: RunDate,
}

impl ArtifactWriter {
    /// Create a writer, creating the output directory if needed
    pub fn new(output_dir: impl Into<PathBuf>, date: RunDate) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|e| {
            KanilogError::Io(format!(
                "Cannot create output directory {}: {e}",
                output_dir.display()
            ))
        })?;
        Ok(Self { output_dir, date })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn date(&self) -> RunDate {
        self.date
    }

    /// Local path of a category's CSV
    pub fn csv_path(&self, category: Category) -> PathBuf {
        self.output_dir.join(csv_file_name(self.date, category))
    }

    /// Write flattened rows of a category as CSV
    pub fn write_rows(&self, category: Category, rows: &[Row]) -> Result<PathBuf> {
        let path = self.csv_path(category);
        let mut out = BufWriter::new(File::create(&path)?);
        write_csv(&mut out, rows)?;
        out.flush()?;

        tracing::debug!(path = %path.display(), rows = rows.len(), "Wrote CSV");
        Ok(path)
    }

    /// Write raw subject records as a JSON array
    pub fn write_subjects(
        &self,
        subject_type: Option<SubjectType>,
        records: &[Record],
    ) -> Result<PathBuf> {
        let path = self.output_dir.join(subject_file_name(subject_type));
        let mut out = BufWriter::new(File::create(&path)?);
        write_json(&mut out, records)?;
        out.flush()?;

        tracing::debug!(path = %path.display(), records = records.len(), "Wrote JSON");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;
    use tempfile::TempDir;

    fn date() -> RunDate {
        RunDate::new(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())
    }

    #[test]
    fn test_file_names() {
        assert_eq!(
            csv_file_name(date(), Category::Reviews),
            "2024-03-09_reviews.csv"
        );
        assert_eq!(
            csv_file_name(date(), Category::StudyMaterials),
            "2024-03-09_study_materials.csv"
        );
        assert_eq!(subject_file_name(None), "everything.json");
        assert_eq!(
            subject_file_name(Some(SubjectType::KanaVocabulary)),
            "kana_vocabulary.json"
        );
        assert_eq!(
            repo_path(Category::LevelProgressions, "2024-03-09_level_progressions.csv"),
            "level_progressions/2024-03-09_level_progressions.csv"
        );
    }

    #[test]
    fn test_write_rows_and_subjects() {
        let dir = TempDir::new().unwrap();
        let writer = ArtifactWriter::new(dir.path().join("out"), date()).unwrap();

        let rows = vec![Row::new().with("level", json!(1))];
        let csv_path = writer.write_rows(Category::LevelProgressions, &rows).unwrap();
        assert_eq!(
            csv_path,
            dir.path().join("out").join("2024-03-09_level_progressions.csv")
        );
        assert_eq!(fs::read_to_string(&csv_path).unwrap(), "level\n1\n");

        let records = vec![Record::new(json!({"id": 1}))];
        let json_path = writer
            .write_subjects(Some(SubjectType::Kanji), &records)
            .unwrap();
        assert_eq!(fs::read_to_string(json_path).unwrap(), r#"[{"id": 1}]"#);
    }

    #[test]
    fn test_file_checksum() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.csv");
        fs::write(&path, "").unwrap();
        assert_eq!(
            file_checksum(&path).unwrap(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
