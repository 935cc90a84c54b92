//! Export orchestration
//!
//! This module provides the core export logic for kanilog, including:
//! - Export coordination and publishing
//! - CSV and JSON artifact writing
//! - Summary and reporting

pub mod coordinator;
pub mod json;
pub mod summary;
pub mod table;
pub mod writer;

pub use coordinator::ExportCoordinator;
pub use json::{write_json, DatasetFormatter};
pub use summary::{ArtifactInfo, ExportSummary, PublishedFile};
pub use table::write_csv;
pub use writer::{csv_file_name, repo_path, subject_file_name, ArtifactWriter, EVERYTHING_FILE};
