//! Export summary and reporting
//!
//! This module defines structures for tracking and reporting export results.

use crate::domain::Category;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// One file written during the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactInfo {
    /// Category the file belongs to
    pub category: Category,

    /// Local path
    pub path: PathBuf,

    /// Records fetched for this file
    pub records: usize,

    /// Data rows written (records for JSON dumps)
    pub rows: usize,

    /// Hex SHA-256 of the file contents
    pub sha256: String,
}

/// One upload to the hub
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedFile {
    /// Target repository
    pub repo: String,

    /// Path inside the repository
    pub path_in_repo: String,
}

/// Summary of an export run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Identifier attached to the run's log span
    pub run_id: String,

    /// Date artifacts were named after
    pub run_date: String,

    /// Files written, in write order
    pub artifacts: Vec<ArtifactInfo>,

    /// Categories that produced no file, with the reason
    pub skipped: Vec<(Category, String)>,

    /// Files uploaded, in upload order
    pub published: Vec<PublishedFile>,

    /// Whether the publish step ran
    pub publish_attempted: bool,

    /// Duration of the run
    pub duration: Duration,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new(run_id: impl Into<String>, run_date: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            run_date: run_date.into(),
            artifacts: Vec::new(),
            skipped: Vec::new(),
            published: Vec::new(),
            publish_attempted: false,
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn add_artifact(&mut self, artifact: ArtifactInfo) {
        self.artifacts.push(artifact);
    }

    pub fn add_skipped(&mut self, category: Category, reason: impl Into<String>) {
        self.skipped.push((category, reason.into()));
    }

    pub fn add_published(&mut self, repo: impl Into<String>, path_in_repo: impl Into<String>) {
        self.published.push(PublishedFile {
            repo: repo.into(),
            path_in_repo: path_in_repo.into(),
        });
    }

    /// Artifacts of one category
    pub fn artifacts_for(&self, category: Category) -> impl Iterator<Item = &ArtifactInfo> {
        self.artifacts
            .iter()
            .filter(move |a| a.category == category)
    }

    /// Total records fetched across all artifacts
    pub fn total_records(&self) -> usize {
        self.artifacts.iter().map(|a| a.records).sum()
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            run_id = %self.run_id,
            run_date = %self.run_date,
            artifacts = self.artifacts.len(),
            total_records = self.total_records(),
            skipped = self.skipped.len(),
            published = self.published.len(),
            duration_secs = self.duration.as_secs(),
            "Export completed"
        );

        for artifact in &self.artifacts {
            tracing::debug!(
                category = %artifact.category,
                path = %artifact.path.display(),
                records = artifact.records,
                rows = artifact.rows,
                sha256 = %artifact.sha256,
                "Artifact"
            );
        }

        for (category, reason) in &self.skipped {
            tracing::info!(category = %category, reason = %reason, "Category skipped");
        }
    }
}

impl fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Export summary ({})", self.run_date)?;
        writeln!(f, "  Run ID:    {}", self.run_id)?;
        writeln!(f, "  Duration:  {:.2}s", self.duration.as_secs_f64())?;
        writeln!(f, "  Artifacts:")?;
        for a in &self.artifacts {
            writeln!(
                f,
                "    {:<20} {:>7} records  {}  {}",
                a.category.as_str(),
                a.records,
                &a.sha256[..a.sha256.len().min(12)],
                a.path.display()
            )?;
        }
        for (category, reason) in &self.skipped {
            writeln!(f, "  Skipped:   {category} ({reason})")?;
        }
        if self.publish_attempted {
            writeln!(f, "  Published: {} file(s)", self.published.len())?;
            for p in &self.published {
                writeln!(f, "    {}:{}", p.repo, p.path_in_repo)?;
            }
        } else {
            writeln!(f, "  Published: no (publishing disabled)")?;
        }
        Ok(())
    }
}
