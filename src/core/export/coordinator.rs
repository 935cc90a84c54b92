//! Export coordinator - main orchestrator for the export process
//!
//! Runs the enabled categories one after another (reviews, study materials,
//! subjects, level progressions), then publishes the written artifacts.
//! Every step is awaited before the next begins and the first error aborts
//! the run; files already written stay on disk.

use crate::adapters::hub::{DatasetPublisher, HubClient};
use crate::adapters::wanikani::{collection_url, RecordSource, WaniKaniClient};
use crate::config::{ExportConfig, HubConfig, KanilogConfig};
use crate::core::export::summary::{ArtifactInfo, ExportSummary};
use crate::core::export::writer::{file_checksum, repo_path, ArtifactWriter};
use crate::core::transform::flatten_records;
use crate::domain::{Category, KanilogError, RepoId, Result, RunDate, SubjectType};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

/// Order CSVs are uploaded to the logs repository
const CSV_PUBLISH_ORDER: [Category; 3] = [
    Category::LevelProgressions,
    Category::Reviews,
    Category::StudyMaterials,
];

/// Where artifacts are published
#[derive(Debug, Clone)]
struct PublishTarget {
    logs_repo: RepoId,
    dataset_repo: RepoId,
    json_pattern: String,
}

impl PublishTarget {
    fn from_config(hub: &HubConfig) -> Result<Self> {
        let logs_repo = RepoId::new(hub.logs_repo.as_str())
            .map_err(|e| KanilogError::Configuration(format!("hub.logs_repo: {e}")))?;
        let dataset_repo = RepoId::new(hub.dataset_repo.as_str())
            .map_err(|e| KanilogError::Configuration(format!("hub.dataset_repo: {e}")))?;
        Ok(Self {
            logs_repo,
            dataset_repo,
            json_pattern: hub.json_pattern.clone(),
        })
    }
}

/// Export coordinator
pub struct ExportCoordinator {
    source: Arc<dyn RecordSource>,
    publisher: Option<(Arc<dyn DatasetPublisher>, PublishTarget)>,
    export: ExportConfig,
    writer: ArtifactWriter,
}

impl ExportCoordinator {
    /// Create a coordinator backed by the WaniKani API and, when publishing
    /// is enabled, the dataset hub
    pub fn new(config: &KanilogConfig, date: RunDate) -> Result<Self> {
        let source: Arc<dyn RecordSource> = Arc::new(WaniKaniClient::new(config.wanikani.clone())?);

        let publisher: Option<Arc<dyn DatasetPublisher>> = if config.publishing_enabled() {
            Some(Arc::new(HubClient::new(config.hub.clone())?))
        } else {
            None
        };

        Self::with_components(source, publisher, config.export.clone(), &config.hub, date)
    }

    /// Create a coordinator from explicit components
    pub fn with_components(
        source: Arc<dyn RecordSource>,
        publisher: Option<Arc<dyn DatasetPublisher>>,
        export: ExportConfig,
        hub: &HubConfig,
        date: RunDate,
    ) -> Result<Self> {
        let publisher = match publisher {
            Some(p) => Some((p, PublishTarget::from_config(hub)?)),
            None => None,
        };
        let writer = ArtifactWriter::new(&export.output_dir, date)?;

        Ok(Self {
            source,
            publisher,
            export,
            writer,
        })
    }

    /// Execute the export
    pub async fn execute_export(&self) -> Result<ExportSummary> {
        let run_id = uuid::Uuid::new_v4().to_string();
        let span = tracing::info_span!(
            "export",
            run_id = %run_id,
            date = %self.writer.date()
        );

        self.run(run_id).instrument(span).await
    }

    async fn run(&self, run_id: String) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let mut summary = ExportSummary::new(run_id, self.writer.date().to_string());

        tracing::info!(
            output_dir = %self.writer.output_dir().display(),
            publish = self.publisher.is_some(),
            "Starting export"
        );

        let enabled = self.export.enabled_categories();
        for category in [
            Category::Reviews,
            Category::StudyMaterials,
            Category::Subjects,
            Category::LevelProgressions,
        ] {
            if !enabled.contains(&category) {
                tracing::info!(category = %category, "Category disabled");
                summary.add_skipped(category, "disabled");
                continue;
            }

            match category {
                Category::Subjects => self.export_subjects(&mut summary).await?,
                _ => self.export_table(category, &mut summary).await?,
            }
            tracing::info!(category = %category, "Category done");
        }

        if let Some((publisher, target)) = &self.publisher {
            summary.publish_attempted = true;
            self.publish(publisher.as_ref(), target, &mut summary).await?;
        } else {
            tracing::info!("Publishing disabled; artifacts kept locally");
        }

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();
        Ok(summary)
    }

    /// Fetch, flatten and write one tabular category
    async fn export_table(&self, category: Category, summary: &mut ExportSummary) -> Result<()> {
        let url = collection_url(self.source.base_url(), category.collection(), &[])?;
        let records = self.source.fetch_all(&url).await?;

        if records.is_empty() && category == Category::StudyMaterials {
            tracing::info!(category = %category, "No records; no file written");
            summary.add_skipped(category, "no records");
            return Ok(());
        }

        let rows = flatten_records(category, &records)?;
        let path = self.writer.write_rows(category, &rows)?;

        summary.add_artifact(ArtifactInfo {
            category,
            sha256: file_checksum(&path)?,
            path,
            records: records.len(),
            rows: rows.len(),
        });
        Ok(())
    }

    /// Dump all subjects, then each configured subject type, as raw JSON
    ///
    /// Each dump is an independent sweep of the collection.
    async fn export_subjects(&self, summary: &mut ExportSummary) -> Result<()> {
        let mut sweeps: Vec<Option<SubjectType>> = vec![None];
        sweeps.extend(self.export.subject_types.iter().copied().map(Some));

        for subject_type in sweeps {
            let url = match subject_type {
                Some(t) => collection_url(
                    self.source.base_url(),
                    Category::Subjects.collection(),
                    &[("types", t.as_str())],
                )?,
                None => collection_url(self.source.base_url(), Category::Subjects.collection(), &[])?,
            };

            let records = self.source.fetch_all(&url).await?;
            let path = self.writer.write_subjects(subject_type, &records)?;

            summary.add_artifact(ArtifactInfo {
                category: Category::Subjects,
                sha256: file_checksum(&path)?,
                path,
                records: records.len(),
                rows: records.len(),
            });
        }
        Ok(())
    }

    /// Upload the run's CSVs one by one, then all matching JSON files at once
    async fn publish(
        &self,
        publisher: &dyn DatasetPublisher,
        target: &PublishTarget,
        summary: &mut ExportSummary,
    ) -> Result<()> {
        for category in CSV_PUBLISH_ORDER {
            let paths: Vec<_> = summary
                .artifacts_for(category)
                .map(|a| a.path.clone())
                .collect();

            for path in paths {
                let file_name = file_name_of(&path)?;
                let path_in_repo = repo_path(category, &file_name);

                publisher
                    .upload_file(&target.logs_repo, &path, &path_in_repo)
                    .await?;

                tracing::info!(
                    repo = %target.logs_repo,
                    path = %path_in_repo,
                    "Uploaded CSV"
                );
                summary.add_published(target.logs_repo.as_str(), path_in_repo);
            }
        }

        let uploaded = publisher
            .upload_folder(
                &target.dataset_repo,
                self.writer.output_dir(),
                &target.json_pattern,
            )
            .await?;

        tracing::info!(
            repo = %target.dataset_repo,
            files = uploaded.len(),
            "Uploaded JSON dumps"
        );
        for path_in_repo in uploaded {
            summary.add_published(target.dataset_repo.as_str(), path_in_repo);
        }

        Ok(())
    }
}

fn file_name_of(path: &Path) -> Result<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| KanilogError::Other(format!("{} has no file name", path.display())))
}
