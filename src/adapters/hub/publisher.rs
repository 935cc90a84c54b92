//! Dataset publisher trait definition
//!
//! [`DatasetPublisher`] abstracts the dataset-hosting upload protocol. The
//! export pipeline only ever calls these two operations.

use crate::domain::{RepoId, Result};
use async_trait::async_trait;
use std::path::Path;

/// Uploads local artifacts to a dataset repository
#[async_trait]
pub trait DatasetPublisher: Send + Sync {
    /// Upload one local file to `path_in_repo`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the hub rejects the
    /// upload. Nothing is retried.
    async fn upload_file(&self, repo: &RepoId, local_path: &Path, path_in_repo: &str)
        -> Result<()>;

    /// Upload every file under `folder` whose relative path matches
    /// `allow_pattern`, in a single commit
    ///
    /// Returns the repository paths that were uploaded. No matching files
    /// means no commit and an empty list.
    async fn upload_folder(
        &self,
        repo: &RepoId,
        folder: &Path,
        allow_pattern: &str,
    ) -> Result<Vec<String>>;
}
