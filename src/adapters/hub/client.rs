//! Hugging Face Hub commit client
//!
//! Uploads go through the commit endpoint,
//! `POST {endpoint}/api/datasets/{repo}/commit/{revision}`, whose body is
//! newline-delimited JSON: one header line carrying the commit summary
//! followed by one line per file with base64 content.

use super::pattern::{collect_matching_files, AllowPattern};
use super::publisher::DatasetPublisher;
use crate::config::HubConfig;
use crate::domain::{KanilogError, PublishError, RepoId, Result};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::json;
use std::path::Path;
use std::time::Duration;

const NDJSON_CONTENT_TYPE: &str = "application/x-ndjson";

/// A file staged for a commit
#[derive(Debug, Clone)]
pub struct CommitFile {
    pub path_in_repo: String,
    pub content: Vec<u8>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommitResponse {
    #[serde(default)]
    commit_url: Option<String>,
    #[serde(default)]
    commit_oid: Option<String>,
}

/// Hub API client
pub struct HubClient {
    endpoint: String,
    client: Client,
    config: HubConfig,
}

impl HubClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no token is configured or the HTTP
    /// client cannot be built.
    pub fn new(config: HubConfig) -> Result<Self> {
        if config.token.is_none() {
            return Err(KanilogError::Configuration(
                "hub.token is not set".to_string(),
            ));
        }

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30))
            .user_agent(concat!("kanilog/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                KanilogError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            client,
            config,
        })
    }

    fn auth_header_value(&self) -> Option<String> {
        self.config
            .token
            .as_ref()
            .map(|token| token.expose_secret().bearer())
    }

    /// Commit endpoint for a dataset repository
    pub fn commit_url(&self, repo: &RepoId) -> String {
        let revision: String =
            url::form_urlencoded::byte_serialize(self.config.revision.as_bytes()).collect();
        format!(
            "{}/api/datasets/{}/commit/{}",
            self.endpoint,
            repo.as_str(),
            revision
        )
    }

    /// Create one commit containing `files`
    // TODO: files above the hub's inline size limit need the preupload + LFS flow
    pub async fn create_commit(
        &self,
        repo: &RepoId,
        summary: &str,
        files: &[CommitFile],
    ) -> Result<()> {
        let url = self.commit_url(repo);
        let body = commit_payload(summary, files)?;

        let mut request = self
            .client
            .post(&url)
            .header("Content-Type", NDJSON_CONTENT_TYPE)
            .body(body);

        if let Some(auth) = self.auth_header_value() {
            request = request.header("Authorization", auth);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| PublishError::ConnectionFailed(format!("{url}: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(status_error(status, repo, message).into());
        }

        let commit = resp.json::<CommitResponse>().await.unwrap_or_default();

        tracing::info!(
            repo = %repo,
            files = files.len(),
            commit_oid = commit.commit_oid.as_deref().unwrap_or("unknown"),
            commit_url = commit.commit_url.as_deref().unwrap_or(""),
            "Created commit"
        );

        Ok(())
    }
}

/// Build the NDJSON commit body
pub fn commit_payload(summary: &str, files: &[CommitFile]) -> Result<String> {
    let mut lines = Vec::with_capacity(files.len() + 1);

    lines.push(serde_json::to_string(&json!({
        "key": "header",
        "value": { "summary": summary, "description": "" }
    }))?);

    for file in files {
        lines.push(serde_json::to_string(&json!({
            "key": "file",
            "value": {
                "content": BASE64.encode(&file.content),
                "path": file.path_in_repo,
                "encoding": "base64"
            }
        }))?);
    }

    Ok(lines.join("\n"))
}

fn status_error(status: StatusCode, repo: &RepoId, message: String) -> PublishError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            PublishError::AuthenticationFailed(format!("{repo}: {message}"))
        }
        StatusCode::NOT_FOUND => PublishError::RepositoryNotFound(repo.to_string()),
        _ => PublishError::CommitFailed {
            status: status.as_u16(),
            message,
        },
    }
}

fn read_artifact(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| {
        PublishError::ArtifactUnavailable(format!("{}: {e}", path.display())).into()
    })
}

#[async_trait]
impl DatasetPublisher for HubClient {
    async fn upload_file(
        &self,
        repo: &RepoId,
        local_path: &Path,
        path_in_repo: &str,
    ) -> Result<()> {
        let file = CommitFile {
            path_in_repo: path_in_repo.to_string(),
            content: read_artifact(local_path)?,
        };

        tracing::debug!(
            repo = %repo,
            path = path_in_repo,
            bytes = file.content.len(),
            "Uploading file"
        );

        self.create_commit(repo, &format!("Upload {path_in_repo}"), &[file])
            .await
    }

    async fn upload_folder(
        &self,
        repo: &RepoId,
        folder: &Path,
        allow_pattern: &str,
    ) -> Result<Vec<String>> {
        let pattern = AllowPattern::new(allow_pattern)?;
        let matched = collect_matching_files(folder, &pattern)?;

        if matched.is_empty() {
            tracing::warn!(
                repo = %repo,
                folder = %folder.display(),
                pattern = allow_pattern,
                "No files matched; nothing uploaded"
            );
            return Ok(Vec::new());
        }

        let mut files = Vec::with_capacity(matched.len());
        for entry in &matched {
            files.push(CommitFile {
                path_in_repo: entry.relative_path.clone(),
                content: read_artifact(&entry.local_path)?,
            });
        }

        self.create_commit(repo, "Upload folder using kanilog", &files)
            .await?;

        Ok(matched.into_iter().map(|m| m.relative_path).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;
    use serde_json::Value;

    fn config() -> HubConfig {
        HubConfig {
            token: Some(secret_string("hf_token".to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn test_client_requires_token() {
        let result = HubClient::new(HubConfig::default());
        assert!(matches!(result, Err(KanilogError::Configuration(_))));
    }

    #[test]
    fn test_commit_url() {
        let client = HubClient::new(config()).unwrap();
        let repo = RepoId::new("osbm/wanikani-logs").unwrap();
        assert_eq!(
            client.commit_url(&repo),
            "https://huggingface.co/api/datasets/osbm/wanikani-logs/commit/main"
        );
    }

    #[test]
    fn test_commit_url_encodes_revision() {
        let mut config = config();
        config.revision = "refs/pr/1".to_string();
        let client = HubClient::new(config).unwrap();
        let repo = RepoId::new("osbm/wanikani-logs").unwrap();
        assert!(client.commit_url(&repo).ends_with("/commit/refs%2Fpr%2F1"));
    }

    #[test]
    fn test_commit_payload_layout() {
        let files = vec![CommitFile {
            path_in_repo: "reviews/2024-01-01_reviews.csv".to_string(),
            content: b"review_id\n1\n".to_vec(),
        }];
        let payload = commit_payload("Upload reviews", &files).unwrap();
        let lines: Vec<Value> = payload
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["key"], "header");
        assert_eq!(lines[0]["value"]["summary"], "Upload reviews");
        assert_eq!(lines[1]["key"], "file");
        assert_eq!(lines[1]["value"]["path"], "reviews/2024-01-01_reviews.csv");
        assert_eq!(lines[1]["value"]["encoding"], "base64");
        assert_eq!(lines[1]["value"]["content"], "cmV2aWV3X2lkCjEK");
    }

    #[test]
    fn test_status_error_mapping() {
        let repo = RepoId::new("osbm/wanikani-logs").unwrap();
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN, &repo, String::new()),
            PublishError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, &repo, String::new()),
            PublishError::RepositoryNotFound(_)
        ));
        assert!(matches!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR, &repo, String::new()),
            PublishError::CommitFailed { status: 500, .. }
        ));
    }
}
