//! WaniKani v2 API client
//!
//! Implements the paginated fetch loop on top of `reqwest`. Every request
//! carries the bearer token and the `Wanikani-Revision` header.

use super::models::Page;
use super::source::RecordSource;
use crate::config::WaniKaniConfig;
use crate::domain::{KanilogError, Record, Result, SourceApiError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::ExposeSecret;
use std::time::Duration;

/// Header selecting the API revision
pub const REVISION_HEADER: &str = "Wanikani-Revision";

/// WaniKani API client
///
/// # Example
///
/// ```no_run
/// use kanilog::adapters::wanikani::{RecordSource, WaniKaniClient};
/// use kanilog::config::{secret_string, WaniKaniConfig};
///
/// # async fn example() -> kanilog::domain::Result<()> {
/// let config = WaniKaniConfig {
///     api_token: Some(secret_string("wk-token".to_string())),
///     ..Default::default()
/// };
/// let client = WaniKaniClient::new(config)?;
/// let reviews = client
///     .fetch_all("https://api.wanikani.com/v2/review_statistics")
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct WaniKaniClient {
    /// Base URL of the API
    base_url: String,

    /// HTTP client for making requests
    client: Client,

    /// Source API configuration
    config: WaniKaniConfig,
}

impl WaniKaniClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no API token is configured or the
    /// HTTP client cannot be built.
    pub fn new(config: WaniKaniConfig) -> Result<Self> {
        if config.api_token.is_none() {
            return Err(KanilogError::Configuration(
                "wanikani.api_token is not set".to_string(),
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
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            config,
        })
    }

    /// Build authorization header value
    fn auth_header_value(&self) -> Option<String> {
        self.config
            .api_token
            .as_ref()
            .map(|token| token.expose_secret().bearer())
    }

    /// Fetch and parse a single page
    async fn fetch_page(&self, url: &str) -> Result<Page> {
        let mut request = self
            .client
            .get(url)
            .header(REVISION_HEADER, &self.config.revision);

        if let Some(auth) = self.auth_header_value() {
            request = request.header("Authorization", auth);
        }

        let resp = request.send().await.map_err(|e| {
            if e.is_timeout() {
                SourceApiError::Timeout(format!("{url}: {e}"))
            } else {
                SourceApiError::ConnectionFailed(format!("{url}: {e}"))
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(status_error(status, message).into());
        }

        let page = resp.json::<Page>().await.map_err(|e| {
            SourceApiError::InvalidResponse(format!("{url} did not return a collection page: {e}"))
        })?;

        Ok(page)
    }
}

fn status_error(status: StatusCode, message: String) -> SourceApiError {
    let code = status.as_u16();
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SourceApiError::AuthenticationFailed {
            status: code,
            message,
        },
        s if s.is_server_error() => SourceApiError::ServerError {
            status: code,
            message,
        },
        _ => SourceApiError::ClientError {
            status: code,
            message,
        },
    }
}

#[async_trait]
impl RecordSource for WaniKaniClient {
    async fn fetch_all(&self, start: &str) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        let mut next_url = Some(start.to_string());
        let mut pages = 0usize;

        while let Some(url) = next_url {
            let page = self.fetch_page(&url).await?;
            pages += 1;

            tracing::debug!(
                url = %url,
                page = pages,
                records = page.data.len(),
                "Fetched page"
            );

            records.extend(page.data);
            next_url = page.pages.next_url;
        }

        tracing::info!(
            start = %start,
            pages = pages,
            records = records.len(),
            "Fetched collection"
        );

        Ok(records)
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    fn config() -> WaniKaniConfig {
        WaniKaniConfig {
            api_token: Some(secret_string("wk-token".to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn test_client_creation() {
        let client = WaniKaniClient::new(config()).unwrap();
        assert_eq!(client.base_url(), "https://api.wanikani.com/v2");
        assert_eq!(
            client.auth_header_value().as_deref(),
            Some("Bearer wk-token")
        );
    }

    #[test]
    fn test_client_requires_token() {
        let result = WaniKaniClient::new(WaniKaniConfig::default());
        assert!(matches!(result, Err(KanilogError::Configuration(_))));
    }

    #[test]
    fn test_status_error_mapping() {
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, String::new()),
            SourceApiError::AuthenticationFailed { status: 401, .. }
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY, String::new()),
            SourceApiError::ServerError { status: 502, .. }
        ));
        assert!(matches!(
            status_error(StatusCode::UNPROCESSABLE_ENTITY, String::new()),
            SourceApiError::ClientError { status: 422, .. }
        ));
    }
}
