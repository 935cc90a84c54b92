//! Record source trait definition
//!
//! [`RecordSource`] is the seam between the export pipeline and the paginated
//! API, so the pipeline can run against an in-memory source in tests.

use crate::domain::{KanilogError, Record, Result};
use async_trait::async_trait;
use url::Url;

/// A paginated collection API
///
/// # Example
///
/// ```no_run
/// use kanilog::adapters::wanikani::{collection_url, RecordSource, WaniKaniClient};
/// use kanilog::config::WaniKaniConfig;
///
/// # async fn example(config: WaniKaniConfig) -> kanilog::domain::Result<()> {
/// let client = WaniKaniClient::new(config)?;
/// let url = collection_url(client.base_url(), "level_progressions", &[])?;
/// let records = client.fetch_all(&url).await?;
/// println!("Fetched {} level progressions", records.len());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch every record reachable from `start` by following `next_url`
    ///
    /// Records are returned in server order, concatenated across pages.
    ///
    /// # Errors
    ///
    /// Any transport, status or parse failure aborts the whole fetch; no
    /// partial result is returned.
    async fn fetch_all(&self, start: &str) -> Result<Vec<Record>>;

    /// Base URL collections are resolved against
    fn base_url(&self) -> &str;
}

/// Build `<base_url>/<collection>` with optional query filters
///
/// # Example
///
/// ```
/// use kanilog::adapters::wanikani::collection_url;
///
/// let url = collection_url("https://api.wanikani.com/v2", "subjects", &[("types", "kanji")]).unwrap();
/// assert_eq!(url, "https://api.wanikani.com/v2/subjects?types=kanji");
/// ```
pub fn collection_url(base_url: &str, collection: &str, filters: &[(&str, &str)]) -> Result<String> {
    let raw = format!("{}/{}", base_url.trim_end_matches('/'), collection);
    let mut url = Url::parse(&raw)
        .map_err(|e| KanilogError::Configuration(format!("Invalid collection URL {raw}: {e}")))?;

    if !filters.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in filters {
            pairs.append_pair(key, value);
        }
    }

    Ok(url.to_string())
}
