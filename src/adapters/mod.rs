//! External system integrations for kanilog.
//!
//! - [`wanikani`] - WaniKani v2 API: paginated record fetching
//! - [`hub`] - Hugging Face Hub: dataset uploads
//!
//! # Design Pattern
//!
//! Each adapter sits behind a trait ([`wanikani::RecordSource`],
//! [`hub::DatasetPublisher`]) so the export pipeline can be driven by
//! in-memory implementations in tests.
//!
//! ```rust,no_run
//! use kanilog::adapters::hub::{DatasetPublisher, HubClient};
//! use kanilog::config::{secret_string, HubConfig};
//! use kanilog::domain::RepoId;
//! use std::path::Path;
//!
//! # async fn example() -> kanilog::domain::Result<()> {
//! let config = HubConfig {
//!     token: Some(secret_string("hf_xxx".to_string())),
//!     ..Default::default()
//! };
//! let hub = HubClient::new(config)?;
//! let repo = RepoId::new("osbm/wanikani-dataset").map_err(kanilog::domain::KanilogError::Configuration)?;
//! hub.upload_folder(&repo, Path::new("."), "*.json").await?;
//! # Ok(())
//! # }
//! ```

pub mod hub;
pub mod wanikani;
