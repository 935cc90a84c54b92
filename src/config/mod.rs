//! Configuration management for kanilog.
//!
//! # Overview
//!
//! kanilog reads an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting
//! - Environment overrides (`WANIKANI_ACCESS_TOKEN`, `HF_TOKEN`, `KANILOG_*`)
//! - Validation before any network call is made
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - log level, dry run
//! - [`WaniKaniConfig`] - source API location, token, revision header
//! - [`ExportConfig`] - output directory and enabled categories
//! - [`HubConfig`] - dataset repositories and hub token
//! - [`LoggingConfig`] - optional JSON file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [wanikani]
//! api_token = "${WANIKANI_ACCESS_TOKEN}"
//!
//! [export]
//! output_dir = "exports"
//!
//! [hub]
//! token = "${HF_TOKEN}"
//! logs_repo = "osbm/wanikani-logs"
//! dataset_repo = "osbm/wanikani-dataset"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, read_config, read_config_or_default, DEFAULT_CONFIG_FILE};
pub use schema::{
    ApplicationConfig, ExportConfig, HubConfig, KanilogConfig, LoggingConfig, WaniKaniConfig,
};
pub use secret::{secret_string, secret_string_opt, SecretString, SecretValue};
