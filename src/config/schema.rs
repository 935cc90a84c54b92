//! Configuration schema types
//!
//! This module defines the configuration structure for kanilog. Every section
//! has defaults, so an empty file (or no file at all) plus the two token
//! environment variables is a complete configuration.

use crate::config::SecretString;
use crate::domain::{Category, RepoId, SubjectType};
use serde::{Deserialize, Serialize};

/// Main kanilog configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KanilogConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Source API configuration
    #[serde(default)]
    pub wanikani: WaniKaniConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Dataset hub configuration
    #[serde(default)]
    pub hub: HubConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl KanilogConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.wanikani.validate()?;
        self.export.validate()?;
        if self.publishing_enabled() {
            self.hub.validate()?;
        }
        self.logging.validate()?;
        Ok(())
    }

    /// Whether the run uploads artifacts after writing them
    pub fn publishing_enabled(&self) -> bool {
        self.hub.enabled && !self.application.dry_run
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (write artifacts locally, skip publishing)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Source API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaniKaniConfig {
    /// Base URL of the versioned API
    #[serde(default = "default_wanikani_base_url")]
    pub base_url: String,

    /// Personal API token
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub api_token: Option<SecretString>,

    /// Value of the `Wanikani-Revision` header
    #[serde(default = "default_wanikani_revision")]
    pub revision: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl WaniKaniConfig {
    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        validate_http_url("wanikani.base_url", &self.base_url)?;

        if self
            .api_token
            .as_ref()
            .map(|t| t.expose_secret().is_blank())
            .unwrap_or(true)
        {
            return Err(
                "wanikani.api_token is required (set it in the file or via WANIKANI_ACCESS_TOKEN)"
                    .to_string(),
            );
        }

        if self.revision.trim().is_empty() {
            return Err("wanikani.revision cannot be empty".to_string());
        }

        if self.timeout_seconds == 0 {
            return Err("wanikani.timeout_seconds must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for WaniKaniConfig {
    fn default() -> Self {
        Self {
            base_url: default_wanikani_base_url(),
            api_token: None,
            revision: default_wanikani_revision(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory artifacts are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Export review statistics
    #[serde(default = "default_true")]
    pub reviews: bool,

    /// Export study materials
    #[serde(default = "default_true")]
    pub study_materials: bool,

    /// Export level progressions
    #[serde(default = "default_true")]
    pub level_progressions: bool,

    /// Export subjects
    #[serde(default = "default_true")]
    pub subjects: bool,

    /// Subject types written to per-type JSON files
    #[serde(default = "default_subject_types")]
    pub subject_types: Vec<SubjectType>,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.trim().is_empty() {
            return Err("export.output_dir cannot be empty".to_string());
        }

        if self.enabled_categories().is_empty() {
            return Err("export: at least one category must be enabled".to_string());
        }

        if self.subjects && self.subject_types.is_empty() {
            return Err(
                "export.subject_types cannot be empty when subjects are exported".to_string(),
            );
        }

        Ok(())
    }

    /// Enabled categories in run order
    pub fn enabled_categories(&self) -> Vec<Category> {
        [
            (Category::Reviews, self.reviews),
            (Category::StudyMaterials, self.study_materials),
            (Category::Subjects, self.subjects),
            (Category::LevelProgressions, self.level_progressions),
        ]
        .into_iter()
        .filter_map(|(category, enabled)| enabled.then_some(category))
        .collect()
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            reviews: true,
            study_materials: true,
            level_progressions: true,
            subjects: true,
            subject_types: default_subject_types(),
        }
    }
}

/// Dataset hub configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubConfig {
    /// Publish artifacts after the export
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Hub base URL
    #[serde(default = "default_hub_endpoint")]
    pub endpoint: String,

    /// Write token
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub token: Option<SecretString>,

    /// Repository receiving the dated CSV logs
    #[serde(default = "default_logs_repo")]
    pub logs_repo: String,

    /// Repository receiving the JSON subject dumps
    #[serde(default = "default_dataset_repo")]
    pub dataset_repo: String,

    /// Branch commits are made to
    #[serde(default = "default_hub_revision")]
    pub revision: String,

    /// Glob selecting the files of the bulk JSON upload
    #[serde(default = "default_json_pattern")]
    pub json_pattern: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_hub_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl HubConfig {
    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        validate_http_url("hub.endpoint", &self.endpoint)?;

        if self
            .token
            .as_ref()
            .map(|t| t.expose_secret().is_blank())
            .unwrap_or(true)
        {
            return Err(
                "hub.token is required when publishing (set it in the file or via HF_TOKEN)"
                    .to_string(),
            );
        }

        RepoId::new(self.logs_repo.as_str()).map_err(|e| format!("hub.logs_repo: {e}"))?;
        RepoId::new(self.dataset_repo.as_str()).map_err(|e| format!("hub.dataset_repo: {e}"))?;

        if self.revision.trim().is_empty() {
            return Err("hub.revision cannot be empty".to_string());
        }

        if self.json_pattern.trim().is_empty() {
            return Err("hub.json_pattern cannot be empty".to_string());
        }

        if self.timeout_seconds == 0 {
            return Err("hub.timeout_seconds must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_hub_endpoint(),
            token: None,
            logs_repo: default_logs_repo(),
            dataset_repo: default_dataset_repo(),
            revision: default_hub_revision(),
            json_pattern: default_json_pattern(),
            timeout_seconds: default_hub_timeout_seconds(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn validate_http_url(field: &str, value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{field} cannot be empty"));
    }
    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(format!("{field} must start with http:// or https://"));
    }
    url::Url::parse(value).map_err(|e| format!("{field} is not a valid URL: {e}"))?;
    Ok(())
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_wanikani_base_url() -> String {
    "https://api.wanikani.com/v2".to_string()
}

fn default_wanikani_revision() -> String {
    "20170710".to_string()
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_subject_types() -> Vec<SubjectType> {
    SubjectType::ALL.to_vec()
}

fn default_hub_endpoint() -> String {
    "https://huggingface.co".to_string()
}

fn default_logs_repo() -> String {
    "osbm/wanikani-logs".to_string()
}

fn default_dataset_repo() -> String {
    "osbm/wanikani-dataset".to_string()
}

fn default_hub_revision() -> String {
    "main".to_string()
}

fn default_json_pattern() -> String {
    "*.json".to_string()
}

fn default_hub_timeout_seconds() -> u64 {
    300
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
