//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::KanilogConfig;
use super::secret::secret_string;
use crate::domain::errors::KanilogError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// File read when no `--config` path is given
pub const DEFAULT_CONFIG_FILE: &str = "kanilog.toml";

/// Loads and validates configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into KanilogConfig
/// 4. Applies environment variable overrides
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, a referenced
/// environment variable is unset, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use kanilog::config::loader::load_config;
///
/// let config = load_config("kanilog.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<KanilogConfig> {
    let config = read_config(path)?;
    validate(&config)?;
    Ok(config)
}

/// Reads configuration without validating it
///
/// Callers that apply CLI overrides first validate afterwards.
pub fn read_config(path: impl AsRef<Path>) -> Result<KanilogConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(KanilogError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        KanilogError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: KanilogConfig = toml::from_str(&contents)
        .map_err(|e| KanilogError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    Ok(config)
}

/// Reads configuration from `path`, or falls back to defaults
///
/// With an explicit path the file must exist. Without one,
/// [`DEFAULT_CONFIG_FILE`] is read when present; otherwise the built-in
/// defaults plus environment overrides are used, so a bare run only needs
/// `WANIKANI_ACCESS_TOKEN` and `HF_TOKEN`.
pub fn read_config_or_default(path: Option<&str>) -> Result<KanilogConfig> {
    match path {
        Some(path) => read_config(path),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => read_config(DEFAULT_CONFIG_FILE),
        None => {
            tracing::debug!(
                default_file = DEFAULT_CONFIG_FILE,
                "No configuration file found, using defaults and environment"
            );
            let mut config = KanilogConfig::default();
            apply_env_overrides(&mut config);
            Ok(config)
        }
    }
}

/// Validates a configuration, wrapping the message in a configuration error
pub fn validate(config: &KanilogConfig) -> Result<()> {
    config
        .validate()
        .map_err(|e| KanilogError::Configuration(format!("Configuration validation failed: {e}")))
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("env var pattern is a valid regex")
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = env_var_pattern();
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(KanilogError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides
///
/// The two token variables keep their conventional names
/// (`WANIKANI_ACCESS_TOKEN`, `HF_TOKEN`); everything else follows
/// `KANILOG_<SECTION>_<KEY>`.
fn apply_env_overrides(config: &mut KanilogConfig) {
    // Tokens
    if let Ok(val) = std::env::var("WANIKANI_ACCESS_TOKEN") {
        config.wanikani.api_token = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("HF_TOKEN") {
        config.hub.token = Some(secret_string(val));
    }

    // Application overrides
    if let Ok(val) = std::env::var("KANILOG_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("KANILOG_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // Source API overrides
    if let Ok(val) = std::env::var("KANILOG_WANIKANI_BASE_URL") {
        config.wanikani.base_url = val;
    }
    if let Ok(val) = std::env::var("KANILOG_WANIKANI_REVISION") {
        config.wanikani.revision = val;
    }
    if let Ok(val) = std::env::var("KANILOG_WANIKANI_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.wanikani.timeout_seconds = timeout;
        }
    }

    // Export overrides
    if let Ok(val) = std::env::var("KANILOG_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = val;
    }

    // Hub overrides
    if let Ok(val) = std::env::var("KANILOG_HUB_ENABLED") {
        config.hub.enabled = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("KANILOG_HUB_ENDPOINT") {
        config.hub.endpoint = val;
    }
    if let Ok(val) = std::env::var("KANILOG_HUB_LOGS_REPO") {
        config.hub.logs_repo = val;
    }
    if let Ok(val) = std::env::var("KANILOG_HUB_DATASET_REPO") {
        config.hub.dataset_repo = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("KANILOG_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("KANILOG_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
