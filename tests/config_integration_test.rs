//! Integration tests for configuration loading and validation
//!
//! Tests that touch process environment variables hold `ENV_MUTEX`.

use kanilog::config::{load_config, read_config, read_config_or_default, KanilogConfig};
use kanilog::domain::SubjectType;
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    for var in [
        "WANIKANI_ACCESS_TOKEN",
        "HF_TOKEN",
        "KANILOG_APPLICATION_LOG_LEVEL",
        "KANILOG_APPLICATION_DRY_RUN",
        "KANILOG_WANIKANI_BASE_URL",
        "KANILOG_WANIKANI_REVISION",
        "KANILOG_EXPORT_OUTPUT_DIR",
        "KANILOG_HUB_ENABLED",
        "KANILOG_HUB_LOGS_REPO",
        "KANILOG_HUB_DATASET_REPO",
        "TEST_KANILOG_WK_TOKEN",
        "TEST_KANILOG_HF_TOKEN",
    ] {
        std::env::remove_var(var);
    }
}

fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[application]
log_level = "debug"
dry_run = false

[wanikani]
base_url = "https://api.wanikani.com/v2"
api_token = "wk-file-token"
revision = "20170710"
timeout_seconds = 30

[export]
output_dir = "exports"
reviews = true
study_materials = true
level_progressions = true
subjects = true
subject_types = ["radical", "kanji"]

[hub]
enabled = true
endpoint = "https://huggingface.co"
token = "hf-file-token"
logs_repo = "someone/wanikani-logs"
dataset_repo = "someone/wanikani-dataset"
revision = "main"
json_pattern = "*.json"
timeout_seconds = 120

[logging]
local_enabled = true
local_path = "/tmp/kanilog"
local_rotation = "hourly"
"#,
    );

    let config = load_config(temp_file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.wanikani.timeout_seconds, 30);
    assert_eq!(
        config.wanikani.api_token.as_ref().unwrap().expose_secret(),
        "wk-file-token"
    );
    assert_eq!(config.export.output_dir, "exports");
    assert_eq!(
        config.export.subject_types,
        [SubjectType::Radical, SubjectType::Kanji]
    );
    assert_eq!(config.hub.logs_repo, "someone/wanikani-logs");
    assert_eq!(config.hub.timeout_seconds, 120);
    assert!(config.publishing_enabled());
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_defaults_from_environment_only() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("WANIKANI_ACCESS_TOKEN", "wk-env-token");
    std::env::set_var("HF_TOKEN", "hf-env-token");

    // No explicit path and no kanilog.toml in the test working directory
    let config = read_config_or_default(None).unwrap();
    cleanup_env_vars();

    assert!(config.validate().is_ok());
    assert_eq!(
        config.wanikani.api_token.as_ref().unwrap().expose_secret(),
        "wk-env-token"
    );
    assert_eq!(
        config.hub.token.as_ref().unwrap().expose_secret(),
        "hf-env-token"
    );
    assert_eq!(config.wanikani.revision, "20170710");
    assert_eq!(config.export.output_dir, ".");
    assert_eq!(config.hub.logs_repo, "osbm/wanikani-logs");
    assert_eq!(config.hub.dataset_repo, "osbm/wanikani-dataset");
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_KANILOG_WK_TOKEN", "wk-substituted");
    std::env::set_var("TEST_KANILOG_HF_TOKEN", "hf-substituted");

    let temp_file = write_config(
        r#"
[wanikani]
api_token = "${TEST_KANILOG_WK_TOKEN}"

[hub]
token = "${TEST_KANILOG_HF_TOKEN}"
"#,
    );

    let config = load_config(temp_file.path()).unwrap();
    cleanup_env_vars();

    assert_eq!(
        config.wanikani.api_token.as_ref().unwrap().expose_secret(),
        "wk-substituted"
    );
    assert_eq!(
        config.hub.token.as_ref().unwrap().expose_secret(),
        "hf-substituted"
    );
}

#[test]
fn test_missing_substitution_variable() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config("[wanikani]\napi_token = \"${TEST_KANILOG_WK_TOKEN}\"\n");
    let err = read_config(temp_file.path()).unwrap_err();

    assert!(err.to_string().contains("TEST_KANILOG_WK_TOKEN"));
}

#[test]
fn test_env_var_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("KANILOG_APPLICATION_LOG_LEVEL", "warn");
    std::env::set_var("KANILOG_EXPORT_OUTPUT_DIR", "/tmp/kanilog-out");
    std::env::set_var("KANILOG_HUB_LOGS_REPO", "other/logs");
    std::env::set_var("KANILOG_APPLICATION_DRY_RUN", "true");

    let temp_file = write_config(
        r#"
[application]
log_level = "debug"

[wanikani]
api_token = "wk"

[export]
output_dir = "exports"
"#,
    );

    let config = read_config(temp_file.path()).unwrap();
    cleanup_env_vars();

    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.export.output_dir, "/tmp/kanilog-out");
    assert_eq!(config.hub.logs_repo, "other/logs");
    assert!(config.application.dry_run);
    assert!(!config.publishing_enabled());
}

#[test]
fn test_hub_token_only_required_when_publishing() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let publishing = write_config("[wanikani]\napi_token = \"wk\"\n");
    let err = load_config(publishing.path()).unwrap_err();
    assert!(err.to_string().contains("hub.token"));

    let local_only = write_config("[wanikani]\napi_token = \"wk\"\n\n[hub]\nenabled = false\n");
    assert!(load_config(local_only.path()).is_ok());

    let dry_run =
        write_config("[application]\ndry_run = true\n\n[wanikani]\napi_token = \"wk\"\n");
    assert!(load_config(dry_run.path()).is_ok());
}

#[test]
fn test_invalid_config_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let cases = [
        // Missing source token
        "[hub]\nenabled = false\n",
        // Bad log level
        "[application]\nlog_level = \"loud\"\n\n[wanikani]\napi_token = \"wk\"\n\n[hub]\nenabled = false\n",
        // Non-http base URL
        "[wanikani]\napi_token = \"wk\"\nbase_url = \"ftp://example.com\"\n\n[hub]\nenabled = false\n",
        // Malformed repository id
        "[wanikani]\napi_token = \"wk\"\n\n[hub]\ntoken = \"hf\"\nlogs_repo = \"no-owner\"\n",
        // Every category disabled
        "[wanikani]\napi_token = \"wk\"\n\n[export]\nreviews = false\nstudy_materials = false\nlevel_progressions = false\nsubjects = false\n\n[hub]\nenabled = false\n",
        // Unknown rotation
        "[wanikani]\napi_token = \"wk\"\n\n[hub]\nenabled = false\n\n[logging]\nlocal_rotation = \"weekly\"\n",
    ];

    for content in cases {
        let temp_file = write_config(content);
        assert!(
            load_config(temp_file.path()).is_err(),
            "expected validation failure for:\n{content}"
        );
    }
}

#[test]
fn test_default_config_needs_tokens() {
    let config = KanilogConfig::default();
    assert!(config.validate().is_err());
}
