//! Init command implementation
//!
//! This module implements the `init` command for generating a starter
//! configuration file.

use super::{EXIT_CONFIG, EXIT_FATAL, EXIT_OK};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "kanilog.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Set WANIKANI_ACCESS_TOKEN and HF_TOKEN (or put them in .env)");
                println!("  2. Adjust {} if needed", self.output);
                println!("  3. Validate configuration: kanilog validate-config");
                println!("  4. Run export: kanilog");
                println!();
                Ok(EXIT_OK)
            }
            Err(e) => {
                println!("Failed to write configuration file");
                println!("   Error: {e}");
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Starter configuration with every setting at its default
    pub fn generate_config() -> String {
        r#"# kanilog configuration
# Tokens are read from WANIKANI_ACCESS_TOKEN and HF_TOKEN; they can also be
# set here, e.g. api_token = "${WANIKANI_ACCESS_TOKEN}".

[application]
log_level = "info"
dry_run = false  # true: write artifacts, never publish

[wanikani]
base_url = "https://api.wanikani.com/v2"
revision = "20170710"
timeout_seconds = 60

[export]
output_dir = "."
reviews = true
study_materials = true
level_progressions = true
subjects = true
subject_types = ["radical", "kanji", "kana_vocabulary", "vocabulary"]

[hub]
enabled = true
endpoint = "https://huggingface.co"
logs_repo = "osbm/wanikani-logs"
dataset_repo = "osbm/wanikani-dataset"
revision = "main"
json_pattern = "*.json"
timeout_seconds = 300

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"  # daily | hourly | never
"#
        .to_string()
    }
}
