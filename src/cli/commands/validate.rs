//! Validate config command implementation

use super::{EXIT_CONFIG, EXIT_OK};
use crate::config::{read_config_or_default, DEFAULT_CONFIG_FILE};
use clap::Args;
use secrecy::ExposeSecret;

/// Arguments for the validate-config command
#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let shown = config_path.unwrap_or(DEFAULT_CONFIG_FILE);
        tracing::info!(config_path = %shown, "Validating configuration");

        println!("Validating configuration: {shown}");
        println!();

        let config = match read_config_or_default(config_path) {
            Ok(c) => {
                println!("Configuration loaded");
                c
            }
            Err(e) => {
                println!("Failed to load configuration");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        if let Err(e) = config.validate() {
            println!("Configuration validation failed");
            println!("   Error: {e}");
            println!();
            return Ok(EXIT_CONFIG);
        }

        let token_state = |set: bool| if set { "set" } else { "not set" };
        let wanikani_token = config
            .wanikani
            .api_token
            .as_ref()
            .is_some_and(|t| !t.expose_secret().is_blank());
        let hub_token = config
            .hub
            .token
            .as_ref()
            .is_some_and(|t| !t.expose_secret().is_blank());

        println!("Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  WaniKani API: {}", config.wanikani.base_url);
        println!("  WaniKani Revision: {}", config.wanikani.revision);
        println!("  WaniKani Token: {}", token_state(wanikani_token));
        println!("  Output Directory: {}", config.export.output_dir);
        println!(
            "  Categories: {}",
            config
                .export
                .enabled_categories()
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!("  Publishing: {}", config.publishing_enabled());
        if config.publishing_enabled() {
            println!("  Hub Endpoint: {}", config.hub.endpoint);
            println!("  Logs Repository: {}", config.hub.logs_repo);
            println!("  Dataset Repository: {}", config.hub.dataset_repo);
            println!("  Hub Token: {}", token_state(hub_token));
        }
        println!();

        Ok(EXIT_OK)
    }
}
