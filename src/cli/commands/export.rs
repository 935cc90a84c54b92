//! Export command implementation
//!
//! This module implements the `export` command, which is also what a bare
//! `kanilog` invocation runs.

use super::{EXIT_CONFIG, EXIT_FATAL, EXIT_INIT, EXIT_OK};
use crate::config::{read_config_or_default, KanilogConfig};
use crate::core::export::ExportCoordinator;
use crate::domain::RunDate;
use crate::log_error_with_context;
use clap::Args;

/// Arguments for the export command
#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Override the output directory
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Write artifacts locally without publishing them
    #[arg(long)]
    pub no_publish: bool,

    /// Date used in artifact names (YYYY-MM-DD, default: today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<RunDate>,
}

impl ExportArgs {
    /// Apply CLI overrides to the loaded configuration
    pub fn apply_overrides(&self, config: &mut KanilogConfig) {
        if let Some(dir) = &self.output_dir {
            tracing::info!(output_dir = %dir, "Overriding output directory from CLI");
            config.export.output_dir = dir.clone();
        }

        if self.no_publish {
            tracing::info!("Publishing disabled from CLI");
            config.hub.enabled = false;
        }
    }

    /// Execute the export command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = match read_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("{e}");
                return Ok(EXIT_CONFIG);
            }
        };

        self.apply_overrides(&mut config);

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(EXIT_CONFIG);
        }

        let date = self.date.unwrap_or_else(RunDate::today);

        if !config.publishing_enabled() {
            println!("Publishing disabled - artifacts are written locally only");
        }

        let coordinator = match ExportCoordinator::new(&config, date) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create export coordinator");
                eprintln!("Failed to initialize export: {e}");
                return Ok(EXIT_INIT);
            }
        };

        println!("Starting export for {date}...");

        let summary = match coordinator.execute_export().await {
            Ok(s) => s,
            Err(e) => {
                log_error_with_context!(&e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(EXIT_FATAL);
            }
        };

        println!();
        print!("{summary}");
        println!();
        println!("Export completed successfully!");

        Ok(EXIT_OK)
    }
}
