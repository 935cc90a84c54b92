//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for kanilog using clap.
//! Running `kanilog` without a subcommand performs a full export.

pub mod commands;

use clap::{Parser, Subcommand};

/// kanilog - WaniKani learning-record exporter
#[derive(Parser, Debug)]
#[command(name = "kanilog")]
#[command(version, about, long_about = None)]
#[command(author = "kanilog Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults to kanilog.toml when present)
    #[arg(short, long, env = "KANILOG_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "KANILOG_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute (default: export)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The command to run, `export` when none was given
    pub fn command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Export(Default::default()))
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Fetch all categories, write artifacts and publish them
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
