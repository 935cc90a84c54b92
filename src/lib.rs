// kanilog - WaniKani learning-record exporter
// Copyright (c) 2025 kanilog Contributors
// Licensed under the MIT License

//! # kanilog - WaniKani learning-record exporter
//!
//! kanilog pulls a learner's records from the WaniKani v2 API, turns them
//! into dated CSV logs and raw JSON dumps, and publishes both to dataset
//! repositories on the Hugging Face Hub.
//!
//! ## Overview
//!
//! - **Fetching** every page of a collection by following `pages.next_url`
//! - **Flattening** review statistics, study materials, and level
//!   progressions into rows
//! - **Dumping** subjects verbatim, all at once and per subject type
//! - **Publishing** CSVs to the logs repository and JSON dumps to the
//!   dataset repository
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (transform, export)
//! - [`adapters`] - External integrations (WaniKani, Hugging Face Hub)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kanilog::config::read_config_or_default;
//! use kanilog::core::export::ExportCoordinator;
//! use kanilog::domain::RunDate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // kanilog.toml if present, otherwise defaults + WANIKANI_ACCESS_TOKEN / HF_TOKEN
//!     let config = read_config_or_default(None)?;
//!
//!     let coordinator = ExportCoordinator::new(&config, RunDate::today())?;
//!     let summary = coordinator.execute_export().await?;
//!
//!     println!("{summary}");
//!     Ok(())
//! }
//! ```
//!
//! ## Flattening
//!
//! ```rust
//! use kanilog::core::transform::flatten_records;
//! use kanilog::domain::{Category, Record};
//! use serde_json::json;
//!
//! let review = Record::new(json!({
//!     "id": 1,
//!     "data_updated_at": "2024-01-02T00:00:00Z",
//!     "data": {
//!         "created_at": "2024-01-01T00:00:00Z",
//!         "subject_type": "kanji",
//!         "subject_id": 440,
//!         "hidden": false,
//!         "percentage_correct": 90,
//!         "meaning_correct": 9,
//!         "meaning_current_streak": 4,
//!         "meaning_incorrect": 1,
//!         "meaning_max_streak": 5,
//!         "reading_correct": 9,
//!         "reading_current_streak": 4,
//!         "reading_incorrect": 1,
//!         "reading_max_streak": 5
//!     }
//! }));
//!
//! let rows = flatten_records(Category::Reviews, &[review]).unwrap();
//! assert!(rows[0].contains("reading_max_streak"));
//! ```
//!
//! ## Error Handling
//!
//! All library functions return [`domain::Result`], whose error type is
//! [`domain::KanilogError`]. Source API and hub failures are nested as
//! [`domain::SourceApiError`] and [`domain::PublishError`].

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
