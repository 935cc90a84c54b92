//! Core business logic for kanilog.
//!
//! # Modules
//!
//! - [`transform`] - Record flattening for the tabular categories
//! - [`export`] - Export orchestration, artifact writing, and publishing
//!
//! # Export Workflow
//!
//! 1. **Fetch**: Follow the paginated collection of each category
//! 2. **Flatten**: Turn review, study material, and level progression
//!    records into rows
//! 3. **Write**: Dated CSVs and raw subject JSON dumps
//! 4. **Publish**: CSVs to the logs repository, JSON dumps to the dataset
//!    repository
//! 5. **Report**: Generate export summary
//!
//! # Example
//!
//! ```rust,no_run
//! use kanilog::config::load_config;
//! use kanilog::core::export::ExportCoordinator;
//! use kanilog::domain::RunDate;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("kanilog.toml")?;
//! let coordinator = ExportCoordinator::new(&config, RunDate::today())?;
//! let summary = coordinator.execute_export().await?;
//!
//! println!("Artifacts: {}", summary.artifacts.len());
//! println!("Published: {}", summary.published.len());
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod transform;
