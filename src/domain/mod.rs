//! Domain models and types for kanilog.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Upstream records** ([`Record`]) kept exactly as the source API returned them
//! - **Flat rows** ([`Row`]) produced by the flatteners
//! - **Categories** ([`Category`], [`SubjectType`])
//! - **Strongly-typed identifiers** ([`RepoId`], [`RunDate`])
//! - **Error types** ([`KanilogError`], [`SourceApiError`], [`PublishError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, KanilogError>`]:
//!
//! ```rust
//! use kanilog::domain::{KanilogError, RepoId, Result};
//!
//! fn logs_repo(raw: &str) -> Result<RepoId> {
//!     RepoId::new(raw).map_err(KanilogError::Validation)
//! }
//! # assert!(logs_repo("osbm/wanikani-logs").is_ok());
//! ```

pub mod errors;
pub mod ids;
pub mod record;
pub mod result;
pub mod row;

pub use errors::{KanilogError, PublishError, SourceApiError};
pub use ids::{RepoId, RunDate};
pub use record::{Category, Record, SubjectType};
pub use result::Result;
pub use row::Row;
