//! WaniKani adapter implementation
//!
//! This module provides the paginated fetcher for the WaniKani v2 API, the
//! [`RecordSource`] seam it implements, and the page wire models.

pub mod client;
pub mod models;
pub mod source;

pub use client::{WaniKaniClient, REVISION_HEADER};
pub use models::{Page, Pagination};
pub use source::{collection_url, RecordSource};
