//! Dataset hub adapter
//!
//! [`DatasetPublisher`] is the upload seam; [`HubClient`] implements it over
//! the Hugging Face Hub commit API.

pub mod client;
pub mod pattern;
pub mod publisher;

pub use client::{commit_payload, CommitFile, HubClient};
pub use pattern::{collect_matching_files, AllowPattern, MatchedFile};
pub use publisher::DatasetPublisher;
