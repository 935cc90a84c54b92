//! Allow patterns for bulk folder uploads
//!
//! Patterns use shell glob syntax (`*`, `?`, `[abc]`, `[!abc]`) matched
//! against the whole `/`-separated path relative to the uploaded folder.
//! As with `fnmatch`, `*` also matches `/`.

use crate::domain::{PublishError, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A compiled allow pattern
#[derive(Debug, Clone)]
pub struct AllowPattern {
    pattern: Pattern,
}

impl AllowPattern {
    /// Compile a glob pattern
    ///
    /// # Examples
    ///
    /// ```
    /// use kanilog::adapters::hub::AllowPattern;
    ///
    /// let pattern = AllowPattern::new("*.json").unwrap();
    /// assert!(pattern.matches("kanji.json"));
    /// assert!(!pattern.matches("2024-01-01_reviews.csv"));
    /// ```
    pub fn new(pattern: &str) -> Result<Self> {
        if pattern.trim().is_empty() {
            return Err(PublishError::InvalidPattern("pattern is empty".to_string()).into());
        }
        let pattern = Pattern::new(pattern)
            .map_err(|e| PublishError::InvalidPattern(format!("{pattern}: {e}")))?;
        Ok(Self { pattern })
    }

    /// Whether a relative path is selected
    pub fn matches(&self, relative_path: &str) -> bool {
        self.pattern.matches(relative_path)
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

/// A local file selected for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedFile {
    /// Path on disk
    pub local_path: PathBuf,
    /// `/`-separated path relative to the folder; also the path in the repo
    pub relative_path: String,
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Walk `folder` and collect files whose relative path matches `pattern`
///
/// Hidden files and directories (leading `.`) are skipped. Results are
/// sorted by relative path.
pub fn collect_matching_files(folder: &Path, pattern: &AllowPattern) -> Result<Vec<MatchedFile>> {
    if !folder.is_dir() {
        return Err(PublishError::ArtifactUnavailable(format!(
            "{} is not a directory",
            folder.display()
        ))
        .into());
    }

    let mut matched = Vec::new();
    // min_depth keeps the folder itself out of the hidden-entry filter
    for entry in WalkDir::new(folder)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry.map_err(|e| {
            PublishError::ArtifactUnavailable(format!("cannot read {}: {e}", folder.display()))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = match entry.path().strip_prefix(folder) {
            Ok(relative) => relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
            Err(_) => continue,
        };

        if pattern.matches(&relative) {
            matched.push(MatchedFile {
                local_path: entry.into_path(),
                relative_path: relative,
            });
        }
    }

    matched.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(matched)
}
