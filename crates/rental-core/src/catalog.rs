// Rust guideline compliant 2026-10-18

//! Catalog file loading.
//!
//! Listings are read from JSON Lines, one listing per line. A file whose
//! first non-blank character is `[` is read as a single JSON array instead.

use crate::{Listing, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Read-only source of listings backed by a file.
#[derive(Debug, Clone)]
pub struct Catalog {
    path: PathBuf,
}

impl Catalog {
    /// Creates a catalog for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every listing from the catalog file.
    ///
    /// A missing file yields an empty catalog. Malformed JSON lines are
    /// skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - A JSON array file is malformed
    /// - A listing fails validation
    pub fn load_all(&self) -> Result<Vec<Listing>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let listings = if content.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<Listing>>(&content)?
        } else {
            parse_lines(&content)
        };

        for listing in &listings {
            listing.validate()?;
        }

        debug!(path = %self.path.display(), count = listings.len(), "catalog loaded");
        Ok(listings)
    }
}

fn parse_lines(content: &str) -> Vec<Listing> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(number, line)| match serde_json::from_str::<Listing>(line) {
            Ok(listing) => Some(listing),
            Err(e) => {
                warn!(line = number + 1, error = %e, "skipping malformed catalog line");
                None
            }
        })
        .collect()
}
