// Rust guideline compliant 2026-10-18

//! Implementation of the `rentals suggest` command.

use crate::OutputFormatter;
use anyhow::Result;
use rental_core::{get_search_suggestions, Catalog, Config};
use std::path::Path;

/// Prints completions for the last word of `query`.
///
/// `limit` falls back to the configured `max_suggestions`.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub fn execute(
    catalog_path: &Path,
    query: &str,
    limit: Option<usize>,
    config: &Config,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let listings = Catalog::new(catalog_path).load_all()?;
    let limit = limit.unwrap_or(config.max_suggestions);
    let suggestions = get_search_suggestions(&listings, query, limit);
    println!("{}", formatter.format_suggestions(&suggestions));
    Ok(())
}
