// Rust guideline compliant 2026-10-18

//! Implementation of the `rentals search` command.
//!
//! Filters a catalog file by free text and structured filters, then sorts
//! the matches for display.

use crate::OutputFormatter;
use anyhow::{bail, Result};
use rental_core::{
    search_items_with_threshold, sort_listings, Catalog, Config, Listing, PriceRange,
    SearchFilters, SortKey,
};
use std::path::Path;

/// Filter arguments collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct SearchArgs {
    /// Exact category.
    pub category: Option<String>,
    /// Location substring.
    pub location: Option<String>,
    /// Lower price bound.
    pub min_price: Option<f64>,
    /// Upper price bound.
    pub max_price: Option<f64>,
    /// Minimum rating.
    pub min_rating: Option<f64>,
    /// Sort key name.
    pub sort: Option<String>,
}

impl SearchArgs {
    /// Builds structured filters, or `None` when no filter flag was given.
    ///
    /// A single price bound is completed with 0 or infinity.
    ///
    /// # Errors
    ///
    /// Returns an error if the minimum price exceeds the maximum.
    pub fn filters(&self) -> Result<Option<SearchFilters>> {
        let price_range = match (self.min_price, self.max_price) {
            (None, None) => None,
            (min, max) => {
                let range = PriceRange {
                    min: min.unwrap_or(0.0),
                    max: max.unwrap_or(f64::INFINITY),
                };
                if range.min > range.max {
                    bail!("--min-price {} is above --max-price {}", range.min, range.max);
                }
                Some(range)
            }
        };

        let filters = SearchFilters {
            category: self.category.clone(),
            location: self.location.clone(),
            price_range,
            rating: self.min_rating,
        };

        Ok(if filters.is_empty() { None } else { Some(filters) })
    }
}

/// Runs a search and returns the sorted matches.
///
/// # Errors
///
/// Returns an error if the filters or sort key are invalid.
pub fn run(listings: Vec<Listing>, query: &str, args: &SearchArgs, config: &Config) -> Result<Vec<Listing>> {
    let filters = args.filters()?;
    let sort_key = match &args.sort {
        Some(name) => name.parse::<SortKey>()?,
        None => SortKey::default(),
    };

    let mut results =
        search_items_with_threshold(listings, query, filters.as_ref(), config.parallel_threshold);
    sort_listings(&mut results, sort_key);
    Ok(results)
}

/// Executes the `search` command against a catalog file.
///
/// # Errors
///
/// Returns an error if:
/// - The catalog cannot be loaded
/// - The filters or sort key are invalid
pub fn execute(
    catalog_path: &Path,
    query: &str,
    args: &SearchArgs,
    config: &Config,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let listings = Catalog::new(catalog_path).load_all()?;
    let results = run(listings, query, args, config)?;
    println!("{}", formatter.format_listings(&results));
    Ok(())
}
