// Rust guideline compliant 2026-10-18

//! Client-side catalog search.
//!
//! Filtering is a stable AND-of-substrings text match followed by the
//! structured predicates in `SearchFilters`. Ordering is never changed here;
//! see the `sort` module for per-screen ordering.

use crate::models::{Listing, SearchFilters};
use rayon::prelude::*;
use std::collections::HashSet;
use tracing::debug;

/// Default number of suggestions returned by `get_search_suggestions`.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Catalog size at which filtering switches to a parallel iterator.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1_000;

/// Filters listings by a free-text query and optional structured filters.
///
/// # Arguments
///
/// * `items` - Listings to filter
/// * `query` - Whitespace-separated terms; every term must appear
/// * `filters` - Optional structured predicates
///
/// # Returns
///
/// The matching listings in input order. An empty query with no filters
/// returns `items` untouched.
pub fn search_items(items: Vec<Listing>, query: &str, filters: Option<&SearchFilters>) -> Vec<Listing> {
    search_items_with_threshold(items, query, filters, DEFAULT_PARALLEL_THRESHOLD)
}

/// Like `search_items`, with an explicit parallelism threshold.
pub fn search_items_with_threshold(
    items: Vec<Listing>,
    query: &str,
    filters: Option<&SearchFilters>,
    parallel_threshold: usize,
) -> Vec<Listing> {
    let terms: Vec<String> = query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    if terms.is_empty() && filters.is_none() {
        return items;
    }

    let total = items.len();
    let predicate = |listing: &Listing| {
        matches_terms(listing, &terms) && filters.is_none_or(|f| matches_filters(listing, f))
    };

    let results: Vec<Listing> = if total >= parallel_threshold {
        items.into_par_iter().filter(|l| predicate(l)).collect()
    } else {
        items.into_iter().filter(|l| predicate(l)).collect()
    };

    debug!(total, matched = results.len(), terms = terms.len(), "catalog search");
    results
}

fn matches_terms(listing: &Listing, terms: &[String]) -> bool {
    if terms.is_empty() {
        return true;
    }
    let text = listing.searchable_text();
    terms.iter().all(|term| text.contains(term.as_str()))
}

fn matches_filters(listing: &Listing, filters: &SearchFilters) -> bool {
    if let Some(category) = filters.category.as_deref().filter(|c| !c.is_empty()) {
        match &listing.category {
            Some(value) if value.to_lowercase() == category.to_lowercase() => {}
            _ => return false,
        }
    }

    if let Some(location) = filters.location.as_deref().filter(|l| !l.is_empty()) {
        match &listing.location {
            Some(value) if value.to_lowercase().contains(&location.to_lowercase()) => {}
            _ => return false,
        }
    }

    if let Some(range) = filters.price_range {
        match listing.price {
            Some(price) if range.contains(price) => {}
            _ => return false,
        }
    }

    if let Some(min_rating) = filters.rating {
        match listing.rating {
            Some(rating) if rating >= min_rating => {}
            _ => return false,
        }
    }

    true
}

/// Suggests completions for the last term of `query`.
///
/// # Arguments
///
/// * `items` - Listings whose searchable text supplies candidate words
/// * `query` - Text typed so far
/// * `max_suggestions` - Upper bound on returned words
///
/// # Returns
///
/// Up to `max_suggestions` distinct words that start with the last query
/// term and are longer than it, in the order first encountered.
pub fn get_search_suggestions(items: &[Listing], query: &str, max_suggestions: usize) -> Vec<String> {
    let query = query.to_lowercase();
    let Some(last_term) = query.split_whitespace().last() else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut suggestions = Vec::new();

    for listing in items {
        for word in listing.searchable_text().split_whitespace() {
            if suggestions.len() >= max_suggestions {
                return suggestions;
            }
            if word.starts_with(last_term) && word.len() > last_term.len() && seen.insert(word.to_string()) {
                suggestions.push(word.to_string());
            }
        }
    }

    suggestions.truncate(max_suggestions);
    suggestions
}
