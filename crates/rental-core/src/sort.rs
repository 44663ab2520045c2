// Rust guideline compliant 2026-10-18

//! Ordering helpers applied by screens after searching.

use crate::models::Listing;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Sort order offered by catalog screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Keep search order.
    #[default]
    Relevance,
    /// Cheapest first.
    PriceLowToHigh,
    /// Most expensive first.
    PriceHighToLow,
    /// Best rated first.
    RatingHighToLow,
    /// Alphabetical by name, case-insensitive.
    Name,
}

impl FromStr for SortKey {
    type Err = crate::Error;

    fn from_str(value: &str) -> crate::Result<Self> {
        match value.to_lowercase().as_str() {
            "relevance" => Ok(SortKey::Relevance),
            "price" | "price_asc" | "price_low_to_high" => Ok(SortKey::PriceLowToHigh),
            "price_desc" | "price_high_to_low" => Ok(SortKey::PriceHighToLow),
            "rating" | "rating_high_to_low" => Ok(SortKey::RatingHighToLow),
            "name" => Ok(SortKey::Name),
            _ => Err(crate::Error::InvalidSortKey(value.to_string())),
        }
    }
}

/// Sorts listings in place.
///
/// The sort is stable. Listings missing the sort field keep their relative
/// order and go after every listing that has it.
pub fn sort_listings(listings: &mut [Listing], key: SortKey) {
    match key {
        SortKey::Relevance => {}
        SortKey::PriceLowToHigh => listings.sort_by(|a, b| missing_last(a.price, b.price, false)),
        SortKey::PriceHighToLow => listings.sort_by(|a, b| missing_last(a.price, b.price, true)),
        SortKey::RatingHighToLow => listings.sort_by(|a, b| missing_last(a.rating, b.rating, true)),
        SortKey::Name => listings.sort_by_cached_key(|l| l.name.to_lowercase()),
    }
}

fn missing_last(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            let ord = a.total_cmp(&b);
            if descending {
                ord.reverse()
            } else {
                ord
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
