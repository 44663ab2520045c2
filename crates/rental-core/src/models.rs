// Rust guideline compliant 2026-10-18

//! Core data models for rental checkout and catalog search.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a step in the rental checkout sequence.
///
/// Variants are declared in sequence order; `index()` is the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RentalStepId {
    /// Viewing the item to rent.
    ItemDetail,
    /// Choosing rental start and end dates.
    RentalPeriod,
    /// Reviewing the order summary.
    ReviewOrder,
    /// Paying for the rental.
    Payment,
    /// Receipt shown after payment. Terminal.
    Receipt,
}

impl RentalStepId {
    /// All steps in sequence order.
    pub const ALL: [RentalStepId; 5] = [
        RentalStepId::ItemDetail,
        RentalStepId::RentalPeriod,
        RentalStepId::ReviewOrder,
        RentalStepId::Payment,
        RentalStepId::Receipt,
    ];

    /// Position of the step in the sequence.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The step immediately following this one, if any.
    #[must_use]
    pub fn next(self) -> Option<RentalStepId> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// The step immediately preceding this one, if any.
    #[must_use]
    pub fn previous(self) -> Option<RentalStepId> {
        self.index()
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Returns true for the final step of the sequence.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Textual identifier used by screens and routes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RentalStepId::ItemDetail => "item-detail",
            RentalStepId::RentalPeriod => "rental-period",
            RentalStepId::ReviewOrder => "review-order",
            RentalStepId::Payment => "payment",
            RentalStepId::Receipt => "receipt",
        }
    }
}

impl fmt::Display for RentalStepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RentalStepId {
    type Err = crate::Error;

    fn from_str(value: &str) -> crate::Result<Self> {
        Self::ALL
            .into_iter()
            .find(|step| step.as_str() == value)
            .ok_or_else(|| crate::Error::UnknownStep(value.to_string()))
    }
}

/// Progress flags for one checkout step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalStep {
    /// Which step this is.
    pub id: RentalStepId,
    /// Set once the user finishes the step's action. Never cleared except by reset.
    pub is_completed: bool,
    /// True once the preceding step is completed, or for the first step.
    pub is_accessible: bool,
}

impl RentalStep {
    /// Creates a step in its start-of-session state.
    #[must_use]
    pub fn initial(id: RentalStepId) -> Self {
        Self {
            id,
            is_completed: false,
            is_accessible: id.index() == 0,
        }
    }
}

/// A listing record the search engine reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique listing identifier.
    pub id: String,
    /// Display name of the item.
    pub name: String,
    /// Catalog category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Where the item can be picked up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Daily rental price, currency-agnostic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Average review rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl Listing {
    /// Creates a listing with only the required fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
            description: None,
            location: None,
            price: None,
            rating: None,
        }
    }

    /// Lowercased text the free-text query is matched against.
    ///
    /// Joins name, category, description and location with single spaces,
    /// leaving out absent or empty fields.
    #[must_use]
    pub fn searchable_text(&self) -> String {
        [
            Some(self.name.as_str()),
            self.category.as_deref(),
            self.description.as_deref(),
            self.location.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
    }

    /// Validates the listing data.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - ID or name is empty
    /// - Price or rating is negative or not a finite number
    pub fn validate(&self) -> crate::Result<()> {
        if self.id.trim().is_empty() {
            return Err(crate::Error::InvalidListing(
                "Listing ID cannot be empty".to_string(),
            ));
        }

        if self.name.trim().is_empty() {
            return Err(crate::Error::InvalidListing(format!(
                "Listing {} has an empty name",
                self.id
            )));
        }

        if let Some(price) = self.price {
            if !price.is_finite() || price < 0.0 {
                return Err(crate::Error::InvalidListing(format!(
                    "Listing {} has invalid price {}",
                    self.id, price
                )));
            }
        }

        if let Some(rating) = self.rating {
            if !rating.is_finite() || rating < 0.0 {
                return Err(crate::Error::InvalidListing(format!(
                    "Listing {} has invalid rating {}",
                    self.id, rating
                )));
            }
        }

        Ok(())
    }
}

/// Inclusive numeric price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lowest accepted price.
    pub min: f64,
    /// Highest accepted price.
    pub max: f64,
}

impl PriceRange {
    /// Returns true if `price` lies within the bounds.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Structured predicates applied after text matching.
///
/// Each present field is ANDed with the others. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Exact, case-insensitive category.
    #[serde(default)]
    pub category: Option<String>,
    /// Case-insensitive substring of the location.
    #[serde(default)]
    pub location: Option<String>,
    /// Inclusive price bounds. Listings without a price never match.
    #[serde(default)]
    pub price_range: Option<PriceRange>,
    /// Minimum rating. Listings without a rating never match.
    #[serde(default)]
    pub rating: Option<f64>,
}

impl SearchFilters {
    /// Returns true if no predicate would be applied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category.as_deref().is_none_or(str::is_empty)
            && self.location.as_deref().is_none_or(str::is_empty)
            && self.price_range.is_none()
            && self.rating.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_sequence_links() {
        assert_eq!(RentalStepId::ItemDetail.previous(), None);
        assert_eq!(
            RentalStepId::ItemDetail.next(),
            Some(RentalStepId::RentalPeriod)
        );
        assert_eq!(RentalStepId::Receipt.next(), None);
        assert!(RentalStepId::Receipt.is_terminal());
        assert_eq!(RentalStepId::Payment.index(), 3);
    }

    #[test]
    fn test_step_text_round_trip() {
        for step in RentalStepId::ALL {
            assert_eq!(step.to_string().parse::<RentalStepId>().unwrap(), step);
        }
        assert!("checkout".parse::<RentalStepId>().is_err());
    }

    #[test]
    fn test_step_serde_uses_kebab_case() {
        let json = serde_json::to_string(&RentalStepId::ReviewOrder).unwrap();
        assert_eq!(json, "\"review-order\"");
    }

    #[test]
    fn test_searchable_text_skips_missing_fields() {
        let mut listing = Listing::new("1", "Canon EOS R5");
        listing.location = Some("Berlin".to_string());
        listing.description = Some(String::new());
        assert_eq!(listing.searchable_text(), "canon eos r5 berlin");
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let mut listing = Listing::new("1", "Tent");
        listing.price = Some(-1.0);
        assert!(listing.validate().is_err());
    }

    #[test]
    fn test_filters_with_blank_strings_are_empty() {
        let filters = SearchFilters {
            category: Some(String::new()),
            ..SearchFilters::default()
        };
        assert!(filters.is_empty());
    }
}
