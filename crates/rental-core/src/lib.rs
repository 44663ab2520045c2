// Rust guideline compliant 2026-10-18

//! Rental Core Library
//!
//! This crate provides the pure logic behind the rental marketplace screens:
//! - Data models (RentalStepId, RentalStep, Listing, SearchFilters)
//! - Checkout step gating (RentalFlowGate) and session state (RentalSession)
//! - Catalog search, suggestions and sorting
//! - Trailing-edge debouncing for search-as-you-type
//! - Catalog file loading, configuration, and error types

pub mod catalog;
pub mod config;
pub mod debounce;
pub mod error;
pub mod flow;
pub mod models;
pub mod search;
pub mod session;
pub mod sort;

pub use catalog::Catalog;
pub use config::Config;
pub use debounce::Debouncer;
pub use error::{Error, Result};
pub use flow::RentalFlowGate;
pub use models::{Listing, PriceRange, RentalStep, RentalStepId, SearchFilters};
pub use search::{get_search_suggestions, search_items, search_items_with_threshold};
pub use session::{Quote, RentalPeriod, RentalSession};
pub use sort::{sort_listings, SortKey};
