// Rust guideline compliant 2026-10-18

//! Error types for the rental core library.

use crate::models::RentalStepId;
use thiserror::Error;

/// Result type alias for rental core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for rental core operations.
///
/// The flow gate and the search engine are total and never produce these;
/// they surface only at the edges (text parsing, file loading, runtime setup).
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid listing data.
    #[error("Invalid listing: {0}")]
    InvalidListing(String),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Sort key name is not recognized.
    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),

    /// Step identifier does not name a checkout step.
    #[error("Unknown rental step: {0}")]
    UnknownStep(String),

    /// Checkout step is not accessible yet.
    #[error("Rental step is locked: {0}")]
    StepLocked(RentalStepId),

    /// Invalid rental period.
    #[error("Invalid rental period: {0}")]
    InvalidPeriod(String),

    /// No async runtime available for scheduled work.
    #[error("Runtime error: {0}")]
    Runtime(String),
}
