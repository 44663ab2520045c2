// Rust guideline compliant 2026-10-18

//! Command implementations for the rentals CLI.

pub mod flow;
pub mod search;
pub mod suggest;
