// Rust guideline compliant 2026-10-18

//! Output formatting module for the rentals CLI.
//!
//! This module provides functionality for formatting listings, suggestions
//! and checkout progress in various output formats (JSON, table, plain text).

use crate::commands::flow::FlowReport;
use rental_core::Listing;
use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Output formatter trait.
///
/// Defines the interface for formatting command results in different output formats.
pub trait OutputFormatter {
    /// Formats a list of listings for display.
    fn format_listings(&self, listings: &[Listing]) -> String;

    /// Formats search suggestions for display.
    fn format_suggestions(&self, suggestions: &[String]) -> String;

    /// Formats checkout step progress for display.
    fn format_flow(&self, report: &FlowReport) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

fn optional_number(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_string())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// JSON output formatter.
///
/// Formats results as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_listings(&self, listings: &[Listing]) -> String {
        let output = json!({
            "listings": listings,
            "total": listings.len(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize listings" }).to_string())
    }

    fn format_suggestions(&self, suggestions: &[String]) -> String {
        json!({ "suggestions": suggestions }).to_string()
    }

    fn format_flow(&self, report: &FlowReport) -> String {
        serde_json::to_string_pretty(report)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize flow" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats results as human-readable tables.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_listings(&self, listings: &[Listing]) -> String {
        if listings.is_empty() {
            return "No listings found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Name", "Category", "Location", "Price", "Rating"]);

        for listing in listings {
            builder.push_record(vec![
                listing.id.clone(),
                listing.name.clone(),
                listing.category.clone().unwrap_or_default(),
                listing.location.clone().unwrap_or_default(),
                optional_number(listing.price),
                optional_number(listing.rating),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_suggestions(&self, suggestions: &[String]) -> String {
        if suggestions.is_empty() {
            return "No suggestions.".to_string();
        }
        suggestions.join("\n")
    }

    fn format_flow(&self, report: &FlowReport) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["#", "Step", "Completed", "Accessible", "Navigable", ""]);

        for (position, step) in report.steps.iter().enumerate() {
            let marker = if step.id == report.current { "<" } else { "" };
            builder.push_record(vec![
                position.to_string(),
                step.id.to_string(),
                yes_no(step.is_completed).to_string(),
                yes_no(step.is_accessible).to_string(),
                yes_no(step.can_navigate).to_string(),
                marker.to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        format!(
            "{}\nCurrent: {} (index {})\nCan go back: {}",
            table,
            report.current,
            report.current_index,
            yes_no(report.can_go_back)
        )
    }

    fn format_error(&self, error: &str) -> String {
        if self.use_color {
            let mut buffer = Buffer::ansi();
            let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
            let _ = write!(buffer, "Error: ");
            let _ = buffer.reset();
            let _ = write!(buffer, "{}", error);
            String::from_utf8_lossy(buffer.as_slice()).to_string()
        } else {
            format!("Error: {}", error)
        }
    }
}

/// Plain text output formatter.
///
/// Formats results as simple plain text without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_listings(&self, listings: &[Listing]) -> String {
        if listings.is_empty() {
            return "No listings found.".to_string();
        }

        let mut output = String::new();
        for listing in listings {
            output.push_str(&format!(
                "{} {} {}\n",
                listing.id,
                optional_number(listing.price),
                listing.name
            ));
        }
        output
    }

    fn format_suggestions(&self, suggestions: &[String]) -> String {
        suggestions.join("\n")
    }

    fn format_flow(&self, report: &FlowReport) -> String {
        let mut output = String::new();
        for step in &report.steps {
            output.push_str(&format!(
                "{} {} {} {}\n",
                step.id,
                u8::from(step.is_completed),
                u8::from(step.is_accessible),
                u8::from(step.can_navigate)
            ));
        }
        output.push_str(&format!("current {}\n", report.current));
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (ignored for JSON)
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter::new(use_color)),
    }
}
