// Rust guideline compliant 2026-10-18

//! Unit tests for catalog file loading.

use rental_core::{Catalog, Config, Error};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_is_empty_catalog() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let catalog = Catalog::new(temp_dir.path().join("listings.jsonl"));

    let listings = catalog.load_all().expect("Failed to load catalog");
    assert!(listings.is_empty());
}

#[test]
fn test_jsonl_skips_malformed_lines() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("listings.jsonl");
    let content = r#"{"id":"1","name":"Canon EOS R5","category":"Cameras","price":89.0}
{"id":"2","name":
{"id":"3","name":"Camping tent","rating":4.5}

"#;
    fs::write(&path, content).expect("Failed to write catalog");

    let listings = Catalog::new(&path).load_all().expect("Failed to load catalog");
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].price, Some(89.0));
    assert_eq!(listings[1].rating, Some(4.5));
    assert_eq!(listings[1].category, None);
}

#[test]
fn test_json_array_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("listings.json");
    fs::write(
        &path,
        r#"  [{"id":"1","name":"Drill"},{"id":"2","name":"Ladder","location":"Oslo"}]"#,
    )
    .expect("Failed to write catalog");

    let listings = Catalog::new(&path).load_all().expect("Failed to load catalog");
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[1].location.as_deref(), Some("Oslo"));
}

#[test]
fn test_invalid_listing_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("listings.jsonl");
    fs::write(&path, "{\"id\":\"1\",\"name\":\"Drill\",\"price\":-5.0}\n")
        .expect("Failed to write catalog");

    let err = Catalog::new(&path).load_all().unwrap_err();
    assert!(matches!(err, Error::InvalidListing(_)));
}

#[test]
fn test_config_file_loaded_from_dir() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(
        temp_dir.path().join("config.toml"),
        "max_suggestions = 8\nlog_level = \"debug\"\n",
    )
    .expect("Failed to write config");

    let config = Config::load(temp_dir.path()).expect("Failed to load config");
    assert_eq!(config.max_suggestions, 8);
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.debounce_ms, 300);
}
