// Rust guideline compliant 2026-10-18

//! Unit tests for catalog search and suggestions.

use rental_core::{get_search_suggestions, search_items, Listing, PriceRange, SearchFilters};

fn camera(id: &str, name: &str, price: Option<f64>) -> Listing {
    Listing {
        id: id.to_string(),
        name: name.to_string(),
        category: Some("Cameras".to_string()),
        description: None,
        location: Some("Berlin Mitte".to_string()),
        price,
        rating: None,
    }
}

fn ids(listings: &[Listing]) -> Vec<&str> {
    listings.iter().map(|l| l.id.as_str()).collect()
}

#[test]
fn test_empty_query_returns_input() {
    let items = vec![camera("1", "Canon EOS R5", Some(3899.0))];
    let results = search_items(items.clone(), "", None);
    assert_eq!(results, items);
}

#[test]
fn test_all_terms_must_match() {
    let items = vec![
        Listing::new("1", "Canon EOS R5"),
        Listing::new("2", "Sony A7 IV"),
    ];
    let results = search_items(items, "canon r5", None);
    assert_eq!(ids(&results), vec!["1"]);
}

#[test]
fn test_terms_match_across_fields() {
    let items = vec![camera("1", "Canon EOS R5", None), Listing::new("2", "Canon tripod")];
    let results = search_items(items, "CANON berlin", None);
    assert_eq!(ids(&results), vec!["1"]);
}

#[test]
fn test_substring_not_word_match() {
    let items = vec![Listing::new("1", "Camping stove")];
    assert_eq!(search_items(items, "amp", None).len(), 1);
}

#[test]
fn test_price_range_inclusive_and_excludes_missing() {
    let items = vec![
        camera("a", "Body A", Some(899.0)),
        camera("b", "Body B", Some(1999.0)),
        camera("c", "Body C", Some(2499.0)),
        camera("d", "Body D", None),
        camera("e", "Body E", Some(2000.0)),
    ];
    let filters = SearchFilters {
        price_range: Some(PriceRange { min: 1000.0, max: 2000.0 }),
        ..SearchFilters::default()
    };
    let results = search_items(items, "", Some(&filters));
    assert_eq!(ids(&results), vec!["b", "e"]);
}

#[test]
fn test_category_exact_case_insensitive() {
    let mut lens = Listing::new("2", "50mm lens");
    lens.category = Some("Camera Lenses".to_string());
    let items = vec![camera("1", "Canon EOS R5", None), lens, Listing::new("3", "Tent")];

    let filters = SearchFilters {
        category: Some("cameras".to_string()),
        ..SearchFilters::default()
    };
    let results = search_items(items, "", Some(&filters));
    assert_eq!(ids(&results), vec!["1"]);
}

#[test]
fn test_location_substring() {
    let mut elsewhere = camera("2", "Sony A7 IV", None);
    elsewhere.location = Some("Hamburg".to_string());
    let items = vec![camera("1", "Canon EOS R5", None), elsewhere];

    let filters = SearchFilters {
        location: Some("MITTE".to_string()),
        ..SearchFilters::default()
    };
    let results = search_items(items, "", Some(&filters));
    assert_eq!(ids(&results), vec!["1"]);
}

#[test]
fn test_rating_minimum_excludes_missing() {
    let mut good = Listing::new("1", "Drill");
    good.rating = Some(4.5);
    let mut exact = Listing::new("2", "Saw");
    exact.rating = Some(4.0);
    let mut poor = Listing::new("3", "Sander");
    poor.rating = Some(3.9);
    let unrated = Listing::new("4", "Ladder");

    let filters = SearchFilters {
        rating: Some(4.0),
        ..SearchFilters::default()
    };
    let results = search_items(vec![good, exact, poor, unrated], "", Some(&filters));
    assert_eq!(ids(&results), vec!["1", "2"]);
}

#[test]
fn test_text_and_filters_combined() {
    let items = vec![
        camera("1", "Canon EOS R5", Some(150.0)),
        camera("2", "Canon EOS R6", Some(90.0)),
        camera("3", "Sony A7 IV", Some(120.0)),
    ];
    let filters = SearchFilters {
        price_range: Some(PriceRange { min: 100.0, max: 200.0 }),
        ..SearchFilters::default()
    };
    let results = search_items(items, "canon", Some(&filters));
    assert_eq!(ids(&results), vec!["1"]);
}

#[test]
fn test_suggestions_prefix_and_longer() {
    let items = vec![
        Listing {
            description: Some("cam camera camcorder".to_string()),
            ..Listing::new("1", "Camera bag")
        },
        Listing::new("2", "Campervan"),
    ];
    let suggestions = get_search_suggestions(&items, "cam", 5);
    assert_eq!(suggestions, vec!["camera", "camcorder", "campervan"]);
}

#[test]
fn test_suggestions_use_last_term() {
    let items = vec![Listing::new("1", "Tripod travel trolley")];
    let suggestions = get_search_suggestions(&items, "canon TR", 5);
    assert_eq!(suggestions, vec!["tripod", "travel", "trolley"]);
}

#[test]
fn test_suggestions_capped() {
    let items: Vec<Listing> = (0..10)
        .map(|i| Listing::new(i.to_string(), format!("camera{}", i)))
        .collect();
    let suggestions = get_search_suggestions(&items, "cam", 5);
    assert_eq!(suggestions.len(), 5);
    assert_eq!(suggestions[0], "camera0");
    assert_eq!(suggestions[4], "camera4");
}
