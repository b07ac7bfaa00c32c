//! Scenario tests for the ranking pass: strategy interplay, aggregation,
//! options, and provenance over a realistic small corpus.

mod common;

use common::{client_fields, name_only, sample_clients};
use riffle::{rank, search, FieldSpec, SearchOptions};

// ============================================================================
// EMPTY QUERY
// ============================================================================

#[test]
fn empty_query_returns_every_item_in_original_order() {
    let clients = sample_clients();
    let results = rank(&clients, "", &client_fields(), &SearchOptions::default());

    assert_eq!(results.len(), clients.len());
    for (result, client) in results.iter().zip(&clients) {
        assert_eq!(result.item, client);
        assert_eq!(result.score, 1.0);
        assert!(result.matched_fields.is_empty());
    }
}

#[test]
fn whitespace_and_punctuation_queries_are_pass_through_too() {
    let clients = sample_clients();
    for query in ["   ", "?!...", " \t\n"] {
        let results = rank(&clients, query, &client_fields(), &SearchOptions::default());
        assert_eq!(results.len(), clients.len(), "query {:?}", query);
    }
}

// ============================================================================
// STRATEGY INTERPLAY
// ============================================================================

#[test]
fn exact_match_outranks_contains_on_equal_weight() {
    let items = vec![
        "Elite Construction Co.".to_string(),
        "Elite".to_string(),
        "Unrelated Drywall".to_string(),
    ];
    let results = rank(&items, "elite", &name_only(), &SearchOptions::default());

    assert_eq!(results.len(), 2);
    // The exact hit takes the single-term maximum for unit weight
    assert_eq!(results[0].item, "Elite");
    assert_eq!(results[0].score, 1.0);
    assert!(results[1].score < 1.0);
}

#[test]
fn contains_score_tracks_term_coverage_of_the_field() {
    let clients = sample_clients();
    let results = rank(&clients, "Elite", &client_fields(), &SearchOptions::default());

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item.name, "John Smith");
    // "elite" covers 5 of "elite construction co"'s 21 chars, on the
    // weight-1.5 company field
    let expected = 1.5 * (0.8 + 0.2 * 5.0 / 21.0);
    assert!((results[0].score - expected).abs() < 1e-9);
    assert_eq!(results[0].matched_fields, ["company"]);
}

#[test]
fn acronym_matches_initials_across_fields() {
    let clients = sample_clients();
    let results = rank(&clients, "js", &client_fields(), &SearchOptions::default());

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item.name, "John Smith");
    // Acronym scores 0.5, doubled by the name weight; the email field also
    // matches but loses the per-term contest
    assert!((results[0].score - 1.0).abs() < 1e-9);
    assert_eq!(results[0].matched_fields, ["name"]);
}

#[test]
fn fuzzy_hit_ranks_below_exact_hit() {
    let items = vec![
        "Smith".to_string(),
        "Smyth".to_string(),
        "Jones".to_string(),
    ];
    let results = rank(&items, "smith", &name_only(), &SearchOptions::default());

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].item, "Smith");
    assert_eq!(results[0].score, 1.0);
    assert_eq!(results[1].item, "Smyth");
    // One substitution over five chars: similarity 0.8, capped by 0.6
    assert!((results[1].score - 0.48).abs() < 1e-9);
}

// ============================================================================
// MULTI-TERM AGGREGATION
// ============================================================================

#[test]
fn fuller_term_coverage_ranks_strictly_higher() {
    let items = vec![
        "Kitchen cabinets".to_string(),
        "Kitchen remodel".to_string(),
    ];
    let results = rank(&items, "kitchen remodel", &name_only(), &SearchOptions::default());

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].item, "Kitchen remodel");
    assert!(results[0].score > results[1].score);
}

#[test]
fn require_all_terms_excludes_partial_matches() {
    let items = vec![
        "Kitchen remodel with luxury finishes".to_string(),
        "Kitchen remodel on a budget".to_string(),
    ];
    let strict = SearchOptions {
        require_all_terms: true,
        ..SearchOptions::default()
    };
    let results = rank(&items, "kitchen remodel luxury", &name_only(), &strict);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item, "Kitchen remodel with luxury finishes");

    // Relaxed mode keeps the partial match, discounted by coverage
    let relaxed = rank(
        &items,
        "kitchen remodel luxury",
        &name_only(),
        &SearchOptions::default(),
    );
    assert_eq!(relaxed.len(), 2);
}

#[test]
fn winning_field_keys_are_deduplicated() {
    let clients = sample_clients();
    let results = rank(
        &clients,
        "john smith",
        &client_fields(),
        &SearchOptions::default(),
    );

    assert_eq!(results[0].item.name, "John Smith");
    // Both terms win on the name field; it is reported once
    assert_eq!(results[0].matched_fields, ["name"]);
}

// ============================================================================
// OPTIONS
// ============================================================================

#[test]
fn max_results_truncates_after_sorting() {
    let items = vec![
        "Kitchen cabinets".to_string(),
        "Kitchen remodel".to_string(),
        "Kitchen".to_string(),
        "Outdoor kitchen".to_string(),
    ];
    let capped = SearchOptions {
        max_results: Some(2),
        ..SearchOptions::default()
    };
    let full = rank(&items, "kitchen", &name_only(), &SearchOptions::default());
    let truncated = rank(&items, "kitchen", &name_only(), &capped);

    assert_eq!(truncated.len(), 2);
    assert_eq!(truncated[0].item, full[0].item);
    assert_eq!(truncated[1].item, full[1].item);
}

#[test]
fn raising_the_floor_never_adds_results() {
    let clients = sample_clients();
    let permissive = SearchOptions {
        min_score: 0.0,
        ..SearchOptions::default()
    };
    let strict = SearchOptions {
        min_score: 0.9,
        ..SearchOptions::default()
    };
    let low = rank(&clients, "rivera", &client_fields(), &permissive);
    let high = rank(&clients, "rivera", &client_fields(), &strict);

    assert!(high.len() <= low.len());
    for result in &high {
        assert!(result.score >= 0.9);
    }
}

#[test]
fn weight_scales_the_final_score_linearly() {
    let items = vec!["Elite Construction Co.".to_string()];
    let unit = vec![FieldSpec::new("name", |s: &String| s.clone())];
    let doubled = vec![FieldSpec::weighted("name", 2.0, |s: &String| s.clone())];

    let base = rank(&items, "elite", &unit, &SearchOptions::default());
    let boosted = rank(&items, "elite", &doubled, &SearchOptions::default());
    assert!((boosted[0].score - 2.0 * base[0].score).abs() < 1e-9);
}

// ============================================================================
// FIELD EXTRACTION
// ============================================================================

#[test]
fn formatted_numeric_fields_are_searchable() {
    let clients = sample_clients();
    let results = rank(
        &clients,
        "1250.50",
        &client_fields(),
        &SearchOptions::default(),
    );

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item.name, "John Smith");
    assert_eq!(results[0].matched_fields, ["balance"]);
}

// ============================================================================
// CONVENIENCE WRAPPERS
// ============================================================================

#[test]
fn search_projects_ranked_items() {
    let clients = sample_clients();
    let hits = search(&clients, "plumbing", &client_fields());

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Jane Doe");
}

#[cfg(feature = "json")]
#[test]
fn search_by_keys_over_json_records() {
    use serde_json::json;

    let records = vec![
        json!({"name": "John Smith", "company": "Elite Construction Co."}),
        json!({"name": "Jane Doe", "company": "Budget Plumbing"}),
    ];
    let hits = riffle::search_by_keys(&records, "elite", &["name", "company"]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["name"], "John Smith");
}

// ============================================================================
// RESULT SHAPE
// ============================================================================

#[test]
fn results_serialize_with_borrowed_items() {
    let items = vec!["Elite".to_string()];
    let results = rank(&items, "elite", &name_only(), &SearchOptions::default());
    let value = serde_json::to_value(&results).unwrap();

    assert_eq!(value[0]["item"], "Elite");
    assert_eq!(value[0]["score"], 1.0);
    assert_eq!(value[0]["matched_fields"][0], "name");
}
