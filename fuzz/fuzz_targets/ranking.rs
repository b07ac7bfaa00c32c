// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ranking invariants.
//!
//! Results must come back sorted, capped, above the floor, and identical
//! across repeated passes. The fuzzer supplies the item collection, the
//! query, and the options.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use riffle::{rank, tokenize, FieldSpec, SearchOptions};

#[derive(Debug, Arbitrary)]
struct RankInput {
    items: Vec<String>,
    query: String,
    /// Score floor in hundredths, so the fuzzer cannot supply NaN
    floor_hundredths: u8,
    cap: Option<u8>,
    require_all_terms: bool,
}

fuzz_target!(|input: RankInput| {
    // Cap the workload; the pass is O(items × terms × fields)
    let items: Vec<String> = input
        .items
        .into_iter()
        .take(32)
        .map(|item| item.chars().take(64).collect())
        .collect();
    let query: String = input.query.chars().take(64).collect();

    let options = SearchOptions {
        min_score: f64::from(input.floor_hundredths % 101) / 100.0,
        max_results: input.cap.map(usize::from),
        require_all_terms: input.require_all_terms,
    };
    let fields = vec![FieldSpec::new("text", |item: &String| item.clone())];

    let results = rank(&items, &query, &fields, &options);

    // The empty query returns every item regardless of floor and cap
    let pass_through = tokenize(&query).is_empty();

    // INVARIANT 1: the cap is respected on real queries
    if let (false, Some(cap)) = (pass_through, options.max_results) {
        assert!(results.len() <= cap, "cap {} exceeded: {}", cap, results.len());
    }

    // INVARIANT 2: scores are finite, descending, and above the floor -
    // except for the pass-through, which pins every score to 1.0
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score, "results not sorted");
    }
    for result in &results {
        assert!(result.score.is_finite());
        if pass_through {
            assert_eq!(result.score, 1.0);
        } else {
            assert!(result.score >= options.min_score);
        }
    }

    // INVARIANT 3: the empty query passes every item through
    if pass_through {
        assert_eq!(results.len(), items.len());
    }

    // INVARIANT 4: deterministic across passes
    let again = rank(&items, &query, &fields, &options);
    assert_eq!(results.len(), again.len());
    for (a, b) in results.iter().zip(&again) {
        assert!(std::ptr::eq(a.item, b.item));
        assert_eq!(a.score, b.score);
    }
});
