// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WASM bindings for browser-side record filtering.
//!
//! The engine's natural habitat is a search box over a few hundred records
//! already sitting in the page. These bindings expose the text utilities
//! plus a JSON-records entry point; typed Rust callers should use the crate
//! API directly.

use crate::types::SearchOptions;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

/// Normalize text the way the engine does before comparing.
#[wasm_bindgen]
pub fn normalize(text: &str) -> String {
    crate::text::normalize(text)
}

/// Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::levenshtein::levenshtein(a, b)
}

/// Similarity ratio in [0, 1] derived from edit distance.
#[wasm_bindgen]
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    crate::levenshtein::similarity(a, b)
}

/// One ranked record crossing back to JS.
#[derive(Serialize)]
struct RankedRecord {
    record: Value,
    score: f64,
    matched_fields: Vec<String>,
}

/// Rank an array of JSON records against `query` on the named keys.
///
/// `records` is a JS array of objects; `keys` names the top-level keys to
/// search, each at uniform weight 1.0. `options` is an optional object with
/// `min_score`, `max_results`, `require_all_terms` - missing fields take
/// their defaults. Returns an array of `{record, score, matched_fields}`
/// sorted best-first.
#[wasm_bindgen]
pub fn search_records(
    records: JsValue,
    query: &str,
    keys: Vec<String>,
    options: JsValue,
) -> Result<JsValue, JsValue> {
    let records: Vec<Value> = serde_wasm_bindgen::from_value(records).map_err(to_js_error)?;
    let options: SearchOptions = if options.is_undefined() || options.is_null() {
        SearchOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(to_js_error)?
    };

    let fields: Vec<crate::FieldSpec<Value>> = keys
        .into_iter()
        .map(|key| {
            let name = key.clone();
            crate::FieldSpec::new(key, move |record: &Value| {
                crate::json::value_text(record.get(&name))
            })
        })
        .collect();

    let ranked: Vec<RankedRecord> = crate::rank(&records, query, &fields, &options)
        .into_iter()
        .map(|result| RankedRecord {
            record: result.item.clone(),
            score: result.score,
            matched_fields: result.matched_fields,
        })
        .collect();

    serde_wasm_bindgen::to_value(&ranked).map_err(to_js_error)
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
