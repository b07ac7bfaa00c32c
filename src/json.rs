// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Searching dynamic JSON records by named keys.
//!
//! Callers with typed items build their own [`FieldSpec`] schema; callers
//! holding `serde_json::Value` records (rows fetched straight from a remote
//! store, say) can search by top-level key names instead. Every named key
//! gets uniform weight 1.0.

use crate::rank::search;
use crate::types::FieldSpec;
use serde_json::Value;

/// Search an array of JSON records on the named top-level keys, best-first.
///
/// Thin wrapper over [`search`]: each key becomes a unit-weight field whose
/// extractor reads `record[key]`. Only matching records come back, in rank
/// order.
///
/// ```
/// use riffle::search_by_keys;
/// use serde_json::json;
///
/// let records = vec![
///     json!({"name": "Elite Construction Co.", "balance": 1250.5}),
///     json!({"name": "Budget Plumbing", "balance": 89.0}),
/// ];
/// let hits = search_by_keys(&records, "elite", &["name", "balance"]);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0]["name"], "Elite Construction Co.");
/// ```
pub fn search_by_keys<'a>(records: &'a [Value], query: &str, keys: &[&str]) -> Vec<&'a Value> {
    let fields: Vec<FieldSpec<Value>> = keys
        .iter()
        .map(|&key| {
            let name = key.to_owned();
            FieldSpec::new(key, move |record: &Value| value_text(record.get(&name)))
        })
        .collect();
    search(records, query, &fields)
}

/// Display text for a JSON leaf.
///
/// Missing keys and non-scalar values search as empty text; numbers and
/// booleans search as their display form, so `"1250.5"` finds the balance
/// field the same way a formatted UI column would.
pub(crate) fn value_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        _ => String::new(),
    }
}
