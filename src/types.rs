// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a ranking pass.
//!
//! A [`FieldSpec`] names one searchable field of an item type: a reporting
//! key, a weight, and an extractor producing the text to search. The schema
//! for an item type is whatever slice of specs the caller hands to `rank` -
//! it lives per call, not in any registry, and must not change while a pass
//! is running.
//!
//! [`SearchResult`] borrows the matched item rather than cloning it; results
//! are created fresh by each `rank` call and never cached across calls.
//! [`SearchOptions`] is plain per-call configuration with no process-wide
//! counterpart.

use crate::scoring::DEFAULT_MIN_SCORE;
use serde::{Deserialize, Serialize};

type Extractor<T> = Box<dyn Fn(&T) -> String + Send + Sync>;

/// One searchable field: reporting key, weight, and text extractor.
///
/// The extractor is a pure function of the item. It may read nested state or
/// format computed values - a currency field formatted as display text is as
/// searchable as a name. The key is used only to report which fields matched,
/// never for lookup.
pub struct FieldSpec<T> {
    key: String,
    weight: f64,
    extract: Extractor<T>,
}

impl<T> FieldSpec<T> {
    /// Field with the default weight of 1.0.
    pub fn new(
        key: impl Into<String>,
        extract: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self::weighted(key, 1.0, extract)
    }

    /// Field with an explicit weight.
    ///
    /// The weight scales this field's contribution and is deliberately not
    /// validated: a zero weight makes the field contribute nothing, a
    /// negative weight counts against the item. Typical values sit between
    /// 0.5 and 2.0.
    pub fn weighted(
        key: impl Into<String>,
        weight: f64,
        extract: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            weight,
            extract: Box::new(extract),
        }
    }

    /// The reporting key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The weight applied to this field's match scores.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Extract the searchable text for `item`.
    pub fn text(&self, item: &T) -> String {
        (self.extract)(item)
    }
}

impl<T> std::fmt::Debug for FieldSpec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldSpec")
            .field("key", &self.key)
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}

/// A ranked hit: the borrowed item, its final score, and the keys of the
/// fields that produced the winning per-term matches.
///
/// `matched_fields` is a deduplicated set; its order carries no meaning.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult<'a, T> {
    /// The original item, borrowed from the caller's collection.
    pub item: &'a T,
    /// Final aggregated score. Non-negative for non-negative weights.
    pub score: f64,
    /// Keys of the fields that won at least one term.
    pub matched_fields: Vec<String>,
}

/// Per-call ranking configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Items whose final score falls below this are dropped. Default 0.3.
    pub min_score: f64,
    /// Truncate the ranked list to this many entries. Default unlimited.
    pub max_results: Option<usize>,
    /// Only keep items on which every query term matched some field.
    /// Default false: partial matches stay, discounted by term coverage.
    pub require_all_terms: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            max_results: None,
            require_all_terms: false,
        }
    }
}
