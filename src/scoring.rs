// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring constants and aggregation math.
//!
//! # Key invariant: strategy dominance
//!
//! The per-strategy score ranges are arranged so that a genuine substring hit
//! always outranks a fuzzy hit on the same field:
//!
//! ```text
//! EXACT   = 1.0
//! CONTAINS ∈ [0.8, 1.0)     base 0.8 + up to 0.2 coverage bonus
//! PREFIX  = 0.7             shadowed by CONTAINS, see matcher docs
//! FUZZY   ∈ [0.42, 0.6]     similarity × 0.6, gated at similarity ≥ 0.7
//! ACRONYM = 0.5
//! ```
//!
//! The fuzzy ceiling (0.6) sits below the prefix score and the contains base,
//! so no amount of similarity lets a fuzzy hit outrank either. Chain priority,
//! not score, decides between fuzzy and acronym: the matcher consults fuzzy
//! first.
//!
//! Aggregation across terms lives here too: an item's per-term scores are
//! averaged, then scaled by the coverage factor `0.7 + 0.3 × matched/total`
//! so items matching more of the query rank higher even when no strategy or
//! weight distinguishes them.

use std::cmp::Ordering;

/// Score for a normalized-equal field/term pair.
pub const EXACT_SCORE: f64 = 1.0;

/// Base score for a substring hit.
pub const CONTAINS_BASE_SCORE: f64 = 0.8;

/// Bonus range on top of [`CONTAINS_BASE_SCORE`], scaled by how much of the
/// field the term covers. A term spanning the whole field approaches 1.0;
/// a short term in a long field stays near the base.
pub const CONTAINS_COVERAGE_BONUS: f64 = 0.2;

/// Score for a prefix hit. Unreachable in practice: every prefix is also a
/// substring, and the contains strategy is consulted first.
pub const PREFIX_SCORE: f64 = 0.7;

/// Minimum similarity ratio before a fuzzy hit counts at all.
pub const FUZZY_SIMILARITY_THRESHOLD: f64 = 0.7;

/// Fuzzy hits score `similarity ×` this ceiling, keeping them strictly below
/// substring and prefix hits.
pub const FUZZY_SCORE_CEILING: f64 = 0.6;

/// Score for an initialism hit ("js" against "john smith").
pub const ACRONYM_SCORE: f64 = 0.5;

/// Terms shorter than this never match as acronyms.
pub const MIN_ACRONYM_TERM_CHARS: usize = 2;

/// Default floor below which ranked items are dropped.
pub const DEFAULT_MIN_SCORE: f64 = 0.3;

/// Fixed share of an item's averaged score that does not depend on coverage.
pub const COVERAGE_BASE: f64 = 0.7;

/// Share of an item's averaged score scaled by the fraction of query terms
/// that matched.
pub const COVERAGE_BONUS: f64 = 0.3;

/// Coverage factor for an item that matched `matched` of `total` query terms.
///
/// `0.7 + 0.3 × matched/total`, so full coverage multiplies by exactly 1.0
/// and partial coverage discounts the averaged score.
pub fn coverage_factor(matched: usize, total: usize) -> f64 {
    COVERAGE_BASE + COVERAGE_BONUS * (matched as f64 / total as f64)
}

/// Descending-score comparator for ranked results.
///
/// Used with a stable sort, so equal scores keep their input order. NaN never
/// arises from the scoring pipeline; if a caller-supplied weight produces one
/// anyway, it compares as equal rather than poisoning the sort.
pub(crate) fn compare_scores(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
