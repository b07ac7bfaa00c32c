// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The prioritized strategy chain deciding whether one field matches one term.
//!
//! Strategies run in a fixed order and the first hit wins: exact → contains →
//! starts-with → fuzzy → acronym. The short-circuit is deliberate. A substring
//! hit is preferred over a coincidental fuzzy hit that would score lower, so
//! later strategies are never consulted once an earlier one matches.
//!
//! One quirk is preserved on purpose: the starts-with tier is shadowed by
//! contains, because every prefix of a string is also a substring of it and
//! contains runs first. The tier keeps its own function and its 0.7 score so
//! the ranking rules stay what they have always been, but through
//! [`match_field`] it is dead code. See `starts_with`.

use crate::levenshtein::similarity;
use crate::scoring::{
    ACRONYM_SCORE, CONTAINS_BASE_SCORE, CONTAINS_COVERAGE_BONUS, EXACT_SCORE,
    FUZZY_SCORE_CEILING, FUZZY_SIMILARITY_THRESHOLD, MIN_ACRONYM_TERM_CHARS, PREFIX_SCORE,
};
use crate::text::normalize;
use serde::{Deserialize, Serialize};

/// Which strategy produced a match. Declaration order is evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatchStrategy {
    /// Normalized field equals normalized term.
    Exact,
    /// Normalized field contains the term as a substring.
    Contains,
    /// Normalized field starts with the term. Shadowed by `Contains`.
    StartsWith,
    /// Similarity ratio at or above the fuzzy threshold.
    Fuzzy,
    /// Term characters claim initials of successive field words.
    Acronym,
}

/// A successful field-vs-term match: the winning strategy and its score in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMatch {
    pub strategy: MatchStrategy,
    pub score: f64,
}

type StrategyFn = fn(&str, &str) -> Option<f64>;

/// Evaluation order. First hit wins.
const STRATEGY_CHAIN: &[(MatchStrategy, StrategyFn)] = &[
    (MatchStrategy::Exact, exact),
    (MatchStrategy::Contains, contains),
    (MatchStrategy::StartsWith, starts_with),
    (MatchStrategy::Fuzzy, fuzzy),
    (MatchStrategy::Acronym, acronym),
];

/// Decide whether `field_text` matches `term`, and how well.
///
/// Both inputs are raw text; normalization happens here. Returns the first
/// strategy in the chain that accepts the pair, or `None` when none does.
/// A term that normalizes to nothing matches nothing (tokenized terms are
/// never empty; the guard keeps the contains coverage ratio well-defined for
/// direct callers).
pub fn match_field(field_text: &str, term: &str) -> Option<FieldMatch> {
    let field = normalize(field_text);
    let term = normalize(term);
    if term.is_empty() {
        return None;
    }

    for (strategy, apply) in STRATEGY_CHAIN {
        if let Some(score) = apply(&field, &term) {
            return Some(FieldMatch {
                strategy: *strategy,
                score,
            });
        }
    }
    None
}

fn exact(field: &str, term: &str) -> Option<f64> {
    (field == term).then_some(EXACT_SCORE)
}

/// Substring hit. Terms covering more of the field score closer to 1.0; a
/// short term inside a long field stays near the 0.8 base.
fn contains(field: &str, term: &str) -> Option<f64> {
    if !field.contains(term) {
        return None;
    }
    let coverage = term.chars().count() as f64 / field.chars().count() as f64;
    Some(CONTAINS_BASE_SCORE + CONTAINS_COVERAGE_BONUS * coverage)
}

/// Prefix hit at a flat 0.7.
///
/// Dead through [`match_field`]: a field that starts with the term also
/// contains it, so the contains tier has already fired. Kept as a distinct
/// tier to preserve the original ranking rules; exercised directly by the
/// tests below.
fn starts_with(field: &str, term: &str) -> Option<f64> {
    field.starts_with(term).then_some(PREFIX_SCORE)
}

/// Whole-field similarity, gated at the fuzzy threshold and capped by the
/// fuzzy ceiling so typo matches never outrank substring matches.
fn fuzzy(field: &str, term: &str) -> Option<f64> {
    let ratio = similarity(field, term);
    (ratio >= FUZZY_SIMILARITY_THRESHOLD).then(|| ratio * FUZZY_SCORE_CEILING)
}

/// Initialism hit: walk the term's characters, each claiming the first
/// character of a later field word; the word cursor advances past a claimed
/// word and never backs up. "js" matches "john smith", "sj" does not.
/// Single-character terms are excluded - they would match far too much.
fn acronym(field: &str, term: &str) -> Option<f64> {
    if term.chars().count() < MIN_ACRONYM_TERM_CHARS {
        return None;
    }

    let words: Vec<&str> = field.split(' ').collect();
    let mut cursor = 0;
    'term: for ch in term.chars() {
        while cursor < words.len() {
            let word = words[cursor];
            cursor += 1;
            if word.chars().next() == Some(ch) {
                continue 'term;
            }
        }
        return None;
    }
    Some(ACRONYM_SCORE)
}
