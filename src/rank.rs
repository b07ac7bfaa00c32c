// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranking pass: tokenize once, score every item, filter, sort, cap.
//!
//! This is a linear re-scan per query - O(items × terms × fields) matcher
//! calls with no index and no retained state. That is the right trade for a
//! UI-facing filter over hundreds to low thousands of in-memory records;
//! anything bigger wants a real index, which is a different engine.
//!
//! Scoring per item: each term takes the best weighted field score across the
//! schema, per-term scores are averaged over the term count, and the average
//! is scaled by the coverage factor (or gated on full coverage when
//! `require_all_terms` is set). The pass never mutates the items and borrows
//! them into the results.

use crate::matcher::match_field;
use crate::scoring::{compare_scores, coverage_factor};
use crate::text::tokenize;
use crate::types::{FieldSpec, SearchOptions, SearchResult};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Rank `items` against `query` over the caller's field schema.
///
/// Results come back score-descending, filtered by `options.min_score` and
/// capped at `options.max_results`. Equal scores keep their input order. An
/// empty query - or one that normalizes to nothing - is a pass-through, not
/// a zero-result filter: every item comes back with score 1.0, no matched
/// fields, in its original position.
///
/// # Examples
///
/// ```
/// use riffle::{rank, FieldSpec, SearchOptions};
///
/// struct Client { name: String, city: String }
///
/// let clients = vec![
///     Client { name: "Elite Construction Co.".into(), city: "Austin".into() },
///     Client { name: "Budget Plumbing".into(), city: "Dallas".into() },
/// ];
/// let fields = vec![
///     FieldSpec::weighted("name", 2.0, |c: &Client| c.name.clone()),
///     FieldSpec::new("city", |c: &Client| c.city.clone()),
/// ];
///
/// let results = rank(&clients, "elite", &fields, &SearchOptions::default());
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].item.name, "Elite Construction Co.");
/// assert_eq!(results[0].matched_fields, ["name"]);
/// ```
pub fn rank<'a, T>(
    items: &'a [T],
    query: &str,
    fields: &[FieldSpec<T>],
    options: &SearchOptions,
) -> Vec<SearchResult<'a, T>> {
    let terms = tokenize(query);
    if terms.is_empty() {
        return pass_through(items);
    }

    let kept: Vec<SearchResult<'a, T>> = items
        .iter()
        .filter_map(|item| score_item(item, &terms, fields, options))
        .collect();
    finish(kept, options)
}

/// [`rank`] with the per-item scoring spread across rayon workers.
///
/// Observable behavior is identical to `rank`, including tie order: scoring
/// preserves input order and the final sort is stable. Worth it from a few
/// thousand items or expensive extractors upward; below that the sequential
/// pass wins.
#[cfg(feature = "parallel")]
pub fn rank_parallel<'a, T: Sync>(
    items: &'a [T],
    query: &str,
    fields: &[FieldSpec<T>],
    options: &SearchOptions,
) -> Vec<SearchResult<'a, T>> {
    let terms = tokenize(query);
    if terms.is_empty() {
        return pass_through(items);
    }

    let kept: Vec<SearchResult<'a, T>> = items
        .par_iter()
        .filter_map(|item| score_item(item, &terms, fields, options))
        .collect();
    finish(kept, options)
}

/// Rank with default options and keep only the items.
///
/// The convenience entry point for callers that want a filtered, best-first
/// collection and nothing else. Uniform weighting falls out of building the
/// schema with [`FieldSpec::new`].
///
/// ```
/// use riffle::{search, FieldSpec};
///
/// let names = vec!["John Smith".to_string(), "Jane Doe".to_string()];
/// let fields = vec![FieldSpec::new("name", |s: &String| s.clone())];
/// assert_eq!(search(&names, "js", &fields), vec![&names[0]]);
/// ```
pub fn search<'a, T>(items: &'a [T], query: &str, fields: &[FieldSpec<T>]) -> Vec<&'a T> {
    rank(items, query, fields, &SearchOptions::default())
        .into_iter()
        .map(|result| result.item)
        .collect()
}

fn pass_through<T>(items: &[T]) -> Vec<SearchResult<'_, T>> {
    items
        .iter()
        .map(|item| SearchResult {
            item,
            score: 1.0,
            matched_fields: Vec::new(),
        })
        .collect()
}

/// Score one item against the tokenized query, or rule it out.
///
/// Each term contributes its best weighted field score; the winning field's
/// key is recorded for provenance. Exclusion paths: no term matched,
/// `require_all_terms` unmet, or the final score under the floor.
fn score_item<'a, T>(
    item: &'a T,
    terms: &[String],
    fields: &[FieldSpec<T>],
    options: &SearchOptions,
) -> Option<SearchResult<'a, T>> {
    let mut total_score = 0.0;
    let mut matched_terms = 0usize;
    let mut matched_fields: Vec<String> = Vec::new();

    for term in terms {
        let mut best: Option<(f64, &str)> = None;
        for field in fields {
            let Some(hit) = match_field(&field.text(item), term) else {
                continue;
            };
            let weighted = hit.score * field.weight();
            if best.map_or(true, |(score, _)| weighted > score) {
                best = Some((weighted, field.key()));
            }
        }

        if let Some((score, key)) = best {
            total_score += score;
            matched_terms += 1;
            if !matched_fields.iter().any(|recorded| recorded == key) {
                matched_fields.push(key.to_owned());
            }
        }
    }

    if matched_terms == 0 {
        return None;
    }

    let term_count = terms.len();
    let average = total_score / term_count as f64;
    let score = if options.require_all_terms {
        if matched_terms < term_count {
            return None;
        }
        average
    } else {
        average * coverage_factor(matched_terms, term_count)
    };

    if score < options.min_score {
        return None;
    }

    Some(SearchResult {
        item,
        score,
        matched_fields,
    })
}

fn finish<'a, T>(
    mut results: Vec<SearchResult<'a, T>>,
    options: &SearchOptions,
) -> Vec<SearchResult<'a, T>> {
    // Stable sort: equal scores keep collection order
    results.sort_by(|a, b| compare_scores(a.score, b.score));
    if let Some(cap) = options.max_results {
        results.truncate(cap);
    }
    results
}
