//! Weighted multi-field fuzzy search and ranking for in-memory collections.
//!
//! riffle is the search box behind a data table: hand it the records already
//! in memory, a free-text query, and a schema saying which fields matter and
//! how much, and it hands back a score-sorted, threshold-filtered subset with
//! provenance for highlighting. No index, no persistence, no retained state -
//! every call is a fresh linear scan, which is exactly right for hundreds to
//! low thousands of records.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────┐    ┌──────────────┐    ┌─────────────┐    ┌───────────┐
//! │  text.rs  │───▶│  matcher.rs  │───▶│  scoring.rs │───▶│  rank.rs  │
//! │ (normalize│    │ (strategy    │    │ (constants, │    │ (rank,    │
//! │  tokenize)│    │  chain)      │    │  coverage)  │    │  search)  │
//! └───────────┘    └──────┬───────┘    └─────────────┘    └───────────┘
//!                         │
//!                         ▼
//!                  ┌──────────────┐
//!                  │levenshtein.rs│
//!                  │ (distance,   │
//!                  │  similarity) │
//!                  └──────────────┘
//! ```
//!
//! The matcher tries strategies in a fixed order - exact, contains,
//! starts-with, fuzzy, acronym - and the first hit wins, so a genuine
//! substring match is never displaced by a coincidental fuzzy one. The
//! ranker takes the best weighted field per term, averages across terms,
//! and rewards items covering more of the query.
//!
//! # Usage
//!
//! ```
//! use riffle::{rank, FieldSpec, SearchOptions};
//!
//! struct Client { name: String, company: String }
//!
//! let clients = vec![
//!     Client { name: "John Smith".into(), company: "Elite Construction Co.".into() },
//!     Client { name: "Jane Doe".into(), company: "Budget Plumbing".into() },
//! ];
//! let fields = vec![
//!     FieldSpec::weighted("name", 2.0, |c: &Client| c.name.clone()),
//!     FieldSpec::weighted("company", 1.5, |c: &Client| c.company.clone()),
//! ];
//!
//! let results = rank(&clients, "elite", &fields, &SearchOptions::default());
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].item.name, "John Smith");
//! assert_eq!(results[0].matched_fields, ["company"]);
//!
//! // The empty query is a pass-through, not a zero-result filter
//! let everyone = rank(&clients, "", &fields, &SearchOptions::default());
//! assert_eq!(everyone.len(), 2);
//! ```
//!
//! # Concurrency
//!
//! A ranking pass is pure and synchronous: it borrows the items, acquires no
//! locks, and retains nothing. Concurrent calls over shared read-only
//! collections need no synchronization. With the `parallel` feature,
//! [`rank_parallel`] spreads per-item scoring across rayon workers with
//! identical observable ordering.

// Module declarations
mod levenshtein;
mod matcher;
mod rank;
pub mod scoring;
mod text;
mod types;

#[cfg(feature = "json")]
mod json;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use levenshtein::{levenshtein, similarity};
pub use matcher::{match_field, FieldMatch, MatchStrategy};
pub use rank::{rank, search};
pub use text::{normalize, tokenize};
pub use types::{FieldSpec, SearchOptions, SearchResult};

#[cfg(feature = "parallel")]
pub use rank::rank_parallel;

#[cfg(feature = "json")]
pub use json::search_by_keys;
