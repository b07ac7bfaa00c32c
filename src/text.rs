//! Text canonicalization: the normalizer and the query tokenizer.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for comparison: lowercase, strip punctuation, collapse whitespace.
///
/// Every code point that is not a letter, digit, or whitespace becomes a single
/// space, so `"Co."` and `"co"` compare equal. Runs of whitespace collapse to
/// one space and the result is trimmed. Deterministic and pure.
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks, so "café" and "cafe" compare equal
/// 3. Lowercase
/// 4. Replace non-alphanumeric code points with spaces
/// 5. Collapse whitespace
///
/// # Algorithm (without unicode-normalization, e.g. WASM)
///
/// Steps 3-5 only. Assumes input is pre-normalized or ASCII.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    let stripped: String = value.nfd().filter(|c| !is_combining_mark(*c)).collect();
    fold(&stripped)
}

/// Lightweight normalization for WASM (no unicode-normalization dependency).
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    fold(value)
}

fn fold(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
/// Examples: ́ (acute), ̄ (macron), ̣ (dot below)
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Split a raw query into normalized, non-empty search terms.
///
/// The whole query goes through [`normalize`] first, then splits on the single
/// space delimiter. Order is preserved. An empty or all-punctuation query
/// yields no terms.
pub fn tokenize(query: &str) -> Vec<String> {
    normalize(query)
        .split(' ')
        .filter(|term| !term.is_empty())
        .map(str::to_owned)
        .collect()
}
