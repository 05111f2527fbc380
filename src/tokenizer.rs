//! Text normalization for word extraction.
//!
//! A single fixed rule set: anything that is not a word character, an
//! apostrophe, or whitespace becomes a space, runs of whitespace collapse to
//! one space, and the trimmed result splits into tokens on single spaces.
//! Pure functions only; every section's word list goes through here.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w'\s]+").expect("valid pattern"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid pattern"));

/// Cleaned text together with its ordered word tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    pub words: Vec<String>,
}

/// Normalize raw text into cleaned text plus an ordered token list.
///
/// Empty or punctuation-only input yields an empty token list, never a
/// one-element list containing an empty string.
pub fn normalize(raw: &str) -> Normalized {
    let stripped = NON_WORD.replace_all(raw, " ");
    let collapsed = WHITESPACE.replace_all(&stripped, " ");
    let text = collapsed.trim().to_string();
    let words = if text.is_empty() {
        Vec::new()
    } else {
        text.split(' ').map(str::to_string).collect()
    };
    Normalized { text, words }
}
