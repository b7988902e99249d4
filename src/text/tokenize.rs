//! Word tokenization
//!
//! Utilities for splitting free-form query text into lowercase word
//! tokens.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"[a-z0-9]+").unwrap();
}

/// Split text into lowercase word tokens, in order of appearance
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
