//! Test utilities for the Makani Substring Index test suite.
//!
//! Shared proptest strategies and helpers used across the internal test
//! modules.

use proptest::prelude::*;

/// Strategy for generating indexable tokens (non-empty, password-like).
pub fn token_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9#$%()_\\-]{1,40}").unwrap()
}

/// Strategy for generating search keys (non-empty, short).
pub fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9#$%()_\\-]{1,8}").unwrap()
}

/// Returns every contiguous substring of a token, on char boundaries.
pub fn substrings_of(token: &str) -> Vec<String> {
    let chars: Vec<char> = token.chars().collect();
    let mut out = Vec::new();
    for start in 0..chars.len() {
        for end in (start + 1)..=chars.len() {
            out.push(chars[start..end].iter().collect());
        }
    }
    out
}
