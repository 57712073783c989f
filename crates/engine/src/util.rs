//! Internal text helpers shared by the normalizers.
//!
//! These utilities are **not** part of the public API.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// NFKC form: full-width digits, ligatures and compatibility spaces become
/// their plain equivalents.
pub(crate) fn nfkc(input: &str) -> String {
    input.nfkc().collect()
}

/// Joins the whitespace-separated tokens of `input` with single spaces.
pub(crate) fn collapse_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for token in input.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

/// Decomposes `input` and drops every combining mark (`é` → `e`).
pub(crate) fn strip_diacritics(input: &str) -> String {
    input.nfd().filter(|ch| !is_combining_mark(*ch)).collect()
}
