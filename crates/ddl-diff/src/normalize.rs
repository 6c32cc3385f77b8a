//! Canonical forms of column definitions for comparison.
//!
//! Dumps written by different tools or versions disagree on spacing, so runs
//! of spaces are collapsed before two definitions are compared. Text inside
//! single quotes or backticks is a literal (an ENUM value, a default, an
//! identifier) and is left exactly as written.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Matches a quoted segment (an unterminated quote runs to the end of the
/// text) or a run of two or more spaces.
static SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"'[^']*(?:'|$)|`[^`]*(?:`|$)| {2,}").expect("Invalid segment regex")
});

/// Returns the canonical form of a column definition.
///
/// Collapses runs of two or more spaces to one outside single-quoted and
/// backtick-quoted segments, and trims the result. Idempotent.
#[must_use]
pub fn normalize_definition(definition: &str) -> String {
    SEGMENT
        .replace_all(definition.trim(), |caps: &Captures<'_>| {
            let segment = &caps[0];
            if segment.starts_with(' ') {
                " ".to_string()
            } else {
                segment.to_string()
            }
        })
        .trim()
        .to_string()
}

/// Returns `true` if two definitions are equal after normalization,
/// ignoring case.
#[must_use]
pub fn definitions_equal(old: &str, new: &str) -> bool {
    normalize_definition(old).to_lowercase() == normalize_definition(new).to_lowercase()
}
