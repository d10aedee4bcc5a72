//! String cleanup helpers for text read off rendered pages.
//!
//! Rendered text arrives with stray whitespace, decorative parentheses and
//! locale-specific labels. Everything here is pure so it can be tested
//! without a browser.

use std::sync::LazyLock;

use regex::Regex;

/// Longest review snippet kept, in characters.
pub const REVIEW_SNIPPET_CHARS: usize = 200;

/// First run of digits with optional `,` thousands separators.
static REVIEW_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d(?:[\d,]*\d)?").expect("valid review count regex"));

/// Trims `raw` and treats an empty result as absent.
#[must_use]
pub fn clean_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Strips the parentheses the results feed wraps review counts in:
/// `"(1,204)"` -> `"1,204"`.
#[must_use]
pub fn strip_parens(raw: &str) -> Option<String> {
    clean_text(raw.trim().trim_matches(|c| c == '(' || c == ')'))
}

/// Pulls the review count out of an accessibility label such as
/// `"1,234 reviews"`.
#[must_use]
pub fn review_count_from_label(label: &str) -> Option<String> {
    REVIEW_COUNT_RE
        .find(label)
        .map(|m| m.as_str().to_owned())
}

/// Keeps the first [`REVIEW_SNIPPET_CHARS`] characters of a review.
#[must_use]
pub fn review_snippet(raw: &str) -> Option<String> {
    let text = clean_text(raw)?;
    Some(text.chars().take(REVIEW_SNIPPET_CHARS).collect())
}

/// Joins the non-empty entries with `", "`; absent when nothing is left.
#[must_use]
pub fn join_non_empty<I, S>(parts: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let kept: Vec<String> = parts
        .into_iter()
        .filter_map(|p| clean_text(p.as_ref()))
        .collect();
    if kept.is_empty() {
        None
    } else {
        Some(kept.join(", "))
    }
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
