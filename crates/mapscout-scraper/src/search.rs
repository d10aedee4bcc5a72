//! Search URL construction.

use mapscout_core::base_language;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Search endpoint; the encoded query is appended as a path segment.
pub const SEARCH_ENDPOINT: &str = "https://www.google.com/maps/search/";

/// Builds the results URL for `query`, asking for the page in `locale`'s
/// base language.
///
/// Spaces encode as `+`, everything else non-alphanumeric is
/// percent-encoded: `"restaurants in tokyo"` with `"ja-JP"` becomes
/// `.../maps/search/restaurants+in+tokyo?hl=ja`.
#[must_use]
pub fn search_url(query: &str, locale: &str) -> String {
    let encoded = utf8_percent_encode(query.trim(), NON_ALPHANUMERIC)
        .to_string()
        .replace("%20", "+");
    format!("{SEARCH_ENDPOINT}{encoded}?hl={}", base_language(locale))
}
