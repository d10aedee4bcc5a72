//! Locale resolution from free-text search queries.
//!
//! The browser's accept-language and the search page's `hl` parameter are
//! derived from well-known place names in the query, so a search for
//! "ramen in tokyo" renders Japanese-language listings.

/// Locale used when the query names no known location.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Location substring to locale tag. Checked in order; the first match wins.
const LOCATION_LOCALES: &[(&str, &str)] = &[
    ("new york", "en-US"),
    ("tokyo", "ja-JP"),
    ("paris", "fr-FR"),
    ("berlin", "de-DE"),
    ("madrid", "es-ES"),
    ("rome", "it-IT"),
    ("beijing", "zh-CN"),
    ("seoul", "ko-KR"),
    ("moscow", "ru-RU"),
    ("london", "en-GB"),
    ("sydney", "en-AU"),
    ("mumbai", "hi-IN"),
    ("dubai", "ar-AE"),
];

/// Resolve the locale tag for a search query.
///
/// Matching is a case-insensitive substring test, so `"Sushi in TOKYO"`
/// resolves to `"ja-JP"`. Returns [`DEFAULT_LOCALE`] when nothing matches.
#[must_use]
pub fn resolve_locale(query: &str) -> &'static str {
    let lower = query.to_lowercase();
    LOCATION_LOCALES
        .iter()
        .find(|(location, _)| lower.contains(location))
        .map_or(DEFAULT_LOCALE, |(_, locale)| locale)
}

/// Base language of a locale tag: `"ja-JP"` -> `"ja"`.
#[must_use]
pub fn base_language(locale: &str) -> &str {
    locale.split('-').next().unwrap_or(locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokyo_resolves_to_japanese() {
        assert_eq!(resolve_locale("restaurants in tokyo"), "ja-JP");
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(resolve_locale("Cafés in PARIS"), "fr-FR");
    }

    #[test]
    fn unknown_location_falls_back_to_default() {
        assert_eq!(resolve_locale("tacos in oaxaca"), DEFAULT_LOCALE);
        assert_eq!(resolve_locale(""), DEFAULT_LOCALE);
    }

    #[test]
    fn first_listed_location_wins() {
        // "new york" precedes "london" in the table.
        assert_eq!(resolve_locale("london broil in new york"), "en-US");
    }

    #[test]
    fn substring_match_inside_longer_words() {
        assert_eq!(resolve_locale("pizza near romeoville"), "it-IT");
    }

    #[test]
    fn base_language_strips_region() {
        assert_eq!(base_language("ja-JP"), "ja");
        assert_eq!(base_language("en-GB"), "en");
    }

    #[test]
    fn base_language_without_region_is_unchanged() {
        assert_eq!(base_language("de"), "de");
    }
}
