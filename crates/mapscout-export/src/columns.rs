//! Column selection and ordering.

use mapscout_core::CompleteRecord;

/// Columns that lead the sheet, in this order, when any record carries them.
pub const PREFERRED_COLUMNS: &[&str] = &[
    "name",
    "rating",
    "total_reviews",
    "reviews_count",
    "price_range",
    "cuisine_type",
    "description",
    "service_options",
    "address",
    "current_status",
    "hours_summary",
    "phone",
    "website",
    "menu_link",
    "reservation_link",
    "plus_code",
    "accessibility",
    "has_popular_times",
    "recent_review",
    "url",
    "detail_url",
];

/// Sheet columns for `records`: the preferred columns that appear in at
/// least one record, then every other column in first-seen order.
#[must_use]
pub fn column_order(records: &[CompleteRecord]) -> Vec<String> {
    let mut seen: Vec<&str> = Vec::new();
    for record in records {
        for field in record.fields() {
            if !seen.contains(&field.name.as_str()) {
                seen.push(&field.name);
            }
        }
    }

    let preferred = PREFERRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| seen.contains(col));
    let extra = seen
        .iter()
        .copied()
        .filter(|col| !PREFERRED_COLUMNS.contains(col));

    preferred.chain(extra).map(str::to_owned).collect()
}
