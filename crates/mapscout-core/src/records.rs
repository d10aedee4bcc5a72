//! Scraped record types and the summary/detail merge.
//!
//! Every attribute a page may or may not expose is an `Option<String>`; an
//! absent value never stops sibling fields from being filled. The `"N/A"`
//! sentinel only appears when a record is rendered for export.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Placeholder rendered for a field that exists on a record but has no value.
pub const SENTINEL: &str = "N/A";

/// One search-feed item as it appears in the result list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummaryRecord {
    pub name: Option<String>,
    /// Link to the place's own page; the key for the detail phase.
    pub url: Option<String>,
    pub rating: Option<String>,
    /// Review count shown next to the rating, parentheses stripped.
    pub reviews_count: Option<String>,
}

impl SummaryRecord {
    /// Fields in export order.
    #[must_use]
    pub fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("name", self.name.clone()),
            Field::new("url", self.url.clone()),
            Field::new("rating", self.rating.clone()),
            Field::new("reviews_count", self.reviews_count.clone()),
        ]
    }

    /// Display label for progress logging.
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }
}

/// Everything read from a single place page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlaceDetails {
    pub name: Option<String>,
    pub rating: Option<String>,
    pub total_reviews: Option<String>,
    pub price_range: Option<String>,
    pub cuisine_type: Option<String>,
    pub description: Option<String>,
    pub service_options: Option<String>,
    pub address: Option<String>,
    pub current_status: Option<String>,
    pub hours_summary: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub plus_code: Option<String>,
    pub menu_link: Option<String>,
    pub reservation_link: Option<String>,
    pub has_popular_times: bool,
    pub accessibility: Option<String>,
    pub recent_review: Option<String>,
    pub detail_url: String,
}

impl PlaceDetails {
    /// An empty page record for `detail_url`.
    #[must_use]
    pub fn new(detail_url: impl Into<String>) -> Self {
        Self {
            detail_url: detail_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn fields(&self) -> Vec<Field> {
        let popular = if self.has_popular_times { "Yes" } else { "No" };
        vec![
            Field::new("name", self.name.clone()),
            Field::new("rating", self.rating.clone()),
            Field::new("total_reviews", self.total_reviews.clone()),
            Field::new("price_range", self.price_range.clone()),
            Field::new("cuisine_type", self.cuisine_type.clone()),
            Field::new("description", self.description.clone()),
            Field::new("service_options", self.service_options.clone()),
            Field::new("address", self.address.clone()),
            Field::new("current_status", self.current_status.clone()),
            Field::new("hours_summary", self.hours_summary.clone()),
            Field::new("phone", self.phone.clone()),
            Field::new("website", self.website.clone()),
            Field::new("plus_code", self.plus_code.clone()),
            Field::new("menu_link", self.menu_link.clone()),
            Field::new("reservation_link", self.reservation_link.clone()),
            Field::new("has_popular_times", Some(popular.to_owned())),
            Field::new("accessibility", self.accessibility.clone()),
            Field::new("recent_review", self.recent_review.clone()),
            Field::new("detail_url", Some(self.detail_url.clone())),
        ]
    }
}

/// Result of visiting one place page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DetailRecord {
    Extracted(PlaceDetails),
    /// The page could not be loaded at all. Carries only the URL and the
    /// failure description; every other detail field is absent.
    Failed { detail_url: String, error: String },
}

impl DetailRecord {
    #[must_use]
    pub fn failed(detail_url: impl Into<String>, error: impl Into<String>) -> Self {
        Self::Failed {
            detail_url: detail_url.into(),
            error: error.into(),
        }
    }

    #[must_use]
    pub fn detail_url(&self) -> &str {
        match self {
            Self::Extracted(details) => &details.detail_url,
            Self::Failed { detail_url, .. } => detail_url,
        }
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    #[must_use]
    pub fn fields(&self) -> Vec<Field> {
        match self {
            Self::Extracted(details) => details.fields(),
            Self::Failed { detail_url, error } => vec![
                Field::new("detail_url", Some(detail_url.clone())),
                Field::new("error", Some(error.clone())),
            ],
        }
    }
}

/// A named, possibly-absent value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: Option<String>,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A flattened record ready for export: an ordered set of unique field names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompleteRecord {
    fields: Vec<Field>,
}

impl CompleteRecord {
    /// Builds a record from arbitrary fields. A repeated name follows the
    /// merge rule: a later value replaces an earlier one only when present.
    #[must_use]
    pub fn from_fields(fields: impl IntoIterator<Item = Field>) -> Self {
        let mut record = Self::default();
        for field in fields {
            record.overlay(field);
        }
        record
    }

    /// Shallow merge of a summary and its detail page.
    ///
    /// For every key, the detail value wins when it has one; otherwise the
    /// summary value is kept. Keys only the detail record carries are
    /// appended in its field order, valueless or not.
    #[must_use]
    pub fn merge(summary: &SummaryRecord, detail: &DetailRecord) -> Self {
        Self::from_fields(summary.fields().into_iter().chain(detail.fields()))
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// The value stored under `name`, or `None` when the key is missing or
    /// the value is absent.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .and_then(|f| f.value.as_deref())
    }

    fn overlay(&mut self, field: Field) {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => {
                if field.value.is_some() {
                    existing.value = field.value;
                }
            }
            None => self.fields.push(field),
        }
    }
}

impl From<&SummaryRecord> for CompleteRecord {
    fn from(summary: &SummaryRecord) -> Self {
        Self::from_fields(summary.fields())
    }
}

impl Serialize for CompleteRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in &self.fields {
            map.serialize_entry(&field.name, &field.value)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "records_test.rs"]
mod tests;
