use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One book-reading event, independent of the source format that produced it.
///
/// Field tags match the JSON database written by earlier versions of the
/// tool (`notes`, `google_books_id`, `cover_url`), so existing files keep
/// loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub author: String,
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub series_volume: Option<u32>,
    #[serde(default)]
    pub year: Option<i32>,
    /// 1-12, only meaningful when `year` is set
    #[serde(default)]
    pub month: Option<u8>,
    #[serde(default, rename = "notes")]
    pub note: Option<String>,

    // Bibliographic metadata, filled by enrichment or carried from a
    // preparsed source.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "google_books_id")]
    pub bibliographic_id: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub published_date: Option<String>,
    #[serde(default)]
    pub page_count: Option<u32>,
    #[serde(default)]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default, rename = "cover_url")]
    pub cover_reference: Option<String>,
}

impl CanonicalRecord {
    pub fn new(author: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Sort key: unknown year/month order after every known value.
    pub fn read_order(&self) -> (i32, u8) {
        (
            self.year.unwrap_or(i32::MAX),
            self.month.unwrap_or(u8::MAX),
        )
    }

    pub fn has_description(&self) -> bool {
        is_present(&self.description)
    }

    pub fn has_cover(&self) -> bool {
        is_present(&self.cover_reference)
    }
}

/// A string field counts as set when it holds something besides whitespace.
pub fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}
