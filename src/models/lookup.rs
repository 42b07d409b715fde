use serde::{Deserialize, Serialize};

/// Metadata returned by a bibliographic lookup. Absent fields stay `None`
/// (or empty for `categories`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub bibliographic_id: Option<String>,
    pub description: Option<String>,
    pub publisher: Option<String>,
    pub published_date: Option<String>,
    pub page_count: Option<u32>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub language: Option<String>,
    pub isbn: Option<String>,
    /// Always an `https://` reference when present
    pub cover_reference: Option<String>,
}
