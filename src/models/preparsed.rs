use serde::Deserialize;

/// One entry of a preparsed JSON file.
///
/// `author` and `title` are mandatory; deserialization fails without them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PreparsedEntry {
    pub author: String,
    pub title: String,
    #[serde(default)]
    pub date_read: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "cover_reference")]
    pub cover_url: Option<String>,
}
