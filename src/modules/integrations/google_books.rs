use async_trait::async_trait;
use serde::Deserialize;

use super::BookLookup;
use crate::domain::DomainError;
use crate::infrastructure::Config;
use crate::models::LookupResult;

#[derive(Debug, Deserialize)]
struct GoogleBooksResponse {
    items: Option<Vec<GoogleBookItem>>,
}

#[derive(Debug, Deserialize)]
struct GoogleBookItem {
    id: String,
    #[serde(rename = "volumeInfo")]
    volume_info: GoogleVolumeInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleVolumeInfo {
    description: Option<String>,
    publisher: Option<String>,
    published_date: Option<String>,
    page_count: Option<u32>,
    #[serde(default)]
    categories: Vec<String>,
    language: Option<String>,
    #[serde(default)]
    industry_identifiers: Vec<GoogleIdentifier>,
    image_links: Option<GoogleImageLinks>,
}

#[derive(Debug, Deserialize)]
struct GoogleIdentifier {
    #[serde(rename = "type")]
    kind: String,
    identifier: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleImageLinks {
    extra_large: Option<String>,
    large: Option<String>,
    medium: Option<String>,
    thumbnail: Option<String>,
}

const ISBN_TYPES: [&str; 2] = ["ISBN_13", "ISBN_10"];

/// Google Books volume search, first hit only.
#[derive(Debug, Clone)]
pub struct GoogleBooksClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GoogleBooksClient {
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(config.lookup_timeout)
            .build()
            .map_err(|e| DomainError::External(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.google_books_url.trim_end_matches('/').to_string(),
            api_key: config.google_books_api_key.clone(),
        })
    }

    pub fn query_url(&self, title: &str, author: &str) -> String {
        let query = format!("{} {}", title, author);
        let mut url = format!(
            "{}?q={}&maxResults=1",
            self.base_url,
            urlencoding::encode(query.trim())
        );
        if let Some(key) = &self.api_key {
            url.push_str("&key=");
            url.push_str(&urlencoding::encode(key));
        }
        url
    }

    /// Search for a book. Every failure is logged and reported as `None`.
    pub async fn search(&self, title: &str, author: &str) -> Option<LookupResult> {
        let url = self.query_url(title, author);

        let resp = match self.client.get(&url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!("Google Books request failed for {:?}: {}", title, e);
                return None;
            }
        };

        if !resp.status().is_success() {
            tracing::warn!(
                "Google Books returned status {} for {:?}",
                resp.status(),
                title
            );
            return None;
        }

        let parsed: GoogleBooksResponse = match resp.json().await {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Failed to parse Google Books response for {:?}: {}", title, e);
                return None;
            }
        };

        let item = parsed.items?.into_iter().next()?;
        Some(into_lookup_result(item))
    }
}

#[async_trait]
impl BookLookup for GoogleBooksClient {
    async fn lookup(&self, title: &str, author: &str) -> Option<LookupResult> {
        self.search(title, author).await
    }
}

fn into_lookup_result(item: GoogleBookItem) -> LookupResult {
    let info = item.volume_info;

    let isbn = info
        .industry_identifiers
        .iter()
        .find(|id| ISBN_TYPES.contains(&id.kind.as_str()))
        .map(|id| id.identifier.clone());

    // Largest image first
    let cover_reference = info
        .image_links
        .and_then(|links| {
            links
                .extra_large
                .or(links.large)
                .or(links.medium)
                .or(links.thumbnail)
        })
        .map(|url| secure_url(&url));

    LookupResult {
        bibliographic_id: Some(item.id),
        description: info.description,
        publisher: info.publisher,
        published_date: info.published_date,
        page_count: info.page_count,
        categories: info.categories,
        language: info.language,
        isbn,
        cover_reference,
    }
}

/// Google Books often hands out `http://` image links; upgrade them.
pub fn secure_url(url: &str) -> String {
    url.replace("http://", "https://")
}
