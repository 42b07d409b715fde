use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_GOOGLE_BOOKS_URL: &str = "https://www.googleapis.com/books/v1/volumes";

#[derive(Clone, Debug)]
pub struct Config {
    pub google_books_url: String,
    pub google_books_api_key: Option<String>,
    pub lookup_timeout: Duration,
    /// Pause between two consecutive lookups
    pub lookup_delay: Duration,
    pub sample_size: usize,
    pub database_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            google_books_url: DEFAULT_GOOGLE_BOOKS_URL.to_string(),
            google_books_api_key: None,
            lookup_timeout: Duration::from_secs(10),
            lookup_delay: Duration::from_millis(500),
            sample_size: 10,
            database_path: PathBuf::from("books_database.json"),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable numbers fall back to
    /// the defaults.
    pub fn from_lookup<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            google_books_url: var("GOOGLE_BOOKS_API_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(defaults.google_books_url),
            google_books_api_key: var("GOOGLE_BOOKS_API_KEY").filter(|key| !key.trim().is_empty()),
            lookup_timeout: var("LOOKUP_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.lookup_timeout),
            lookup_delay: var("LOOKUP_DELAY_MS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.lookup_delay),
            sample_size: var("SAMPLE_SIZE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.sample_size),
            database_path: var("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
        }
    }
}
