//! External bibliographic lookups

pub mod google_books;

use async_trait::async_trait;

use crate::models::LookupResult;

pub use google_books::GoogleBooksClient;

/// A source of bibliographic metadata.
///
/// Implementations swallow their own failures: `None` means "no usable
/// result", whether the book is unknown or the service is down.
#[async_trait]
pub trait BookLookup: Send + Sync {
    async fn lookup(&self, title: &str, author: &str) -> Option<LookupResult>;
}
