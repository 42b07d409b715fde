//! Layering looked-up metadata onto an assembled record.
//!
//! `description` and `cover_reference` are only filled when the record has
//! none. The remaining metadata never comes from the local sources, so a
//! non-empty lookup value always replaces it.

use crate::models::record::is_present;
use crate::models::{CanonicalRecord, LookupResult};

/// Merge a lookup result into `record`. Applying the same result twice
/// leaves the record unchanged after the first time.
pub fn merge(record: &mut CanonicalRecord, found: &LookupResult) {
    fill_if_empty(&mut record.description, &found.description);
    fill_if_empty(&mut record.cover_reference, &found.cover_reference);

    replace_if_present(&mut record.bibliographic_id, &found.bibliographic_id);
    replace_if_present(&mut record.publisher, &found.publisher);
    replace_if_present(&mut record.published_date, &found.published_date);
    replace_if_present(&mut record.language, &found.language);
    replace_if_present(&mut record.isbn, &found.isbn);

    if let Some(pages) = found.page_count.filter(|pages| *pages > 0) {
        record.page_count = Some(pages);
    }
    if !found.categories.is_empty() {
        record.categories = found.categories.iter().cloned().collect();
    }
}

/// A record is worth a lookup while it lacks a description or a cover.
pub fn needs_enrichment(record: &CanonicalRecord) -> bool {
    !record.has_description() || !record.has_cover()
}

fn fill_if_empty(slot: &mut Option<String>, value: &Option<String>) {
    if !is_present(slot) && is_present(value) {
        *slot = value.clone();
    }
}

fn replace_if_present(slot: &mut Option<String>, value: &Option<String>) {
    if is_present(value) {
        *slot = value.clone();
    }
}
