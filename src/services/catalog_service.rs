//! Catalog Service - from assembled records to the final ordered collection

use std::time::Duration;

use crate::models::CanonicalRecord;
use crate::modules::integrations::BookLookup;
use crate::services::enrichment_service::{EnrichMode, EnrichmentReport, enrich_records};
use crate::services::library_service::sort_records;

/// Apply the mode's selection, enrich when the mode asks for it, then sort.
pub async fn build_catalog(
    records: Vec<CanonicalRecord>,
    mode: EnrichMode,
    lookup: &dyn BookLookup,
    delay: Duration,
) -> (Vec<CanonicalRecord>, EnrichmentReport) {
    let mut records = mode.select(records);

    let report = if mode.attempts_lookups() {
        tracing::info!("Enriching {} records ({:?})", records.len(), mode);
        enrich_records(&mut records, lookup, delay).await
    } else {
        EnrichmentReport::default()
    };

    sort_records(&mut records);
    (records, report)
}
