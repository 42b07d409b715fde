//! Enrichment Service - batch lookups with a fixed pause between calls
//!
//! Each record is looked up and merged on its own; one failed lookup never
//! touches another record or aborts the batch.

use std::str::FromStr;
use std::time::Duration;

use crate::models::CanonicalRecord;
use crate::modules::enrichment::{merge, needs_enrichment};
use crate::modules::integrations::BookLookup;

/// How much of a batch gets looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichMode {
    /// No lookups, local data only
    Quick,
    /// Look up every record
    Full,
    /// Keep only the first `n` records and look those up
    Sample(usize),
}

impl EnrichMode {
    pub fn attempts_lookups(&self) -> bool {
        !matches!(self, EnrichMode::Quick)
    }

    /// Cut a batch down to what this mode processes.
    pub fn select<T>(&self, mut items: Vec<T>) -> Vec<T> {
        if let EnrichMode::Sample(n) = self {
            items.truncate(*n);
        }
        items
    }
}

impl FromStr for EnrichMode {
    type Err = String;

    /// Accepts `quick`, `full`, `sample` (10 records) or `sample:<n>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quick" | "none" => Ok(EnrichMode::Quick),
            "full" | "all" => Ok(EnrichMode::Full),
            "sample" => Ok(EnrichMode::Sample(10)),
            other => other
                .strip_prefix("sample:")
                .and_then(|n| n.parse().ok())
                .map(EnrichMode::Sample)
                .ok_or_else(|| format!("unknown enrichment mode: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichOutcome {
    /// No lookup made: not requested, or nothing missing
    Skipped,
    Enriched,
    /// Lookup made but nothing usable came back
    Missed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentReport {
    pub attempted: usize,
    pub enriched: usize,
    pub missed: usize,
}

/// Look up and merge a single record when `attempt` is set and the record
/// still lacks a description or cover.
pub async fn enrich_record(
    record: &mut CanonicalRecord,
    lookup: &dyn BookLookup,
    attempt: bool,
) -> EnrichOutcome {
    if !attempt || !needs_enrichment(record) {
        return EnrichOutcome::Skipped;
    }

    match lookup.lookup(&record.title, &record.author).await {
        Some(found) => {
            merge(record, &found);
            tracing::info!("Enriched {}: {}", record.author, record.title);
            EnrichOutcome::Enriched
        }
        None => {
            tracing::info!("No lookup data for {}: {}", record.author, record.title);
            EnrichOutcome::Missed
        }
    }
}

/// Enrich every record that needs it, sleeping `delay` between lookups.
pub async fn enrich_records(
    records: &mut [CanonicalRecord],
    lookup: &dyn BookLookup,
    delay: Duration,
) -> EnrichmentReport {
    enrich_selected(records, lookup, |_, _| true, delay).await
}

/// Like [`enrich_records`], with a per-record decision on whether to try.
pub async fn enrich_selected<F>(
    records: &mut [CanonicalRecord],
    lookup: &dyn BookLookup,
    attempt: F,
    delay: Duration,
) -> EnrichmentReport
where
    F: Fn(usize, &CanonicalRecord) -> bool,
{
    let mut report = EnrichmentReport::default();
    let total = records.len();

    for (index, record) in records.iter_mut().enumerate() {
        let wanted = attempt(index, record) && needs_enrichment(record);
        if !wanted {
            continue;
        }

        if report.attempted > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        tracing::debug!("[{}/{}] {}: {}", index + 1, total, record.author, record.title);
        report.attempted += 1;
        match enrich_record(record, lookup, true).await {
            EnrichOutcome::Enriched => report.enriched += 1,
            EnrichOutcome::Missed => report.missed += 1,
            EnrichOutcome::Skipped => {}
        }
    }

    tracing::info!(
        "Enrichment finished: {} attempted, {} enriched, {} missed",
        report.attempted,
        report.enriched,
        report.missed
    );
    report
}
