//! Services Layer
//!
//! Batch orchestration on top of the normalization engine: enrichment runs,
//! ordering and reporting.

pub mod catalog_service;
pub mod enrichment_service;
pub mod library_service;

// Re-export for convenience
pub use catalog_service::build_catalog;
pub use enrichment_service::{
    EnrichMode, EnrichOutcome, EnrichmentReport, enrich_record, enrich_records, enrich_selected,
};
pub use library_service::{LibraryStats, sort_records, upgrade_cover_zoom};
