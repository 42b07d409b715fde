// Normalization engine, enrichment merge, source adapters and lookups

pub mod enrichment;
pub mod import;
pub mod integrations;
pub mod parsing;
