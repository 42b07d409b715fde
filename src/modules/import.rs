use std::fs;
use std::path::Path;

use crate::domain::DomainError;
use crate::models::{CanonicalRecord, PreparsedEntry};
use crate::modules::parsing::{record_from_entry, record_from_line};

/// Parse free-text catalog content, one candidate entry per line.
/// Rejected lines are dropped silently; input order is kept.
pub fn parse_catalog_text(content: &str) -> Vec<CanonicalRecord> {
    content.lines().filter_map(record_from_line).collect()
}

/// Decode a preparsed JSON array. A missing `author` or `title` key fails
/// the whole file.
pub fn parse_preparsed_json(content: &str) -> Result<Vec<PreparsedEntry>, DomainError> {
    Ok(serde_json::from_str(content)?)
}

pub fn records_from_entries(entries: &[PreparsedEntry]) -> Result<Vec<CanonicalRecord>, DomainError> {
    entries.iter().map(record_from_entry).collect()
}

pub fn parse_text_file(path: &Path) -> Result<Vec<CanonicalRecord>, DomainError> {
    let content = fs::read_to_string(path)?;
    let records = parse_catalog_text(&content);
    tracing::info!("Parsed {}: found {} books", path.display(), records.len());
    Ok(records)
}

pub fn load_preparsed_file(path: &Path) -> Result<Vec<PreparsedEntry>, DomainError> {
    let content = fs::read_to_string(path)?;
    let entries = parse_preparsed_json(&content)?;
    tracing::info!("Loaded {}: found {} books", path.display(), entries.len());
    Ok(entries)
}

/// Parse several text files in order, skipping the ones that do not exist.
pub fn parse_text_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<CanonicalRecord>, DomainError> {
    let mut records = Vec::new();
    for path in paths.iter().map(AsRef::as_ref) {
        if !path.exists() {
            tracing::warn!("{} not found, skipping", path.display());
            continue;
        }
        records.extend(parse_text_file(path)?);
    }
    Ok(records)
}

/// Load several preparsed files in order, skipping the ones that do not exist.
pub fn load_preparsed_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<PreparsedEntry>, DomainError> {
    let mut entries = Vec::new();
    for path in paths.iter().map(AsRef::as_ref) {
        if !path.exists() {
            tracing::warn!("{} not found, skipping", path.display());
            continue;
        }
        entries.extend(load_preparsed_file(path)?);
    }
    Ok(entries)
}
