//! Record assembly for both input sources.
//!
//! Free-text lines and preparsed entries share the date, series and
//! annotation rules; only the field precedence differs.

use super::annotation::classify_parts;
use super::dates::{YearPolicy, parse_date_with};
use super::free_text::split_line;
use super::series::extract_series;
use crate::domain::DomainError;
use crate::models::{CanonicalRecord, PreparsedEntry};

/// Build a record from one free-text line, or `None` if the line is rejected.
///
/// The read date comes from the first parenthetical group that yields a
/// year; the trailing note is only consulted when none does.
pub fn record_from_line(line: &str) -> Option<CanonicalRecord> {
    let split = split_line(line)?;

    let (year, month) = split
        .parentheticals
        .iter()
        .map(|group| parse_date_with(group, YearPolicy::FreeText))
        .find(|(year, _)| year.is_some())
        .or_else(|| {
            split
                .note
                .as_deref()
                .map(|note| parse_date_with(note, YearPolicy::FreeText))
        })
        .unwrap_or((None, None));

    Some(CanonicalRecord {
        location: split.location,
        series_volume: split.series_volume,
        year,
        month,
        note: split.note,
        ..CanonicalRecord::new(split.author, split.title)
    })
}

/// Build a record from a preparsed entry.
///
/// Entries are trusted to be well formed; an empty author or title is a
/// contract violation and is reported instead of skipped.
pub fn record_from_entry(entry: &PreparsedEntry) -> Result<CanonicalRecord, DomainError> {
    let author = entry.author.trim();
    if author.is_empty() {
        return Err(DomainError::Validation(format!(
            "preparsed entry {:?} has an empty author",
            entry.title
        )));
    }

    let (title, series_volume) = extract_series(entry.title.trim());
    if title.is_empty() {
        return Err(DomainError::Validation(format!(
            "preparsed entry by {:?} has an empty title",
            author
        )));
    }

    let (year, month) = entry
        .date_read
        .as_deref()
        .map(|date| parse_date_with(date, YearPolicy::Preparsed))
        .unwrap_or((None, None));

    let (location, note) = classify_parts(entry.notes.as_deref());

    Ok(CanonicalRecord {
        location,
        series_volume,
        year,
        month,
        note,
        description: entry.description.clone(),
        cover_reference: entry.cover_url.clone(),
        ..CanonicalRecord::new(author, title)
    })
}
