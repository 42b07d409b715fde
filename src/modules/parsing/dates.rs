//! Read-date normalization
//!
//! Turns fragments such as `"Jan. 2014"`, `"April 06"` or `"2015-11-06"`
//! into a `(year, month)` pair.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Which year tokens a source accepts.
///
/// Catalog lines and preparsed entries come from different corpora and
/// disagree on two-digit years, so each keeps its own rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearPolicy {
    /// `20xx`, or a two-digit `06`..`25`
    FreeText,
    /// `20xx`, or any two-digit token (`< 50` is 20xx, otherwise 19xx)
    Preparsed,
}

/// German month names and abbreviations. The first entry found as a
/// substring wins, so the order is part of the contract.
pub const MONTHS: &[(&str, u8)] = &[
    ("jan", 1),
    ("januar", 1),
    ("feb", 2),
    ("februar", 2),
    ("mär", 3),
    ("märz", 3),
    ("mar", 3),
    ("apr", 4),
    ("april", 4),
    ("mai", 5),
    ("jun", 6),
    ("juni", 6),
    ("jul", 7),
    ("juli", 7),
    ("aug", 8),
    ("august", 8),
    ("sep", 9),
    ("sept", 9),
    ("september", 9),
    ("okt", 10),
    ("oktober", 10),
    ("nov", 11),
    ("november", 11),
    ("dez", 12),
    ("dezember", 12),
];

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})(?:-\d{2})?\b").expect("iso date regex"));

static FREE_TEXT_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(20\d{2}|0[6-9]|1[0-9]|2[0-5])\b").expect("free-text year regex")
});

static PREPARSED_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(20\d{2}|\d{2})\b").expect("preparsed year regex"));

/// Parse with the preparsed-source year rule.
pub fn parse_date(text: &str) -> (Option<i32>, Option<u8>) {
    parse_date_with(text, YearPolicy::Preparsed)
}

/// Parse a date fragment. Returns `(None, None)` when no year is found;
/// the month may be `None` even when the year is known.
pub fn parse_date_with(text: &str, policy: YearPolicy) -> (Option<i32>, Option<u8>) {
    let lowered = text.nfc().collect::<String>().to_lowercase();
    let fragment = lowered.trim().trim_end_matches('.');
    if fragment.is_empty() {
        return (None, None);
    }

    if let Some(caps) = ISO_DATE.captures(fragment)
        && let (Ok(year), Ok(month)) = (caps[1].parse::<i32>(), caps[2].parse::<u8>())
        && (1..=12).contains(&month)
    {
        return (Some(year), Some(month));
    }

    match find_year(fragment, policy) {
        Some(year) => (Some(year), find_month(fragment)),
        None => (None, None),
    }
}

fn find_year(fragment: &str, policy: YearPolicy) -> Option<i32> {
    let pattern = match policy {
        YearPolicy::FreeText => &FREE_TEXT_YEAR,
        YearPolicy::Preparsed => &PREPARSED_YEAR,
    };
    let token = pattern.captures(fragment)?.get(1)?.as_str();
    let value: i32 = token.parse().ok()?;

    if token.len() == 2 {
        Some(if value < 50 { 2000 + value } else { 1900 + value })
    } else {
        Some(value)
    }
}

/// First month-table entry contained in the (already lowercased) fragment.
pub fn find_month(fragment: &str) -> Option<u8> {
    MONTHS
        .iter()
        .find(|(name, _)| fragment.contains(name))
        .map(|&(_, month)| month)
}
