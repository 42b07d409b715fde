//! Location vs. note classification for trailing annotations.
//!
//! The rules below run in order and the first one with an opinion decides.
//! Reordering them changes results: treat any edit as a behavior change.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// A classified annotation. A fragment is either a place or a note, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    Location(String),
    Note(String),
}

impl Annotation {
    /// Split into `(location, note)`; exactly one side is `Some`.
    pub fn into_parts(self) -> (Option<String>, Option<String>) {
        match self {
            Annotation::Location(place) => (Some(place), None),
            Annotation::Note(note) => (None, Some(note)),
        }
    }
}

/// Hand-curated places seen in the reading lists. Static data, never
/// extended at runtime.
pub const KNOWN_LOCATIONS: &[&str] = &[
    "Bergisch Gladbach",
    "Sydney",
    "England",
    "Frankreich",
    "Berlin",
    "Autorenteam",
    "Schweden",
    "Göteborg",
    "Baskenland – Spanien",
    "Bonn-Arzt und Wissenschaftler",
    "Belfast",
    "Köln",
];

static SERIES_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(Fall|Band)\b").expect("series word regex"));

/// Pictograph and dingbat blocks. Narrower than `Extended_Pictographic`,
/// which also covers ©, ® and ™.
pub(crate) const EMOJI_CLASS: &str = r"[\x{2600}-\x{27BF}\x{1F300}-\x{1FAFF}]";

static NOTE_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"{}|\d+\.|zum |Esther", EMOJI_CLASS)).expect("note marker regex")
});

static PLACE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-zäöüÄÖÜß\s-]{2,30}$").expect("place shape regex"));

const MAX_PLACE_WORDS: usize = 4;

type Rule = fn(&str) -> Option<Annotation>;

/// Classification cascade, evaluated top to bottom.
const ANNOTATION_RULES: &[Rule] = &[
    names_series_marker,
    matches_known_location,
    carries_note_marker,
    looks_like_place,
];

/// Classify a trailing annotation. Empty or whitespace-only input yields `None`.
pub fn classify(fragment: &str) -> Option<Annotation> {
    let normalized: String = fragment.nfc().collect();
    let text = normalized.trim();
    if text.is_empty() {
        return None;
    }

    let verdict = ANNOTATION_RULES
        .iter()
        .find_map(|rule| rule(text))
        .unwrap_or_else(|| Annotation::Note(text.to_string()));
    tracing::debug!("Annotation {:?} classified as {:?}", text, verdict);
    Some(verdict)
}

/// `classify` flattened into the `(location, note)` pair stored on a record.
pub fn classify_parts(fragment: Option<&str>) -> (Option<String>, Option<String>) {
    fragment
        .and_then(classify)
        .map(Annotation::into_parts)
        .unwrap_or((None, None))
}

fn names_series_marker(text: &str) -> Option<Annotation> {
    SERIES_WORD
        .is_match(text)
        .then(|| Annotation::Note(text.to_string()))
}

fn matches_known_location(text: &str) -> Option<Annotation> {
    let lowered = text.to_lowercase();
    KNOWN_LOCATIONS
        .iter()
        .find(|place| place.to_lowercase() == lowered)
        .map(|place| Annotation::Location(place.to_string()))
}

fn carries_note_marker(text: &str) -> Option<Annotation> {
    NOTE_MARKER
        .is_match(text)
        .then(|| Annotation::Note(text.to_string()))
}

fn looks_like_place(text: &str) -> Option<Annotation> {
    (PLACE_SHAPE.is_match(text) && text.split_whitespace().count() <= MAX_PLACE_WORDS)
        .then(|| Annotation::Location(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(s: &str) -> Option<Annotation> {
        Some(Annotation::Location(s.to_string()))
    }

    fn note(s: &str) -> Option<Annotation> {
        Some(Annotation::Note(s.to_string()))
    }

    #[test]
    fn test_known_locations() {
        assert_eq!(classify("Bergisch Gladbach"), location("Bergisch Gladbach"));
        assert_eq!(classify("  sydney "), location("Sydney"));
        assert_eq!(classify("Baskenland – Spanien"), location("Baskenland – Spanien"));
        assert_eq!(classify("köln"), location("Köln"));
    }

    #[test]
    fn test_series_words_are_notes() {
        assert_eq!(classify("3. Fall 😐"), note("3. Fall 😐"));
        assert_eq!(classify("Fall 2"), note("Fall 2"));
        assert_eq!(classify("band"), note("band"));
    }

    #[test]
    fn test_note_markers() {
        assert_eq!(classify("Spannend 👍"), note("Spannend 👍"));
        assert_eq!(classify("1. Teil"), note("1. Teil"));
        assert_eq!(classify("zum Weinen schön"), note("zum Weinen schön"));
        assert_eq!(classify("von Esther"), note("von Esther"));
    }

    #[test]
    fn test_place_shaped_fallback() {
        assert_eq!(classify("Stockholm"), location("Stockholm"));
        assert_eq!(classify("Sankt Peter-Ording"), location("Sankt Peter-Ording"));
        assert_eq!(classify("München"), location("München"));
    }

    #[test]
    fn test_everything_else_is_a_note() {
        assert_eq!(classify("super!"), note("super!"));
        assert_eq!(
            classify("ein sehr langer Satz mit vielen Worten"),
            note("ein sehr langer Satz mit vielen Worten")
        );
        assert_eq!(classify("x"), note("x"));
    }

    #[test]
    fn test_place_length_limit() {
        let thirty = "Abcdefghij Klmnopqrst Uvwxyzab";
        assert_eq!(thirty.chars().count(), 30);
        assert_eq!(classify(thirty), location(thirty));

        let thirty_one = "Abcdefghij Klmnopqrst Uvwxyzabc";
        assert_eq!(classify(thirty_one), note(thirty_one));
    }

    #[test]
    fn test_place_word_limit() {
        assert_eq!(classify("Am Rande der Welt"), location("Am Rande der Welt"));
        assert_eq!(
            classify("Ein Tag am Meer mit Oma"),
            note("Ein Tag am Meer mit Oma")
        );
        assert_eq!(classify("Auf dem Hof am See"), note("Auf dem Hof am See"));
    }

    #[test]
    fn test_symbols_are_not_emoji() {
        assert_eq!(classify("Kaffee ☕"), note("Kaffee ☕"));
        assert!(!NOTE_MARKER.is_match("Verlag © 2015 ®™"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("   "), None);
        assert_eq!(classify_parts(None), (None, None));
    }

    #[test]
    fn test_parts_are_mutually_exclusive() {
        for input in ["Berlin", "TOP!", "3. Fall 😐", "Oslo", "?", "Band 7", "a-b"] {
            let (place, remark) = classify_parts(Some(input));
            assert!(place.is_some() ^ remark.is_some(), "input {:?}", input);
        }
    }
}
