//! Splitter for free-text catalog lines of the form
//! `Author (Place): Title (Series) (Date) trailing note`.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::annotation::EMOJI_CLASS;
use super::series::extract_series;

const MIN_LINE_CHARS: usize = 15;
const MIN_TITLE_CHARS: usize = 2;

/// Line numbers left over from `cat -n` style exports ("   12→" or "12\t").
static LINE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+(?:→|\t)").expect("line number regex"));

/// Narrative prose that accompanies the lists: quotes, sentences opening
/// with a German function word or pronoun, "Berlin, im Sommer ...".
static PROSE_PREFIXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^>>",
        r"^\s*Als\s+",
        r"^\s*Ein\s+",
        r"^\s*In\s+",
        r"^\s*Sie\s+",
        r"^\s*Er\s+",
        r"^\s*Die\s+[A-Z][a-z]+\s+",
        r"^\s*Vom\s+",
        r"^\s*Mit\s+",
        r"^\s*Für\s+",
        r"^\s*Auf\s+",
        r"^\s*Seit\s+",
        r"^\s*Nach\s+",
        r"^\s*Während\s+",
        r"^\s*[A-Z][a-z]+,?\s+im\s+",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("prose prefix regex"))
    .collect()
});

static AUTHOR_LOCATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s*\(([^)]+)\)$").expect("author location regex"));

static PARENTHETICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^)]+)\)").expect("parenthetical regex"));

/// Trailing commentary, tried in order; the first match becomes the note.
static NOTE_RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
    let emoji = format!(r"\s+{}.*$", EMOJI_CLASS);
    [
        emoji.as_str(),
        r"(?i)\s+TOP!.*$",
        r"(?i)\s+super!.*$",
        r"(?i)\s+nee!.*$",
        r"(?i)\s+zum heulen.*$",
        r"\s+-[^-]+-.*$",
        r"(?i)\s+selbst.*$",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("note rule regex"))
    .collect()
});

static MULTIPLE_SPACES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("whitespace regex"));

/// The pieces of one accepted catalog line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitLine {
    pub author: String,
    /// Parenthetical attached to the author, e.g. `Kepler, Lars (Bergisch Gladbach)`
    pub location: Option<String>,
    pub title: String,
    pub series_volume: Option<u32>,
    /// Parenthetical groups after the colon, in order of appearance
    pub parentheticals: Vec<String>,
    pub note: Option<String>,
}

/// Remove a leading line-number marker, if any.
pub fn strip_line_number(line: &str) -> &str {
    match LINE_NUMBER.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// True when the line reads like prose rather than a catalog entry.
pub fn is_prose(line: &str) -> bool {
    PROSE_PREFIXES.iter().any(|pattern| pattern.is_match(line))
}

/// Split a raw line into its parts, or `None` when it is not a book entry.
pub fn split_line(raw: &str) -> Option<SplitLine> {
    let normalized: String = raw.nfc().collect();
    let line = strip_line_number(&normalized).trim();

    if line.is_empty() || is_prose(line) || line.chars().count() < MIN_LINE_CHARS {
        tracing::debug!("Skipping non-entry line: {:?}", line);
        return None;
    }

    let Some((author_part, rest)) = line.split_once(':') else {
        tracing::debug!("Skipping line without separator: {:?}", line);
        return None;
    };

    let (author, location) = split_author(author_part.trim());
    if author.is_empty() {
        return None;
    }

    // Series markers are parenthetical too; take them out before the
    // remaining groups are treated as date candidates.
    let (rest, series_volume) = extract_series(rest.trim());

    let parentheticals: Vec<String> = PARENTHETICAL
        .captures_iter(&rest)
        .filter_map(|caps| caps.get(1))
        .map(|group| group.as_str().trim().to_string())
        .collect();
    let title_and_notes = PARENTHETICAL.replace_all(&rest, "");
    let title_and_notes = title_and_notes.trim();

    let (title, note) = split_note(title_and_notes);
    let title = MULTIPLE_SPACES.replace_all(title.trim(), " ").into_owned();

    if title.chars().count() < MIN_TITLE_CHARS {
        tracing::debug!("Skipping line without usable title: {:?}", line);
        return None;
    }

    Some(SplitLine {
        author,
        location,
        title,
        series_volume,
        parentheticals,
        note,
    })
}

fn split_author(author_part: &str) -> (String, Option<String>) {
    match AUTHOR_LOCATION.captures(author_part) {
        Some(caps) => (
            caps[1].trim().to_string(),
            Some(caps[2].trim().to_string()),
        ),
        None => (author_part.to_string(), None),
    }
}

/// Cut the first matching trailing note off the text.
fn split_note(text: &str) -> (&str, Option<String>) {
    for rule in NOTE_RULES.iter() {
        if let Some(m) = rule.find(text) {
            return (&text[..m.start()], Some(m.as_str().trim().to_string()));
        }
    }
    (text, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_full_line() {
        let split =
            split_line("Kepler, Lars (Bergisch Gladbach): Der Hypnotiseur (Jan 2015) TOP!")
                .unwrap();
        assert_eq!(split.author, "Kepler, Lars");
        assert_eq!(split.location.as_deref(), Some("Bergisch Gladbach"));
        assert_eq!(split.title, "Der Hypnotiseur");
        assert_eq!(split.parentheticals, vec!["Jan 2015".to_string()]);
        assert_eq!(split.note.as_deref(), Some("TOP!"));
        assert_eq!(split.series_volume, None);
    }

    #[test]
    fn test_line_numbers_are_stripped() {
        let split = split_line("    12→Mankell, Henning: Mörder ohne Gesicht (Mai 08)").unwrap();
        assert_eq!(split.author, "Mankell, Henning");
        assert_eq!(split.title, "Mörder ohne Gesicht");

        assert_eq!(strip_line_number("3\tAdler-Olsen: Erbarmen"), "Adler-Olsen: Erbarmen");
        assert_eq!(strip_line_number("Adler-Olsen: Erbarmen"), "Adler-Olsen: Erbarmen");
    }

    #[test]
    fn test_rejections() {
        assert_eq!(split_line(""), None);
        assert_eq!(split_line("Kurz: Titel"), None);
        assert_eq!(split_line("Ein Buch, das man lesen muss: wirklich"), None);
        assert_eq!(split_line(">> Ein Zitat aus dem Buch: hier"), None);
        assert_eq!(split_line("Die Geschichte einer Familie: lang"), None);
        assert_eq!(split_line("Berlin, im Sommer 1989: alles anders"), None);
        assert_eq!(split_line("Eine Zeile ganz ohne Doppelpunkt"), None);
        assert_eq!(split_line("Autorin Anonym: X (2015)"), None);
    }

    #[test]
    fn test_series_marker_is_not_a_date_candidate() {
        let split = split_line("Kepler, Lars: Der Sandmann (Band 4) (Okt 2013)").unwrap();
        assert_eq!(split.title, "Der Sandmann");
        assert_eq!(split.series_volume, Some(4));
        assert_eq!(split.parentheticals, vec!["Okt 2013".to_string()]);
    }

    #[test]
    fn test_note_rules_in_order() {
        let split = split_line("Fitzek, Sebastian: Die Therapie super! -Heidi-").unwrap();
        assert_eq!(split.title, "Die Therapie");
        assert_eq!(split.note.as_deref(), Some("super! -Heidi-"));

        let split = split_line("Link, Charlotte: Die Rosenzüchterin -von Mama-").unwrap();
        assert_eq!(split.title, "Die Rosenzüchterin");
        assert_eq!(split.note.as_deref(), Some("-von Mama-"));

        let split = split_line("Moyes, Jojo: Ein ganzes halbes Jahr zum Heulen").unwrap();
        assert_eq!(split.note.as_deref(), Some("zum Heulen"));

        let split = split_line("Nesbø, Jo: Koma 😐 naja").unwrap();
        assert_eq!(split.title, "Koma");
        assert_eq!(split.note.as_deref(), Some("😐 naja"));

        let split = split_line("Roth, Veronica: Die Bestimmung nee! abgebrochen").unwrap();
        assert_eq!(split.title, "Die Bestimmung");
        assert_eq!(split.note.as_deref(), Some("nee! abgebrochen"));

        let split = split_line("Fitzek, Sebastian: Der Augensammler ☕").unwrap();
        assert_eq!(split.title, "Der Augensammler");
        assert_eq!(split.note.as_deref(), Some("☕"));
    }

    #[test]
    fn test_trademark_signs_stay_in_title() {
        let split = split_line("Autor, Eins: Titel © Verlag").unwrap();
        assert_eq!(split.title, "Titel © Verlag");
        assert_eq!(split.note, None);

        let split = split_line("Autor, Zwei: Marke® und Zeichen™ ‼").unwrap();
        assert_eq!(split.title, "Marke® und Zeichen™ ‼");
        assert_eq!(split.note, None);
    }

    #[test]
    fn test_parentheticals_mid_title_collapse_whitespace() {
        let split = split_line("Grisham, John: Die Firma (2009) Neuauflage").unwrap();
        assert_eq!(split.title, "Die Firma Neuauflage");
        assert_eq!(split.parentheticals, vec!["2009".to_string()]);
    }
}
