//! Series volume markers such as `(Band 2)` or `(3. Fall)`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Volume markers, tried in order. Group 1 holds the volume number.
static SERIES_MARKERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\(Band\s+(\d+)\)",
        r"(?i)\((\d+)\.\s*Fall\)",
        r"(?i)\(Fall\s+(\d+)\)",
        r"\s+\((\d+)\.\)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("series marker regex"))
    .collect()
});

/// Strip the first matching volume marker from a title.
///
/// Returns the title unchanged with `None` when no marker matches. At most
/// one marker is removed.
pub fn extract_series(title: &str) -> (String, Option<u32>) {
    for marker in SERIES_MARKERS.iter() {
        let Some(caps) = marker.captures(title) else {
            continue;
        };
        let (Some(whole), Some(number)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let Some(volume) = number.as_str().parse::<u32>().ok().filter(|v| *v > 0) else {
            continue;
        };

        let before = title[..whole.start()].trim();
        let after = title[whole.end()..].trim();
        let clean = match (before.is_empty(), after.is_empty()) {
            (false, false) => format!("{} {}", before, after),
            (false, true) => before.to_string(),
            _ => after.to_string(),
        };
        return (clean, Some(volume));
    }

    (title.to_string(), None)
}
