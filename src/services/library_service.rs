//! Library Service - ordering and reporting over a record collection

use std::collections::HashMap;

use crate::models::CanonicalRecord;

const TOP_AUTHORS: usize = 10;

/// Stable sort by read date; records without year or month go last.
pub fn sort_records(records: &mut [CanonicalRecord]) {
    records.sort_by_key(CanonicalRecord::read_order);
}

/// Summary printed after every run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryStats {
    pub total: usize,
    pub year_range: Option<(i32, i32)>,
    pub with_description: usize,
    pub with_cover: usize,
    /// Most-read authors, count descending, ties in order of first appearance
    pub top_authors: Vec<(String, usize)>,
}

impl LibraryStats {
    pub fn compute(records: &[CanonicalRecord]) -> Self {
        let years = records.iter().filter_map(|r| r.year);
        let year_range = years.clone().min().zip(years.max());

        let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
        for (position, record) in records.iter().enumerate() {
            counts.entry(record.author.as_str()).or_insert((0, position)).0 += 1;
        }
        let mut ranked: Vec<(&str, (usize, usize))> = counts.into_iter().collect();
        ranked.sort_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_b.cmp(count_a).then(first_a.cmp(first_b))
        });
        let top_authors = ranked
            .into_iter()
            .take(TOP_AUTHORS)
            .map(|(author, (count, _))| (author.to_string(), count))
            .collect();

        Self {
            total: records.len(),
            year_range,
            with_description: records.iter().filter(|r| r.has_description()).count(),
            with_cover: records.iter().filter(|r| r.has_cover()).count(),
            top_authors,
        }
    }

    pub fn percentage(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 * 100.0 / self.total as f64
        }
    }
}

/// Request larger Google Books cover images (`zoom=1` becomes `zoom=5`).
/// Returns how many records changed.
pub fn upgrade_cover_zoom(records: &mut [CanonicalRecord]) -> usize {
    let mut upgraded = 0;
    for record in records.iter_mut() {
        if let Some(cover) = record.cover_reference.as_mut()
            && cover.contains("zoom=1")
        {
            *cover = cover.replace("zoom=1", "zoom=5");
            upgraded += 1;
        }
    }
    upgraded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated(author: &str, title: &str, year: Option<i32>, month: Option<u8>) -> CanonicalRecord {
        CanonicalRecord {
            year,
            month,
            ..CanonicalRecord::new(author, title)
        }
    }

    #[test]
    fn test_sort_is_stable_with_unknowns_last() {
        let mut records = vec![
            dated("A", "undated-1", None, None),
            dated("B", "2015", Some(2015), None),
            dated("C", "2014-03", Some(2014), Some(3)),
            dated("D", "2015-01", Some(2015), Some(1)),
            dated("E", "undated-2", None, Some(4)),
            dated("F", "2014-03 again", Some(2014), Some(3)),
        ];
        sort_records(&mut records);
        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["2014-03", "2014-03 again", "2015-01", "2015", "undated-2", "undated-1"]
        );
    }

    #[test]
    fn test_stats() {
        let mut records = vec![
            dated("Kepler, Lars", "a", Some(2012), None),
            dated("Nesbø, Jo", "b", Some(2009), None),
            dated("Nesbø, Jo", "c", None, None),
            dated("Kepler, Lars", "d", Some(2016), None),
            dated("Link, Charlotte", "e", None, None),
        ];
        records[0].description = Some("x".to_string());
        records[1].cover_reference = Some("https://c".to_string());

        let stats = LibraryStats::compute(&records);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.year_range, Some((2009, 2016)));
        assert_eq!(stats.with_description, 1);
        assert_eq!(stats.with_cover, 1);
        assert_eq!(
            stats.top_authors,
            vec![
                ("Kepler, Lars".to_string(), 2),
                ("Nesbø, Jo".to_string(), 2),
                ("Link, Charlotte".to_string(), 1),
            ]
        );
        assert!((stats.percentage(1) - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stats_empty() {
        let stats = LibraryStats::compute(&[]);
        assert_eq!(stats.year_range, None);
        assert_eq!(stats.percentage(0), 0.0);
    }

    #[test]
    fn test_upgrade_cover_zoom() {
        let mut records = vec![
            CanonicalRecord::new("a", "b"),
            CanonicalRecord::new("c", "d"),
        ];
        records[0].cover_reference =
            Some("https://books.google.com/books/content?id=x&zoom=1&edge=curl".to_string());
        records[1].cover_reference = Some("https://books.google.com/x?zoom=5".to_string());

        assert_eq!(upgrade_cover_zoom(&mut records), 1);
        assert_eq!(
            records[0].cover_reference.as_deref(),
            Some("https://books.google.com/books/content?id=x&zoom=5&edge=curl")
        );
        assert_eq!(upgrade_cover_zoom(&mut records), 0);
    }
}
