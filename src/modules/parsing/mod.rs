//! Heuristic extraction engine
//!
//! Pure, synchronous rule cascades that turn loosely formatted reading-list
//! input into [`CanonicalRecord`](crate::models::CanonicalRecord)s. Every
//! rule table is an ordered list evaluated first-match-wins.

pub mod annotation;
pub mod assembler;
pub mod dates;
pub mod free_text;
pub mod series;

pub use annotation::{Annotation, classify, classify_parts};
pub use assembler::{record_from_entry, record_from_line};
pub use dates::{YearPolicy, parse_date, parse_date_with};
pub use free_text::{SplitLine, split_line};
pub use series::extract_series;
