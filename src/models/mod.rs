pub mod lookup;
pub mod preparsed;
pub mod record;

pub use lookup::LookupResult;
pub use preparsed::PreparsedEntry;
pub use record::CanonicalRecord;
