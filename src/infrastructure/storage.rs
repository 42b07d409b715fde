//! JSON database file holding the ordered record collection.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::DomainError;
use crate::models::CanonicalRecord;

pub fn load_records(path: &Path) -> Result<Vec<CanonicalRecord>, DomainError> {
    let content = fs::read_to_string(path)?;
    let records: Vec<CanonicalRecord> = serde_json::from_str(&content)?;
    tracing::debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Write records as pretty-printed JSON, keeping their order.
pub fn save_records(path: &Path, records: &[CanonicalRecord]) -> Result<(), DomainError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(fs::File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    tracing::info!("Saved {} records to {}", records.len(), path.display());
    Ok(())
}
