//! The input collaborator: fetch the whole business collection.
//!
//! Any JSON array of conforming records works as a source. The engine
//! treats whatever this returns as the immutable reference collection for
//! the session.

use crate::core::BusinessRecord;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load all records from a JSON array file.
pub fn load_records(path: &Path) -> Result<Vec<BusinessRecord>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open records file {}", path.display()))?;
    let reader = BufReader::new(file);
    let records: Vec<BusinessRecord> = serde_json::from_reader(reader)
        .with_context(|| format!("failed to parse records from {}", path.display()))?;
    log::debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}
