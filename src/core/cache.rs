//! Content-keyed memoization for derived data.
//!
//! Classification is a pure projection of a record, so a cached result stays
//! valid until the record's bytes change. Entries are keyed by record id and
//! guarded by an xxh64 fingerprint of the serialized record; a stale
//! fingerprint evicts and recomputes.

use crate::core::BusinessRecord;
use std::collections::HashMap;
use xxhash_rust::xxh64::xxh64;

const FINGERPRINT_SEED: u64 = 0;

/// Stable content hash of a single record.
pub fn record_fingerprint(record: &BusinessRecord) -> u64 {
    // Serialization cannot fail for these plain data types.
    let bytes = serde_json::to_vec(record).unwrap_or_default();
    xxh64(&bytes, FINGERPRINT_SEED)
}

/// Stable content hash of a whole collection, used to memoize the facet
/// catalog across filter interactions.
pub fn collection_fingerprint(records: &[BusinessRecord]) -> u64 {
    let mut bytes = Vec::with_capacity(records.len() * 8);
    for record in records {
        bytes.extend_from_slice(&record_fingerprint(record).to_le_bytes());
    }
    xxh64(&bytes, FINGERPRINT_SEED)
}

/// Per-record memo for any value derived purely from the record.
#[derive(Debug, Default)]
pub struct DerivedCache<T> {
    entries: HashMap<u64, (u64, T)>,
}

impl<T: Clone> DerivedCache<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Return the cached value for `record`, recomputing via `compute` when
    /// the entry is missing or the record content changed.
    pub fn get_or_compute<F>(&mut self, record: &BusinessRecord, compute: F) -> T
    where
        F: FnOnce(&BusinessRecord) -> T,
    {
        let fingerprint = record_fingerprint(record);
        match self.entries.get(&record.id) {
            Some((cached_fp, value)) if *cached_fp == fingerprint => {
                log::debug!("classification cache hit for record {}", record.id);
                value.clone()
            }
            _ => {
                let value = compute(record);
                self.entries
                    .insert(record.id, (fingerprint, value.clone()));
                value
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
