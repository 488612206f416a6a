//! Session-level engine wiring.
//!
//! [`Directory`] owns one immutable record collection plus the memoized
//! derived state around it: per-record classifications (content-hash
//! guarded) and the facet catalog (built once per collection). Filtering
//! itself stays a pure function; the engine only saves recomputation across
//! rapid successive interactions.

use crate::catalog::{build_catalog, FacetCategory};
use crate::classify::{classify_record, DerivedClassification};
use crate::config::FacetConfig;
use crate::core::cache::{collection_fingerprint, DerivedCache};
use crate::core::BusinessRecord;
use crate::filter::{apply_filters_with_stats, FilterSelection, FilterStatistics};
use once_cell::sync::OnceCell;

pub struct Directory {
    records: Vec<BusinessRecord>,
    config: FacetConfig,
    catalog: OnceCell<Vec<FacetCategory>>,
    classifications: std::cell::RefCell<DerivedCache<DerivedClassification>>,
}

impl Directory {
    /// Take ownership of a collection fetched by the data-access
    /// collaborator. The collection is treated as immutable for the life of
    /// the filtering session.
    pub fn new(records: Vec<BusinessRecord>, config: FacetConfig) -> Self {
        log::debug!(
            "directory session over {} records (fingerprint {:016x})",
            records.len(),
            collection_fingerprint(&records)
        );
        Self {
            records,
            config,
            catalog: OnceCell::new(),
            classifications: std::cell::RefCell::new(DerivedCache::new()),
        }
    }

    pub fn records(&self) -> &[BusinessRecord] {
        &self.records
    }

    pub fn config(&self) -> &FacetConfig {
        &self.config
    }

    /// The facet catalog with live counts, built on first access and reused
    /// for every later interaction in this session.
    pub fn catalog(&self) -> &[FacetCategory] {
        self.catalog
            .get_or_init(|| build_catalog(&self.records, &self.config))
    }

    /// Classification for one record, served from the content-keyed cache.
    pub fn classification(&self, record: &BusinessRecord) -> DerivedClassification {
        self.classifications
            .borrow_mut()
            .get_or_compute(record, |r| classify_record(r, &self.config))
    }

    /// Evaluate a selection against the collection. Freshly allocated
    /// result; the latest call simply supersedes any earlier one.
    pub fn apply(&self, selection: &FilterSelection) -> Vec<BusinessRecord> {
        self.apply_with_stats(selection).0
    }

    pub fn apply_with_stats(
        &self,
        selection: &FilterSelection,
    ) -> (Vec<BusinessRecord>, FilterStatistics) {
        apply_filters_with_stats(&self.records, selection, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FacetId;

    fn directory() -> Directory {
        let records = vec![
            BusinessRecord {
                id: 1,
                name: "Ubud Shala".into(),
                city: Some("Ubud".into()),
                ..Default::default()
            },
            BusinessRecord {
                id: 2,
                name: "Canggu Flow".into(),
                city: Some("Canggu".into()),
                ..Default::default()
            },
        ];
        Directory::new(records, FacetConfig::default())
    }

    #[test]
    fn test_catalog_built_once() {
        let dir = directory();
        let first = dir.catalog().as_ptr();
        let second = dir.catalog().as_ptr();
        assert_eq!(first, second);
    }

    #[test]
    fn test_apply_does_not_mutate_records() {
        let dir = directory();
        let before = dir.records().to_vec();
        let mut selection = FilterSelection::new();
        selection.select(FacetId::Location, "ubud");
        let matched = dir.apply(&selection);
        assert_eq!(matched.len(), 1);
        assert_eq!(dir.records(), before.as_slice());
    }

    #[test]
    fn test_classification_cached_per_record() {
        let dir = directory();
        let record = dir.records()[0].clone();
        let first = dir.classification(&record);
        let second = dir.classification(&record);
        assert_eq!(first, second);
    }
}
