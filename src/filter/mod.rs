//! Filter evaluation.
//!
//! Evaluation is a conjunction across the categories present in the
//! selection; within a multi-select category a record passes if it matches
//! any selected option. Categories absent from the selection impose no
//! constraint. The evaluator never fails: an empty result set is a normal
//! outcome, and nonsense option ids simply match nothing.

pub mod predicates;
pub mod selection;

pub use predicates::{matches_option, style_slug};
pub use selection::{FacetId, FilterSelection};

use crate::classify::{classify_record, DerivedClassification};
use crate::config::FacetConfig;
use crate::core::BusinessRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Why records were rejected, per category. Useful for debugging a
/// selection that unexpectedly empties the result set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStatistics {
    pub total_records: usize,
    pub matched: usize,
    pub rejected_by: BTreeMap<String, usize>,
}

impl FilterStatistics {
    pub fn rejection_rate(&self) -> f64 {
        if self.total_records == 0 {
            return 0.0;
        }
        (self.total_records - self.matched) as f64 / self.total_records as f64
    }
}

/// Does `record` satisfy every active constraint in `selection`?
pub fn record_matches(
    record: &BusinessRecord,
    derived: &DerivedClassification,
    selection: &FilterSelection,
    config: &FacetConfig,
) -> bool {
    first_rejecting_facet(record, derived, selection, config).is_none()
}

/// The first category (in facet order) that rejects the record, if any.
fn first_rejecting_facet(
    record: &BusinessRecord,
    derived: &DerivedClassification,
    selection: &FilterSelection,
    config: &FacetConfig,
) -> Option<FacetId> {
    selection.iter().find_map(|(facet, options)| {
        let any_match = options
            .iter()
            .any(|option| matches_option(facet, option, record, derived, config));
        if any_match {
            None
        } else {
            Some(facet)
        }
    })
}

/// Apply a selection to a collection, returning the matching subset as a
/// fresh allocation. Input records are never mutated.
pub fn apply_filters(
    records: &[BusinessRecord],
    selection: &FilterSelection,
    config: &FacetConfig,
) -> Vec<BusinessRecord> {
    apply_filters_with_stats(records, selection, config).0
}

/// As [`apply_filters`], also reporting per-category rejection counts.
pub fn apply_filters_with_stats(
    records: &[BusinessRecord],
    selection: &FilterSelection,
    config: &FacetConfig,
) -> (Vec<BusinessRecord>, FilterStatistics) {
    let mut stats = FilterStatistics {
        total_records: records.len(),
        ..Default::default()
    };

    let matched: Vec<BusinessRecord> = records
        .iter()
        .filter(|record| {
            let derived = classify_record(record, config);
            match first_rejecting_facet(record, &derived, selection, config) {
                None => true,
                Some(facet) => {
                    *stats.rejected_by.entry(facet.id().to_string()).or_insert(0) += 1;
                    false
                }
            }
        })
        .cloned()
        .collect();

    stats.matched = matched.len();
    log::debug!(
        "filter: {} of {} records matched {} active categories",
        stats.matched,
        stats.total_records,
        selection.len()
    );
    (matched, stats)
}
