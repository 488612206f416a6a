//! Facet catalog construction.
//!
//! For each fixed category the builder enumerates candidate options, counts
//! how many records in the reference collection match each one, and drops
//! options nobody matches. Counts are computed against the FULL collection,
//! not the currently filtered subset: a displayed count answers "how many
//! listings have this property", not "how many would remain combined with
//! the other active filters". That overstatement is a deliberate trade for
//! one memoized scan per collection instead of one per interaction.

use crate::classify::{classify_record, DerivedClassification, EnvironmentFacet};
use crate::config::FacetConfig;
use crate::core::BusinessRecord;
use crate::filter::predicates::{matches_option, style_slug};
use crate::filter::selection::FacetId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One selectable option with its live count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    pub id: String,
    pub label: String,
    /// Number of records in the reference collection matching this option.
    /// Always >= 1 in a built catalog; zero-count options are dropped.
    pub count: usize,
    /// True when membership comes from explicit fields rather than
    /// heuristic inference.
    pub verified: bool,
}

/// One facet category with its ordered options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCategory {
    pub id: FacetId,
    pub label: String,
    pub multi_select: bool,
    pub options: Vec<FacetOption>,
}

struct Candidate {
    id: String,
    label: String,
    verified: bool,
}

impl Candidate {
    fn new(id: &str, label: &str, verified: bool) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            verified,
        }
    }
}

/// Candidate options for one category, before counting.
fn candidates(facet: FacetId, records: &[BusinessRecord], config: &FacetConfig) -> Vec<Candidate> {
    match facet {
        FacetId::Location => config
            .catalog
            .location_areas
            .iter()
            .map(|area| Candidate::new(&area.id, &area.label, true))
            .collect(),
        FacetId::NaturalSetting => EnvironmentFacet::ALL
            .iter()
            .map(|f| Candidate::new(f.id(), f.label(), false))
            .collect(),
        FacetId::Quality => vec![
            Candidate::new("verified_studios", "Verified Listings", true),
            Candidate::new("complete_profiles", "Complete Profiles (80%+)", true),
            Candidate::new("good_profiles", "Good Profiles (60%+)", true),
            Candidate::new("top_rated", "Top Rated", true),
        ],
        FacetId::Experience => {
            let mut options = vec![
                Candidate::new("beginner_friendly", "Beginner Friendly", true),
                Candidate::new("advanced_classes", "Advanced Classes", true),
                Candidate::new("all_levels", "All Levels", true),
            ];
            options.extend(top_styles(records, config.catalog.top_style_limit));
            options
        }
        FacetId::Services => config
            .services
            .iter()
            .map(|rule| Candidate::new(&rule.id, &rule.label, true))
            .collect(),
        FacetId::Value => vec![
            Candidate::new("budget_verified", "Budget + Verified Contact", false),
            Candidate::new("budget", "Budget", false),
            Candidate::new("mid", "Mid-Range", false),
            Candidate::new("premium", "Premium", false),
            Candidate::new("luxury", "Luxury", false),
        ],
    }
}

/// The most common styles across the collection, surfaced as selectable
/// options with the style's display name as label.
fn top_styles(records: &[BusinessRecord], limit: usize) -> Vec<Candidate> {
    let mut counts: HashMap<String, (String, usize)> = HashMap::new();
    for record in records {
        for style in record.styles() {
            let entry = counts
                .entry(style_slug(style))
                .or_insert_with(|| (style.clone(), 0));
            entry.1 += 1;
        }
    }
    let mut ranked: Vec<(String, String, usize)> = counts
        .into_iter()
        .map(|(slug, (label, count))| (slug, label, count))
        .collect();
    // Ties break alphabetically so rebuilding the catalog is stable.
    ranked.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(&b.0)));
    ranked
        .into_iter()
        .take(limit)
        .map(|(slug, label, _)| Candidate {
            id: format!("style_{}", slug),
            label,
            verified: true,
        })
        .collect()
}

/// Build the full catalog for a collection.
pub fn build_catalog(records: &[BusinessRecord], config: &FacetConfig) -> Vec<FacetCategory> {
    let derived: Vec<DerivedClassification> = records
        .iter()
        .map(|record| classify_record(record, config))
        .collect();

    FacetId::ALL
        .iter()
        .map(|facet| {
            let options = candidates(*facet, records, config)
                .into_iter()
                .filter_map(|candidate| {
                    let count = records
                        .iter()
                        .zip(derived.iter())
                        .filter(|(record, d)| {
                            matches_option(*facet, &candidate.id, record, d, config)
                        })
                        .count();
                    (count > 0).then_some(FacetOption {
                        id: candidate.id,
                        label: candidate.label,
                        count,
                        verified: candidate.verified,
                    })
                })
                .collect();
            FacetCategory {
                id: *facet,
                label: facet.label().to_string(),
                multi_select: facet.multi_select(),
                options,
            }
        })
        .collect()
}
