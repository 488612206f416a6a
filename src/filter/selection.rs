//! Filter selection state.
//!
//! A flat map from facet category to selected option ids, owned by the
//! presentation layer and passed by value into the evaluator. Invariants:
//! a category is absent from the map when nothing is selected (never present
//! with an empty set), single-select categories hold exactly one option, and
//! `location` / `natural_setting` are mutually exclusive lenses on geography:
//! selecting into one clears the other.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// The fixed facet categories.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FacetId {
    Location,
    NaturalSetting,
    Quality,
    Experience,
    Services,
    Value,
}

impl FacetId {
    pub const ALL: [FacetId; 6] = [
        FacetId::Location,
        FacetId::NaturalSetting,
        FacetId::Quality,
        FacetId::Experience,
        FacetId::Services,
        FacetId::Value,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            FacetId::Location => "location",
            FacetId::NaturalSetting => "natural_setting",
            FacetId::Quality => "quality",
            FacetId::Experience => "experience",
            FacetId::Services => "services",
            FacetId::Value => "value",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FacetId::Location => "Location",
            FacetId::NaturalSetting => "Natural Setting",
            FacetId::Quality => "Quality & Verification",
            FacetId::Experience => "Experience & Styles",
            FacetId::Services => "Services & Amenities",
            FacetId::Value => "Value & Price",
        }
    }

    /// Whether the user may pick several options at once.
    pub fn multi_select(&self) -> bool {
        matches!(
            self,
            FacetId::NaturalSetting | FacetId::Experience | FacetId::Services
        )
    }

    /// The facet this one displaces when selected, if any.
    fn excludes(&self) -> Option<FacetId> {
        match self {
            FacetId::Location => Some(FacetId::NaturalSetting),
            FacetId::NaturalSetting => Some(FacetId::Location),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Option<FacetId> {
        FacetId::ALL.iter().copied().find(|f| f.id() == s)
    }
}

impl fmt::Display for FacetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Active filter state: category -> selected option ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(flatten)]
    entries: BTreeMap<FacetId, BTreeSet<String>>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an option. Single-select categories replace their current
    /// option; selecting into `location` or `natural_setting` removes the
    /// other entirely.
    pub fn select(&mut self, facet: FacetId, option: &str) {
        if option.is_empty() {
            return;
        }
        if let Some(excluded) = facet.excludes() {
            if self.entries.remove(&excluded).is_some() {
                log::debug!(
                    "selection: {} cleared by selecting into {}",
                    excluded,
                    facet
                );
            }
        }
        let options = self.entries.entry(facet).or_default();
        if !facet.multi_select() {
            options.clear();
        }
        options.insert(option.to_string());
    }

    /// Remove one option; drops the category key when it empties.
    pub fn deselect(&mut self, facet: FacetId, option: &str) {
        if let Some(options) = self.entries.get_mut(&facet) {
            options.remove(option);
            if options.is_empty() {
                self.entries.remove(&facet);
            }
        }
    }

    pub fn toggle(&mut self, facet: FacetId, option: &str) {
        if self.is_selected(facet, option) {
            self.deselect(facet, option);
        } else {
            self.select(facet, option);
        }
    }

    /// Clear a whole category; an explicit "all" action, distinct from the
    /// category merely being absent.
    pub fn clear(&mut self, facet: FacetId) {
        self.entries.remove(&facet);
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    pub fn selected(&self, facet: FacetId) -> Option<&BTreeSet<String>> {
        self.entries.get(&facet)
    }

    pub fn is_selected(&self, facet: FacetId, option: &str) -> bool {
        self.entries
            .get(&facet)
            .is_some_and(|options| options.contains(option))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of categories with an active constraint.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FacetId, &BTreeSet<String>)> {
        self.entries.iter().map(|(facet, options)| (*facet, options))
    }

    /// Serialize to flat query-string pairs: single-select categories as one
    /// value, multi-select as a comma-joined list. Ids are lowercase slugs,
    /// so no percent-encoding is required.
    pub fn to_query(&self) -> String {
        self.entries
            .iter()
            .map(|(facet, options)| {
                let joined = options.iter().cloned().collect::<Vec<_>>().join(",");
                format!("{}={}", facet.id(), joined)
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Parse query-string pairs back into a selection. Unknown keys and
    /// empty values are ignored rather than rejected, so a stale or
    /// hand-edited URL degrades to fewer constraints instead of an error.
    pub fn from_query(query: &str) -> Self {
        let mut selection = FilterSelection::new();
        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let Some(facet) = FacetId::parse(key) else {
                log::debug!("selection: ignoring unknown query key '{}'", key);
                continue;
            };
            for option in value.split(',').filter(|o| !o.is_empty()) {
                selection.select(facet, option);
            }
        }
        selection
    }
}
