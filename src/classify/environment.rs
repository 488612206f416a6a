//! Environment signal extractors.
//!
//! One extractor per inferred facet (beach proximity, jungle setting,
//! mountain view, rice-field view). An explicit `true` flag on the record is
//! authoritative and short-circuits inference at confidence 1.0; otherwise
//! each rule tests up to three independent weak signals (address keywords,
//! area name, description keywords) and reports
//! `confidence = hits / signals_checked`.
//!
//! The bar for `likely` is deliberately low (a single corroborating signal):
//! in a discovery UI a false positive costs one extra click, while a false
//! negative hides a legitimately matching listing.

use crate::config::{EnvironmentConfig, EnvironmentRule};
use crate::core::{contains_any, BusinessRecord};
use serde::{Deserialize, Serialize};

/// The four inferred environment facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentFacet {
    BeachProximity,
    JungleSetting,
    MountainView,
    RiceFieldView,
}

impl EnvironmentFacet {
    pub const ALL: [EnvironmentFacet; 4] = [
        EnvironmentFacet::BeachProximity,
        EnvironmentFacet::JungleSetting,
        EnvironmentFacet::MountainView,
        EnvironmentFacet::RiceFieldView,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            EnvironmentFacet::BeachProximity => "beach_proximity",
            EnvironmentFacet::JungleSetting => "jungle_setting",
            EnvironmentFacet::MountainView => "mountain_view",
            EnvironmentFacet::RiceFieldView => "rice_field_view",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EnvironmentFacet::BeachProximity => "Beachfront",
            EnvironmentFacet::JungleSetting => "Jungle Setting",
            EnvironmentFacet::MountainView => "Mountain Views",
            EnvironmentFacet::RiceFieldView => "Rice Field Views",
        }
    }

    /// The record's explicit boolean for this facet.
    fn explicit_flag(&self, record: &BusinessRecord) -> Option<bool> {
        match self {
            EnvironmentFacet::BeachProximity => record.beach_proximity,
            EnvironmentFacet::JungleSetting => record.jungle_setting,
            EnvironmentFacet::MountainView => record.mountain_view,
            EnvironmentFacet::RiceFieldView => record.rice_field_view,
        }
    }

    fn rule<'a>(&self, config: &'a EnvironmentConfig) -> &'a EnvironmentRule {
        match self {
            EnvironmentFacet::BeachProximity => &config.beach,
            EnvironmentFacet::JungleSetting => &config.jungle,
            EnvironmentFacet::MountainView => &config.mountain,
            EnvironmentFacet::RiceFieldView => &config.rice_field,
        }
    }
}

/// Which weak signals fired for an inferred result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSources {
    pub address: bool,
    pub area: bool,
    pub description: bool,
}

/// Outcome of one environment detection. Total: every record, including a
/// fully empty one, yields a well-formed triple (confidence 0 at worst).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FacetSignal {
    pub likely: bool,
    /// 0.0..=1.0; exactly 1.0 only on the explicit-flag path.
    pub confidence: f64,
    /// True when the result came from an explicit field, not inference.
    pub verified: bool,
    pub sources: SignalSources,
}

impl FacetSignal {
    fn explicit() -> Self {
        Self {
            likely: true,
            confidence: 1.0,
            verified: true,
            sources: SignalSources::default(),
        }
    }
}

/// Detect one environment facet on one record.
pub fn detect(facet: EnvironmentFacet, record: &BusinessRecord, config: &EnvironmentConfig) -> FacetSignal {
    // Explicit data always wins.
    if facet.explicit_flag(record) == Some(true) {
        return FacetSignal::explicit();
    }

    let rule = facet.rule(config);

    let address_hit = rule.check_address && contains_any(record.address.as_deref(), &rule.keywords);
    let area_hit = contains_any(record.area_text(), &rule.areas);
    let description_hit = contains_any(record.business_description.as_deref(), &rule.keywords);

    let hits = [
        rule.check_address && address_hit,
        area_hit,
        description_hit,
    ]
    .iter()
    .filter(|hit| **hit)
    .count();

    let confidence = hits as f64 / rule.signal_count() as f64;

    FacetSignal {
        likely: confidence >= rule.likely_threshold(),
        confidence,
        verified: false,
        sources: SignalSources {
            address: address_hit,
            area: area_hit,
            description: description_hit,
        },
    }
}

/// All four detections for one record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentProfile {
    pub beach_proximity: FacetSignal,
    pub jungle_setting: FacetSignal,
    pub mountain_view: FacetSignal,
    pub rice_field_view: FacetSignal,
}

impl EnvironmentProfile {
    pub fn detect(record: &BusinessRecord, config: &EnvironmentConfig) -> Self {
        Self {
            beach_proximity: detect(EnvironmentFacet::BeachProximity, record, config),
            jungle_setting: detect(EnvironmentFacet::JungleSetting, record, config),
            mountain_view: detect(EnvironmentFacet::MountainView, record, config),
            rice_field_view: detect(EnvironmentFacet::RiceFieldView, record, config),
        }
    }

    pub fn signal(&self, facet: EnvironmentFacet) -> &FacetSignal {
        match facet {
            EnvironmentFacet::BeachProximity => &self.beach_proximity,
            EnvironmentFacet::JungleSetting => &self.jungle_setting,
            EnvironmentFacet::MountainView => &self.mountain_view,
            EnvironmentFacet::RiceFieldView => &self.rice_field_view,
        }
    }
}
