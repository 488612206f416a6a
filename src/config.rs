//! Facet definition tables and tunable thresholds.
//!
//! Every keyword list, area list, premium table, and breakpoint used by the
//! classifiers lives here as immutable configuration. The compiled defaults
//! reproduce the curated directory tables; a `facetmap.toml` can override any
//! section. Config is injected into the engine by reference, never held as
//! mutable global state.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::errors::{FacetmapError, Result};

/// Weak-signal rule for one environment facet: keyword list plus the area
/// names that imply the facet geographically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentRule {
    pub keywords: Vec<String>,
    pub areas: Vec<String>,
    /// Rice-field detection skips the address signal in the source data, so
    /// the signal count (and thus the confidence denominator) is per-rule.
    #[serde(default = "default_true")]
    pub check_address: bool,
}

impl EnvironmentRule {
    /// Number of independent weak signals this rule examines.
    pub fn signal_count(&self) -> usize {
        if self.check_address {
            3
        } else {
            2
        }
    }

    /// Minimum confidence for `likely`: one corroborating signal.
    pub fn likely_threshold(&self) -> f64 {
        1.0 / self.signal_count() as f64
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default = "default_beach_rule")]
    pub beach: EnvironmentRule,
    #[serde(default = "default_jungle_rule")]
    pub jungle: EnvironmentRule,
    #[serde(default = "default_mountain_rule")]
    pub mountain: EnvironmentRule,
    #[serde(default = "default_rice_field_rule")]
    pub rice_field: EnvironmentRule,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            beach: default_beach_rule(),
            jungle: default_jungle_rule(),
            mountain: default_mountain_rule(),
            rice_field: default_rice_field_rule(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_beach_rule() -> EnvironmentRule {
    EnvironmentRule {
        keywords: strings(&["beach", "coast", "ocean", "surf", "seaside", "waterfront"]),
        areas: strings(&[
            "Canggu", "Seminyak", "Kuta", "Sanur", "Uluwatu", "Jimbaran", "Nusa Dua",
        ]),
        check_address: true,
    }
}

fn default_jungle_rule() -> EnvironmentRule {
    EnvironmentRule {
        keywords: strings(&[
            "jungle", "forest", "nature", "trees", "tropical", "wildlife", "bamboo",
        ]),
        areas: strings(&["Ubud", "Gianyar", "Bangli", "Central Bali", "East Bali"]),
        check_address: true,
    }
}

fn default_mountain_rule() -> EnvironmentRule {
    EnvironmentRule {
        keywords: strings(&[
            "mountain", "volcano", "highland", "elevation", "valley", "hill", "peak",
        ]),
        areas: strings(&["Ubud", "Bangli", "Karangasem", "East Bali", "Central Bali"]),
        check_address: true,
    }
}

fn default_rice_field_rule() -> EnvironmentRule {
    EnvironmentRule {
        keywords: strings(&["rice", "paddy", "field", "terrace", "farming", "agriculture"]),
        areas: strings(&["Ubud", "Gianyar", "Tabanan", "Central Bali"]),
        check_address: false,
    }
}

/// Point value an area name contributes to the price heuristic. First match
/// wins; the table is ordered most-premium first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationPremium {
    pub area: String,
    pub points: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceConfig {
    /// Per-day USD breakpoints for the authoritative path:
    /// below [0] budget, below [1] mid, below [2] premium, else luxury.
    #[serde(default = "default_amount_breakpoints")]
    pub amount_breakpoints: [f64; 3],

    /// Heuristic score breakpoints for the estimated path.
    #[serde(default = "default_score_breakpoints")]
    pub score_breakpoints: [f64; 3],

    /// Displayed USD range per estimated tier, budget through luxury.
    #[serde(default = "default_estimated_ranges")]
    pub estimated_ranges: [String; 4],

    #[serde(default = "default_location_premiums")]
    pub location_premiums: Vec<LocationPremium>,

    /// Amenity keywords that mark an upmarket operation.
    #[serde(default = "default_premium_amenities")]
    pub premium_amenities: Vec<String>,

    /// Points per matched premium amenity.
    #[serde(default = "default_amenity_points")]
    pub amenity_points: f64,

    /// Enrichment score above which the profile-quality bonus applies.
    #[serde(default = "default_enrichment_threshold")]
    pub enrichment_threshold: f64,
    #[serde(default = "default_enrichment_points")]
    pub enrichment_points: f64,

    /// Bonus when both Instagram and Facebook are present.
    #[serde(default = "default_social_points")]
    pub social_points: f64,
    #[serde(default = "default_website_points")]
    pub website_points: f64,

    /// Estimated tiers are never fully trusted; confidence is capped here.
    #[serde(default = "default_confidence_cap")]
    pub confidence_cap: f64,
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            amount_breakpoints: default_amount_breakpoints(),
            score_breakpoints: default_score_breakpoints(),
            estimated_ranges: default_estimated_ranges(),
            location_premiums: default_location_premiums(),
            premium_amenities: default_premium_amenities(),
            amenity_points: default_amenity_points(),
            enrichment_threshold: default_enrichment_threshold(),
            enrichment_points: default_enrichment_points(),
            social_points: default_social_points(),
            website_points: default_website_points(),
            confidence_cap: default_confidence_cap(),
        }
    }
}

fn default_amount_breakpoints() -> [f64; 3] {
    [15.0, 40.0, 80.0]
}

fn default_score_breakpoints() -> [f64; 3] {
    [30.0, 60.0, 90.0]
}

fn default_estimated_ranges() -> [String; 4] {
    [
        "$10-20".to_string(),
        "$20-40".to_string(),
        "$40-80".to_string(),
        "$80+".to_string(),
    ]
}

fn default_location_premiums() -> Vec<LocationPremium> {
    [
        ("seminyak", 40.0),
        ("canggu", 35.0),
        ("uluwatu", 30.0),
        ("sanur", 25.0),
        ("ubud", 20.0),
        ("kuta", 15.0),
    ]
    .iter()
    .map(|(area, points)| LocationPremium {
        area: (*area).to_string(),
        points: *points,
    })
    .collect()
}

fn default_premium_amenities() -> Vec<String> {
    strings(&["spa", "pool", "restaurant", "accommodation"])
}

fn default_amenity_points() -> f64 {
    10.0
}

fn default_enrichment_threshold() -> f64 {
    85.0
}

fn default_enrichment_points() -> f64 {
    20.0
}

fn default_social_points() -> f64 {
    10.0
}

fn default_website_points() -> f64 {
    15.0
}

fn default_confidence_cap() -> f64 {
    0.8
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityConfig {
    /// Contact confidence weights; the four together sum to 100.
    #[serde(default = "default_email_weight")]
    pub email_weight: u32,
    #[serde(default = "default_whatsapp_weight")]
    pub whatsapp_weight: u32,
    #[serde(default = "default_phone_weight")]
    pub phone_weight: u32,
    #[serde(default = "default_site_weight")]
    pub website_weight: u32,

    /// `verified` requires BOTH minimums; checked before `partial`.
    #[serde(default = "default_verified_completion_min")]
    pub verified_completion_min: u32,
    #[serde(default = "default_verified_contact_min")]
    pub verified_contact_min: u32,

    /// `partial` requires EITHER minimum.
    #[serde(default = "default_partial_completion_min")]
    pub partial_completion_min: u32,
    #[serde(default = "default_partial_contact_min")]
    pub partial_contact_min: u32,

    /// Rating at or above which the profile earns the highly-rated mark.
    #[serde(default = "default_highly_rated_min")]
    pub highly_rated_min: f32,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            email_weight: default_email_weight(),
            whatsapp_weight: default_whatsapp_weight(),
            phone_weight: default_phone_weight(),
            website_weight: default_site_weight(),
            verified_completion_min: default_verified_completion_min(),
            verified_contact_min: default_verified_contact_min(),
            partial_completion_min: default_partial_completion_min(),
            partial_contact_min: default_partial_contact_min(),
            highly_rated_min: default_highly_rated_min(),
        }
    }
}

fn default_email_weight() -> u32 {
    40
}

fn default_whatsapp_weight() -> u32 {
    30
}

fn default_phone_weight() -> u32 {
    20
}

fn default_site_weight() -> u32 {
    10
}

fn default_verified_completion_min() -> u32 {
    80
}

fn default_verified_contact_min() -> u32 {
    50
}

fn default_partial_completion_min() -> u32 {
    50
}

fn default_partial_contact_min() -> u32 {
    30
}

fn default_highly_rated_min() -> f32 {
    4.5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceConfig {
    #[serde(default = "default_beginner_keywords")]
    pub beginner_keywords: Vec<String>,
    #[serde(default = "default_advanced_keywords")]
    pub advanced_keywords: Vec<String>,
}

impl Default for ExperienceConfig {
    fn default() -> Self {
        Self {
            beginner_keywords: default_beginner_keywords(),
            advanced_keywords: default_advanced_keywords(),
        }
    }
}

fn default_beginner_keywords() -> Vec<String> {
    strings(&[
        "beginner",
        "starter",
        "gentle",
        "basics",
        "introduction",
        "first time",
    ])
}

fn default_advanced_keywords() -> Vec<String> {
    strings(&[
        "advanced",
        "intensive",
        "masterclass",
        "teacher training",
        "certification",
    ])
}

/// One service facet option: explicit flag name plus the keyword fallback
/// matched against amenities and description when the flag is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRule {
    pub id: String,
    pub label: String,
    pub keywords: Vec<String>,
}

fn default_service_rules() -> Vec<ServiceRule> {
    vec![
        ServiceRule {
            id: "accommodation".to_string(),
            label: "Accommodation".to_string(),
            keywords: strings(&["accommodation", "stay", "lodge", "hotel", "room"]),
        },
        ServiceRule {
            id: "retreats".to_string(),
            label: "Retreats".to_string(),
            keywords: strings(&["retreat", "workshop", "intensive", "immersion"]),
        },
        ServiceRule {
            id: "teacher_training".to_string(),
            label: "Teacher Training".to_string(),
            keywords: strings(&[
                "teacher",
                "training",
                "certification",
                "ttc",
                "200hr",
                "300hr",
            ]),
        },
        ServiceRule {
            id: "private_classes".to_string(),
            label: "Private Classes".to_string(),
            keywords: strings(&["private", "one-on-one", "personal", "individual"]),
        },
        ServiceRule {
            id: "meditation_offered".to_string(),
            label: "Meditation".to_string(),
            keywords: strings(&["meditation", "mindfulness", "breathwork"]),
        },
        ServiceRule {
            id: "sound_healing".to_string(),
            label: "Sound Healing".to_string(),
            keywords: strings(&["sound healing", "sound bath", "gong"]),
        },
    ]
}

/// One selectable geographic area in the location facet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationArea {
    pub id: String,
    pub label: String,
}

fn default_location_areas() -> Vec<LocationArea> {
    [
        ("canggu", "Canggu"),
        ("seminyak", "Seminyak"),
        ("ubud", "Ubud"),
        ("sanur", "Sanur"),
    ]
    .iter()
    .map(|(id, label)| LocationArea {
        id: (*id).to_string(),
        label: (*label).to_string(),
    })
    .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_location_areas")]
    pub location_areas: Vec<LocationArea>,

    /// How many of the most common styles become experience options.
    #[serde(default = "default_top_style_limit")]
    pub top_style_limit: usize,

    /// Rating floor for the top-rated quality option.
    #[serde(default = "default_top_rated_min")]
    pub top_rated_min: f32,

    /// Completion floors for the profile-quality options.
    #[serde(default = "default_complete_profile_min")]
    pub complete_profile_min: u32,
    #[serde(default = "default_good_profile_min")]
    pub good_profile_min: u32,

    /// Contact confidence floor for the budget-verified value option.
    #[serde(default = "default_budget_verified_contact_min")]
    pub budget_verified_contact_min: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            location_areas: default_location_areas(),
            top_style_limit: default_top_style_limit(),
            top_rated_min: default_top_rated_min(),
            complete_profile_min: default_complete_profile_min(),
            good_profile_min: default_good_profile_min(),
            budget_verified_contact_min: default_budget_verified_contact_min(),
        }
    }
}

fn default_top_style_limit() -> usize {
    4
}

fn default_top_rated_min() -> f32 {
    4.8
}

fn default_complete_profile_min() -> u32 {
    80
}

fn default_good_profile_min() -> u32 {
    60
}

fn default_budget_verified_contact_min() -> u32 {
    30
}

/// Root configuration injected into the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetConfig {
    #[serde(default)]
    pub environment: EnvironmentConfig,
    #[serde(default)]
    pub price: PriceConfig,
    #[serde(default)]
    pub quality: QualityConfig,
    #[serde(default)]
    pub experience: ExperienceConfig,
    #[serde(default = "default_service_rules")]
    pub services: Vec<ServiceRule>,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Default for FacetConfig {
    fn default() -> Self {
        Self {
            environment: EnvironmentConfig::default(),
            price: PriceConfig::default(),
            quality: QualityConfig::default(),
            experience: ExperienceConfig::default(),
            services: default_service_rules(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl FacetConfig {
    /// Load from a TOML file, or fall back to compiled defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: FacetConfig = toml::from_str(&content)
            .map_err(|e| FacetmapError::Configuration(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `facetmap.toml` from the working directory when present.
    pub fn load_default() -> Result<Self> {
        Self::load(Path::new("facetmap.toml"))
    }

    /// Reject tables that would make classification degenerate.
    pub fn validate(&self) -> Result<()> {
        let ordered = |b: &[f64; 3]| b[0] < b[1] && b[1] < b[2];
        if !ordered(&self.price.amount_breakpoints) {
            return Err(FacetmapError::Configuration(
                "price amount breakpoints must be strictly increasing".to_string(),
            ));
        }
        if !ordered(&self.price.score_breakpoints) {
            return Err(FacetmapError::Configuration(
                "price score breakpoints must be strictly increasing".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.price.confidence_cap) {
            return Err(FacetmapError::Configuration(
                "price confidence cap must be between 0.0 and 1.0".to_string(),
            ));
        }
        for rule in [
            &self.environment.beach,
            &self.environment.jungle,
            &self.environment.mountain,
            &self.environment.rice_field,
        ] {
            if rule.keywords.is_empty() && rule.areas.is_empty() {
                return Err(FacetmapError::Configuration(
                    "environment rules need at least one keyword or area".to_string(),
                ));
            }
        }
        Ok(())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
