pub mod cache;
pub mod errors;

use serde::{Deserialize, Serialize};

/// Coarse price bracket carried by some records when no numeric price exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceRange {
    Budget,
    MidRange,
    Premium,
    Luxury,
}

/// Listing-variant data: studios and retreats carry different commercial
/// fields, so they are modeled as a tagged union instead of one record with
/// optional fields for every variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "listing_type", rename_all = "snake_case")]
pub enum Offering {
    Studio {
        /// Ordered style list, e.g. ["Vinyasa", "Yin"]. May be empty.
        #[serde(default, alias = "yoga_styles")]
        styles: Vec<String>,
        /// Walk-in single-class price in USD.
        #[serde(default)]
        drop_in_price_usd: Option<f64>,
    },
    Retreat {
        /// Program themes, matched the same way studio styles are.
        #[serde(default, alias = "yoga_styles")]
        styles: Vec<String>,
        /// Length of the program in days.
        #[serde(default)]
        duration_days: Option<u32>,
        /// All-inclusive package price in USD.
        #[serde(default)]
        package_price_usd: Option<f64>,
    },
}

impl Default for Offering {
    fn default() -> Self {
        Offering::Studio {
            styles: Vec::new(),
            drop_in_price_usd: None,
        }
    }
}

/// One business listing as supplied by the data-access collaborator.
///
/// Records are sparse: almost every field is optional and absence is itself a
/// signal. The engine never mutates a record; everything derived from one
/// lives in [`crate::classify::DerivedClassification`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: String,

    /// Area name as entered upstream, e.g. "Canggu" or "Ubud, Bali".
    #[serde(default)]
    pub city: Option<String>,
    /// Display location string. Distinct from `city` in the source data;
    /// the quality checklist credits only this field.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,

    #[serde(default)]
    pub business_description: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,

    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub whatsapp_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,

    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub price_range: Option<PriceRange>,

    // Explicit environment flags. Authoritative when Some(true); anything
    // else falls through to keyword/area inference.
    #[serde(default)]
    pub beach_proximity: Option<bool>,
    #[serde(default)]
    pub jungle_setting: Option<bool>,
    #[serde(default)]
    pub mountain_view: Option<bool>,
    #[serde(default)]
    pub rice_field_view: Option<bool>,

    // Explicit capability flags.
    #[serde(default)]
    pub beginner_friendly: Option<bool>,
    #[serde(default)]
    pub advanced_classes: Option<bool>,
    #[serde(default)]
    pub teacher_training: Option<bool>,
    #[serde(default)]
    pub meditation_offered: Option<bool>,
    #[serde(default)]
    pub sound_healing: Option<bool>,
    #[serde(default)]
    pub accommodation: Option<bool>,
    #[serde(default)]
    pub retreats: Option<bool>,
    #[serde(default)]
    pub private_classes: Option<bool>,

    #[serde(default)]
    pub instagram_handle: Option<String>,
    #[serde(default)]
    pub facebook_url: Option<String>,

    /// Externally computed data-richness score (0-100).
    #[serde(default)]
    pub enrichment_score: Option<f64>,

    #[serde(flatten)]
    pub offering: Offering,
}

impl BusinessRecord {
    /// Style list regardless of listing variant.
    pub fn styles(&self) -> &[String] {
        match &self.offering {
            Offering::Studio { styles, .. } => styles,
            Offering::Retreat { styles, .. } => styles,
        }
    }

    /// Authoritative per-day price when the record carries one: a studio's
    /// drop-in price, or a retreat's package price spread over its days.
    pub fn price_per_day(&self) -> Option<f64> {
        match &self.offering {
            Offering::Studio {
                drop_in_price_usd, ..
            } => *drop_in_price_usd,
            Offering::Retreat {
                duration_days,
                package_price_usd,
                ..
            } => match (package_price_usd, duration_days) {
                (Some(price), Some(days)) if *days > 0 => Some(price / f64::from(*days)),
                _ => None,
            },
        }
    }

    /// Area text for geographic matching: `city` with `location` as fallback.
    pub fn area_text(&self) -> Option<&str> {
        self.city
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.location.as_deref().filter(|s| !s.is_empty()))
    }

    /// Lowercased concatenation of description, styles, and amenities,
    /// the haystack for capability keyword matching.
    pub fn search_text(&self) -> String {
        let description = self.business_description.as_deref().unwrap_or("");
        let styles = self.styles().join(" ");
        let amenities = self.amenities.join(" ");
        format!("{} {} {}", description, styles, amenities).to_lowercase()
    }

    pub fn has_flag(&self, flag: Option<bool>) -> bool {
        flag == Some(true)
    }
}

/// Case-insensitive containment check used by every keyword extractor.
/// A missing haystack is simply a non-match, never an error.
pub fn contains_any(haystack: Option<&str>, needles: &[String]) -> bool {
    match haystack {
        Some(text) => {
            let lower = text.to_lowercase();
            needles.iter().any(|n| lower.contains(&n.to_lowercase()))
        }
        None => false,
    }
}
