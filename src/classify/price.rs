//! Price tier estimation.
//!
//! Two paths, mirroring the tier split elsewhere in the engine: an
//! authoritative path when the record carries a real per-day price, and a
//! weighted heuristic when it does not. Estimated tiers accumulate points
//! from location prestige, premium amenities, profile quality, and web
//! presence, and their confidence is capped below 1.0 since they are never
//! authoritative. The estimator is total: a record with no price data at all
//! still lands in the lowest tier at confidence 0.

use crate::config::PriceConfig;
use crate::core::BusinessRecord;
use serde::{Deserialize, Serialize};

/// Coarse price tier, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceTier {
    Budget,
    Mid,
    Premium,
    Luxury,
}

impl PriceTier {
    pub fn id(&self) -> &'static str {
        match self {
            PriceTier::Budget => "budget",
            PriceTier::Mid => "mid",
            PriceTier::Premium => "premium",
            PriceTier::Luxury => "luxury",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceTier::Budget => "Budget",
            PriceTier::Mid => "Mid-Range",
            PriceTier::Premium => "Premium",
            PriceTier::Luxury => "Luxury",
        }
    }

    fn from_breakpoints(value: f64, breakpoints: &[f64; 3]) -> Self {
        if value < breakpoints[0] {
            PriceTier::Budget
        } else if value < breakpoints[1] {
            PriceTier::Mid
        } else if value < breakpoints[2] {
            PriceTier::Premium
        } else {
            PriceTier::Luxury
        }
    }
}

/// Result of estimating one record's price tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimate {
    pub tier: PriceTier,
    pub confidence: f64,
    pub verified: bool,
    /// Actual per-day USD price, authoritative path only.
    pub amount: Option<f64>,
    /// Displayed USD range, estimated path only.
    pub estimated_range: Option<String>,
    /// Human-readable explanations of which signals fired.
    pub factors: Vec<String>,
}

/// Estimate the price tier for one record.
pub fn estimate(record: &BusinessRecord, config: &PriceConfig) -> PriceEstimate {
    if let Some(amount) = record.price_per_day() {
        return PriceEstimate {
            tier: PriceTier::from_breakpoints(amount, &config.amount_breakpoints),
            confidence: 1.0,
            verified: true,
            amount: Some(amount),
            estimated_range: None,
            factors: vec!["listed price".to_string()],
        };
    }

    let mut score = 0.0;
    let mut factors = Vec::new();

    // Location premium: first matching area wins, no double counting.
    if let Some(area) = record.area_text() {
        let area_lower = area.to_lowercase();
        for premium in &config.location_premiums {
            if area_lower.contains(&premium.area.to_lowercase()) {
                score += premium.points;
                factors.push(format!("{} location", premium.area));
                break;
            }
        }
    }

    let amenity_hits = config
        .premium_amenities
        .iter()
        .filter(|keyword| {
            let keyword = keyword.to_lowercase();
            record
                .amenities
                .iter()
                .any(|a| a.to_lowercase().contains(&keyword))
        })
        .count();
    if amenity_hits > 0 {
        score += amenity_hits as f64 * config.amenity_points;
        factors.push(format!("{} premium amenities", amenity_hits));
    }

    if record
        .enrichment_score
        .is_some_and(|s| s > config.enrichment_threshold)
    {
        score += config.enrichment_points;
        factors.push("high quality profile".to_string());
    }

    if record.instagram_handle.is_some() && record.facebook_url.is_some() {
        score += config.social_points;
        factors.push("strong social presence".to_string());
    }

    if record.website.is_some() {
        score += config.website_points;
        factors.push("professional website".to_string());
    }

    let tier = PriceTier::from_breakpoints(score, &config.score_breakpoints);
    let range_index = match tier {
        PriceTier::Budget => 0,
        PriceTier::Mid => 1,
        PriceTier::Premium => 2,
        PriceTier::Luxury => 3,
    };

    PriceEstimate {
        tier,
        confidence: (score / 100.0).min(config.confidence_cap),
        verified: false,
        amount: None,
        estimated_range: Some(config.estimated_ranges[range_index].clone()),
        factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LocationPremium;
    use crate::core::Offering;

    fn priced(amount: f64) -> BusinessRecord {
        BusinessRecord {
            id: 1,
            name: "Priced".into(),
            offering: Offering::Studio {
                styles: vec![],
                drop_in_price_usd: Some(amount),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_explicit_price_breakpoints() {
        let config = PriceConfig::default();
        assert_eq!(estimate(&priced(10.0), &config).tier, PriceTier::Budget);
        assert_eq!(estimate(&priced(15.0), &config).tier, PriceTier::Mid);
        assert_eq!(estimate(&priced(39.9), &config).tier, PriceTier::Mid);
        assert_eq!(estimate(&priced(40.0), &config).tier, PriceTier::Premium);
        assert_eq!(estimate(&priced(80.0), &config).tier, PriceTier::Luxury);
    }

    #[test]
    fn test_explicit_price_is_verified_full_confidence() {
        let result = estimate(&priced(25.0), &PriceConfig::default());
        assert!(result.verified);
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.amount, Some(25.0));
        assert!(result.estimated_range.is_none());
    }

    #[test]
    fn test_first_location_premium_wins() {
        let record = BusinessRecord {
            id: 1,
            name: "Two Areas".into(),
            // Mentions both seminyak and kuta; only the first table match counts.
            city: Some("Seminyak / Kuta border".into()),
            ..Default::default()
        };
        let result = estimate(&record, &PriceConfig::default());
        assert!(result.factors.contains(&"seminyak location".to_string()));
        assert!(!result.factors.iter().any(|f| f.contains("kuta")));
    }

    #[test]
    fn test_heuristic_accumulates_and_caps_confidence() {
        let record = BusinessRecord {
            id: 1,
            name: "Stacked".into(),
            city: Some("Seminyak".into()),
            amenities: vec!["Spa".into(), "Infinity Pool".into(), "Restaurant".into()],
            enrichment_score: Some(92.0),
            instagram_handle: Some("@stacked".into()),
            facebook_url: Some("https://facebook.com/stacked".into()),
            website: Some("https://stacked.example".into()),
            ..Default::default()
        };
        // 40 + 30 + 20 + 10 + 15 = 115 -> luxury, confidence capped at 0.8.
        let result = estimate(&record, &PriceConfig::default());
        assert_eq!(result.tier, PriceTier::Luxury);
        assert_eq!(result.confidence, 0.8);
        assert!(!result.verified);
        assert_eq!(result.estimated_range.as_deref(), Some("$80+"));
        assert_eq!(result.factors.len(), 5);
    }

    #[test]
    fn test_capitalized_config_entries_still_match() {
        let mut config = PriceConfig::default();
        config.location_premiums = vec![LocationPremium {
            area: "Seminyak".to_string(),
            points: 40.0,
        }];
        config.premium_amenities = vec!["Spa".to_string()];

        let record = BusinessRecord {
            id: 1,
            name: "Cased".into(),
            city: Some("seminyak beachside".into()),
            amenities: vec!["luxury spa".into()],
            ..Default::default()
        };
        let result = estimate(&record, &config);
        assert!(result.factors.contains(&"Seminyak location".to_string()));
        assert!(result.factors.contains(&"1 premium amenities".to_string()));
    }

    #[test]
    fn test_empty_record_falls_to_budget() {
        let record = BusinessRecord {
            id: 1,
            name: "Bare".into(),
            ..Default::default()
        };
        let result = estimate(&record, &PriceConfig::default());
        assert_eq!(result.tier, PriceTier::Budget);
        assert_eq!(result.confidence, 0.0);
        assert!(!result.verified);
        assert!(result.factors.is_empty());
    }

    #[test]
    fn test_heuristic_score_breakpoints() {
        let config = PriceConfig::default();
        // ubud (20) + website (15) = 35 -> mid
        let record = BusinessRecord {
            id: 1,
            name: "Mid".into(),
            city: Some("Ubud".into()),
            website: Some("https://mid.example".into()),
            ..Default::default()
        };
        let result = estimate(&record, &config);
        assert_eq!(result.tier, PriceTier::Mid);
        assert!((result.confidence - 0.35).abs() < 1e-9);
    }
}
