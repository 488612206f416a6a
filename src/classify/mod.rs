//! Derived classification of business records.
//!
//! A [`DerivedClassification`] is a pure projection of one record: the four
//! environment signals, the price estimate, the quality metrics, and the
//! experience profile. Recomputing it from the same record always yields the
//! same result, which is what lets the engine memoize it by content hash.

pub mod environment;
pub mod experience;
pub mod price;
pub mod quality;

pub use environment::{
    detect, EnvironmentFacet, EnvironmentProfile, FacetSignal, SignalSources,
};
pub use experience::ExperienceProfile;
pub use price::{PriceEstimate, PriceTier};
pub use quality::{QualityMetrics, VerificationStatus};

use crate::config::FacetConfig;
use crate::core::BusinessRecord;
use serde::{Deserialize, Serialize};

/// Everything the engine infers about one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedClassification {
    pub environment: EnvironmentProfile,
    pub price: PriceEstimate,
    pub quality: QualityMetrics,
    pub experience: ExperienceProfile,
}

/// Run all classifiers over one record.
pub fn classify_record(record: &BusinessRecord, config: &FacetConfig) -> DerivedClassification {
    DerivedClassification {
        environment: EnvironmentProfile::detect(record, &config.environment),
        price: price::estimate(record, &config.price),
        quality: quality::score(record, &config.quality),
        experience: experience::classify(record, &config.experience),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_is_deterministic() {
        let config = FacetConfig::default();
        let record = BusinessRecord {
            id: 9,
            name: "Jungle Flow".into(),
            city: Some("Ubud".into()),
            business_description: Some("nestled among bamboo groves".into()),
            phone_number: Some("+62 811 222".into()),
            ..Default::default()
        };
        let first = classify_record(&record, &config);
        let second = classify_record(&record, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_scenario_jungle_flow() {
        let config = FacetConfig::default();
        let record = BusinessRecord {
            id: 9,
            name: "Jungle Flow".into(),
            city: Some("Ubud".into()),
            business_description: Some("nestled among bamboo groves".into()),
            phone_number: Some("+62 811 222".into()),
            ..Default::default()
        };
        let derived = classify_record(&record, &config);

        assert!(derived.environment.jungle_setting.likely);
        assert!(!derived.environment.jungle_setting.verified);
        assert_eq!(derived.quality.completion_percentage, 43);
        assert_eq!(
            derived.quality.verification_status,
            VerificationStatus::Unverified
        );
    }
}
