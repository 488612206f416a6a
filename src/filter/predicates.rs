//! Pure predicate functions for facet options.
//!
//! One predicate per facet category, each deciding whether a single record
//! matches a single option id. The catalog builder and the evaluator share
//! these, so a displayed option count always equals the size of the result
//! set that selecting just that option would produce.
//!
//! Unknown option ids match nothing: a stale selection (an option that no
//! longer corresponds to anything because the collection changed) degrades
//! to zero matches instead of failing.

use crate::classify::{DerivedClassification, EnvironmentFacet, PriceTier, VerificationStatus};
use crate::config::FacetConfig;
use crate::core::{contains_any, BusinessRecord, PriceRange};
use crate::filter::selection::FacetId;

/// Slug form of a style name: lowercase, whitespace collapsed to `_`.
pub fn style_slug(style: &str) -> String {
    style
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Dispatch to the category-specific predicate.
pub fn matches_option(
    facet: FacetId,
    option: &str,
    record: &BusinessRecord,
    derived: &DerivedClassification,
    config: &FacetConfig,
) -> bool {
    match facet {
        FacetId::Location => matches_location(option, record, config),
        FacetId::NaturalSetting => matches_natural_setting(option, derived),
        FacetId::Quality => matches_quality(option, record, derived, config),
        FacetId::Experience => matches_experience(option, record, derived),
        FacetId::Services => matches_service(option, record, config),
        FacetId::Value => matches_value(option, record, derived, config),
    }
}

/// Geographic area: the option id must appear in the record's city, display
/// location, or street address.
pub fn matches_location(option: &str, record: &BusinessRecord, config: &FacetConfig) -> bool {
    let Some(area) = config
        .catalog
        .location_areas
        .iter()
        .find(|a| a.id == option)
    else {
        return false;
    };
    let needle = vec![area.id.clone()];
    contains_any(record.city.as_deref(), &needle)
        || contains_any(record.location.as_deref(), &needle)
        || contains_any(record.address.as_deref(), &needle)
}

/// Environment lens: the corresponding extractor judged the record likely.
pub fn matches_natural_setting(option: &str, derived: &DerivedClassification) -> bool {
    EnvironmentFacet::ALL
        .iter()
        .find(|facet| facet.id() == option)
        .is_some_and(|facet| derived.environment.signal(*facet).likely)
}

pub fn matches_quality(
    option: &str,
    record: &BusinessRecord,
    derived: &DerivedClassification,
    config: &FacetConfig,
) -> bool {
    match option {
        "verified_studios" => derived.quality.verification_status == VerificationStatus::Verified,
        "complete_profiles" => {
            derived.quality.completion_percentage >= config.catalog.complete_profile_min
        }
        "good_profiles" => derived.quality.completion_percentage >= config.catalog.good_profile_min,
        "top_rated" => record.rating >= config.catalog.top_rated_min,
        _ => false,
    }
}

pub fn matches_experience(
    option: &str,
    record: &BusinessRecord,
    derived: &DerivedClassification,
) -> bool {
    match option {
        "beginner_friendly" => derived.experience.beginner_friendly,
        "advanced_classes" => derived.experience.advanced_classes,
        "all_levels" => derived.experience.all_levels,
        _ => option
            .strip_prefix("style_")
            .is_some_and(|slug| record.styles().iter().any(|s| style_slug(s) == slug)),
    }
}

/// Service: explicit capability flag, or the rule's keyword fallback over
/// amenities and description.
pub fn matches_service(option: &str, record: &BusinessRecord, config: &FacetConfig) -> bool {
    let Some(rule) = config.services.iter().find(|r| r.id == option) else {
        return false;
    };
    let explicit = match option {
        "accommodation" => record.accommodation,
        "retreats" => record.retreats,
        "teacher_training" => record.teacher_training,
        "private_classes" => record.private_classes,
        "meditation_offered" => record.meditation_offered,
        "sound_healing" => record.sound_healing,
        _ => None,
    };
    if explicit == Some(true) {
        return true;
    }
    let amenities = record.amenities.join(" ");
    contains_any(Some(amenities.as_str()), &rule.keywords)
        || contains_any(record.business_description.as_deref(), &rule.keywords)
}

/// Price tier. The record's own `price_range` bracket outranks the heuristic
/// estimate when no numeric price exists.
pub fn matches_value(
    option: &str,
    record: &BusinessRecord,
    derived: &DerivedClassification,
    config: &FacetConfig,
) -> bool {
    if option == "budget_verified" {
        return effective_tier(record, derived) == PriceTier::Budget
            && derived.quality.contact_confidence_score
                >= config.catalog.budget_verified_contact_min;
    }
    let Some(target) = parse_tier(option) else {
        return false;
    };
    effective_tier(record, derived) == target
}

/// Tier used by the value predicates: verified estimate first, then the
/// record's claimed bracket, then the heuristic estimate.
pub fn effective_tier(record: &BusinessRecord, derived: &DerivedClassification) -> PriceTier {
    if derived.price.verified {
        return derived.price.tier;
    }
    match record.price_range {
        Some(PriceRange::Budget) => PriceTier::Budget,
        Some(PriceRange::MidRange) => PriceTier::Mid,
        Some(PriceRange::Premium) => PriceTier::Premium,
        Some(PriceRange::Luxury) => PriceTier::Luxury,
        None => derived.price.tier,
    }
}

fn parse_tier(option: &str) -> Option<PriceTier> {
    match option {
        "budget" => Some(PriceTier::Budget),
        "mid" => Some(PriceTier::Mid),
        "premium" => Some(PriceTier::Premium),
        "luxury" => Some(PriceTier::Luxury),
        _ => None,
    }
}
