//! Profile quality and verification scoring.
//!
//! Three outputs per record: a completion percentage over a fixed 7-field
//! checklist, a weighted contact confidence score (max 100), and a
//! three-level verification status derived from both. `Verified` is checked
//! first; it is strictly more demanding than `Partial`.

use crate::config::QualityConfig;
use crate::core::BusinessRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Unverified,
    Partial,
    Verified,
}

impl VerificationStatus {
    pub fn id(&self) -> &'static str {
        match self {
            VerificationStatus::Unverified => "unverified",
            VerificationStatus::Partial => "partial",
            VerificationStatus::Verified => "verified",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    /// Rounded percentage of the 7-field checklist that is populated.
    pub completion_percentage: u32,
    /// Which verification marks the record earned.
    pub verified_fields: Vec<String>,
    pub verification_status: VerificationStatus,
    /// Weighted contact score: email 40, whatsapp 30, phone 20, website 10.
    pub contact_confidence_score: u32,
}

/// The fixed completion checklist. `location` means the display location
/// field specifically; a record carrying only `city` does not get credit.
fn checklist_hits(record: &BusinessRecord) -> usize {
    let present = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());
    [
        !record.name.is_empty(),
        present(&record.location),
        present(&record.business_description),
        present(&record.phone_number),
        present(&record.website),
        !record.styles().is_empty(),
        !record.amenities.is_empty(),
    ]
    .iter()
    .filter(|hit| **hit)
    .count()
}

const CHECKLIST_LEN: usize = 7;

/// Score one record. Total and order-independent: every record, however
/// sparse, gets a well-formed result.
pub fn score(record: &BusinessRecord, config: &QualityConfig) -> QualityMetrics {
    let hits = checklist_hits(record);
    let completion_percentage =
        ((hits as f64 / CHECKLIST_LEN as f64) * 100.0).round() as u32;

    let present = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());
    let contact_confidence_score = [
        (present(&record.email_address), config.email_weight),
        (present(&record.whatsapp_number), config.whatsapp_weight),
        (present(&record.phone_number), config.phone_weight),
        (present(&record.website), config.website_weight),
    ]
    .iter()
    .filter(|(hit, _)| *hit)
    .map(|(_, weight)| weight)
    .sum();

    let mut verified_fields = Vec::new();
    if present(&record.email_address) {
        verified_fields.push("email".to_string());
    }
    if present(&record.phone_number) || present(&record.whatsapp_number) {
        verified_fields.push("contact".to_string());
    }
    if present(&record.website) {
        verified_fields.push("website".to_string());
    }
    if record.rating >= config.highly_rated_min {
        verified_fields.push("highly_rated".to_string());
    }

    let verification_status = if completion_percentage >= config.verified_completion_min
        && contact_confidence_score >= config.verified_contact_min
    {
        VerificationStatus::Verified
    } else if completion_percentage >= config.partial_completion_min
        || contact_confidence_score >= config.partial_contact_min
    {
        VerificationStatus::Partial
    } else {
        VerificationStatus::Unverified
    };

    QualityMetrics {
        completion_percentage,
        verified_fields,
        verification_status,
        contact_confidence_score,
    }
}
