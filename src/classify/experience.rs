//! Experience-level classification.
//!
//! Unlike the environment extractors, absence of signal is informative here:
//! a listing that advertises neither beginner nor advanced material is
//! assumed to welcome all levels.

use crate::config::ExperienceConfig;
use crate::core::BusinessRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceProfile {
    pub beginner_friendly: bool,
    pub advanced_classes: bool,
    pub teacher_training: bool,
    /// True exactly when neither beginner nor advanced indicators fired.
    pub all_levels: bool,
}

/// Classify one record from its explicit flags and keyword matches over the
/// concatenated description, styles, and amenities text.
pub fn classify(record: &BusinessRecord, config: &ExperienceConfig) -> ExperienceProfile {
    let text = record.search_text();
    let matches_any =
        |keywords: &[String]| keywords.iter().any(|k| text.contains(&k.to_lowercase()));

    let beginner_friendly =
        record.beginner_friendly == Some(true) || matches_any(&config.beginner_keywords);

    let advanced_classes = record.advanced_classes == Some(true)
        || record.teacher_training == Some(true)
        || matches_any(&config.advanced_keywords);

    ExperienceProfile {
        beginner_friendly,
        advanced_classes,
        teacher_training: record.teacher_training == Some(true),
        all_levels: !beginner_friendly && !advanced_classes,
    }
}
