// Export modules for library usage
pub mod catalog;
pub mod classify;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod engine;
pub mod filter;
pub mod io;

// Re-export commonly used types
pub use crate::catalog::{build_catalog, FacetCategory, FacetOption};
pub use crate::classify::{
    classify_record, DerivedClassification, EnvironmentFacet, EnvironmentProfile,
    ExperienceProfile, FacetSignal, PriceEstimate, PriceTier, QualityMetrics, VerificationStatus,
};
pub use crate::config::FacetConfig;
pub use crate::core::{BusinessRecord, Offering, PriceRange};
pub use crate::engine::Directory;
pub use crate::filter::{
    apply_filters, apply_filters_with_stats, FacetId, FilterSelection, FilterStatistics,
};
pub use crate::io::{load_records, CatalogReport, FilterReport, OutputFormat};
