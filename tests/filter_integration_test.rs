mod common;

use std::collections::BTreeSet;

use facetmap::{apply_filters, apply_filters_with_stats, FacetConfig, FacetId, FilterSelection};

use common::sample_collection;

fn ids(records: &[facetmap::BusinessRecord]) -> Vec<u64> {
    records.iter().map(|r| r.id).collect()
}

#[test]
fn test_empty_selection_returns_everything() {
    let records = sample_collection();
    let config = FacetConfig::default();

    let matched = apply_filters(&records, &FilterSelection::new(), &config);
    assert_eq!(matched.len(), records.len());
}

#[test]
fn test_categories_intersect_options_union() {
    let records = sample_collection();
    let config = FacetConfig::default();

    let mut beach_only = FilterSelection::new();
    beach_only.select(FacetId::NaturalSetting, "beach_proximity");
    let beach_ids: BTreeSet<u64> = ids(&apply_filters(&records, &beach_only, &config))
        .into_iter()
        .collect();

    let mut experienced = FilterSelection::new();
    experienced.select(FacetId::Experience, "advanced_classes");
    let advanced_ids: BTreeSet<u64> = ids(&apply_filters(&records, &experienced, &config))
        .into_iter()
        .collect();

    // Two categories at once must match exactly the intersection of the
    // single-category results.
    let mut both = FilterSelection::new();
    both.select(FacetId::NaturalSetting, "beach_proximity");
    both.select(FacetId::Experience, "advanced_classes");
    let both_ids: BTreeSet<u64> = ids(&apply_filters(&records, &both, &config))
        .into_iter()
        .collect();
    let expected: BTreeSet<u64> = beach_ids.intersection(&advanced_ids).copied().collect();
    assert_eq!(both_ids, expected);

    // Two options inside one multi-select category must match the union.
    let mut either = FilterSelection::new();
    either.select(FacetId::NaturalSetting, "beach_proximity");
    either.select(FacetId::NaturalSetting, "jungle_setting");

    let mut jungle_only = FilterSelection::new();
    jungle_only.select(FacetId::NaturalSetting, "jungle_setting");
    let jungle_ids: BTreeSet<u64> = ids(&apply_filters(&records, &jungle_only, &config))
        .into_iter()
        .collect();

    let either_ids: BTreeSet<u64> = ids(&apply_filters(&records, &either, &config))
        .into_iter()
        .collect();
    let expected: BTreeSet<u64> = beach_ids.union(&jungle_ids).copied().collect();
    assert_eq!(either_ids, expected);
}

#[test]
fn test_filtering_is_idempotent() {
    let records = sample_collection();
    let config = FacetConfig::default();

    let mut selection = FilterSelection::new();
    selection.select(FacetId::Quality, "verified_studios");
    selection.select(FacetId::Services, "teacher_training");

    let once = apply_filters(&records, &selection, &config);
    let twice = apply_filters(&once, &selection, &config);
    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn test_location_constraint_narrows_to_area() {
    let records = sample_collection();
    let config = FacetConfig::default();

    let mut selection = FilterSelection::new();
    selection.select(FacetId::Location, "ubud");

    let matched = apply_filters(&records, &selection, &config);
    assert_eq!(ids(&matched), vec![1]);
}

#[test]
fn test_location_replaces_prior_location_choice() {
    let records = sample_collection();
    let config = FacetConfig::default();

    let mut selection = FilterSelection::new();
    selection.select(FacetId::Location, "ubud");
    selection.select(FacetId::Location, "canggu");

    // Single-select facet keeps only the latest option.
    assert_eq!(
        selection.selected(FacetId::Location).map(|s| s.len()),
        Some(1)
    );
    let matched = apply_filters(&records, &selection, &config);
    assert_eq!(ids(&matched), vec![2]);
}

#[test]
fn test_location_and_natural_setting_are_mutually_exclusive() {
    let mut selection = FilterSelection::new();
    selection.select(FacetId::Location, "ubud");
    selection.select(FacetId::NaturalSetting, "jungle_setting");

    assert!(selection.selected(FacetId::Location).is_none());
    assert!(selection.is_selected(FacetId::NaturalSetting, "jungle_setting"));

    selection.select(FacetId::Location, "canggu");
    assert!(selection.selected(FacetId::NaturalSetting).is_none());
    assert!(selection.is_selected(FacetId::Location, "canggu"));
}

#[test]
fn test_unknown_option_matches_nothing() {
    let records = sample_collection();
    let config = FacetConfig::default();

    let mut selection = FilterSelection::new();
    selection.select(FacetId::Quality, "no_such_option");

    let (matched, stats) = apply_filters_with_stats(&records, &selection, &config);
    assert!(matched.is_empty());
    assert_eq!(stats.rejected_by.get("quality"), Some(&records.len()));
}

#[test]
fn test_stats_attribute_rejections_to_first_failing_category() {
    let records = sample_collection();
    let config = FacetConfig::default();

    let mut selection = FilterSelection::new();
    selection.select(FacetId::Location, "seminyak");
    selection.select(FacetId::Services, "teacher_training");

    let (matched, stats) = apply_filters_with_stats(&records, &selection, &config);
    assert_eq!(ids(&matched), vec![3]);
    assert_eq!(stats.total_records, 5);
    assert_eq!(stats.matched, 1);
    // Everything that fails does so at the location gate first.
    assert_eq!(stats.rejected_by.get("location"), Some(&4));
    assert!(!stats.rejected_by.contains_key("services"));
}
