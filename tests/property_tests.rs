mod common;

use proptest::prelude::*;

use facetmap::classify::environment;
use facetmap::{
    apply_filters, classify_record, EnvironmentFacet, FacetConfig, FacetId, FilterSelection,
};

use common::RecordBuilder;

fn word() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "quiet", "daily", "sunrise", "flow", "retreat", "jungle", "bamboo", "beach", "surf",
        "rice", "terrace", "volcano", "hatha", "vinyasa",
    ])
}

fn city() -> impl Strategy<Value = Option<&'static str>> {
    prop::option::of(prop::sample::select(vec![
        "Ubud", "Canggu", "Seminyak", "Sanur", "Denpasar",
    ]))
}

fn arb_record() -> impl Strategy<Value = facetmap::BusinessRecord> {
    (prop::collection::vec(word(), 0..8), city(), 0u8..3).prop_map(|(words, city, contact)| {
        let mut builder = RecordBuilder::new(1, "Prop Studio").description(&words.join(" "));
        if let Some(city) = city {
            builder = builder.city(city);
        }
        if contact > 0 {
            builder = builder.contact(Some("a@b.example"), Some("+62 8"), None, None);
        }
        builder.build()
    })
}

fn arb_selection() -> impl Strategy<Value = FilterSelection> {
    let choice = prop::sample::select(vec![
        (FacetId::Location, "ubud"),
        (FacetId::Location, "canggu"),
        (FacetId::NaturalSetting, "beach_proximity"),
        (FacetId::NaturalSetting, "jungle_setting"),
        (FacetId::Quality, "good_profiles"),
        (FacetId::Experience, "all_levels"),
        (FacetId::Services, "retreats"),
        (FacetId::Value, "budget"),
    ]);
    prop::collection::vec(choice, 0..4).prop_map(|choices| {
        let mut selection = FilterSelection::new();
        for (facet, option) in choices {
            selection.select(facet, option);
        }
        selection
    })
}

proptest! {
    /// Corroborating prose can only raise an inferred confidence.
    #[test]
    fn prop_extra_keyword_never_lowers_confidence(record in arb_record()) {
        let config = FacetConfig::default();
        let before = environment::detect(
            EnvironmentFacet::JungleSetting,
            &record,
            &config.environment,
        );

        let mut louder = record.clone();
        let description = louder.business_description.take().unwrap_or_default();
        louder.business_description = Some(format!("{} jungle", description));
        let after = environment::detect(
            EnvironmentFacet::JungleSetting,
            &louder,
            &config.environment,
        );

        prop_assert!(after.confidence >= before.confidence);
        prop_assert!(after.likely || !before.likely);
    }

    /// Filtering an already-filtered collection changes nothing.
    #[test]
    fn prop_apply_is_idempotent(
        records in prop::collection::vec(arb_record(), 0..12),
        selection in arb_selection(),
    ) {
        let config = FacetConfig::default();
        let once = apply_filters(&records, &selection, &config);
        let twice = apply_filters(&once, &selection, &config);
        prop_assert_eq!(&once, &twice);
    }

    /// A selection survives the query-string round trip.
    #[test]
    fn prop_query_round_trip(selection in arb_selection()) {
        let restored = FilterSelection::from_query(&selection.to_query());
        prop_assert_eq!(restored, selection);
    }

    /// Every record classifies without panicking and lands in well-formed
    /// ranges, however sparse the input.
    #[test]
    fn prop_classification_is_total(record in arb_record()) {
        let config = FacetConfig::default();
        let derived = classify_record(&record, &config);

        prop_assert!(derived.quality.completion_percentage <= 100);
        prop_assert!((0.0..=1.0).contains(&derived.price.confidence));
        for facet in EnvironmentFacet::ALL {
            let signal = derived.environment.signal(facet);
            prop_assert!((0.0..=1.0).contains(&signal.confidence));
        }
    }
}
