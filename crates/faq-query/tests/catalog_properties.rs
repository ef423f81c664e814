//! Query properties over the authored catalog.

use faq_core::Audience;
use faq_query::{FaqCatalog, FaqFilter};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

#[fixture]
fn catalog() -> FaqCatalog {
    FaqCatalog::authored()
}

#[rstest]
fn unified_total_is_sum_of_audiences(catalog: FaqCatalog) {
    let unified = catalog.unified();
    let sum: usize = Audience::ALL
        .into_iter()
        .map(|audience| unified.by_audience(audience).len())
        .sum();
    assert_eq!(unified.all().len(), sum);

    let stats = unified.stats();
    assert_eq!(stats.total, sum);
    assert_eq!(stats.general + stats.provider + stats.client, stats.total);
    assert_eq!(stats.categories, unified.all_categories().len());
}

#[rstest]
fn all_categories_are_exactly_the_entry_categories(catalog: FaqCatalog) {
    let unified = catalog.unified();
    let categories = unified.all_categories();

    let mut deduped = categories.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), categories.len());

    for entry in unified.all() {
        assert!(categories.contains(&entry.category));
    }
    for category in &categories {
        assert!(!unified.by_category(category).is_empty());
    }
}

#[rstest]
fn queries_are_idempotent(catalog: FaqCatalog) {
    let unified = catalog.unified();
    assert_eq!(unified.search("paiement"), unified.search("paiement"));
    assert_eq!(unified.popular(), unified.popular());
    assert_eq!(unified.most_frequent(), unified.most_frequent());

    let journey = catalog.journey(Audience::Client).unwrap().entries();
    assert_eq!(journey.all_ordered(), journey.all_ordered());
    assert_eq!(journey.search_journey("avis"), journey.search_journey("avis"));
}

#[rstest]
fn empty_filter_matches_all(catalog: FaqCatalog) {
    let unified = catalog.unified();
    assert_eq!(unified.filter(&FaqFilter::default()), unified.all());
}

#[rstest]
fn audience_and_category_filter_is_an_intersection(catalog: FaqCatalog) {
    let unified = catalog.unified();
    let filter = FaqFilter::default()
        .audience(Audience::Provider)
        .category("inscription");
    let hits = unified.filter(&filter);

    assert!(!hits.is_empty());
    assert!(
        hits.iter()
            .all(|e| e.audience == Audience::Provider && e.category == "inscription")
    );
    let all_sign_up = unified.by_category("inscription");
    assert!(all_sign_up.len() > hits.len());
}

#[rstest]
fn unified_search_matches_category_name(catalog: FaqCatalog) {
    let unified = catalog.unified();
    let hits = unified.search("inscription");
    let by_text_only: Vec<_> = hits
        .iter()
        .filter(|e| {
            !e.question.to_lowercase().contains("inscription")
                && !e.answer.to_lowercase().contains("inscription")
        })
        .collect();
    assert!(!by_text_only.is_empty());
    assert!(by_text_only.iter().all(|e| e.category == "inscription"));
}

#[rstest]
fn unknown_category_is_empty_everywhere(catalog: FaqCatalog) {
    let unified = catalog.unified();
    assert!(unified.by_category("non-existent").is_empty());
    for audience in Audience::ALL {
        assert!(
            unified
                .service(audience)
                .entries()
                .by_category("non-existent")
                .is_empty()
        );
    }
}

#[rstest]
fn journey_lookup_by_id(catalog: FaqCatalog) {
    let provider = catalog.journey(Audience::Provider).unwrap().entries();
    let first = provider.by_id("presta-inscription-1").unwrap();
    assert_eq!(first, &provider.all()[0]);
    assert!(provider.by_id("nonexistent").is_none());
}

#[rstest]
fn tagged_entries_carry_audience_labels(catalog: FaqCatalog) {
    for entry in catalog.unified().all() {
        assert_eq!(entry.source_label, entry.audience.label());
    }
}
