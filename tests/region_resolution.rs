//! Region resolution behavior

mod common;

use common::test_table;
use floodkit::text::RegionResolver;

#[test]
fn exact_name_resolves() {
    let table = test_table();
    let resolver = RegionResolver::new(&table);

    let region = resolver.resolve("water spread of osmansagar this month");
    assert_eq!(region.map(|r| r.key.as_str()), Some("osmansagar"));
}

#[test]
fn misspelled_name_resolves_through_fuzzy_match() {
    let table = test_table();
    let resolver = RegionResolver::new(&table);

    let region = resolver.resolve("how flooded is osmansagr right now");
    assert_eq!(region.map(|r| r.key.as_str()), Some("osmansagar"));
}

#[test]
fn first_mention_wins() {
    let table = test_table();
    let resolver = RegionResolver::new(&table);

    // Both names are present; the earlier token takes priority
    let region = resolver.resolve("compare hussansagar with osmansagar");
    assert_eq!(region.map(|r| r.key.as_str()), Some("hussansagar"));
}

#[test]
fn unrelated_text_resolves_to_none() {
    let table = test_table();
    let resolver = RegionResolver::new(&table);

    assert!(resolver.resolve("how is the weather in the city").is_none());
}

#[test]
fn resolution_is_deterministic() {
    let table = test_table();
    let resolver = RegionResolver::new(&table);
    let text = "flooding around karanja since last month";

    let first = resolver.resolve(text).map(|r| r.key.clone());
    for _ in 0..5 {
        assert_eq!(resolver.resolve(text).map(|r| r.key.clone()), first);
    }
    assert_eq!(first.as_deref(), Some("karanja"));
}

#[test]
fn cutoff_is_respected() {
    let table = test_table();

    // "osman" alone scores 2*5/15 = 0.67 against "osmansagar"
    let strict = RegionResolver::with_cutoff(&table, 0.8);
    assert!(strict.resolve("show me osman").is_none());

    let relaxed = RegionResolver::with_cutoff(&table, 0.6);
    assert_eq!(
        relaxed.resolve("show me osman").map(|r| r.key.as_str()),
        Some("osmansagar")
    );
}
