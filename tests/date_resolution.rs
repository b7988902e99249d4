//! Date range resolution behavior

mod common;

use common::date;
use floodkit::text::{DateRangeResolver, RegexDateTagger};

fn resolver(tagger: &RegexDateTagger) -> DateRangeResolver<'_> {
    DateRangeResolver::new(tagger)
}

#[test]
fn no_dates_defaults_to_trailing_window() {
    let tagger = RegexDateTagger::new();
    let today = date(2024, 5, 15);

    let (start, end) = resolver(&tagger).resolve_at("how much water is there", today);

    assert_eq!(start, date(2024, 5, 1));
    assert_eq!(end, today);
}

#[test]
fn two_distinct_dates_span_min_to_max() {
    let tagger = RegexDateTagger::new();
    let today = date(2024, 5, 15);

    let (start, end) = resolver(&tagger)
        .resolve_at("flooding between June 1, 2023 and 2023-08-15", today);

    assert_eq!(start, date(2023, 6, 1));
    assert_eq!(end, date(2023, 8, 15));
}

#[test]
fn dates_out_of_order_are_sorted() {
    let tagger = RegexDateTagger::new();
    let today = date(2024, 5, 15);

    let (start, end) = resolver(&tagger)
        .resolve_at("compare 2023-08-15 against June 1, 2023", today);

    assert_eq!(start, date(2023, 6, 1));
    assert_eq!(end, date(2023, 8, 15));
}

#[test]
fn single_date_is_read_as_since() {
    let tagger = RegexDateTagger::new();
    let today = date(2024, 5, 15);

    let (start, end) = resolver(&tagger).resolve_at("water spread since June 2023", today);

    assert_eq!(start, date(2023, 6, 1));
    assert_eq!(end, today);
}

#[test]
fn repeated_equal_dates_snap_end_to_today() {
    let tagger = RegexDateTagger::new();
    let today = date(2024, 5, 15);

    let (start, end) = resolver(&tagger)
        .resolve_at("2023-06-01, I mean 2023-06-01", today);

    assert_eq!(start, date(2023, 6, 1));
    assert_eq!(end, today);
}

#[test]
fn repeated_equal_dates_stay_single_day_with_snap_off() {
    let tagger = RegexDateTagger::new();
    let today = date(2024, 5, 15);
    let resolver = DateRangeResolver::with_policy(&tagger, 14, false);

    let (start, end) = resolver.resolve_at("2023-06-01, I mean 2023-06-01", today);

    assert_eq!(start, date(2023, 6, 1));
    assert_eq!(end, date(2023, 6, 1));
}

#[test]
fn single_mention_is_since_even_with_snap_off() {
    let tagger = RegexDateTagger::new();
    let today = date(2024, 5, 15);
    let resolver = DateRangeResolver::with_policy(&tagger, 14, false);

    let (start, end) = resolver.resolve_at("flooding on 2023-06-01", today);

    assert_eq!(start, date(2023, 6, 1));
    assert_eq!(end, today);
}

#[test]
fn relative_phrase_anchors_to_today() {
    let tagger = RegexDateTagger::new();
    let today = date(2024, 5, 15);

    let (start, end) = resolver(&tagger).resolve_at("flooding since 14 days ago", today);

    assert_eq!(start, date(2024, 5, 1));
    assert_eq!(end, today);
}

#[test]
fn future_date_never_inverts_the_range() {
    let tagger = RegexDateTagger::new();
    let today = date(2024, 5, 15);

    let (start, end) = resolver(&tagger).resolve_at("what about tomorrow", today);

    assert_eq!(start, date(2024, 5, 16));
    assert!(start <= end);
}

#[test]
fn custom_window_is_honored() {
    let tagger = RegexDateTagger::new();
    let today = date(2024, 5, 15);
    let resolver = DateRangeResolver::with_policy(&tagger, 30, true);

    let (start, end) = resolver.resolve_at("anything flooded lately?", today);

    assert_eq!(start, date(2024, 4, 15));
    assert_eq!(end, today);
}
