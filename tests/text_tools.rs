//! Tokenizer, fuzzy matcher, tagger and date parser behavior

mod common;

use common::date;
use floodkit::text::fuzzy::{close_match, ratio};
use floodkit::text::{parse_natural, tokenize, DateTagger, RegexDateTagger};

#[test]
fn tokenize_lowercases_and_splits_words() {
    let tokens = tokenize("Water spread of Osmansagar, please!");
    assert_eq!(tokens, vec!["water", "spread", "of", "osmansagar", "please"]);
}

#[test]
fn ratio_is_one_for_identical_strings() {
    assert_eq!(ratio("osmansagar", "osmansagar"), 1.0);
    assert_eq!(ratio("", ""), 1.0);
}

#[test]
fn ratio_is_zero_for_disjoint_strings() {
    assert_eq!(ratio("abc", "xyz"), 0.0);
}

#[test]
fn ratio_scores_close_misspellings_high() {
    // 9 of 9 and 10 characters align in matching blocks
    let score = ratio("osmansagr", "osmansagar");
    assert!(score > 0.9, "score was {}", score);
}

#[test]
fn close_match_requires_the_cutoff() {
    let names = ["osmansagar", "hussansagar", "karanja"];

    assert_eq!(close_match("osmansagr", names, 0.8), Some("osmansagar"));
    assert_eq!(close_match("lake", names, 0.8), None);
}

#[test]
fn close_match_prefers_the_best_candidate() {
    let names = ["sagar", "osmansagar"];
    assert_eq!(close_match("osmansagar", names, 0.5), Some("osmansagar"));
}

#[test]
fn tagger_finds_mixed_date_spans() {
    let tagger = RegexDateTagger::new();
    let spans = tagger.date_spans("from June 1, 2023 until 2023-08-15, not last week");

    assert_eq!(spans.len(), 3);
    assert_eq!(spans[0], "June 1, 2023");
    assert_eq!(spans[1], "2023-08-15");
    assert_eq!(spans[2], "last week");
}

#[test]
fn tagger_ignores_plain_text() {
    let tagger = RegexDateTagger::new();
    assert!(tagger.date_spans("water spread of karanja").is_empty());
}

#[test]
fn parse_absolute_forms() {
    let today = date(2024, 5, 15);

    assert_eq!(parse_natural("2023-06-01", today), Some(date(2023, 6, 1)));
    // Slash dates read day-first
    assert_eq!(parse_natural("01/06/2023", today), Some(date(2023, 6, 1)));
    assert_eq!(parse_natural("June 1, 2023", today), Some(date(2023, 6, 1)));
    assert_eq!(parse_natural("1st June 2023", today), Some(date(2023, 6, 1)));
    assert_eq!(parse_natural("June 2023", today), Some(date(2023, 6, 1)));
    assert_eq!(parse_natural("sept 3 2021", today), Some(date(2021, 9, 3)));
}

#[test]
fn parse_relative_forms() {
    let today = date(2024, 5, 15);

    assert_eq!(parse_natural("today", today), Some(today));
    assert_eq!(parse_natural("yesterday", today), Some(date(2024, 5, 14)));
    assert_eq!(parse_natural("3 days ago", today), Some(date(2024, 5, 12)));
    assert_eq!(parse_natural("last week", today), Some(date(2024, 5, 8)));
    assert_eq!(parse_natural("last month", today), Some(date(2024, 4, 15)));
    assert_eq!(parse_natural("last year", today), Some(date(2023, 5, 15)));
}

#[test]
fn unparseable_spans_are_discarded() {
    let today = date(2024, 5, 15);

    assert_eq!(parse_natural("sometime soon", today), None);
    assert_eq!(parse_natural("32/13/2023", today), None);
}
