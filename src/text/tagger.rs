//! Date span tagging
//!
//! Finds the DATE-typed spans of a free-text query. The default
//! implementation is a pattern tagger; anything heavier (a neural
//! entity tagger behind a service) can be slotted in through the
//! `DateTagger` trait.

use lazy_static::lazy_static;
use regex::Regex;

/// Month name alternation, full names or common three-letter prefixes
const MONTHS: &str = "jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|\
jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";

lazy_static! {
    // Ordered most specific first: the alternation is tried in order
    // at each position, so "june 1, 2023" is taken whole rather than
    // as the month-year "june ... 2023".
    static ref DATE_SPAN: Regex = Regex::new(&format!(
        r"(?ix)\b(?:
            \d{{4}}-\d{{2}}-\d{{2}}
           |\d{{1,2}}/\d{{1,2}}/\d{{4}}
           |(?:{m})\s+\d{{1,2}}(?:st|nd|rd|th)?(?:\s*,\s*|\s+)\d{{4}}
           |\d{{1,2}}(?:st|nd|rd|th)?\s+(?:{m})(?:\s*,\s*|\s+)\d{{4}}
           |(?:{m})\s+\d{{4}}
           |\d+\s+days?\s+ago
           |last\s+(?:week|month|year)
           |today|yesterday|tomorrow
        )\b",
        m = MONTHS
    ))
    .unwrap();
}

/// Extracts DATE-typed spans from text
pub trait DateTagger {
    /// All date-like spans, in order of appearance
    fn date_spans(&self, text: &str) -> Vec<String>;
}

/// Pattern-based date tagger
///
/// Recognizes ISO dates, slash dates, month-name forms, month-year
/// forms, and common relative phrases.
#[derive(Debug, Default)]
pub struct RegexDateTagger;

impl RegexDateTagger {
    /// Create a new pattern tagger
    pub fn new() -> Self {
        RegexDateTagger
    }
}

impl DateTagger for RegexDateTagger {
    fn date_spans(&self, text: &str) -> Vec<String> {
        DATE_SPAN
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
