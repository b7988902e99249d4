//! Date range resolution
//!
//! Applies the range policy to the dates mentioned in a query: no
//! dates gives a trailing window ending today, a single date is read
//! as "since that date", and two or more dates span from the earliest
//! to the latest mention.

use chrono::{Duration, Local, NaiveDate};
use log::debug;

use crate::text::parse::parse_natural;
use crate::text::tagger::DateTagger;

/// Resolves free text into a (start, end) calendar date pair
pub struct DateRangeResolver<'a> {
    tagger: &'a dyn DateTagger,
    /// Trailing window in days used when no dates are found
    window_days: i64,
    /// Snap the end to today whenever start and end coincide, even if
    /// the same date was mentioned more than once. Off, only a single
    /// date mention gets the "since X" treatment.
    equal_dates_end_today: bool,
}

impl<'a> DateRangeResolver<'a> {
    /// Create a resolver with the default policy (14-day window,
    /// equal dates snap the end to today)
    pub fn new(tagger: &'a dyn DateTagger) -> Self {
        DateRangeResolver {
            tagger,
            window_days: 14,
            equal_dates_end_today: true,
        }
    }

    /// Create a resolver with an explicit policy
    ///
    /// # Arguments
    /// * `tagger` - Date span tagger
    /// * `window_days` - Trailing window when no dates are found
    /// * `equal_dates_end_today` - Snap coinciding dates' end to today
    pub fn with_policy(
        tagger: &'a dyn DateTagger,
        window_days: i64,
        equal_dates_end_today: bool,
    ) -> Self {
        DateRangeResolver {
            tagger,
            window_days,
            equal_dates_end_today,
        }
    }

    /// Resolve a range against the current local date
    pub fn resolve(&self, text: &str) -> (NaiveDate, NaiveDate) {
        self.resolve_at(text, Local::now().date_naive())
    }

    /// Resolve a range against a fixed anchor date
    ///
    /// # Arguments
    /// * `text` - Free-form query text
    /// * `today` - Anchor used for relative phrases and defaults
    ///
    /// # Returns
    /// A (start, end) pair with start <= end
    pub fn resolve_at(&self, text: &str, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let spans = self.tagger.date_spans(text);
        let mut dates: Vec<NaiveDate> = spans
            .iter()
            .filter_map(|span| parse_natural(span, today))
            .collect();
        dates.sort();

        debug!("Tagged {} date spans, {} parsed", spans.len(), dates.len());

        if dates.is_empty() {
            return (today - Duration::days(self.window_days), today);
        }

        let start = dates[0];
        let mut end = dates[dates.len() - 1];

        if start == end && (self.equal_dates_end_today || dates.len() == 1) {
            end = today;
        }

        // A future date snapped to today would invert the range
        if end < start {
            end = start;
        }

        (start, end)
    }
}
