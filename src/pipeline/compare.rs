//! Water-spread comparison
//!
//! Classifies a period's water spread against the historical maximum
//! and renders the human-readable statement.

use std::fmt;

use serde::Serialize;

/// Direction of change against the historical maximum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increased,
    Decreased,
    Unchanged,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Increased => write!(f, "increased"),
            Trend::Decreased => write!(f, "decreased"),
            Trend::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// Signed comparison of a period metric against the historical maximum
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Comparison {
    /// Direction of change
    pub trend: Trend,
    /// Period area minus historical maximum, in square kilometers
    pub delta_km2: f64,
}

impl Comparison {
    /// Compare a period area against the historical maximum
    ///
    /// Exact equality classifies as unchanged; there is no rounding
    /// tolerance.
    ///
    /// # Arguments
    /// * `period_km2` - Water area for the queried period
    /// * `max_km2` - All-time-maximum water area for the same region
    pub fn between(period_km2: f64, max_km2: f64) -> Self {
        let delta = period_km2 - max_km2;
        let trend = if delta > 0.0 {
            Trend::Increased
        } else if delta < 0.0 {
            Trend::Decreased
        } else {
            Trend::Unchanged
        };

        Comparison {
            trend,
            delta_km2: delta,
        }
    }

    /// Human-readable comparison statement, two decimal places
    pub fn statement(&self) -> String {
        match self.trend {
            Trend::Unchanged => {
                "Water spread is unchanged from the historical maximum.".to_string()
            }
            trend => format!(
                "Water spread {} by {:.2} sq. km compared to the historical maximum.",
                trend,
                self.delta_km2.abs()
            ),
        }
    }
}
