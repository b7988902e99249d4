//! SAR collection filters
//!
//! Parameters narrowing an imagery collection to the scenes relevant
//! for water detection: boundary, acquisition window, polarization and
//! instrument mode.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::GeometryRef;
use crate::config::MetricConfig;

/// Default polarization band for water detection
pub const DEFAULT_POLARIZATION: &str = "VV";

/// Default SAR acquisition mode
pub const DEFAULT_INSTRUMENT_MODE: &str = "IW";

/// Polarization and acquisition-mode filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SarFilter {
    /// Transmit/receive polarization the scenes must carry
    pub polarization: String,
    /// Acquisition mode the scenes must be taken in
    pub instrument_mode: String,
}

impl SarFilter {
    /// Build the filter configured for the metric engine
    pub fn from_config(config: &MetricConfig) -> Self {
        SarFilter {
            polarization: config.polarization.clone(),
            instrument_mode: config.instrument_mode.clone(),
        }
    }
}

impl Default for SarFilter {
    fn default() -> Self {
        SarFilter {
            polarization: DEFAULT_POLARIZATION.to_string(),
            instrument_mode: DEFAULT_INSTRUMENT_MODE.to_string(),
        }
    }
}

/// Full collection query sent to the imagery service
///
/// The date range is half-open: scenes acquired on `start` up to but
/// not including `end` are selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionQuery {
    /// Collection identifier, e.g. "COPERNICUS/S1_GRD"
    pub collection: String,
    /// Boundary the scenes must intersect
    pub geometry: GeometryRef,
    /// First acquisition date, inclusive
    pub start: NaiveDate,
    /// End of the window, exclusive
    pub end: NaiveDate,
    /// Polarization and mode constraints
    pub filter: SarFilter,
}
