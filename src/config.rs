//! Runtime configuration
//!
//! Configuration is layered: compiled-in defaults from `floodkit.toml`
//! are parsed once at startup, and a user-supplied TOML file can
//! override any subset of them. Credentials and table locations are
//! always references (file paths), never inline values.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use lazy_static::lazy_static;
use serde::Deserialize;

use crate::imagery::metric::{DEFAULT_SCALE_M, DEFAULT_THRESHOLD_DB};
use crate::pipeline::errors::{FloodError, FloodResult};
use crate::text::region::DEFAULT_CUTOFF;

lazy_static! {
    // Parse the embedded defaults at startup
    static ref DEFAULTS: FloodkitConfig = {
        let content = include_str!("../floodkit.toml");
        toml::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse embedded configuration defaults: {}", e);
            FloodkitConfig::default()
        })
    };
}

/// Top-level FloodKit configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FloodkitConfig {
    /// Imagery/analytics service connection
    #[serde(default)]
    pub service: ServiceConfig,
    /// Region-of-interest table source
    #[serde(default)]
    pub regions: RegionsConfig,
    /// Water-metric parameters
    #[serde(default)]
    pub metric: MetricConfig,
    /// Historical archive bounds
    #[serde(default)]
    pub history: HistoryConfig,
    /// Query resolution policy
    #[serde(default)]
    pub query: QueryConfig,
}

/// Connection settings for the hosted imagery service
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the analytics endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Path to a file holding the bearer token
    #[serde(default)]
    pub credential_file: String,
    /// SAR collection identifier queried for metrics
    #[serde(default = "default_collection")]
    pub collection: String,
}

/// Where the region table comes from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegionsConfig {
    /// CSV table path; empty selects the built-in demo catalog
    #[serde(default)]
    pub table_path: String,
}

/// Water-metric parameters
#[derive(Debug, Clone, Deserialize)]
pub struct MetricConfig {
    /// Backscatter threshold in dB below which a pixel counts as water
    #[serde(default = "default_threshold_db")]
    pub threshold_db: f64,
    /// Ground sampling distance in meters for area aggregation
    #[serde(default = "default_scale_m")]
    pub scale_m: f64,
    /// SAR polarization band
    #[serde(default = "default_polarization")]
    pub polarization: String,
    /// SAR acquisition mode
    #[serde(default = "default_instrument_mode")]
    pub instrument_mode: String,
}

/// Historical archive bounds for the maximum-spread baseline
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    /// First date of the archive considered for the historical maximum
    #[serde(default = "default_history_start")]
    pub start_date: NaiveDate,
}

/// Query resolution policy
#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    /// Trailing window (days) applied when no dates are mentioned
    #[serde(default = "default_window_days")]
    pub default_window_days: i64,
    /// Snap the range end to today when all mentioned dates coincide
    #[serde(default = "default_equal_dates")]
    pub equal_dates_end_today: bool,
    /// Similarity cutoff for fuzzy region matching
    #[serde(default = "default_fuzzy_cutoff")]
    pub fuzzy_cutoff: f64,
}

fn default_endpoint() -> String {
    "https://analytics.example.org/v1".to_string()
}

fn default_collection() -> String {
    "COPERNICUS/S1_GRD".to_string()
}

fn default_threshold_db() -> f64 {
    DEFAULT_THRESHOLD_DB
}

fn default_scale_m() -> f64 {
    DEFAULT_SCALE_M
}

fn default_polarization() -> String {
    "VV".to_string()
}

fn default_instrument_mode() -> String {
    "IW".to_string()
}

fn default_history_start() -> NaiveDate {
    // Routine Sentinel-1 GRD acquisitions begin here
    NaiveDate::from_ymd_opt(2014, 10, 3).unwrap_or(NaiveDate::MIN)
}

fn default_window_days() -> i64 {
    14
}

fn default_equal_dates() -> bool {
    true
}

fn default_fuzzy_cutoff() -> f64 {
    DEFAULT_CUTOFF
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            endpoint: default_endpoint(),
            credential_file: String::new(),
            collection: default_collection(),
        }
    }
}

impl Default for MetricConfig {
    fn default() -> Self {
        MetricConfig {
            threshold_db: default_threshold_db(),
            scale_m: default_scale_m(),
            polarization: default_polarization(),
            instrument_mode: default_instrument_mode(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            start_date: default_history_start(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        QueryConfig {
            default_window_days: default_window_days(),
            equal_dates_end_today: default_equal_dates(),
            fuzzy_cutoff: default_fuzzy_cutoff(),
        }
    }
}

impl FloodkitConfig {
    /// Load configuration, starting from the embedded defaults
    ///
    /// # Arguments
    /// * `path` - Optional path to a TOML file overriding the defaults
    ///
    /// # Returns
    /// The effective configuration, or an error if the file cannot be
    /// read or parsed
    pub fn load(path: Option<&Path>) -> FloodResult<Self> {
        match path {
            None => Ok(DEFAULTS.clone()),
            Some(p) => {
                let content = fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| {
                    FloodError::ConfigError(format!("{}: {}", p.display(), e))
                })
            }
        }
    }

    /// The compiled-in defaults
    pub fn defaults() -> Self {
        DEFAULTS.clone()
    }
}
