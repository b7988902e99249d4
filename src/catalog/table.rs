//! Region table loading
//!
//! The table is a CSV file with at least `ROI_Name` and `ROI_path`
//! columns. It is read fully into memory at startup and never changes
//! for the lifetime of the process. When no table path is configured,
//! a small built-in demo catalog is used instead.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;

use crate::catalog::region::{GeometryRef, RegionRecord};
use crate::config::RegionsConfig;
use crate::pipeline::errors::{FloodError, FloodResult};

/// Built-in demo catalog used when no table path is configured
const EMBEDDED_TABLE: &str = include_str!("../../default_regions.csv");

/// CSV row shape of the region table
#[derive(Debug, Deserialize)]
struct RegionRow {
    #[serde(rename = "ROI_Name")]
    roi_name: String,
    #[serde(rename = "ROI_path")]
    roi_path: String,
}

/// In-memory region catalog, keyed by normalized region name
#[derive(Debug, Clone, Default)]
pub struct RegionTable {
    regions: BTreeMap<String, RegionRecord>,
}

impl RegionTable {
    /// Load the table named by the configuration
    ///
    /// An empty `table_path` selects the embedded demo catalog.
    pub fn load(config: &RegionsConfig) -> FloodResult<Self> {
        if config.table_path.trim().is_empty() {
            Self::embedded()
        } else {
            Self::from_path(Path::new(config.table_path.trim()))
        }
    }

    /// Load the embedded demo catalog
    pub fn embedded() -> FloodResult<Self> {
        Self::from_reader(EMBEDDED_TABLE.as_bytes(), "embedded")
    }

    /// Load a region table from a CSV file
    ///
    /// # Arguments
    /// * `path` - Path to the CSV table
    ///
    /// # Returns
    /// The loaded table, or an error if the file cannot be read or a
    /// row fails to parse
    pub fn from_path(path: &Path) -> FloodResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(file, &path.display().to_string())
    }

    /// Load a region table from any CSV reader
    ///
    /// # Arguments
    /// * `reader` - CSV source with a header row
    /// * `source` - Label recorded on each region for diagnostics
    pub fn from_reader<R: Read>(reader: R, source: &str) -> FloodResult<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut regions = BTreeMap::new();

        for row in csv_reader.deserialize() {
            let row: RegionRow = row?;
            if row.roi_name.trim().is_empty() {
                warn!("Skipping region table row with empty ROI_Name");
                continue;
            }

            let record = RegionRecord::new(
                &row.roi_name,
                GeometryRef::new(row.roi_path.trim()),
                source,
            );

            if regions.contains_key(&record.key) {
                warn!("Duplicate region '{}' in table, keeping the later row", record.key);
            }
            regions.insert(record.key.clone(), record);
        }

        if regions.is_empty() {
            return Err(FloodError::ConfigError(format!(
                "region table '{}' contains no usable rows", source
            )));
        }

        debug!("Loaded {} regions from {}", regions.len(), source);
        Ok(RegionTable { regions })
    }

    /// Look up a region by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&RegionRecord> {
        self.regions.get(&name.trim().to_lowercase())
    }

    /// Normalized lookup keys, in stable order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(|k| k.as_str())
    }

    /// All records, in stable key order
    pub fn iter(&self) -> impl Iterator<Item = &RegionRecord> {
        self.regions.values()
    }

    /// Number of regions in the table
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
