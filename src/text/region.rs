//! Region name resolution
//!
//! Scans query tokens left to right and fuzzy-matches each against the
//! catalog names. The first token scoring above the cutoff wins, even
//! if a later token would score higher; earlier mentions take priority.

use log::debug;

use crate::catalog::{RegionRecord, RegionTable};
use crate::text::fuzzy;
use crate::text::tokenize::tokenize;

/// Default similarity cutoff for accepting a region match
pub const DEFAULT_CUTOFF: f64 = 0.8;

/// Resolves a region of interest from free text
pub struct RegionResolver<'a> {
    table: &'a RegionTable,
    cutoff: f64,
}

impl<'a> RegionResolver<'a> {
    /// Create a resolver with the default cutoff
    pub fn new(table: &'a RegionTable) -> Self {
        RegionResolver {
            table,
            cutoff: DEFAULT_CUTOFF,
        }
    }

    /// Create a resolver with an explicit similarity cutoff
    pub fn with_cutoff(table: &'a RegionTable, cutoff: f64) -> Self {
        RegionResolver { table, cutoff }
    }

    /// Resolve the region mentioned in the text
    ///
    /// # Arguments
    /// * `text` - Free-form query text
    ///
    /// # Returns
    /// The matched catalog record, or None when no token clears the
    /// cutoff
    pub fn resolve(&self, text: &str) -> Option<&'a RegionRecord> {
        for token in tokenize(text) {
            if let Some(key) = fuzzy::close_match(&token, self.table.keys(), self.cutoff) {
                debug!("Token '{}' matched region '{}'", token, key);
                return self.table.get(key);
            }
        }

        debug!("No region match in query text");
        None
    }
}
