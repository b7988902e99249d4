//! Region-of-interest records
//!
//! A region of interest is a named geographic boundary used to scope
//! imagery queries. The boundary itself lives with the imagery service;
//! this crate only carries an opaque reference to it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque reference to a polygon boundary held by the imagery service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeometryRef(String);

impl GeometryRef {
    /// Wrap a service-side geometry reference
    pub fn new(reference: impl Into<String>) -> Self {
        GeometryRef(reference.into())
    }

    /// The raw reference string understood by the service
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeometryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GeometryRef {
    fn from(reference: &str) -> Self {
        GeometryRef(reference.to_string())
    }
}

/// One entry of the region table, immutable after load
#[derive(Debug, Clone, Serialize)]
pub struct RegionRecord {
    /// Normalized lowercase lookup key
    pub key: String,
    /// Human-readable name as given in the table
    pub name: String,
    /// Boundary reference passed to the imagery service
    pub geometry: GeometryRef,
    /// Where this record was loaded from
    pub source: String,
}

impl RegionRecord {
    /// Create a record, deriving the lookup key from the name
    ///
    /// # Arguments
    /// * `name` - Human-readable region name
    /// * `geometry` - Service-side boundary reference
    /// * `source` - Table path or "embedded"
    pub fn new(name: &str, geometry: GeometryRef, source: &str) -> Self {
        RegionRecord {
            key: name.trim().to_lowercase(),
            name: name.trim().to_string(),
            geometry,
            source: source.to_string(),
        }
    }
}
