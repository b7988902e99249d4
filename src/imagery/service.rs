//! Imagery service contract
//!
//! The heavy lifting of compositing and aggregation happens in an
//! external imagery/analytics service. This module pins down the
//! contract the rest of the crate relies on; implementations only need
//! to marshal these three operations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::GeometryRef;
use crate::imagery::filter::CollectionQuery;
use crate::pipeline::errors::FloodResult;

/// Server-side handle to a filtered image collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageCollection {
    /// Opaque collection identifier issued by the service
    pub id: String,
    /// Number of scenes in the collection
    pub image_count: u32,
}

impl ImageCollection {
    /// Whether the collection holds no scenes at all
    pub fn is_empty(&self) -> bool {
        self.image_count == 0
    }
}

/// External imagery/analytics capability
///
/// All date ranges are half-open `[start, end)`. A collection with no
/// scenes is a valid handle; aggregating over it reports no data
/// rather than failing.
pub trait ImageryService {
    /// Filter a collection down to the scenes matching the query
    fn filter_collection(&self, query: &CollectionQuery) -> FloodResult<ImageCollection>;

    /// Narrow an existing collection to a new acquisition window
    ///
    /// # Arguments
    /// * `collection` - Handle from a previous filter call
    /// * `start` - First acquisition date, inclusive
    /// * `end` - End of the window, exclusive
    fn refine_dates(
        &self,
        collection: &ImageCollection,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FloodResult<ImageCollection>;

    /// Water area under the collection's mean composite
    ///
    /// The service reduces the collection to a per-pixel mean
    /// composite clipped to the geometry, classifies pixels below the
    /// threshold as water, and sums their area at the given ground
    /// sampling distance.
    ///
    /// # Arguments
    /// * `collection` - Handle from a previous filter call
    /// * `geometry` - Boundary to clip and aggregate over
    /// * `threshold_db` - Backscatter ceiling for the water class
    /// * `scale_m` - Ground sampling distance in meters
    ///
    /// # Returns
    /// Classified area in square meters, or None when the collection
    /// is empty or the service reports no aggregate
    fn mean_water_area(
        &self,
        collection: &ImageCollection,
        geometry: &GeometryRef,
        threshold_db: f64,
        scale_m: f64,
    ) -> FloodResult<Option<f64>>;
}
