//! Water-spread metric engine
//!
//! Computes the scalar water-spread metric for a region and period:
//! filter the SAR collection, let the service reduce it to a clipped
//! mean composite, classify pixels below the backscatter threshold as
//! water, and aggregate their area. The engine converts the service's
//! square-meter aggregate to square kilometers.

use chrono::NaiveDate;
use log::info;
use serde::Serialize;

use crate::catalog::{GeometryRef, RegionRecord};
use crate::config::FloodkitConfig;
use crate::imagery::filter::{CollectionQuery, SarFilter};
use crate::imagery::service::{ImageCollection, ImageryService};
use crate::pipeline::errors::{FloodError, FloodResult};

/// Default backscatter ceiling (dB) for the water class
pub const DEFAULT_THRESHOLD_DB: f64 = -15.0;

/// Default ground sampling distance (meters) for area aggregation
pub const DEFAULT_SCALE_M: f64 = 30.0;

/// Computed water-spread metric for one region and period
#[derive(Debug, Clone, Serialize)]
pub struct WaterMetric {
    /// Region key the metric was computed for
    pub region: String,
    /// First day of the period, inclusive
    pub start: NaiveDate,
    /// Last day of the period, inclusive
    pub end: NaiveDate,
    /// Classified water area in square kilometers; None when no
    /// scenes covered the period
    pub area_km2: Option<f64>,
}

impl WaterMetric {
    /// Whether the period had no usable scenes
    pub fn is_no_data(&self) -> bool {
        self.area_km2.is_none()
    }
}

/// Orchestrates metric computation against an imagery service
pub struct MetricEngine<'a> {
    service: &'a dyn ImageryService,
    collection: String,
    filter: SarFilter,
    scale_m: f64,
}

impl<'a> MetricEngine<'a> {
    /// Create an engine with explicit parameters
    ///
    /// # Arguments
    /// * `service` - Imagery service to delegate to
    /// * `collection` - Collection identifier to query
    /// * `filter` - Polarization and mode constraints
    /// * `scale_m` - Ground sampling distance for aggregation
    pub fn new(
        service: &'a dyn ImageryService,
        collection: &str,
        filter: SarFilter,
        scale_m: f64,
    ) -> Self {
        MetricEngine {
            service,
            collection: collection.to_string(),
            filter,
            scale_m,
        }
    }

    /// Create an engine from the runtime configuration
    pub fn from_config(service: &'a dyn ImageryService, config: &FloodkitConfig) -> Self {
        MetricEngine::new(
            service,
            &config.service.collection,
            SarFilter::from_config(&config.metric),
            config.metric.scale_m,
        )
    }

    /// Filter the collection for a period given in inclusive dates
    ///
    /// # Arguments
    /// * `geometry` - Boundary the scenes must intersect
    /// * `start` - First day of the period, inclusive
    /// * `end` - Last day of the period, inclusive
    pub fn period_collection(
        &self,
        geometry: &GeometryRef,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FloodResult<ImageCollection> {
        if end < start {
            return Err(FloodError::DateRange(format!(
                "start {} is after end {}", start, end
            )));
        }

        // The service window is end-exclusive; widen by a day so
        // acquisitions on the end date are included
        let end_exclusive = end.succ_opt().ok_or_else(|| {
            FloodError::DateRange(format!("end date {} is out of range", end))
        })?;

        self.service.filter_collection(&CollectionQuery {
            collection: self.collection.clone(),
            geometry: geometry.clone(),
            start,
            end: end_exclusive,
            filter: self.filter.clone(),
        })
    }

    /// Narrow a collection to a half-open `[start, end)` window
    pub fn refine(
        &self,
        collection: &ImageCollection,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FloodResult<ImageCollection> {
        self.service.refine_dates(collection, start, end)
    }

    /// Water area of a collection's mean composite, in km²
    ///
    /// # Returns
    /// The classified area, or None when the collection is empty or
    /// the service reports no aggregate
    pub fn water_area_km2(
        &self,
        collection: &ImageCollection,
        geometry: &GeometryRef,
        threshold_db: f64,
    ) -> FloodResult<Option<f64>> {
        let area_m2 = self
            .service
            .mean_water_area(collection, geometry, threshold_db, self.scale_m)?;

        Ok(area_m2.map(|a| a / 1_000_000.0))
    }

    /// Compute the full metric for a region and period
    ///
    /// # Arguments
    /// * `region` - Catalog record to measure
    /// * `start` - First day of the period, inclusive
    /// * `end` - Last day of the period, inclusive
    /// * `threshold_db` - Backscatter ceiling for the water class
    pub fn measure(
        &self,
        region: &RegionRecord,
        start: NaiveDate,
        end: NaiveDate,
        threshold_db: f64,
    ) -> FloodResult<WaterMetric> {
        let collection = self.period_collection(&region.geometry, start, end)?;
        let area_km2 = self.water_area_km2(&collection, &region.geometry, threshold_db)?;

        match area_km2 {
            Some(area) => info!(
                "{}: {:.2} sq. km of water between {} and {}",
                region.name, area, start, end
            ),
            None => info!(
                "{}: no SAR scenes between {} and {}",
                region.name, start, end
            ),
        }

        Ok(WaterMetric {
            region: region.key.clone(),
            start,
            end,
            area_km2,
        })
    }
}
