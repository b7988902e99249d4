//! Yearly water-spread series
//!
//! Computes one metric value per calendar year over a filtered
//! collection. Years are processed in ascending order and the output
//! always follows that order; a year without scenes contributes a
//! no-data entry rather than a gap.

use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

use crate::catalog::GeometryRef;
use crate::imagery::metric::MetricEngine;
use crate::imagery::service::ImageCollection;
use crate::pipeline::errors::{FloodError, FloodResult};
use crate::utils::progress::ProgressTracker;

/// Water area for one calendar year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyArea {
    /// Calendar year the value covers
    pub year: i32,
    /// Classified water area in square kilometers; None when the year
    /// had no scenes
    pub area_km2: Option<f64>,
}

/// Generates ascending per-year metric series
pub struct YearlySeriesGenerator<'a> {
    engine: &'a MetricEngine<'a>,
}

impl<'a> YearlySeriesGenerator<'a> {
    /// Create a generator over a metric engine
    pub fn new(engine: &'a MetricEngine<'a>) -> Self {
        YearlySeriesGenerator { engine }
    }

    /// Compute the series for an inclusive year range
    ///
    /// Each year narrows the collection to `[Jan 1, Jan 1 of the next
    /// year)` and runs the composite/threshold/aggregate step.
    ///
    /// # Arguments
    /// * `collection` - Base collection spanning all requested years
    /// * `geometry` - Boundary to aggregate over
    /// * `threshold_db` - Backscatter ceiling for the water class
    /// * `start_year` - First year, inclusive
    /// * `end_year` - Last year, inclusive
    ///
    /// # Returns
    /// One entry per year, ordered ascending
    pub fn generate(
        &self,
        collection: &ImageCollection,
        geometry: &GeometryRef,
        threshold_db: f64,
        start_year: i32,
        end_year: i32,
    ) -> FloodResult<Vec<YearlyArea>> {
        if end_year < start_year {
            return Err(FloodError::DateRange(format!(
                "start year {} is after end year {}",
                start_year, end_year
            )));
        }

        let count = (end_year - start_year + 1) as u64;
        let progress = ProgressTracker::new(count, "Computing yearly water spread");
        let mut series = Vec::with_capacity(count as usize);

        for year in start_year..=end_year {
            let from = year_start(year)?;
            let to = year_start(year + 1)?;

            let yearly = self.engine.refine(collection, from, to)?;
            let area_km2 = self.engine.water_area_km2(&yearly, geometry, threshold_db)?;

            debug!(
                "Year {}: {} scenes, area {:?}",
                year, yearly.image_count, area_km2
            );
            series.push(YearlyArea { year, area_km2 });
            progress.increment(1);
        }

        progress.finish();
        Ok(series)
    }
}

fn year_start(year: i32) -> FloodResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| FloodError::DateRange(format!("year {} is out of range", year)))
}
