//! End-to-end query pipeline
//!
//! Resolves a request into a region and date range, computes the
//! period metric and the historical maximum, and assembles the full
//! report. All state is per-request; nothing is shared across queries
//! and nothing survives a failed one.

use chrono::{Local, NaiveDate};
use log::info;
use serde::Serialize;

use crate::catalog::{RegionRecord, RegionTable};
use crate::config::FloodkitConfig;
use crate::imagery::layers::MapLayerSpec;
use crate::imagery::metric::{MetricEngine, WaterMetric};
use crate::imagery::service::ImageryService;
use crate::pipeline::compare::Comparison;
use crate::pipeline::errors::{FloodError, FloodResult};
use crate::text::date_range::DateRangeResolver;
use crate::text::region::RegionResolver;
use crate::text::tagger::RegexDateTagger;

/// One query, as supplied by the user
///
/// Free text drives resolution; explicit fields bypass it. A request
/// with neither text nor an explicit region cannot be served.
#[derive(Debug, Clone, Default)]
pub struct QueryRequest {
    /// Free-form query text (possibly a speech transcript)
    pub text: Option<String>,
    /// Explicit region name, bypassing fuzzy resolution
    pub region: Option<String>,
    /// Explicit period start, bypassing date resolution
    pub start: Option<NaiveDate>,
    /// Explicit period end, bypassing date resolution
    pub end: Option<NaiveDate>,
    /// Override of the configured water threshold (dB)
    pub threshold_db: Option<f64>,
}

/// Everything a front end needs to render an answer
#[derive(Debug, Clone, Serialize)]
pub struct QueryReport {
    /// Region the query resolved to
    pub region: RegionRecord,
    /// Period start, inclusive
    pub start: NaiveDate,
    /// Period end, inclusive
    pub end: NaiveDate,
    /// Threshold the metric was computed with (dB)
    pub threshold_db: f64,
    /// Metric for the queried period
    pub period: WaterMetric,
    /// Metric over the full historical archive
    pub historical_max: WaterMetric,
    /// Comparison of the two, when both carry data
    pub comparison: Option<Comparison>,
    /// Human-readable summary of the outcome
    pub statement: String,
    /// Layers for the map surface
    pub layers: Vec<MapLayerSpec>,
}

/// Per-request pipeline over a region table and an imagery service
pub struct QueryPipeline<'a> {
    table: &'a RegionTable,
    service: &'a dyn ImageryService,
    config: &'a FloodkitConfig,
}

impl<'a> QueryPipeline<'a> {
    /// Create a pipeline
    ///
    /// # Arguments
    /// * `table` - Region catalog
    /// * `service` - Imagery service to compute metrics against
    /// * `config` - Effective runtime configuration
    pub fn new(
        table: &'a RegionTable,
        service: &'a dyn ImageryService,
        config: &'a FloodkitConfig,
    ) -> Self {
        QueryPipeline {
            table,
            service,
            config,
        }
    }

    /// Run a request against the current local date
    pub fn run(&self, request: &QueryRequest) -> FloodResult<QueryReport> {
        self.run_at(request, Local::now().date_naive())
    }

    /// Run a request against a fixed anchor date
    ///
    /// # Arguments
    /// * `request` - The query to serve
    /// * `today` - Anchor for relative dates, defaults and the
    ///   historical range end
    pub fn run_at(&self, request: &QueryRequest, today: NaiveDate) -> FloodResult<QueryReport> {
        let region = self.resolve_region(request)?;
        let (start, end) = self.resolve_dates(request, today)?;
        let threshold_db = request
            .threshold_db
            .unwrap_or(self.config.metric.threshold_db);

        info!(
            "Query resolved: region '{}', period {} to {}, threshold {} dB",
            region.name, start, end, threshold_db
        );

        let engine = MetricEngine::from_config(self.service, self.config);

        let period_collection = engine.period_collection(&region.geometry, start, end)?;
        let period_area = engine.water_area_km2(&period_collection, &region.geometry, threshold_db)?;
        let period = WaterMetric {
            region: region.key.clone(),
            start,
            end,
            area_km2: period_area,
        };

        let historical_max = engine.measure(
            region,
            self.config.history.start_date,
            today,
            threshold_db,
        )?;

        let comparison = match (period.area_km2, historical_max.area_km2) {
            (Some(p), Some(m)) => Some(Comparison::between(p, m)),
            _ => None,
        };

        let statement = build_statement(region, &period, &historical_max, comparison.as_ref());

        let layers = vec![
            MapLayerSpec::region_boundary(region),
            MapLayerSpec::sar_mean(&period_collection.id),
            MapLayerSpec::surface_water_occurrence(region),
        ];

        Ok(QueryReport {
            region: region.clone(),
            start,
            end,
            threshold_db,
            period,
            historical_max,
            comparison,
            statement,
            layers,
        })
    }

    /// Pick the region: explicit name first, then text resolution
    fn resolve_region(&self, request: &QueryRequest) -> FloodResult<&'a RegionRecord> {
        if let Some(name) = &request.region {
            return self
                .table
                .get(name)
                .ok_or_else(|| FloodError::RegionNotFound(name.clone()));
        }

        let text = request.text.as_deref().unwrap_or("");
        if text.trim().is_empty() {
            return Err(FloodError::EmptyQuery);
        }

        let resolver = RegionResolver::with_cutoff(self.table, self.config.query.fuzzy_cutoff);
        resolver
            .resolve(text)
            .ok_or_else(|| FloodError::RegionNotFound(text.trim().to_string()))
    }

    /// Pick the period: explicit dates override resolved ones
    fn resolve_dates(
        &self,
        request: &QueryRequest,
        today: NaiveDate,
    ) -> FloodResult<(NaiveDate, NaiveDate)> {
        let (start, end) = match (request.start, request.end) {
            (Some(s), Some(e)) => (s, e),
            (explicit_start, explicit_end) => {
                let tagger = RegexDateTagger::new();
                let resolver = DateRangeResolver::with_policy(
                    &tagger,
                    self.config.query.default_window_days,
                    self.config.query.equal_dates_end_today,
                );
                let (s, e) = resolver.resolve_at(request.text.as_deref().unwrap_or(""), today);
                (explicit_start.unwrap_or(s), explicit_end.unwrap_or(e))
            }
        };

        if end < start {
            return Err(FloodError::DateRange(format!(
                "start {} is after end {}", start, end
            )));
        }

        Ok((start, end))
    }
}

/// Render the report's summary sentence
fn build_statement(
    region: &RegionRecord,
    period: &WaterMetric,
    historical_max: &WaterMetric,
    comparison: Option<&Comparison>,
) -> String {
    match (period.area_km2, comparison) {
        (None, _) => format!(
            "No SAR scenes cover {} between {} and {}.",
            region.name, period.start, period.end
        ),
        (Some(area), Some(comparison)) => format!(
            "{} shows {:.2} sq. km of water between {} and {}. {}",
            region.name,
            area,
            period.start,
            period.end,
            comparison.statement()
        ),
        (Some(area), None) => format!(
            "{} shows {:.2} sq. km of water between {} and {}. \
             No historical baseline is available since {}.",
            region.name, area, period.start, period.end, historical_max.start
        ),
    }
}
