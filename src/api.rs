use chrono::{Local, NaiveDate};
use log::info;

use crate::catalog::{RegionRecord, RegionTable};
use crate::config::FloodkitConfig;
use crate::imagery::client::HostedImageryClient;
use crate::imagery::metric::{MetricEngine, WaterMetric};
use crate::imagery::service::ImageryService;
use crate::pipeline::errors::{FloodError, FloodResult};
use crate::pipeline::run::{QueryPipeline, QueryReport, QueryRequest};
use crate::pipeline::series::{YearlyArea, YearlySeriesGenerator};
use crate::text::date_range::DateRangeResolver;
use crate::text::region::RegionResolver;
use crate::text::tagger::RegexDateTagger;
use crate::utils::logger::Logger;

/// Main interface to the FloodKit library
///
/// Holds the effective configuration and the loaded region table;
/// imagery services are passed per call, so every query carries its
/// own state.
pub struct FloodKit {
    logger: Logger,
    config: FloodkitConfig,
    table: RegionTable,
}

impl FloodKit {
    /// Create a new FloodKit instance
    ///
    /// # Arguments
    /// * `config_path` - Optional path to a TOML config file; defaults
    ///   to the compiled-in configuration
    /// * `log_file` - Optional path to log file, defaults to "floodkit.log"
    ///
    /// # Returns
    /// A FloodKit instance or an error if initialization fails
    pub fn new(config_path: Option<&str>, log_file: Option<&str>) -> FloodResult<Self> {
        let config = FloodkitConfig::load(config_path.map(std::path::Path::new))?;
        Self::with_config(config, log_file)
    }

    /// Create an instance from an already-built configuration
    pub fn with_config(config: FloodkitConfig, log_file: Option<&str>) -> FloodResult<Self> {
        let log_path = log_file.unwrap_or("floodkit.log");
        let logger = Logger::new(log_path)?;
        let table = RegionTable::load(&config.regions)?;

        Ok(FloodKit {
            logger,
            config,
            table,
        })
    }

    /// The effective configuration
    pub fn config(&self) -> &FloodkitConfig {
        &self.config
    }

    /// The loaded region catalog
    pub fn regions(&self) -> &RegionTable {
        &self.table
    }

    /// Connect to the configured hosted imagery service
    pub fn connect(&self) -> FloodResult<HostedImageryClient> {
        HostedImageryClient::from_config(&self.config.service)
    }

    /// Answer a full query: resolve, measure, compare, report
    ///
    /// # Arguments
    /// * `service` - Imagery service to compute metrics against
    /// * `request` - Free text and/or explicit scoping
    ///
    /// # Returns
    /// The assembled report or an error
    pub fn analyze(
        &self,
        service: &dyn ImageryService,
        request: &QueryRequest,
    ) -> FloodResult<QueryReport> {
        let pipeline = QueryPipeline::new(&self.table, service, &self.config);
        let report = pipeline.run(request)?;
        self.logger.log(&report.statement)?;
        Ok(report)
    }

    /// Water-spread metric for a region and inclusive period
    ///
    /// # Arguments
    /// * `service` - Imagery service to compute the metric against
    /// * `region` - Region name from the catalog
    /// * `start` - First day of the period, inclusive
    /// * `end` - Last day of the period, inclusive
    /// * `threshold_db` - Optional override of the configured threshold
    pub fn water_area(
        &self,
        service: &dyn ImageryService,
        region: &str,
        start: NaiveDate,
        end: NaiveDate,
        threshold_db: Option<f64>,
    ) -> FloodResult<WaterMetric> {
        let record = self.lookup(region)?;
        let engine = MetricEngine::from_config(service, &self.config);
        engine.measure(
            record,
            start,
            end,
            threshold_db.unwrap_or(self.config.metric.threshold_db),
        )
    }

    /// Per-year water-spread series over an inclusive year range
    ///
    /// # Arguments
    /// * `service` - Imagery service to compute metrics against
    /// * `region` - Region name from the catalog
    /// * `start_year` - First year, inclusive
    /// * `end_year` - Last year, inclusive
    /// * `threshold_db` - Optional override of the configured threshold
    ///
    /// # Returns
    /// One entry per year, ordered ascending
    pub fn yearly_series(
        &self,
        service: &dyn ImageryService,
        region: &str,
        start_year: i32,
        end_year: i32,
        threshold_db: Option<f64>,
    ) -> FloodResult<Vec<YearlyArea>> {
        let record = self.lookup(region)?;
        let engine = MetricEngine::from_config(service, &self.config);

        let span_start = NaiveDate::from_ymd_opt(start_year, 1, 1)
            .ok_or_else(|| FloodError::DateRange(format!("year {} is out of range", start_year)))?;
        let span_end = NaiveDate::from_ymd_opt(end_year, 12, 31)
            .ok_or_else(|| FloodError::DateRange(format!("year {} is out of range", end_year)))?;
        let collection = engine.period_collection(&record.geometry, span_start, span_end)?;

        info!(
            "Generating yearly series for {} over {} scenes",
            record.name, collection.image_count
        );

        YearlySeriesGenerator::new(&engine).generate(
            &collection,
            &record.geometry,
            threshold_db.unwrap_or(self.config.metric.threshold_db),
            start_year,
            end_year,
        )
    }

    /// Resolve the region mentioned in free text
    pub fn resolve_region(&self, text: &str) -> Option<&RegionRecord> {
        RegionResolver::with_cutoff(&self.table, self.config.query.fuzzy_cutoff).resolve(text)
    }

    /// Resolve the date range mentioned in free text
    pub fn resolve_dates(&self, text: &str) -> (NaiveDate, NaiveDate) {
        let tagger = RegexDateTagger::new();
        DateRangeResolver::with_policy(
            &tagger,
            self.config.query.default_window_days,
            self.config.query.equal_dates_end_today,
        )
        .resolve_at(text, Local::now().date_naive())
    }

    fn lookup(&self, region: &str) -> FloodResult<&RegionRecord> {
        self.table
            .get(region)
            .ok_or_else(|| FloodError::RegionNotFound(region.to_string()))
    }
}
