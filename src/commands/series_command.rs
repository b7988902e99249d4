//! Yearly series command
//!
//! Computes the per-year water-spread series for a region over an
//! inclusive year range and prints one line per year.

use chrono::NaiveDate;
use clap::ArgMatches;
use log::{debug, info};

use crate::catalog::{RegionRecord, RegionTable};
use crate::commands::command_traits::Command;
use crate::commands::{load_config, parse_threshold_arg};
use crate::imagery::client::HostedImageryClient;
use crate::imagery::metric::MetricEngine;
use crate::pipeline::errors::{FloodError, FloodResult};
use crate::pipeline::series::YearlySeriesGenerator;
use crate::text::region::RegionResolver;
use crate::utils::logger::Logger;

/// Command for generating a yearly water-spread series
pub struct SeriesCommand<'a> {
    /// Free-form query text, used when no explicit region is given
    query: Option<String>,
    /// Explicit region name, when given
    region: Option<String>,
    /// First year of the series, inclusive
    start_year: i32,
    /// Last year of the series, inclusive
    end_year: i32,
    /// Threshold override in dB, when given
    threshold_db: Option<f64>,
    /// Optional config file path
    config_path: Option<String>,
    /// Optional region table override
    roi_table: Option<String>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> SeriesCommand<'a> {
    /// Create a new series command from CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new SeriesCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> FloodResult<Self> {
        let range = args.get_one::<String>("series")
            .ok_or_else(|| FloodError::GenericError("Missing year range".to_string()))?;
        let (start_year, end_year) = parse_year_range(range)?;

        Ok(SeriesCommand {
            query: args.get_one::<String>("query").cloned(),
            region: args.get_one::<String>("region").cloned(),
            start_year,
            end_year,
            threshold_db: parse_threshold_arg(args)?,
            config_path: args.get_one::<String>("config").cloned(),
            roi_table: args.get_one::<String>("roi-table").cloned(),
            logger,
        })
    }

    /// Pick the region from the explicit flag or the query text
    fn resolve_region<'t>(&self, table: &'t RegionTable, cutoff: f64) -> FloodResult<&'t RegionRecord> {
        if let Some(name) = &self.region {
            return table
                .get(name)
                .ok_or_else(|| FloodError::RegionNotFound(name.clone()));
        }

        let text = self.query.as_deref().unwrap_or("");
        if text.trim().is_empty() {
            return Err(FloodError::EmptyQuery);
        }

        RegionResolver::with_cutoff(table, cutoff)
            .resolve(text)
            .ok_or_else(|| FloodError::RegionNotFound(text.trim().to_string()))
    }
}

impl<'a> Command for SeriesCommand<'a> {
    fn execute(&self) -> FloodResult<()> {
        let config = load_config(self.config_path.as_deref(), self.roi_table.as_deref())?;
        let table = RegionTable::load(&config.regions)?;
        let region = self.resolve_region(&table, config.query.fuzzy_cutoff)?;
        let threshold_db = self.threshold_db.unwrap_or(config.metric.threshold_db);

        info!(
            "Yearly series for {} from {} to {}, threshold {} dB",
            region.name, self.start_year, self.end_year, threshold_db
        );

        let client = HostedImageryClient::from_config(&config.service)?;
        let engine = MetricEngine::from_config(&client, &config);

        // One base collection spanning all requested years
        let span_start = NaiveDate::from_ymd_opt(self.start_year, 1, 1)
            .ok_or_else(|| FloodError::DateRange(format!("year {} is out of range", self.start_year)))?;
        let span_end = NaiveDate::from_ymd_opt(self.end_year, 12, 31)
            .ok_or_else(|| FloodError::DateRange(format!("year {} is out of range", self.end_year)))?;
        let collection = engine.period_collection(&region.geometry, span_start, span_end)?;
        debug!("Base collection holds {} scenes", collection.image_count);

        let generator = YearlySeriesGenerator::new(&engine);
        let series = generator.generate(
            &collection,
            &region.geometry,
            threshold_db,
            self.start_year,
            self.end_year,
        )?;

        for entry in &series {
            match entry.area_km2 {
                Some(area) => info!("{}: {:.2} sq. km", entry.year, area),
                None => info!("{}: no data", entry.year),
            }
        }

        self.logger.log("Series completed successfully")?;
        Ok(())
    }
}

/// Parse an inclusive "FROM,TO" year range
fn parse_year_range(range: &str) -> FloodResult<(i32, i32)> {
    let parts: Vec<&str> = range.split(',').collect();
    if parts.len() != 2 {
        return Err(FloodError::DateRange(
            "year range must be given as FROM,TO".to_string(),
        ));
    }

    let start: i32 = parts[0].trim().parse()
        .map_err(|_| FloodError::DateRange(format!("invalid start year '{}'", parts[0].trim())))?;
    let end: i32 = parts[1].trim().parse()
        .map_err(|_| FloodError::DateRange(format!("invalid end year '{}'", parts[1].trim())))?;

    if end < start {
        return Err(FloodError::DateRange(format!(
            "start year {} is after end year {}", start, end
        )));
    }

    Ok((start, end))
}
