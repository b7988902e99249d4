//! Water-spread query command
//!
//! Resolves a free-text (or explicitly scoped) query, computes the
//! period water metric and the historical comparison, and prints the
//! report.

use clap::ArgMatches;
use log::{debug, info};

use crate::catalog::RegionTable;
use crate::commands::command_traits::Command;
use crate::commands::{load_config, parse_date_arg, parse_threshold_arg};
use crate::imagery::client::HostedImageryClient;
use crate::pipeline::errors::{FloodError, FloodResult};
use crate::pipeline::run::{QueryPipeline, QueryReport, QueryRequest};
use crate::utils::logger::Logger;

/// Command for answering a single water-spread query
pub struct QueryCommand<'a> {
    /// Free-form query text, when given
    query: Option<String>,
    /// Explicit region name, when given
    region: Option<String>,
    /// Explicit period start, when given
    start: Option<chrono::NaiveDate>,
    /// Explicit period end, when given
    end: Option<chrono::NaiveDate>,
    /// Threshold override in dB, when given
    threshold_db: Option<f64>,
    /// Optional config file path
    config_path: Option<String>,
    /// Optional region table override
    roi_table: Option<String>,
    /// Whether to print the report as JSON
    json: bool,
    /// Whether to enable verbose output
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> QueryCommand<'a> {
    /// Create a new query command from CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new QueryCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> FloodResult<Self> {
        let query = args.get_one::<String>("query").cloned();
        let region = args.get_one::<String>("region").cloned();
        let start = parse_date_arg(args, "start")?;
        let end = parse_date_arg(args, "end")?;
        let threshold_db = parse_threshold_arg(args)?;

        if query.is_none() && region.is_none() {
            return Err(FloodError::EmptyQuery);
        }

        Ok(QueryCommand {
            query,
            region,
            start,
            end,
            threshold_db,
            config_path: args.get_one::<String>("config").cloned(),
            roi_table: args.get_one::<String>("roi-table").cloned(),
            json: args.get_flag("json"),
            verbose: args.get_flag("verbose"),
            logger,
        })
    }

    /// Print the resolved report
    fn display_report(&self, report: &QueryReport) {
        info!("Region: {} ({})", report.region.name, report.region.geometry);
        info!("Period: {} to {}", report.start, report.end);
        info!("Threshold: {} dB", report.threshold_db);

        match report.period.area_km2 {
            Some(area) => info!("Water spread: {:.2} sq. km", area),
            None => info!("Water spread: no data for this period"),
        }
        match report.historical_max.area_km2 {
            Some(area) => info!("Historical maximum: {:.2} sq. km (since {})",
                                area, report.historical_max.start),
            None => info!("Historical maximum: no data"),
        }

        info!("{}", report.statement);

        info!("Map layers:");
        for layer in &report.layers {
            info!("  {}", layer.name);
        }
    }
}

impl<'a> Command for QueryCommand<'a> {
    fn execute(&self) -> FloodResult<()> {
        if self.verbose {
            debug!("Verbose mode enabled");
        }

        let config = load_config(self.config_path.as_deref(), self.roi_table.as_deref())?;
        let table = RegionTable::load(&config.regions)?;
        debug!("Region table loaded with {} entries", table.len());

        let client = HostedImageryClient::from_config(&config.service)?;
        let pipeline = QueryPipeline::new(&table, &client, &config);

        let request = QueryRequest {
            text: self.query.clone(),
            region: self.region.clone(),
            start: self.start,
            end: self.end,
            threshold_db: self.threshold_db,
        };

        let report = pipeline.run(&request)?;

        if self.json {
            let rendered = serde_json::to_string_pretty(&report)
                .map_err(|e| FloodError::GenericError(format!("report serialization: {}", e)))?;
            println!("{}", rendered);
        } else {
            self.display_report(&report);
        }

        self.logger.log("Query completed successfully")?;
        Ok(())
    }
}
