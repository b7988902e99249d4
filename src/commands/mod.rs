//! CLI command implementations
//!
//! This module contains implementations of the commands supported by
//! the CLI application using the Command pattern.

pub mod command_traits;
pub mod query_command;
pub mod regions_command;
pub mod series_command;

pub use command_traits::{Command, CommandFactory};
pub use query_command::QueryCommand;
pub use regions_command::RegionsCommand;
pub use series_command::SeriesCommand;

use std::path::Path;

use chrono::NaiveDate;
use clap::ArgMatches;

use crate::config::FloodkitConfig;
use crate::pipeline::errors::{FloodError, FloodResult};
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct FloodkitCommandFactory;

impl FloodkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        FloodkitCommandFactory
    }
}

impl<'a> CommandFactory<'a> for FloodkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> FloodResult<Box<dyn Command + 'a>> {
        // Determine which command to run based on args
        if args.get_flag("list-regions") {
            Ok(Box::new(RegionsCommand::new(args, logger)?))
        } else if args.contains_id("series") {
            Ok(Box::new(SeriesCommand::new(args, logger)?))
        } else {
            // Default to answering the query
            Ok(Box::new(QueryCommand::new(args, logger)?))
        }
    }
}

/// Load the effective configuration for a command
///
/// # Arguments
/// * `config_path` - Optional config file overriding the defaults
/// * `roi_table` - Optional region table path overriding the config
pub fn load_config(config_path: Option<&str>, roi_table: Option<&str>) -> FloodResult<FloodkitConfig> {
    let mut config = FloodkitConfig::load(config_path.map(Path::new))?;
    if let Some(path) = roi_table {
        config.regions.table_path = path.to_string();
    }
    Ok(config)
}

/// Parse an optional ISO date argument
pub fn parse_date_arg(args: &ArgMatches, name: &str) -> FloodResult<Option<NaiveDate>> {
    match args.get_one::<String>(name) {
        None => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| FloodError::DateRange(format!(
                "--{} must be a YYYY-MM-DD date, got '{}'", name, value
            ))),
    }
}

/// Parse the optional threshold override
pub fn parse_threshold_arg(args: &ArgMatches) -> FloodResult<Option<f64>> {
    match args.get_one::<String>("threshold") {
        None => Ok(None),
        Some(value) => value.trim().parse::<f64>()
            .map(Some)
            .map_err(|_| FloodError::GenericError(format!(
                "--threshold must be a number in dB, got '{}'", value
            ))),
    }
}
