//! Region listing command

use clap::ArgMatches;
use log::info;

use crate::catalog::RegionTable;
use crate::commands::command_traits::Command;
use crate::commands::load_config;
use crate::pipeline::errors::FloodResult;
use crate::utils::logger::Logger;

/// Command for listing the known regions of interest
pub struct RegionsCommand<'a> {
    /// Optional config file path
    config_path: Option<String>,
    /// Optional region table override
    roi_table: Option<String>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> RegionsCommand<'a> {
    /// Create a new listing command from CLI arguments
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> FloodResult<Self> {
        Ok(RegionsCommand {
            config_path: args.get_one::<String>("config").cloned(),
            roi_table: args.get_one::<String>("roi-table").cloned(),
            logger,
        })
    }
}

impl<'a> Command for RegionsCommand<'a> {
    fn execute(&self) -> FloodResult<()> {
        let config = load_config(self.config_path.as_deref(), self.roi_table.as_deref())?;
        let table = RegionTable::load(&config.regions)?;

        info!("Known regions of interest ({}):", table.len());
        for region in table.iter() {
            info!("  {} -> {}", region.name, region.geometry);
        }

        self.logger.log("Region listing completed")?;
        Ok(())
    }
}
