use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

use floodkit::utils::logger::Logger;
use floodkit::commands::{CommandFactory, FloodkitCommandFactory};

fn main() {
    let matches = ClapCommand::new("FloodKit")
        .version("0.1")
        .about("Resolve free-text flood queries and compute SAR water-spread metrics")
        .arg(
            Arg::new("query")
                .help("Free-text query, e.g. \"water spread of osmansagar since june 2023\"")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("region")
                .short('r')
                .long("region")
                .help("Region of interest by name, bypassing text resolution")
                .value_name("NAME")
                .required(false),
        )
        .arg(
            Arg::new("start")
                .long("start")
                .help("Period start (YYYY-MM-DD), bypassing date resolution")
                .value_name("DATE")
                .required(false),
        )
        .arg(
            Arg::new("end")
                .long("end")
                .help("Period end (YYYY-MM-DD), bypassing date resolution")
                .value_name("DATE")
                .required(false),
        )
        .arg(
            Arg::new("threshold")
                .short('t')
                .long("threshold")
                .help("Backscatter threshold in dB below which pixels count as water")
                .value_name("DB")
                .required(false),
        )
        .arg(
            Arg::new("series")
                .short('s')
                .long("series")
                .help("Compute a yearly series over an inclusive year range (FROM,TO)")
                .value_name("FROM,TO")
                .required(false),
        )
        .arg(
            Arg::new("list-regions")
                .long("list-regions")
                .help("List the known regions of interest")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the full report as JSON instead of a summary")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("roi-table")
                .long("roi-table")
                .help("CSV region table (ROI_Name, ROI_path columns)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML config file overriding the built-in defaults")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    let log_file = "floodkit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("floodkit-global.log") {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = FloodkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
