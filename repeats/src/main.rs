use clap::Parser;
use log::{debug, info};
use repeats::utils::cli::Cli;
use repeats::utils::config::{build_config_from_args, read_config_yaml};
use repeats::utils::runner::run_repeats;
use std::process;

fn main() {
    let args = Cli::parse();

    let level = common::logger::parse_level_filter(&args.log_level).unwrap_or_else(|err| {
        eprintln!("# {err}");
        process::exit(1);
    });
    if let Err(err) = common::logger::init(level, &args.log_dest) {
        eprintln!("# could not set up logging: {err}");
        process::exit(1);
    }

    info!("# Begin processing");
    let config = if args.config.is_empty() {
        debug!("Using command line arguments");
        build_config_from_args(args)
    } else {
        info!("# Using configuration file: {}", args.config);
        read_config_yaml(&args.config)
    };

    let config = config.unwrap_or_else(|err| {
        eprintln!("# {err}");
        process::exit(1);
    });

    let stdout = std::io::stdout();
    if let Err(err) = run_repeats(config, stdout.lock()) {
        eprintln!("# {err}");
        process::exit(1);
    }
}
