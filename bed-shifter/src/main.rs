use bed_shifter::cli::{Cli, Command};
use bed_shifter::rotate::run_rotate_end;
use bed_shifter::shift::run_shift;
use clap::Parser;
use log::info;
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

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match &args.command {
        Command::Shift { bedfile, shift } => {
            info!("# Shifting {bedfile} through {shift}");
            run_shift(bedfile, shift, &mut out)
        }
        Command::RotateEnd { bedfile } => {
            info!("# Rotating END features in {bedfile}");
            run_rotate_end(bedfile, &mut out)
        }
    };

    if let Err(err) = result {
        eprintln!("# {err}");
        process::exit(1);
    }
}
