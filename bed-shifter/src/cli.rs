use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bed-shifter", about = "Project BED features between coordinate systems")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long="log-level", default_value_t=String::from("Info"), help="Trace, Debug, Info, Warn, Error, or Off")]
    pub log_level: String,
    #[arg(long="log-dest", default_value_t=String::from("bed-shifter.log"), help="Full path and name to log file")]
    pub log_dest: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Projects every feature in `bedfile` through the coordinate systems named in `shift`.
    Shift {
        /// BED file to transform.
        bedfile: String,
        /// Shift file: old-contig, start, end, and optionally new-contig, per line.
        shift: String,
    },
    /// Rotates features whose line mentions END ahead of a `shift` run.
    RotateEnd {
        /// BED file to transform.
        bedfile: String,
    },
}
