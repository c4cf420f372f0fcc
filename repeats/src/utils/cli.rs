// Clap CLI for the repeat search. As in the root crate's own `cli.rs`, most
// of these options are folded into a `RunConfiguration` and can instead be
// supplied (and overridden) via a YAML configuration file; `log_level` and
// `log_dest` are the exception and always come straight from the command
// line.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "repeats",
    about = "Search a FASTA file for tandem-repeat and satellite regions using a k-mer transition graph"
)]
pub struct Cli {
    /// FASTA file to search.
    pub fasta_file: String,

    #[arg(short='C', long="configuration-yaml", default_value_t=String::new(),
        help="Full path to a configuration YAML file. This will override most other options")]
    pub config: String,

    #[arg(short = 'k', long = "kmer-len", default_value_t = 20, help = "Length of k-mers used to build the graph")]
    pub kmer_len: usize,
    #[arg(short = 't', long = "abs-threshold", default_value_t = 3.0, help = "Minimal scaled edge weight to keep")]
    pub abs_threshold: f64,
    #[arg(short = 'T', long = "rel-threshold", default_value_t = 0.0, help = "Percentage of max scaled weight used as a floor")]
    pub rel_threshold: f64,
    #[arg(short = 'S', long = "scaling", default_value_t = String::from("log1p"), help = "log1p or no-scale")]
    pub scaling: String,

    #[arg(short = 'm', long = "max-drop", default_value_t = 200, help = "Maximal drop in score before a search terminates")]
    pub max_drop: i64,
    #[arg(short = 'i', long = "insert-pen", default_value_t = 10.0, help = "Penalty for an insertion")]
    pub insert_pen: f64,
    #[arg(short = 'g', long = "gap-pen", default_value_t = 10.0, help = "Penalty for a gap")]
    pub gap_pen: f64,
    #[arg(short = 'b', long = "base-pen", default_value_t = 2.0, help = "Penalty added every step")]
    pub base_pen: f64,
    #[arg(short = 's', long = "skip", default_value_t = 0, help = "Bases of sequence to skip before searching")]
    pub skip: i64,
    #[arg(short = 'e', long = "exact-match", default_value_t = 7, help = "Exact-match length used for suffix-index seeding")]
    pub exact_match: usize,
    #[arg(long = "min-value", default_value_t = -1.0, help = "Minimum score for a hit to be emitted; defaults to max-drop")]
    pub min_value: f64,

    #[arg(long="log-level", default_value_t=String::from("Info"), help="Trace, Debug, Info, Warn, Error, or Off")]
    pub log_level: String,
    #[arg(long="log-dest", default_value_t=String::from("repeats.log"), help="Full path and name to log file")]
    pub log_dest: String,
}

// Tests are handled in config.rs, against a built RunConfiguration.
