use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "kmer-hist", about = "Print a per-contig k-mer frequency histogram for a FASTA file")]
pub struct Cli {
    /// FASTA file to scan.
    pub fasta_file: String,

    #[arg(short = 'w', long = "window", default_value_t = 7, help = "Length of the sliding k-mer window")]
    pub window: usize,
    #[arg(long = "show", default_value_t = 100, help = "Top N most frequent k-mers to print per contig")]
    pub show: usize,
    #[arg(long = "width", default_value_t = 180, help = "Target line width for the column layout")]
    pub width: usize,

    #[arg(long="log-level", default_value_t=String::from("Info"), help="Trace, Debug, Info, Warn, Error, or Off")]
    pub log_level: String,
    #[arg(long="log-dest", default_value_t=String::from("kmer-hist.log"), help="Full path and name to log file")]
    pub log_dest: String,
}
