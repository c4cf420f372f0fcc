use clap::Parser;
use kmer_hist::cli::Cli;
use kmer_hist::histogram::{count_kmers, format_table};
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

    let tables = count_kmers(&args.fasta_file, args.window).unwrap_or_else(|err| {
        eprintln!("# {err}");
        process::exit(1);
    });

    for table in tables {
        println!("Stats for {}", table.contig);
        print!("{}", format_table(&table.counts, args.width, args.show));
    }
}
