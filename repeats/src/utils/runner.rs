// Wires the configured run together: build the graph, then drive the
// search and print hits, following the same "one function the binary
// calls" shape as `generate_reads/src/utils/runner.rs`'s `run_neat`.

use crate::error::RepeatsError;
use crate::graph::{build_raw_graph, prune_graph, scale_graph, IndexedGraph};
use crate::search::{RepeatsSearch, SearchParams};
use crate::utils::config::RunConfiguration;
use fasta_source::{BaseCursor, KmerStream};
use log::info;
use std::io::Write;

pub fn run_repeats<W: Write>(config: RunConfiguration, mut out: W) -> Result<(), RepeatsError> {
    info!("# Generating graph of k-meres");
    let stream = KmerStream::open(&config.fasta_file, config.kmer_len, 0)?;
    let raw = build_raw_graph(stream)?;

    info!("# Scaling graph of k-meres");
    let scaled = scale_graph(raw, config.scaling);

    info!("# Pruning graph of k-meres");
    let pruned = prune_graph(scaled, config.abs_threshold, config.rel_threshold);

    info!("# Transforming graph of k-meres");
    let graph = IndexedGraph::build(pruned, config.kmer_len, config.exact_match)?;

    info!("# Starting search procedure");
    let cursor = BaseCursor::open(&config.fasta_file)?;
    let params = SearchParams {
        max_drop: config.max_drop as f64,
        insertion_penalty: config.insert_pen,
        gap_penalty: config.gap_pen,
        base_penalty: config.base_pen,
        exact_start: config.exact_match,
    };
    let driver = RepeatsSearch::new(cursor, &graph, params, config.min_value, config.fast_skip, config.skip);

    for hit in driver {
        let hit = hit?;
        writeln!(out, "{} {} {} {}", hit.contig, hit.start, hit.end, hit.score)?;
    }

    Ok(())
}
