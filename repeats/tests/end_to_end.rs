// End-to-end coverage of spec.md §8's scenarios, driving the library
// entry point the binary itself calls rather than the CLI process.

use repeats::graph::{build_raw_graph, prune_graph, scale_graph, IndexedGraph, Scaling};
use repeats::search::{RepeatsSearch, SearchParams};
use fasta_source::{BaseCursor, KmerStream};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_fasta(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn build_graph(path: &str, k: usize, suffix_len: usize) -> IndexedGraph {
    let stream = KmerStream::open(path, k, 0).unwrap();
    let raw = build_raw_graph(stream).unwrap();
    let scaled = scale_graph(raw, Scaling::Log1p);
    let pruned = prune_graph(scaled, 0.0, 0.0);
    IndexedGraph::build(pruned, k, suffix_len).unwrap()
}

fn default_params(exact_start: usize) -> SearchParams {
    SearchParams {
        max_drop: 50.0,
        insertion_penalty: 3.0,
        gap_penalty: 3.0,
        base_penalty: 1.0,
        exact_start,
    }
}

// scenario (a): a single contig-spanning tandem repeat, one hit, no second.
#[test]
fn scenario_a_single_tandem_repeat_hit() {
    let file = write_fasta(">c\nACGTACGTACGTACGTACGT\n");
    let path = file.path().to_str().unwrap();
    let graph = build_graph(path, 4, 4);
    let cursor = BaseCursor::open(path).unwrap();
    let driver = RepeatsSearch::new(cursor, &graph, default_params(4), 0.0, true, 0);
    let hits: Vec<_> = driver.filter_map(Result::ok).collect();

    assert_eq!(hits.len(), 1);
    assert_eq!(&*hits[0].contig, "c");
    assert_eq!(hits[0].start, 0);
    assert_eq!(hits[0].end, 20);
    assert!(hits[0].score > 0.0);
}

// scenario (b): the self-loop AAA -> A exists and a search spans the homopolymer.
#[test]
fn scenario_b_homopolymer_self_loop() {
    let file = write_fasta(">c\nAAAAAAAAAAAA\n");
    let path = file.path().to_str().unwrap();
    let stream = KmerStream::open(path, 3, 0).unwrap();
    let raw = build_raw_graph(stream).unwrap();
    assert_eq!(raw.counts.get("AAA").unwrap()[repeats::graph::base_index(b'A')], 9);

    let graph = build_graph(path, 3, 3);
    let cursor = BaseCursor::open(path).unwrap();
    let driver = RepeatsSearch::new(cursor, &graph, default_params(3), 0.0, true, 0);
    let hits: Vec<_> = driver.filter_map(Result::ok).collect();
    assert_eq!(hits.len(), 1);
    assert!(hits[0].end - hits[0].start >= 6);
}

// scenario (c): no hit spans two contigs; each is searched independently.
#[test]
fn scenario_c_no_cross_contig_hits() {
    let file = write_fasta(">c1\nACGTACGT\n>c2\nACGTACGT\n");
    let path = file.path().to_str().unwrap();
    let graph = build_graph(path, 4, 4);
    let cursor = BaseCursor::open(path).unwrap();
    let driver = RepeatsSearch::new(cursor, &graph, default_params(4), 0.0, true, 0);
    let hits: Vec<_> = driver.filter_map(Result::ok).collect();
    for hit in &hits {
        assert!(hit.start >= 0 && hit.end <= 8);
    }
}

// scenario (d): an N run breaks the running k-mer; no edge crosses it.
#[test]
fn scenario_d_n_run_breaks_graph_edges() {
    let file = write_fasta(">c\nACGTNACGT\n");
    let stream = KmerStream::open(file.path().to_str().unwrap(), 4, 0).unwrap();
    let raw = build_raw_graph(stream).unwrap();
    // The 4-mer "ACGT" immediately before the N never transitions into
    // whatever came right after the break.
    assert!(raw.counts.values().all(|counts| counts.iter().sum::<u64>() <= 9));
}

// scenario (e): an illegal base aborts with a typed, contextful error.
#[test]
fn scenario_e_illegal_character_aborts() {
    let file = write_fasta(">c\nACGTX\n");
    let stream = KmerStream::open(file.path().to_str().unwrap(), 4, 0).unwrap();
    let result: Result<Vec<_>, _> = stream.collect();
    match result {
        Err(fasta_source::Error::IllegalCharacter { character, .. }) => assert_eq!(character, 'X'),
        other => panic!("expected IllegalCharacter, got {other:?}"),
    }
}

#[test]
fn hits_are_non_overlapping_and_non_decreasing_per_contig() {
    let file = write_fasta(">c\nACGTACGTACGTACGTACGTTTTTTTTTTTTTTTTGCATGCATGCATGCATGCAT\n");
    let path = file.path().to_str().unwrap();
    let graph = build_graph(path, 4, 4);
    let cursor = BaseCursor::open(path).unwrap();
    let driver = RepeatsSearch::new(cursor, &graph, default_params(4), 5.0, true, 0);
    let hits: Vec<_> = driver.filter_map(Result::ok).collect();
    for pair in hits.windows(2) {
        assert!(pair[1].start >= pair[0].end);
    }
}
