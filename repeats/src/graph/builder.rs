//! First pass over the FASTA: counts, for each observed k-mer, how often
//! each base follows it. Grounded on `generate_graph` in
//! `original_source/work/repeat-search/repeats.py`.

use super::base_index;
use fasta_source::KmerStream;
use std::collections::HashMap;

/// Raw (unscaled, unpruned) counts keyed by k-mer text. The sentinel `""`
/// entry always exists and absorbs start-of-sequence transitions, since
/// the k-mer stream resets to empty on both contig change and `N`.
#[derive(Debug, Default)]
pub struct RawGraph {
    pub counts: HashMap<String, [u64; 4]>,
}

pub fn build_raw_graph(stream: KmerStream) -> Result<RawGraph, fasta_source::Error> {
    let mut counts: HashMap<String, [u64; 4]> = HashMap::new();
    counts.insert(String::new(), [0; 4]);

    let mut previous = String::new();
    for event in stream {
        let event = event?;
        if event.resumed {
            previous = String::new();
        }

        counts.entry(previous).or_insert([0; 4])[base_index(event.base)] += 1;
        counts.entry(event.kmer.clone()).or_insert([0; 4]);
        previous = event.kmer;
    }

    Ok(RawGraph { counts })
}
