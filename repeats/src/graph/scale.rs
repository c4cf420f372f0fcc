//! Monotone rescaling of raw counts, applied before pruning. Grounded on
//! `scale_graph`/`rescale` in `original_source/work/repeat-search/repeats.py`.

use super::RawGraph;
use std::collections::HashMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scaling {
    Log1p,
    NoScale,
}

impl Scaling {
    fn apply(self, count: u64) -> f64 {
        match self {
            Scaling::Log1p => (count as f64).ln_1p(),
            Scaling::NoScale => count as f64,
        }
    }
}

impl FromStr for Scaling {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "log1p" => Ok(Scaling::Log1p),
            "no-scale" => Ok(Scaling::NoScale),
            other => Err(format!("unknown scaling \"{other}\" (want log1p or no-scale)")),
        }
    }
}

/// A scaled graph, still keyed by k-mer text. Zero counts are dropped
/// before scaling since `scaled(0)` is always `0` anyway and keeping the
/// entry would just be a zero-weight edge that pruning removes regardless.
pub struct ScaledGraph {
    pub edges: HashMap<String, Vec<(u8, f64)>>,
}

pub fn scale_graph(graph: RawGraph, scaling: Scaling) -> ScaledGraph {
    let mut edges = HashMap::with_capacity(graph.counts.len());
    for (kmer, counts) in graph.counts {
        let scaled: Vec<(u8, f64)> = super::BASES
            .iter()
            .zip(counts.iter())
            .filter(|(_, &count)| count > 0)
            .map(|(&base, &count)| (base, scaling.apply(count)))
            .collect();
        edges.insert(kmer, scaled);
    }
    ScaledGraph { edges }
}
