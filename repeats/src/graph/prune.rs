//! Drops edges below a threshold derived from absolute and relative
//! cutoffs, then deletes nodes left without outgoing edges. Grounded on
//! `prune_graph` in `original_source/work/repeat-search/repeats.py`.
//!
//! `rel_threshold` is a percentage of the maximum scaled weight in the
//! graph (divided by 100, per the source); `abs_threshold` is compared
//! directly against the scaled weight. This resolves the open question in
//! spec.md §9 the way the source's own arithmetic intends.

use super::scale::ScaledGraph;
use std::collections::HashMap;

pub struct PrunedGraph {
    pub edges: HashMap<String, Vec<(u8, f64)>>,
}

pub fn prune_graph(graph: ScaledGraph, abs_threshold: f64, rel_threshold: f64) -> PrunedGraph {
    let max_weight = graph
        .edges
        .values()
        .flat_map(|edges| edges.iter().map(|(_, w)| *w))
        .fold(f64::NEG_INFINITY, f64::max);

    let threshold = (max_weight * rel_threshold / 100.0).max(abs_threshold);

    let edges = graph
        .edges
        .into_iter()
        .filter_map(|(kmer, edges)| {
            let kept: Vec<(u8, f64)> = edges.into_iter().filter(|(_, w)| *w >= threshold).collect();
            if kept.is_empty() {
                None
            } else {
                Some((kmer, kept))
            }
        })
        .collect();

    PrunedGraph { edges }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaled(pairs: &[(&str, Vec<(u8, f64)>)]) -> ScaledGraph {
        ScaledGraph {
            edges: pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
        }
    }

    #[test]
    fn edges_below_threshold_are_dropped() {
        let graph = scaled(&[("AC", vec![(b'G', 1.0), (b'T', 10.0)])]);
        let pruned = prune_graph(graph, 5.0, 0.0);
        assert_eq!(pruned.edges.get("AC").unwrap(), &vec![(b'T', 10.0)]);
    }

    #[test]
    fn nodes_with_no_surviving_edges_are_removed() {
        let graph = scaled(&[("AC", vec![(b'G', 1.0)])]);
        let pruned = prune_graph(graph, 5.0, 0.0);
        assert!(!pruned.edges.contains_key("AC"));
    }

    #[test]
    fn rel_threshold_is_a_percentage_of_max_weight() {
        let graph = scaled(&[("AC", vec![(b'G', 100.0), (b'T', 49.0)])]);
        let pruned = prune_graph(graph, 0.0, 50.0);
        assert_eq!(pruned.edges.get("AC").unwrap(), &vec![(b'G', 100.0)]);
    }

    #[test]
    fn pruning_is_idempotent() {
        let graph = scaled(&[("AC", vec![(b'G', 100.0), (b'T', 49.0)])]);
        let once = prune_graph(graph, 0.0, 50.0);
        let again_input = scaled(
            &once
                .edges
                .iter()
                .map(|(k, v)| (k.as_str(), v.clone()))
                .collect::<Vec<_>>(),
        );
        let twice = prune_graph(again_input, 0.0, 50.0);
        assert_eq!(once.edges, twice.edges);
    }
}
