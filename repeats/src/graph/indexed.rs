//! Materialises the pruned k-mer graph into a dense, integer-indexed
//! representation with O(1) neighbour iteration and a suffix index for
//! exact-match seeding. Grounded on the `Node`/`Graph` classes in
//! `original_source/work/repeat-search/repeats.py`; the split between
//! `neighbors` (by-base slot, for following a specific base while
//! scoring) and `edges` (flat list, for iterating every outgoing edge
//! while looking for gap transitions) mirrors that source's `Node.neighbors`
//! / `Node._neighbors` pair.

use super::base_index;
use super::prune::PrunedGraph;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub base: u8,
    pub weight: f64,
    pub target: u32,
}

#[derive(Debug)]
pub struct Node {
    pub kmer: String,
    /// Slot per base, for O(1) "does this node have a match edge for b".
    pub neighbors: [Option<Edge>; 4],
    /// Every surviving outgoing edge, for gap-transition iteration.
    pub edges: Vec<Edge>,
}

pub struct IndexedGraph {
    pub nodes: Vec<Node>,
    kmer_index: HashMap<String, u32>,
    /// Nodes with at least one outgoing edge labelled with this base.
    /// Unused by the production search path (kept for parity with the
    /// source's `Graph.bases`, which backs the unused legacy seeding path).
    pub by_base: [Vec<u32>; 4],
    suffix_index: HashMap<String, Vec<u32>>,
    suffix_len: usize,
}

impl IndexedGraph {
    /// `k` is the k-mer length used to derive edge target k-mers from
    /// `kmer + base`; `suffix_len` is the exact-match length ℓ used to seed
    /// searches.
    pub fn build(pruned: PrunedGraph, k: usize, suffix_len: usize) -> Result<Self, crate::error::RepeatsError> {
        if pruned.edges.is_empty() {
            return Err(crate::error::RepeatsError::EmptyGraph);
        }

        let mut node_kmers: Vec<String> = pruned.edges.keys().cloned().collect();
        node_kmers.sort();

        let kmer_index: HashMap<String, u32> = node_kmers
            .iter()
            .enumerate()
            .map(|(i, kmer)| (kmer.clone(), i as u32))
            .collect();

        let mut nodes: Vec<Node> = node_kmers
            .into_iter()
            .map(|kmer| Node {
                kmer,
                neighbors: [None; 4],
                edges: Vec::new(),
            })
            .collect();

        let mut by_base: [Vec<u32>; 4] = Default::default();

        for idx in 0..nodes.len() {
            let kmer = nodes[idx].kmer.clone();
            let raw_edges = pruned.edges.get(&kmer).expect("node came from this map");
            for &(base, weight) in raw_edges {
                let mut target_kmer = kmer.clone();
                target_kmer.push(base as char);
                if target_kmer.len() > k {
                    target_kmer = target_kmer[target_kmer.len() - k..].to_string();
                }

                let Some(&target) = kmer_index.get(&target_kmer) else {
                    continue;
                };

                let edge = Edge { base, weight, target };
                nodes[idx].neighbors[base_index(base)] = Some(edge);
                nodes[idx].edges.push(edge);
                by_base[base_index(base)].push(idx as u32);
            }
        }

        let mut suffix_index: HashMap<String, Vec<u32>> = HashMap::new();
        for (idx, node) in nodes.iter().enumerate() {
            if node.kmer.len() < suffix_len {
                continue;
            }
            let suffix = node.kmer[node.kmer.len() - suffix_len..].to_string();
            suffix_index.entry(suffix).or_default().push(idx as u32);
        }

        Ok(Self {
            nodes,
            kmer_index,
            by_base,
            suffix_index,
            suffix_len,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn index_of(&self, kmer: &str) -> Option<u32> {
        self.kmer_index.get(kmer).copied()
    }

    /// Nodes whose k-mer ends with `suffix`, where `suffix.len() == suffix_len`
    /// given at construction time. Returns an empty slice for any other
    /// length (seeding always asks with the configured length).
    pub fn seeds_for(&self, suffix: &str) -> &[u32] {
        if suffix.len() != self.suffix_len {
            return &[];
        }
        self.suffix_index.get(suffix).map(Vec::as_slice).unwrap_or(&[])
    }
}
