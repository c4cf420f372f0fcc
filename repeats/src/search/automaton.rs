//! The valued nondeterministic automaton (`single_search`): propagates
//! scored activations one base at a time until the best live score has
//! dropped irrecoverably below the best ever seen. Grounded on
//! `single_search` in `original_source/work/repeat-search/repeats.py`,
//! translated from hashmap-keyed states to the dense indexed graph per
//! spec.md §9 ("Dense vs sparse state").
//!
//! The `values`/`next_values` arrays hold `(position_tag, score)` pairs:
//! tuple comparison naturally treats any entry from an earlier round as
//! worse than one written this round (tags only ever increase), so the
//! arrays never need clearing — only the explicit frontier lists
//! (`current_states`/`next_states`) are rebuilt each step, exactly the
//! scheme spec.md §9's "Flood trick" and "Dense vs sparse state" notes
//! describe.

use crate::graph::IndexedGraph;
use fasta_source::BaseCursor;
use std::rc::Rc;

pub struct SearchParams {
    pub max_drop: f64,
    pub insertion_penalty: f64,
    pub gap_penalty: f64,
    pub base_penalty: f64,
    pub exact_start: usize,
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub contig: Rc<str>,
    pub min_position: i64,
    pub max_position: i64,
    pub max_value: f64,
    pub end_position: i64,
}

fn batch_index(max_value: f64, flood: f64, value: f64, gap_penalty: f64, batches: usize) -> usize {
    let raw = ((max_value + flood - value) / gap_penalty).floor();
    let idx = if raw.is_finite() && raw >= 0.0 { raw as usize } else { 0 };
    idx.min(batches.saturating_sub(1))
}

/// Runs one search starting at `offset`. `cursor` must already be
/// positioned there. Returns the best interval found and where the
/// search stopped, for the driver's fast-skip.
pub fn single_search(
    cursor: &mut BaseCursor,
    graph: &IndexedGraph,
    params: &SearchParams,
    offset: i64,
) -> Result<SearchResult, fasta_source::Error> {
    let batches = (params.max_drop / params.gap_penalty).floor() as usize + 1;

    let mut chrom: Option<Rc<str>> = None;
    let mut position = offset;
    let mut min_position = offset;
    let mut max_position = offset + params.exact_start as i64;
    let mut max_value = -1.0f64;

    let mut start_seq = String::new();
    for _ in 0..params.exact_start {
        match cursor.next() {
            None => {
                return Ok(SearchResult {
                    contig: chrom.unwrap_or_else(|| Rc::from("")),
                    min_position,
                    max_position,
                    max_value,
                    end_position: position,
                });
            }
            Some(Err(e)) => return Err(e),
            Some(Ok((contig, base))) => {
                chrom = Some(contig);
                start_seq.push(base as char);
                position += 1;
            }
        }
    }

    let seeds = graph.seeds_for(&start_seq);
    if seeds.is_empty() {
        return Ok(SearchResult {
            contig: chrom.unwrap_or_else(|| Rc::from("")),
            min_position: offset,
            max_position: offset + params.exact_start as i64,
            max_value: 0.0,
            end_position: offset + params.exact_start as i64,
        });
    }

    let n = graph.len();
    let mut values: Vec<(i64, f64)> = vec![(-1, 0.0); n];
    let mut next_values: Vec<(i64, f64)> = vec![(-1, 0.0); n];
    let mut starts: Vec<i64> = vec![offset; n];
    let mut next_starts: Vec<i64> = vec![offset; n];
    max_value = 0.0;

    let mut current_states: Vec<Vec<(bool, u32)>> = vec![Vec::new(); batches];
    let mut next_states: Vec<Vec<(bool, u32)>> = vec![Vec::new(); batches];
    for &idx in seeds {
        next_states[0].push((true, idx));
        next_values[idx as usize] = (position, 0.0);
        next_starts[idx as usize] = offset;
    }

    let mut flood = 0.0f64;

    loop {
        if next_states.iter().all(Vec::is_empty) {
            break;
        }

        std::mem::swap(&mut current_states, &mut next_states);
        for batch in next_states.iter_mut() {
            batch.clear();
        }
        std::mem::swap(&mut values, &mut next_values);
        std::mem::swap(&mut starts, &mut next_starts);

        let (read_contig, raw_base) = match cursor.next() {
            None => break,
            Some(Err(e)) => return Err(e),
            Some(Ok(pair)) => pair,
        };
        match &chrom {
            Some(existing) if **existing != *read_contig => break,
            _ => chrom = Some(read_contig),
        }
        position += 1;

        let mut cutoff = flood + (max_value - params.max_drop).max(0.0);

        let mut batch_idx = 0;
        while batch_idx < current_states.len() {
            let mut item_idx = 0;
            while item_idx < current_states[batch_idx].len() {
                let (allow_insert, state_idx) = current_states[batch_idx][item_idx];
                item_idx += 1;
                let state_idx = state_idx as usize;

                let (_, value) = values[state_idx];
                if value < cutoff {
                    continue;
                }

                let state_start = if value <= 0.0 { position - 1 } else { starts[state_idx] };

                let gap_value = value - params.gap_penalty;
                let gapped = (position, gap_value);

                for &edge in &graph.nodes[state_idx].edges {
                    let n_idx = edge.target as usize;
                    if edge.base == raw_base {
                        let new_value = value + edge.weight;
                        let correct = (position, new_value);
                        if next_values[n_idx] < correct {
                            if new_value - flood > max_value {
                                max_value = new_value - flood;
                                min_position = state_start;
                                max_position = position;
                                cutoff = flood + (max_value - params.max_drop).max(0.0);
                            }
                            if next_values[n_idx] < (position, -1.0) {
                                let b = batch_index(max_value, flood, new_value, params.gap_penalty, batches);
                                next_states[b].push((true, n_idx as u32));
                            }
                            next_values[n_idx] = correct;
                            next_starts[n_idx] = state_start;
                        }
                    } else if gapped > values[n_idx] && gap_value >= cutoff {
                        values[n_idx] = gapped;
                        let b = batch_index(max_value, flood, gap_value, params.gap_penalty, batches);
                        current_states[b].push((false, n_idx as u32));
                    }
                }

                if allow_insert {
                    let insert_value = value - params.insertion_penalty;
                    if insert_value > cutoff {
                        let insertion = (position, insert_value);
                        if next_values[state_idx] < insertion {
                            let b = batch_index(max_value, flood, insert_value, params.gap_penalty, batches);
                            next_states[b].push((true, state_idx as u32));
                            next_values[state_idx] = insertion;
                            next_starts[state_idx] = state_start;
                        }
                    }
                }
            }
            batch_idx += 1;
        }

        flood += params.base_penalty;
    }

    Ok(SearchResult {
        contig: chrom.unwrap_or_else(|| Rc::from("")),
        min_position,
        max_position,
        max_value,
        end_position: position,
    })
}
