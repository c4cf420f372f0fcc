//! Outer driver: repeatedly invokes the automaton starting from the
//! current cursor, emits non-overlapping hits exceeding a minimum score,
//! and advances. Grounded on `repeats_search` in
//! `original_source/work/repeat-search/repeats.py`.

use crate::graph::IndexedGraph;
use crate::search::automaton::{single_search, SearchParams};
use fasta_source::BaseCursor;
use log::info;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct Hit {
    pub contig: Rc<str>,
    pub start: i64,
    pub end: i64,
    pub score: f64,
}

pub struct RepeatsSearch<'a> {
    cursor: BaseCursor,
    graph: &'a IndexedGraph,
    params: SearchParams,
    min_value: f64,
    fast_skip: bool,
    position: i64,
    last_report: i64,
    done: bool,
}

impl<'a> RepeatsSearch<'a> {
    pub fn new(
        cursor: BaseCursor,
        graph: &'a IndexedGraph,
        params: SearchParams,
        min_value: f64,
        fast_skip: bool,
        skip: i64,
    ) -> Self {
        Self {
            cursor,
            graph,
            params,
            min_value,
            fast_skip,
            position: skip,
            last_report: 0,
            done: false,
        }
    }
}

impl<'a> Iterator for RepeatsSearch<'a> {
    type Item = Result<Hit, fasta_source::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }

            match self.cursor.reset(self.position as u64) {
                Ok(true) => {}
                Ok(false) => {
                    self.done = true;
                    return None;
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }

            let result = match single_search(&mut self.cursor, self.graph, &self.params, self.position) {
                Ok(r) => r,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };

            if result.max_value < 0.0 {
                self.done = true;
                return None;
            }

            let hit = if result.max_value > self.min_value {
                let contig_offset = self.cursor.contig_offset(result.contig.as_ref()).unwrap_or(0) as i64;
                self.last_report = result.max_position;
                Some(Hit {
                    contig: result.contig.clone(),
                    start: result.min_position - contig_offset,
                    end: result.max_position - contig_offset,
                    score: result.max_value,
                })
            } else {
                None
            };

            self.position = if self.fast_skip { result.end_position } else { result.max_position };

            if self.last_report + 50_000 <= self.position {
                self.last_report = self.position;
                info!("# Now at base: {}", self.position);
            }

            if let Some(hit) = hit {
                return Some(Ok(hit));
            }
        }
    }
}
