//! Per-contig k-mer frequency counting and the column-formatted table
//! printer. Grounded on `kmercount.py` in
//! `original_source/work/repeat-search`, generalized to real multi-line
//! FASTA via `fasta_source::KmerStream` rather than the original's
//! one-header-one-line reader.

use fasta_source::KmerStream;
use std::collections::HashMap;
use std::rc::Rc;

/// Frequency table for a single contig, insertion order irrelevant; the
/// printer sorts by count itself.
pub struct ContigCounts {
    pub contig: Rc<str>,
    pub counts: HashMap<String, u64>,
}

/// Counts every full-length `window`-mer in `path`, one table per contig.
/// Words spanning a contig start or an `N` run are shorter than `window`
/// until enough bases accumulate, and are not counted, matching the
/// original's one-word-per-full-window semantics.
pub fn count_kmers(path: &str, window: usize) -> Result<Vec<ContigCounts>, fasta_source::Error> {
    let mut order: Vec<Rc<str>> = Vec::new();
    let mut by_contig: HashMap<Rc<str>, HashMap<String, u64>> = HashMap::new();

    for event in KmerStream::open(path, window, 0)? {
        let event = event?;
        if event.kmer.len() != window {
            continue;
        }
        if !by_contig.contains_key(&event.contig) {
            order.push(Rc::clone(&event.contig));
        }
        *by_contig.entry(Rc::clone(&event.contig)).or_default().entry(event.kmer).or_insert(0) += 1;
    }

    Ok(order
        .into_iter()
        .map(|contig| {
            let counts = by_contig.remove(&contig).unwrap_or_default();
            ContigCounts { contig, counts }
        })
        .collect())
}

/// Renders one contig's table the way `result_table` in `kmercount.py`
/// does: sorted descending by count, capped at `show`, laid out in as
/// many columns as fit within `width` characters.
pub fn format_table(counts: &HashMap<String, u64>, width: usize, show: usize) -> String {
    let mut entries: Vec<(&String, u64)> = counts.iter().map(|(k, &v)| (k, v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries.truncate(show);

    if entries.is_empty() {
        return String::new();
    }

    let max_count = entries[0].1;
    let max_digits = digit_width(max_count);
    let word_len = entries[0].0.len();

    let col_width = word_len + max_digits + 3;
    let cols = (width / col_width).max(1);
    let rows = entries.len().div_ceil(cols);

    let mut out = String::new();
    for row in 0..rows {
        for col in 0..cols {
            let idx = col * rows + row;
            let Some((word, count)) = entries.get(idx) else { break };
            out.push_str(&format!("{word} {count:>max_digits$}   "));
        }
        out.push('\n');
    }
    out
}

fn digit_width(count: u64) -> usize {
    (count as f64).log10().ceil() as usize
}
