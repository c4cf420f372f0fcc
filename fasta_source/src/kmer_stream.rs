use crate::error::Error;
use crate::raw::{RawEvent, RawReader};
use std::io;
use std::rc::Rc;

/// One step of the k-mer stream: the base just read, the contig it belongs
/// to, the trailing k-mer ending at that base (shorter than k right after a
/// contig start or an `N`), its 0-based intra-contig position, and the
/// 1-based source line it came from. `resumed` is set on the first base
/// after a contig change or an `N` run — the signal the graph builder uses
/// to know when the "previous k-mer" it is accumulating must collapse back
/// to the sentinel empty k-mer rather than whatever it was tracking before
/// the break.
#[derive(Debug, Clone)]
pub struct KmerEvent {
    pub contig: Rc<str>,
    pub base: u8,
    pub kmer: String,
    pub position: usize,
    pub line: usize,
    pub resumed: bool,
}

/// Lazily walks a FASTA file, yielding one [`KmerEvent`] per base. `N` runs
/// and contig boundaries both empty the running k-mer without being
/// surfaced as their own items — callers that need a "previous k-mer"
/// accumulator (the graph builder) see it return to `""` across both, and
/// can also observe the transition directly via `resumed`.
pub struct KmerStream {
    raw: RawReader,
    skip: usize,
    just_broken: bool,
}

impl KmerStream {
    pub fn open(path: &str, k: usize, skip: usize) -> io::Result<Self> {
        Ok(Self {
            raw: RawReader::new(path, k)?,
            skip,
            just_broken: true,
        })
    }
}

impl Iterator for KmerStream {
    type Item = Result<KmerEvent, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let event = self.raw.next_event()?;
            match event {
                Err(e) => return Some(Err(e)),
                Ok(RawEvent::ContigStart(_)) | Ok(RawEvent::Break) => {
                    self.just_broken = true;
                    continue;
                }
                Ok(RawEvent::Base(base, position)) => {
                    if self.skip > 0 {
                        self.skip -= 1;
                        continue;
                    }
                    let resumed = self.just_broken;
                    self.just_broken = false;
                    return Some(Ok(KmerEvent {
                        contig: self.raw.contig(),
                        base,
                        kmer: self.raw.current_kmer(),
                        position,
                        line: self.raw.line_no(),
                        resumed,
                    }));
                }
            }
        }
    }
}
