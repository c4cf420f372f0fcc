// Shared line-splitting primitive behind both public FASTA read modes
// (k-mer stream and base cursor). Neither mode exposes this type; it just
// keeps contig tracking, N-handling and illegal-character detection in one
// place instead of duplicated across the two modes.
use crate::error::Error;
use common::file_tools::read_lines;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

pub(crate) enum RawEvent {
    /// A new `>` header was read; carries the contig id (without the `>`).
    ContigStart(Rc<str>),
    /// A valid base at the given intra-contig position (0-based, counting
    /// only bases, never headers or `N`s).
    Base(u8, usize),
    /// An `N` (or a run of them) was read; the caller's running k-mer, if
    /// any, must be cleared.
    Break,
}

pub(crate) struct RawReader {
    lines: io::Lines<io::BufReader<std::fs::File>>,
    current: Vec<char>,
    idx: usize,
    contig: Rc<str>,
    line_no: usize,
    pos: usize,
    kmer: VecDeque<u8>,
    k: usize,
}

impl RawReader {
    /// `k` bounds how many trailing bases are kept for the "current k-mer"
    /// field of an illegal-character error. Pass 0 when the caller has no
    /// use for it (the base cursor).
    pub(crate) fn new(path: &str, k: usize) -> io::Result<Self> {
        Ok(Self {
            lines: read_lines(path)?,
            current: Vec::new(),
            idx: 0,
            contig: Rc::from(""),
            line_no: 0,
            pos: 0,
            kmer: VecDeque::with_capacity(k),
            k,
        })
    }

    pub(crate) fn contig(&self) -> Rc<str> {
        Rc::clone(&self.contig)
    }

    pub(crate) fn line_no(&self) -> usize {
        self.line_no
    }

    pub(crate) fn current_kmer(&self) -> String {
        self.kmer.iter().map(|&b| b as char).collect()
    }

    pub(crate) fn next_event(&mut self) -> Option<Result<RawEvent, Error>> {
        loop {
            if self.idx >= self.current.len() {
                match self.lines.next() {
                    None => return None,
                    Some(Err(e)) => return Some(Err(Error::Io(e))),
                    Some(Ok(raw_line)) => {
                        self.line_no += 1;
                        let line = raw_line.trim_end_matches('\r');
                        if let Some(rest) = line.strip_prefix('>') {
                            let id: Rc<str> = Rc::from(rest);
                            self.contig = Rc::clone(&id);
                            self.pos = 0;
                            self.kmer.clear();
                            self.current = Vec::new();
                            self.idx = 0;
                            return Some(Ok(RawEvent::ContigStart(id)));
                        }
                        self.current = line.chars().collect();
                        self.idx = 0;
                        continue;
                    }
                }
            }

            let ch = self.current[self.idx];
            self.idx += 1;
            return Some(match ch {
                'A' | 'C' | 'G' | 'T' => {
                    let base = ch as u8;
                    if self.k > 0 {
                        if self.kmer.len() == self.k {
                            self.kmer.pop_front();
                        }
                        self.kmer.push_back(base);
                    }
                    let position = self.pos;
                    self.pos += 1;
                    Ok(RawEvent::Base(base, position))
                }
                'N' => {
                    self.kmer.clear();
                    Ok(RawEvent::Break)
                }
                other => Err(Error::IllegalCharacter {
                    contig: self.contig.to_string(),
                    character: other,
                    kmer: self.current_kmer(),
                    position: self.pos,
                    line: self.line_no,
                }),
            });
        }
    }
}
