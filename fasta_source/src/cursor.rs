use crate::error::Error;
use crate::raw::{RawEvent, RawReader};
use std::collections::{HashMap, VecDeque};
use std::io;
use std::rc::Rc;

/// Rewindable (forward-only) stream of (contig, base) pairs over a FASTA
/// file. Bases already read back to the current `reset` point are kept in
/// an in-memory look-behind buffer so re-reading a recent span is O(1) per
/// base instead of re-parsing the file.
pub struct BaseCursor {
    raw: RawReader,
    buffer: VecDeque<(Rc<str>, u8)>,
    /// Next unread index within `buffer`.
    offset: usize,
    /// Absolute position (bases emitted since the start of the file,
    /// across all contigs) represented by `buffer[0]`.
    start: u64,
    /// Absolute position of the base that `pull_one` will produce next.
    total_pulled: u64,
    seq_offsets: HashMap<String, u64>,
}

impl BaseCursor {
    pub fn open(path: &str) -> io::Result<Self> {
        Ok(Self {
            raw: RawReader::new(path, 0)?,
            buffer: VecDeque::new(),
            offset: 0,
            start: 0,
            total_pulled: 0,
            seq_offsets: HashMap::new(),
        })
    }

    /// Absolute position of the next base that `next()` will return.
    pub fn position(&self) -> u64 {
        self.start + self.offset as u64
    }

    /// Absolute position at which `contig` first appeared, if it has been
    /// seen yet. Used by the driver to translate absolute hit coordinates
    /// into contig-relative ones.
    pub fn contig_offset(&self, contig: &str) -> Option<u64> {
        self.seq_offsets.get(contig).copied()
    }

    fn pull_one(&mut self) -> Option<Result<(Rc<str>, u8), Error>> {
        loop {
            match self.raw.next_event()? {
                Err(e) => return Some(Err(e)),
                Ok(RawEvent::ContigStart(id)) => {
                    self.seq_offsets
                        .entry(id.to_string())
                        .or_insert(self.total_pulled);
                    continue;
                }
                Ok(RawEvent::Break) => continue,
                Ok(RawEvent::Base(base, _)) => {
                    let contig = self.raw.contig();
                    self.total_pulled += 1;
                    return Some(Ok((contig, base)));
                }
            }
        }
    }

    /// Moves the cursor to `position`. Returns `Ok(true)` if the cursor is
    /// now positioned there and `Ok(false)` if the stream ended before
    /// `position` could be reached (the caller should stop, not treat this
    /// as an error). Requesting a position behind the buffer's start is a
    /// programmer error (`Error::ResetBackward`).
    pub fn reset(&mut self, position: u64) -> Result<bool, Error> {
        if position < self.start {
            return Err(Error::ResetBackward {
                requested: position,
                start: self.start,
            });
        }

        let buffered_end = self.start + self.buffer.len() as u64;
        if position <= buffered_end {
            let drop = (position - self.start) as usize;
            for _ in 0..drop {
                self.buffer.pop_front();
            }
        } else {
            let to_skip = position - buffered_end;
            self.buffer.clear();
            for _ in 0..to_skip {
                match self.pull_one() {
                    None => {
                        self.start = position;
                        self.offset = 0;
                        return Ok(false);
                    }
                    Some(Err(e)) => return Err(e),
                    Some(Ok(_)) => {}
                }
            }
        }

        self.start = position;
        self.offset = 0;
        Ok(true)
    }
}

impl Iterator for BaseCursor {
    type Item = Result<(Rc<str>, u8), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset < self.buffer.len() {
            let item = self.buffer[self.offset].clone();
            self.offset += 1;
            return Some(Ok(item));
        }

        match self.pull_one()? {
            Err(e) => Some(Err(e)),
            Ok(item) => {
                self.buffer.push_back(item.clone());
                self.offset += 1;
                Some(Ok(item))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_fasta(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_reads_bases_in_order() {
        let file = write_fasta(">c\nACGT\n");
        let mut cursor = BaseCursor::open(file.path().to_str().unwrap()).unwrap();
        let bases: Vec<u8> = (&mut cursor).take(4).map(|r| r.unwrap().1).collect();
        assert_eq!(bases, vec![b'A', b'C', b'G', b'T']);
    }

    #[test]
    fn test_reset_within_buffer_replays_bases() {
        let file = write_fasta(">c\nACGTACGT\n");
        let mut cursor = BaseCursor::open(file.path().to_str().unwrap()).unwrap();
        for _ in 0..4 {
            cursor.next().unwrap().unwrap();
        }
        assert!(cursor.reset(1).unwrap());
        let replayed: Vec<u8> = (&mut cursor).take(3).map(|r| r.unwrap().1).collect();
        assert_eq!(replayed, vec![b'C', b'G', b'T']);
    }

    #[test]
    fn test_reset_beyond_buffer_skips_ahead() {
        let file = write_fasta(">c\nACGTACGT\n");
        let mut cursor = BaseCursor::open(file.path().to_str().unwrap()).unwrap();
        assert!(cursor.reset(5).unwrap());
        let bases: Vec<u8> = (&mut cursor).take(3).map(|r| r.unwrap().1).collect();
        assert_eq!(bases, vec![b'C', b'G', b'T']);
    }

    #[test]
    fn test_reset_backward_is_an_error() {
        let file = write_fasta(">c\nACGTACGT\n");
        let mut cursor = BaseCursor::open(file.path().to_str().unwrap()).unwrap();
        cursor.reset(4).unwrap();
        match cursor.reset(1) {
            Err(Error::ResetBackward { requested, start }) => {
                assert_eq!(requested, 1);
                assert_eq!(start, 4);
            }
            other => panic!("expected ResetBackward, got {other:?}"),
        }
    }

    #[test]
    fn test_reset_past_end_of_stream_returns_false() {
        let file = write_fasta(">c\nACGT\n");
        let mut cursor = BaseCursor::open(file.path().to_str().unwrap()).unwrap();
        assert!(!cursor.reset(100).unwrap());
    }

    #[test]
    fn test_contig_offsets_recorded_on_first_encounter() {
        let file = write_fasta(">c1\nACGT\n>c2\nAC\n");
        let mut cursor = BaseCursor::open(file.path().to_str().unwrap()).unwrap();
        for _ in 0..6 {
            cursor.next().unwrap().unwrap();
        }
        assert_eq!(cursor.contig_offset("c1"), Some(0));
        assert_eq!(cursor.contig_offset("c2"), Some(4));
    }

    #[test]
    fn test_equivalence_of_skip_then_read_vs_reset_then_read() {
        let file = write_fasta(">c\nACGTACGTACGT\n");
        let mut via_skip = BaseCursor::open(file.path().to_str().unwrap()).unwrap();
        for _ in 0..5 {
            via_skip.next().unwrap().unwrap();
        }
        let after_skip: Vec<u8> = (&mut via_skip).take(4).map(|r| r.unwrap().1).collect();

        let mut via_reset = BaseCursor::open(file.path().to_str().unwrap()).unwrap();
        via_reset.reset(5).unwrap();
        let after_reset: Vec<u8> = (&mut via_reset).take(4).map(|r| r.unwrap().1).collect();

        assert_eq!(after_skip, after_reset);
    }
}
