use thiserror::Error;

/// Error kinds a FASTA byte source can raise. Mirrors the `CharNotAllowed`
/// exception of the original repeat-search script, but carries the full
/// context (contig, current k-mer, intra-contig position, line number)
/// instead of a bare tuple.
#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "illegal character '{character}' in contig '{contig}' at position {position} \
         (line {line}); current k-mer was '{kmer}'"
    )]
    IllegalCharacter {
        contig: String,
        character: char,
        kmer: String,
        position: usize,
        line: usize,
    },

    #[error("cannot reset cursor to position {requested}: buffer already starts at {start}")]
    ResetBackward { requested: u64, start: u64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
