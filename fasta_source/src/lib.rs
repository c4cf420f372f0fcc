pub mod cursor;
pub mod error;
pub mod kmer_stream;
mod raw;

pub use cursor::BaseCursor;
pub use error::Error;
pub use kmer_stream::{KmerEvent, KmerStream};
