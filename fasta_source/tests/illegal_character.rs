use fasta_source::{Error, KmerStream};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn illegal_base_aborts_with_context() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, ">contig1").unwrap();
    writeln!(file, "ACGTX").unwrap();

    let mut stream = KmerStream::open(file.path().to_str().unwrap(), 4, 0).unwrap();
    let results: Vec<_> = (&mut stream).collect();
    let last = results.last().unwrap();
    match last {
        Err(Error::IllegalCharacter { character, .. }) => assert_eq!(*character, 'X'),
        other => panic!("expected an illegal character error, got {other:?}"),
    }
}
