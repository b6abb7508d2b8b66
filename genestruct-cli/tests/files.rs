use genestruct_core::io::fasta::read_dna_from_path;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn reads_and_sanitizes_fasta_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, ">sample sequence\nAT CG-N\natg\n").unwrap();

    let dna = read_dna_from_path(file.path()).unwrap();
    assert_eq!(dna.as_bytes(), b"ATCGATG");
}

#[test]
fn missing_file_is_an_io_error() {
    assert!(read_dna_from_path("/nonexistent/sequence.fasta").is_err());
}
