use crate::error::GeneResult;
use crate::seq::dna::DnaSeq;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Clean raw uploaded text into a DNA sequence.
///
/// Drops a single leading FASTA header line (starting with '>'), uppercases,
/// and keeps only A/T/C/G. Total: empty or fully-invalid input yields the
/// empty sequence.
pub fn sanitize_dna(raw: &str) -> DnaSeq {
    let mut bytes = Vec::with_capacity(raw.len());
    for (idx, line) in raw.lines().enumerate() {
        if idx == 0 && line.starts_with('>') {
            continue;
        }
        for b in line.bytes() {
            let b = b.to_ascii_uppercase();
            if matches!(b, b'A' | b'T' | b'C' | b'G') {
                bytes.push(b);
            }
        }
    }
    DnaSeq::from_bytes_unchecked(bytes)
}

pub fn read_dna_from_reader<R: BufRead>(mut reader: R) -> GeneResult<DnaSeq> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    Ok(sanitize_dna(&raw))
}

pub fn read_dna_from_path(path: impl AsRef<Path>) -> GeneResult<DnaSeq> {
    let file = File::open(path)?;
    read_dna_from_reader(BufReader::new(file))
}

pub fn read_dna_from_bytes(data: &[u8]) -> DnaSeq {
    sanitize_dna(&String::from_utf8_lossy(data))
}
