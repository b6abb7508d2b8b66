use crate::alphabets::dna;
use crate::error::{GeneError, GeneResult};
use crate::seq::bytes::{self, IntoNeedle};
use crate::seq::rna::RnaSeq;
use std::fmt;
use std::sync::LazyLock;

/// Monoisotopic-style per-nucleotide weights (g/mol). Bytes outside the DNA
/// alphabet weigh 0.
static NUCLEOTIDE_WEIGHTS: LazyLock<[f64; 256]> = LazyLock::new(|| {
    let mut w = [0.0f64; 256];
    for (base, weight) in [(b'A', 331.2), (b'T', 322.2), (b'C', 307.2), (b'G', 347.2)] {
        w[base as usize] = weight;
        w[base.to_ascii_lowercase() as usize] = weight;
    }
    w
});

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DnaSeq {
    bytes: Vec<u8>,
}

impl DnaSeq {
    pub fn new(bytes: Vec<u8>) -> GeneResult<Self> {
        let alphabet = dna::alphabet();
        for (pos, &b) in bytes.iter().enumerate() {
            if !alphabet.contains(b) {
                return Err(GeneError::InvalidChar { ch: b as char, pos });
            }
        }
        Ok(Self { bytes })
    }

    #[inline]
    pub(crate) fn from_bytes_unchecked(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Transcribe to RNA: uppercase, then T -> U.
    pub fn transcribe(&self) -> RnaSeq {
        let mut out = Vec::with_capacity(self.bytes.len());
        for &b in &self.bytes {
            let b = b.to_ascii_uppercase();
            out.push(if b == b'T' { b'U' } else { b });
        }
        RnaSeq::from_bytes_unchecked(out)
    }

    /// G+C percentage of the sequence (0.0 for an empty sequence).
    pub fn gc_content(&self) -> f64 {
        if self.bytes.is_empty() {
            return 0.0;
        }
        let gc = [b'G', b'g', b'C', b'c']
            .iter()
            .map(|&b| bytes::count_single_byte(&self.bytes, b))
            .sum::<usize>();
        gc as f64 / self.bytes.len() as f64 * 100.0
    }

    /// Sum of per-nucleotide weights in g/mol.
    pub fn molecular_weight(&self) -> f64 {
        self.bytes
            .iter()
            .map(|&b| NUCLEOTIDE_WEIGHTS[b as usize])
            .sum()
    }

    pub fn count<'a, N>(&'a self, sub: N) -> usize
    where
        N: IntoNeedle<'a>,
    {
        bytes::count(self.as_bytes(), sub.into_needle())
    }

    pub fn contains<'a, N>(&'a self, sub: N) -> bool
    where
        N: IntoNeedle<'a>,
    {
        bytes::contains(self.as_bytes(), sub.into_needle())
    }

    pub fn find<'a, N>(&'a self, sub: N, start: usize, end: usize) -> Option<usize>
    where
        N: IntoNeedle<'a>,
    {
        bytes::find(self.as_bytes(), sub.into_needle(), start, end)
    }
}

impl fmt::Display for DnaSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Validated sequences are ASCII.
        for &b in &self.bytes {
            fmt::Write::write_char(f, b as char)?;
        }
        Ok(())
    }
}

impl<'a> IntoNeedle<'a> for &'a DnaSeq {
    #[inline]
    fn into_needle(self) -> bytes::Needle<'a> {
        bytes::Needle::Bytes(self.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_invalid() {
        assert!(DnaSeq::new(b"ACGT".to_vec()).is_ok());
        let err = DnaSeq::new(b"ACGU".to_vec()).unwrap_err();
        match err {
            GeneError::InvalidChar { ch: 'U', pos: 3 } => {}
            other => panic!("expected invalid char error, got {other:?}"),
        }
    }

    #[test]
    fn transcribe_basic() {
        let dna = DnaSeq::new(b"ATGC".to_vec()).unwrap();
        assert_eq!(dna.transcribe().as_bytes(), b"AUGC");
    }

    #[test]
    fn transcribe_uppercases_and_keeps_length() {
        let dna = DnaSeq::new(b"atgcTTtt".to_vec()).unwrap();
        let rna = dna.transcribe();
        assert_eq!(rna.as_bytes(), b"AUGCUUUU");
        assert_eq!(rna.len(), dna.len());
        assert!(!rna.as_bytes().contains(&b'T'));
    }

    #[test]
    fn gc_content_cases() {
        assert_eq!(DnaSeq::new(Vec::new()).unwrap().gc_content(), 0.0);
        assert_eq!(DnaSeq::new(b"GGCC".to_vec()).unwrap().gc_content(), 100.0);
        assert_eq!(DnaSeq::new(b"ATAT".to_vec()).unwrap().gc_content(), 0.0);
        assert_eq!(DnaSeq::new(b"ATgc".to_vec()).unwrap().gc_content(), 50.0);
    }

    #[test]
    fn molecular_weight_sums_table() {
        let dna = DnaSeq::new(b"ATCG".to_vec()).unwrap();
        let expected = 331.2 + 322.2 + 307.2 + 347.2;
        assert!((dna.molecular_weight() - expected).abs() < 1e-9);
        assert_eq!(expected, 1307.8);
        assert_eq!(DnaSeq::new(Vec::new()).unwrap().molecular_weight(), 0.0);
    }

    #[test]
    fn molecular_weight_case_insensitive() {
        let upper = DnaSeq::new(b"ATCG".to_vec()).unwrap();
        let lower = DnaSeq::new(b"atcg".to_vec()).unwrap();
        assert_eq!(upper.molecular_weight(), lower.molecular_weight());
    }

    #[test]
    fn search_helpers() {
        let dna = DnaSeq::new(b"ACGTACGT".to_vec()).unwrap();
        assert_eq!(dna.count(b'A'), 2);
        assert!(dna.contains(b"CGT"));
        assert_eq!(dna.find(b"AC", 1, 8), Some(4));
    }

    #[test]
    fn display_roundtrip() {
        let dna = DnaSeq::new(b"ACGT".to_vec()).unwrap();
        assert_eq!(dna.to_string(), "ACGT");
    }
}
