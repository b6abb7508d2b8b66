use crate::alphabets::rna;
use crate::error::{GeneError, GeneResult};
use crate::seq::bytes::{self, IntoNeedle};
use crate::seq::orf::{self, Orf};
use crate::seq::protein::ProteinSeq;
use std::fmt;
use std::sync::LazyLock;

/// Standard genetic code, packed by 2-bit base index (A=0, C=1, G=2, U=3):
/// `idx = b1 << 4 | b2 << 2 | b3`. Stops are '*'.
const CODON_TABLE: [u8; 64] = *b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

static BASE_INDEX: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut map = [255u8; 256];
    for (i, &b) in b"ACGU".iter().enumerate() {
        map[b as usize] = i as u8;
        map[b.to_ascii_lowercase() as usize] = i as u8;
    }
    map
});

/// Translate one codon to its single-letter amino-acid code. Stops map to
/// '*'; any codon containing a byte outside A/C/G/U maps to 'X'.
pub fn translate_codon(codon: &[u8; 3]) -> u8 {
    let i1 = BASE_INDEX[codon[0] as usize];
    let i2 = BASE_INDEX[codon[1] as usize];
    let i3 = BASE_INDEX[codon[2] as usize];
    if i1 < 4 && i2 < 4 && i3 < 4 {
        let idx = ((i1 as usize) << 4) | ((i2 as usize) << 2) | (i3 as usize);
        CODON_TABLE[idx]
    } else {
        b'X'
    }
}

pub(crate) fn translate_bytes(bytes: &[u8]) -> ProteinSeq {
    let mut out = Vec::with_capacity(bytes.len() / 3);
    for codon in bytes.chunks_exact(3) {
        out.push(translate_codon(&[codon[0], codon[1], codon[2]]));
    }
    ProteinSeq::from_bytes_unchecked(out)
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RnaSeq {
    bytes: Vec<u8>,
}

impl RnaSeq {
    pub fn new(bytes: Vec<u8>) -> GeneResult<Self> {
        let alphabet = rna::alphabet();
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

    /// Translate the whole sequence in frame 0. The length must be a
    /// multiple of 3.
    pub fn translate(&self) -> GeneResult<ProteinSeq> {
        if self.bytes.len() % 3 != 0 {
            return Err(GeneError::Translation {
                msg: format!(
                    "sequence length {} is not a multiple of 3 ({} trailing bases would be lost)",
                    self.bytes.len(),
                    self.bytes.len() % 3
                ),
            });
        }
        Ok(translate_bytes(&self.bytes))
    }

    /// Scan all three reading frames for open reading frames.
    pub fn find_orfs(&self) -> Vec<Orf> {
        orf::find_orfs(self)
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

impl fmt::Display for RnaSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bytes {
            fmt::Write::write_char(f, b as char)?;
        }
        Ok(())
    }
}

impl<'a> IntoNeedle<'a> for &'a RnaSeq {
    #[inline]
    fn into_needle(self) -> bytes::Needle<'a> {
        bytes::Needle::Bytes(self.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_thymine() {
        assert!(RnaSeq::new(b"ACGU".to_vec()).is_ok());
        assert!(RnaSeq::new(b"ACGT".to_vec()).is_err());
    }

    #[test]
    fn translate_basic() {
        let rna = RnaSeq::new(b"AUGGCC".to_vec()).unwrap();
        assert_eq!(rna.translate().unwrap().as_bytes(), b"MA");
    }

    #[test]
    fn translate_rejects_non_multiple_of_3() {
        let rna = RnaSeq::new(b"AUGA".to_vec()).unwrap();
        assert!(rna.translate().is_err());
    }

    #[test]
    fn codon_start_and_stops() {
        assert_eq!(translate_codon(b"AUG"), b'M');
        assert_eq!(translate_codon(b"UAA"), b'*');
        assert_eq!(translate_codon(b"UAG"), b'*');
        assert_eq!(translate_codon(b"UGA"), b'*');
    }

    #[test]
    fn codon_table_spot_checks() {
        assert_eq!(translate_codon(b"UUU"), b'F');
        assert_eq!(translate_codon(b"UGG"), b'W');
        assert_eq!(translate_codon(b"GCU"), b'A');
        assert_eq!(translate_codon(b"AAA"), b'K');
        assert_eq!(translate_codon(b"CAU"), b'H');
        assert_eq!(translate_codon(b"gcu"), b'A');
    }

    #[test]
    fn unknown_codon_is_placeholder() {
        assert_eq!(translate_codon(b"ANG"), b'X');
        assert_eq!(translate_codon(b"AT-"), b'X');
    }

    #[test]
    fn full_table_is_standard_code() {
        // One representative per amino acid family.
        let cases: &[(&[u8; 3], u8)] = &[
            (b"GGU", b'G'),
            (b"GAU", b'D'),
            (b"GAA", b'E'),
            (b"GUU", b'V'),
            (b"CCU", b'P'),
            (b"CGU", b'R'),
            (b"CUU", b'L'),
            (b"CAA", b'Q'),
            (b"ACU", b'T'),
            (b"AGU", b'S'),
            (b"AUU", b'I'),
            (b"AAU", b'N'),
            (b"UAU", b'Y'),
            (b"UGU", b'C'),
        ];
        for &(codon, aa) in cases {
            assert_eq!(translate_codon(codon), aa, "codon {codon:?}");
        }
    }
}
