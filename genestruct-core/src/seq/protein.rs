use crate::alphabets::protein;
use crate::error::{GeneError, GeneResult};
use crate::seq::bytes::{self, IntoNeedle};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProteinSeq {
    bytes: Vec<u8>,
}

impl ProteinSeq {
    pub fn new(bytes: Vec<u8>) -> GeneResult<Self> {
        let alphabet = protein::iupac_alphabet();
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

    pub fn counts(&self) -> [u32; 256] {
        let mut counts = [0u32; 256];
        for &b in &self.bytes {
            counts[b as usize] += 1;
        }
        counts
    }

    /// Amino-acid composition, sorted by residue letter.
    pub fn composition(&self) -> Vec<(char, u32)> {
        self.counts()
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n > 0)
            .map(|(b, &n)| (b as u8 as char, n))
            .collect()
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
}

impl fmt::Display for ProteinSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bytes {
            fmt::Write::write_char(f, b as char)?;
        }
        Ok(())
    }
}

impl<'a> IntoNeedle<'a> for &'a ProteinSeq {
    #[inline]
    fn into_needle(self) -> bytes::Needle<'a> {
        bytes::Needle::Bytes(self.as_bytes())
    }
}
