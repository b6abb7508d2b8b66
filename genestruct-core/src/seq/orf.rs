use crate::seq::protein::ProteinSeq;
use crate::seq::rna::{self, RnaSeq};
use std::fmt;

const START_CODON: &[u8] = b"AUG";

#[inline]
fn is_stop(codon: &[u8]) -> bool {
    matches!(codon, b"UAA" | b"UAG" | b"UGA")
}

/// An open reading frame: `start` is the 0-based index of the AUG, `end` is
/// one past the last base of the in-frame stop codon, and `protein` is the
/// translation of every codon up to (excluding) the stop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Orf {
    pub start: usize,
    pub end: usize,
    pub protein: ProteinSeq,
}

impl Orf {
    /// Length of the reading frame in bases, stop codon included.
    pub fn base_len(&self) -> usize {
        self.end - self.start
    }
}

impl fmt::Display for Orf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}] {}", self.start, self.end, self.protein)
    }
}

/// Scan all three reading frames, in order, for start/stop-bounded ORFs.
///
/// Within a frame the cursor jumps over the whole region consumed by an ORF
/// attempt, so ORFs in the same frame never overlap. A start codon with no
/// downstream in-frame stop yields no ORF and ends that frame's scan.
pub fn find_orfs(rna: &RnaSeq) -> Vec<Orf> {
    let seq = rna.as_bytes();
    let mut orfs = Vec::new();

    for frame in 0..3 {
        let mut i = frame;
        while i + 3 <= seq.len() {
            if &seq[i..i + 3] == START_CODON {
                let mut j = i + 3;
                while j + 3 <= seq.len() {
                    if is_stop(&seq[j..j + 3]) {
                        let protein = rna::translate_bytes(&seq[i..j]);
                        orfs.push(Orf {
                            start: i,
                            end: j + 3,
                            protein,
                        });
                        break;
                    }
                    j += 3;
                }
                i = j;
            } else {
                i += 3;
            }
        }
    }

    orfs
}
