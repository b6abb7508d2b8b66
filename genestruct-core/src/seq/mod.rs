pub mod bytes;
pub mod dna;
pub mod orf;
pub mod protein;
pub mod rna;

pub use dna::DnaSeq;
pub use orf::{find_orfs, Orf};
pub use protein::ProteinSeq;
pub use rna::{translate_codon, RnaSeq};
