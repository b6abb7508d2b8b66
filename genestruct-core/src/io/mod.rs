pub mod fasta;

pub use fasta::{read_dna_from_bytes, read_dna_from_path, read_dna_from_reader, sanitize_dna};
