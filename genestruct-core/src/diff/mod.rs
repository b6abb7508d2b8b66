pub mod matcher;
pub mod report;

pub use matcher::{MatchBlock, OpTag, Opcode, SequenceMatcher};
pub use report::{compare_orfs, compare_proteins, AaChange, MutationReport, ProteinComparison};
