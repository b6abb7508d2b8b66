use crate::diff::matcher::{OpTag, SequenceMatcher};
use crate::seq::orf::Orf;
use crate::seq::protein::ProteinSeq;
use std::fmt;

/// One amino-acid-level edit. Positions are 1-based over the wild-type
/// protein.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AaChange {
    Substitution {
        position: usize,
        from: String,
        to: String,
    },
    Deletion {
        position: usize,
        removed: String,
    },
    Insertion {
        position: usize,
        added: String,
    },
}

impl fmt::Display for AaChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AaChange::Substitution { position, from, to } => {
                write!(f, "amino acid change at position {position}: {from} -> {to}")
            }
            AaChange::Deletion { position, removed } => {
                write!(f, "deletion at position {position}: removed {removed}")
            }
            AaChange::Insertion { position, added } => {
                write!(f, "insertion at position {position}: added {added}")
            }
        }
    }
}

/// Outcome for one positionally paired wild-type/mutated ORF.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProteinComparison {
    /// Identical amino-acid sequences (silent mutation).
    Silent,
    Changed(Vec<AaChange>),
}

impl ProteinComparison {
    pub fn is_silent(&self) -> bool {
        matches!(self, ProteinComparison::Silent)
    }
}

/// Result of comparing two ORF lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutationReport {
    /// No ORF pairs exist (either list was empty).
    NoPairs,
    Pairs(Vec<ProteinComparison>),
}

impl MutationReport {
    pub fn has_changes(&self) -> bool {
        match self {
            MutationReport::NoPairs => false,
            MutationReport::Pairs(pairs) => pairs.iter().any(|p| !p.is_silent()),
        }
    }
}

fn ascii_substring(bytes: &[u8], start: usize, end: usize) -> String {
    bytes[start..end].iter().map(|&b| b as char).collect()
}

/// Compare two translated proteins and report every non-equal edit span.
pub fn compare_proteins(wild: &ProteinSeq, mutated: &ProteinSeq) -> ProteinComparison {
    if wild.as_bytes() == mutated.as_bytes() {
        return ProteinComparison::Silent;
    }

    let matcher = SequenceMatcher::new(wild.as_bytes(), mutated.as_bytes());
    let mut changes = Vec::new();
    for op in matcher.opcodes() {
        let position = op.a_start + 1;
        match op.tag {
            OpTag::Equal => {}
            OpTag::Replace => changes.push(AaChange::Substitution {
                position,
                from: ascii_substring(wild.as_bytes(), op.a_start, op.a_end),
                to: ascii_substring(mutated.as_bytes(), op.b_start, op.b_end),
            }),
            OpTag::Delete => changes.push(AaChange::Deletion {
                position,
                removed: ascii_substring(wild.as_bytes(), op.a_start, op.a_end),
            }),
            OpTag::Insert => changes.push(AaChange::Insertion {
                position,
                added: ascii_substring(mutated.as_bytes(), op.b_start, op.b_end),
            }),
        }
    }

    ProteinComparison::Changed(changes)
}

/// Pair wild-type and mutated ORFs positionally (extras in the longer list
/// are ignored) and compare their proteins.
pub fn compare_orfs(wild: &[Orf], mutated: &[Orf]) -> MutationReport {
    let pairs: Vec<ProteinComparison> = wild
        .iter()
        .zip(mutated.iter())
        .map(|(w, m)| compare_proteins(&w.protein, &m.protein))
        .collect();

    if pairs.is_empty() {
        MutationReport::NoPairs
    } else {
        MutationReport::Pairs(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn protein(s: &str) -> ProteinSeq {
        ProteinSeq::new(s.as_bytes().to_vec()).unwrap()
    }

    fn orf(protein_str: &str) -> Orf {
        let p = protein(protein_str);
        let len = (p.len() + 1) * 3;
        Orf {
            start: 0,
            end: len,
            protein: p,
        }
    }

    #[test]
    fn identical_lists_are_all_silent() {
        let wild = vec![orf("MA"), orf("MK")];
        let mutated = vec![orf("MA"), orf("MK")];
        let report = compare_orfs(&wild, &mutated);
        match report {
            MutationReport::Pairs(ref pairs) => {
                assert_eq!(pairs.len(), 2);
                assert!(pairs.iter().all(|p| p.is_silent()));
            }
            other => panic!("expected pairs, got {other:?}"),
        }
        assert!(!report.has_changes());
    }

    #[test]
    fn single_substitution_at_position_2() {
        let report = compare_orfs(&[orf("MAK")], &[orf("MTK")]);
        let MutationReport::Pairs(pairs) = report else {
            panic!("expected pairs");
        };
        let ProteinComparison::Changed(ref changes) = pairs[0] else {
            panic!("expected changes");
        };
        assert_eq!(
            changes,
            &vec![AaChange::Substitution {
                position: 2,
                from: "A".to_string(),
                to: "T".to_string(),
            }]
        );
    }

    #[test]
    fn deletion_and_insertion_records() {
        let MutationReport::Pairs(pairs) = compare_orfs(&[orf("MAKL")], &[orf("MKL")]) else {
            panic!("expected pairs");
        };
        let ProteinComparison::Changed(ref changes) = pairs[0] else {
            panic!("expected changes");
        };
        assert_eq!(
            changes,
            &vec![AaChange::Deletion {
                position: 2,
                removed: "A".to_string(),
            }]
        );

        let MutationReport::Pairs(pairs) = compare_orfs(&[orf("MKL")], &[orf("MAKL")]) else {
            panic!("expected pairs");
        };
        let ProteinComparison::Changed(ref changes) = pairs[0] else {
            panic!("expected changes");
        };
        assert_eq!(
            changes,
            &vec![AaChange::Insertion {
                position: 2,
                added: "A".to_string(),
            }]
        );
    }

    #[test]
    fn empty_lists_report_no_pairs() {
        assert_eq!(compare_orfs(&[], &[]), MutationReport::NoPairs);
        assert_eq!(compare_orfs(&[orf("MA")], &[]), MutationReport::NoPairs);
        assert!(!compare_orfs(&[], &[orf("MA")]).has_changes());
    }

    #[test]
    fn extra_orfs_in_longer_list_are_ignored() {
        let report = compare_orfs(&[orf("MA")], &[orf("MA"), orf("MK")]);
        let MutationReport::Pairs(pairs) = report else {
            panic!("expected pairs");
        };
        assert_eq!(pairs.len(), 1);
        assert!(pairs[0].is_silent());
    }

    #[test]
    fn change_records_render_human_readable() {
        let sub = AaChange::Substitution {
            position: 2,
            from: "A".into(),
            to: "T".into(),
        };
        assert_eq!(sub.to_string(), "amino acid change at position 2: A -> T");
        let del = AaChange::Deletion {
            position: 1,
            removed: "MK".into(),
        };
        assert_eq!(del.to_string(), "deletion at position 1: removed MK");
    }
}
