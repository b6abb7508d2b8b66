//! Plain-text rendering of core results. Kept apart from main so the report
//! layout can be tested against an in-memory writer.

use genestruct_core::diff::{MutationReport, ProteinComparison};
use genestruct_core::seq::dna::DnaSeq;
use genestruct_core::seq::orf::Orf;
use std::io::{self, Write};

/// Group a protein string into 10-residue blocks for readability.
fn spaced_protein(orf: &Orf) -> String {
    let bytes = orf.protein.as_bytes();
    let mut out = String::with_capacity(bytes.len() + bytes.len() / 10);
    for (i, &b) in bytes.iter().enumerate() {
        if i > 0 && i % 10 == 0 {
            out.push(' ');
        }
        out.push(b as char);
    }
    out
}

pub fn write_sequence_report<W: Write>(out: &mut W, label: &str, dna: &DnaSeq) -> io::Result<Vec<Orf>> {
    writeln!(out, "== {label} ==")?;
    writeln!(out, "sequence ({} bases): {dna}", dna.len())?;
    writeln!(out, "GC content: {:.2}%", dna.gc_content())?;
    writeln!(out, "molecular weight: {:.2} g/mol", dna.molecular_weight())?;

    let rna = dna.transcribe();
    writeln!(out, "RNA: {rna}")?;

    let orfs = rna.find_orfs();
    if orfs.is_empty() {
        writeln!(out, "no valid ORFs found")?;
        return Ok(orfs);
    }

    for (i, orf) in orfs.iter().enumerate() {
        writeln!(out, "protein {} (start {}, stop {}, {} aa):", i + 1, orf.start, orf.end, orf.protein.len())?;
        writeln!(out, "  {}", spaced_protein(orf))?;
        let composition: Vec<String> = orf
            .protein
            .composition()
            .iter()
            .map(|(aa, n)| format!("{aa}: {n}"))
            .collect();
        writeln!(out, "  composition: {}", composition.join(", "))?;
    }
    Ok(orfs)
}

pub fn write_mutation_report<W: Write>(out: &mut W, report: &MutationReport) -> io::Result<()> {
    writeln!(out, "== mutation analysis ==")?;
    match report {
        MutationReport::NoPairs => {
            writeln!(out, "no mutations found (no ORF pairs to compare)")?;
        }
        MutationReport::Pairs(pairs) => {
            for (i, pair) in pairs.iter().enumerate() {
                writeln!(out, "protein {} analysis:", i + 1)?;
                match pair {
                    ProteinComparison::Silent => {
                        writeln!(out, "  no changes in amino acid sequence (silent mutation)")?;
                    }
                    ProteinComparison::Changed(changes) => {
                        writeln!(out, "  changes detected in amino acid sequence")?;
                        for change in changes {
                            writeln!(out, "  - {change}")?;
                        }
                    }
                }
            }
        }
    }
    Ok(())
}
