//! genestruct - DNA to protein explorer.
//!
//! ```bash
//! genestruct wild_type.fasta
//! genestruct wild_type.fasta --mutated mutated.fasta
//! ```

mod render;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use genestruct_core::diff::compare_orfs;
use genestruct_core::io::fasta::read_dna_from_path;

/// Transcribe a DNA sequence, scan it for open reading frames, translate
/// them, and optionally compare against a mutated sequence.
#[derive(Debug, Parser)]
#[command(name = "genestruct", version)]
struct Cli {
    /// Wild-type DNA sequence file (.txt or .fasta)
    wild_type: PathBuf,

    /// Mutated DNA sequence file to compare against
    #[arg(long)]
    mutated: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let wild = read_dna_from_path(&cli.wild_type)
        .with_context(|| format!("failed to read {}", cli.wild_type.display()))?;
    let wild_orfs = render::write_sequence_report(&mut out, "wild type", &wild)?;

    if let Some(mutated_path) = &cli.mutated {
        let mutated = read_dna_from_path(mutated_path)
            .with_context(|| format!("failed to read {}", mutated_path.display()))?;
        writeln!(out)?;
        let mut_orfs = render::write_sequence_report(&mut out, "mutated", &mutated)?;

        writeln!(out)?;
        let report = compare_orfs(&wild_orfs, &mut_orfs);
        render::write_mutation_report(&mut out, &report)?;
    }

    Ok(())
}
