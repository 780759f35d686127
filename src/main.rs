//! alnview - Terminal MSA Viewer
//!
//! ```bash
//! alnview alignment.fasta
//! alnview --gapsym alignment.fasta   # keep '-' gap characters as-is
//! alnview -n alignment.fasta         # force nucleotide colours
//! ```

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use alnview::color::TermCaps;
use alnview::controller::run_app;
use alnview::fasta::parse_fasta_file;
use alnview::model::Alphabet;
use alnview::viewer::ViewerState;

/// A terminal viewer for multiple sequence alignments.
///
/// Scroll with hjkl or the arrow keys, switch colour schemes with 1-5,
/// and adjust the id panel with +/-/=/0. By default all gaps are shown
/// as '.'; use --gapsym to keep the original gap characters.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Alignment file to display (FASTA format)
    aln_file: PathBuf,

    /// Preserve gap symbols from the file instead of showing all gaps as '.'
    #[arg(long = "gapsym")]
    gapsym: bool,

    /// Treat the alignment as nucleotide data (skip autodetection)
    #[arg(short = 'n', long = "nucleotide")]
    nucleotide: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let alignment = parse_fasta_file(&args.aln_file)
        .with_context(|| format!("can't read alignment from [{}]", args.aln_file.display()))?;

    let alphabet = if args.nucleotide {
        Alphabet::Nucleotide
    } else {
        alignment.guess_alphabet()
    };

    let filename = args.aln_file.display().to_string();
    let state = ViewerState::new(alignment, filename, args.gapsym, alphabet, TermCaps::detect())
        .context("failed to render alignment")?;

    run_app(state)
}
