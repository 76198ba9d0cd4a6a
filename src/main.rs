//! orfscan - Longest open reading frame finder.
//!
//! ## Usage
//!
//! ```bash
//! orfscan <fasta_file>
//! orfscan --print-length <fasta_file>
//! orfscan -o report.txt <fasta_file>
//! ```
//!
//! Set `ORFSCAN_LOG` (e.g. `ORFSCAN_LOG=orfscan=debug`) to control logging.

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use orfscan::fasta::read_fasta_file;
use orfscan::logging::init_tracing;
use orfscan::report::OrfReport;

/// Find the longest open reading frame (ATG ... TAG/TGA/TAA) of every
/// sequence in a FASTA file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the FASTA file
    file: PathBuf,

    /// Print the length of the found ORFs
    #[arg(short = 'l', long = "print-length", alias = "print_length")]
    print_length: bool,

    /// Output file. Use "-" for stdout.
    #[arg(short = 'o', long = "output", default_value = "-")]
    output: String,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let sequences = read_fasta_file(&args.file)
        .with_context(|| format!("Cannot read {}", args.file.display()))?;
    info!(
        path = %args.file.display(),
        sequences = sequences.sequence_count(),
        "loaded sequences"
    );

    let report = OrfReport::from_collection(&sequences);

    if args.output == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        report.write_to(&mut handle, args.print_length)?;
        handle.flush()?;
    } else {
        let file = File::create(&args.output)
            .with_context(|| format!("Cannot create output file {}", args.output))?;
        let mut writer = BufWriter::new(file);
        report.write_to(&mut writer, args.print_length)?;
        writer.flush()?;
        eprintln!(
            "Wrote {} ORF results to {}",
            report.results().len(),
            args.output
        );
    }

    Ok(())
}
