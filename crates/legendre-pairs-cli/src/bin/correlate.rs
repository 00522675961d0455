//! Legendre Correlate
//!
//! Turns sequences over {+1, i, -1, j} (one exponent string per line) into
//! `label key` records for `legendre-pairs-cli`. Sequences with a nonreal
//! autocorrelation are skipped.
//!
//! ```text
//! legendre-correlate seqs.txt > A.txt
//! legendre-correlate --psd seqs.txt > A.txt
//! ```
//!
//! # Exit Codes
//! - 0: Success
//! - 1: Input or output error
//! - 2: Usage error

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use legendre_pairs_cli::init_logging;
use legendre_pairs_core::{write_correlation_records, CorrelationFilter, ScreenError};

/// Legendre Correlate - autocorrelation keys for screening input
#[derive(Parser, Debug)]
#[command(name = "legendre-correlate")]
#[command(version)]
#[command(about = "Write `sequence c1,...,cl` records for sequences with real autocorrelations")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Keep only sequences whose spectral densities are at most 2N+2
    #[arg(long)]
    psd: bool,

    /// Sequences file: one exponent string (digits 0-3) per line
    input: PathBuf,
}

fn run(cli: Cli) -> Result<(), ScreenError> {
    let file = File::open(&cli.input).map_err(|e| ScreenError::SourceUnreadable {
        path: cli.input.clone(),
        source: e,
    })?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = write_correlation_records(
        &cli.input.display().to_string(),
        BufReader::new(file),
        CorrelationFilter { psd: cli.psd },
        &mut out,
    )?;
    info!("Done: {:?}", summary);
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(e) => {
            error!(code = e.error_code(), "correlation failed: {}", e);
            eprintln!("legendre-correlate: {}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code);
}
