//! Legendre Pairs CLI
//!
//! Screens two correlation files for complementary vector pairs and prints
//! every labelled match.
//!
//! ```text
//! legendre-pairs-cli A.txt B.txt
//! legendre-pairs-cli -v --format json A.txt B.txt
//! ```
//!
//! # Exit Codes
//! - 0: Success, possibly with zero matches
//! - 1: Input or output error (see `ScreenError`)
//! - 2: Usage error (wrong argument count, unknown flag)
//!
//! Nothing is written to stdout unless both sources load and match cleanly.

use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, error, info};

use legendre_pairs_cli::init_logging;
use legendre_pairs_core::{OutputFormat, ScreenConfig, ScreenError, Screening, DEFAULT_TARGET};

/// Legendre Pairs - complementary correlation screening
#[derive(Parser, Debug)]
#[command(name = "legendre-pairs-cli")]
#[command(version)]
#[command(about = "Find label pairs whose correlation vectors sum to the all -2 vector")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: FormatArg,

    /// Component value every position of a + b must equal
    #[arg(long, default_value_t = DEFAULT_TARGET, allow_negative_numbers = true)]
    target: i32,

    /// Source A: one `label key` record per line
    a_path: PathBuf,

    /// Source B: one `label key` record per line
    b_path: PathBuf,
}

/// Output format options
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    /// Bracketed fixed-width blocks
    Text,
    /// JSON array of match records
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn run(cli: Cli) -> Result<(), ScreenError> {
    let config = ScreenConfig::default()
        .target(cli.target)
        .format(cli.format.into());
    debug!(
        "run: a={}, b={}, config={:?}",
        cli.a_path.display(),
        cli.b_path.display(),
        config
    );

    let screening = Screening::load(&cli.a_path, &cli.b_path, config)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = screening.write_report(&mut out)?;
    info!(
        "Done: vectors_a={}, vectors_b={}, pairs={}, records={}",
        summary.vectors_a, summary.vectors_b, summary.pairs, summary.records
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(e) => {
            error!(code = e.error_code(), "screening failed: {}", e);
            eprintln!("legendre-pairs-cli: {}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code);
}
