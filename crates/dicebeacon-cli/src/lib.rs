//! Dicebeacon CLI — drives the roll chain and prints the results.

pub mod args;
pub mod error;
pub mod report;

use std::io::Write;

use dicebeacon_core::RollChain;
use tracing::{info, instrument};

pub use args::{Args, CadenceArg, OutputFormat, RunConfig};
pub use error::CliError;
pub use report::ReportSummary;

/// Validates the arguments, runs the chain and writes the report to `out`.
///
/// # Errors
///
/// Returns `CliError::Derive` for malformed inputs or a round overflow and
/// `CliError::Io`/`CliError::Json` if the report cannot be written.
#[instrument(skip_all, fields(cadence = ?args.cadence, format = ?args.format))]
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<ReportSummary, CliError> {
    let config = args.to_config()?;
    info!(
        seed = %config.seed,
        start = %config.start,
        rolls = config.rolls,
        "replaying roll chain"
    );

    let mut chain = RollChain::new(config.seed, config.start.clone(), config.cadence);
    let summary = report::write_report(out, &mut chain, &config)?;

    info!(
        rolls = summary.rolls,
        final_seed = %chain.current_seed(),
        "roll chain replayed"
    );
    Ok(summary)
}
