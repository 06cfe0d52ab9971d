//! Dicebeacon CLI — error types.

use dicebeacon_core::DeriveError;
use thiserror::Error;

/// Failures surfaced at the command line boundary.
///
/// Usage errors never reach this type: `clap` reports them and exits with
/// status 2 before any computation starts.
#[derive(Debug, Error)]
pub enum CliError {
    /// The seed or round was malformed, or the chain ran out of rounds.
    #[error(transparent)]
    Derive(#[from] DeriveError),

    /// Writing the report failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding a JSON report line failed.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
