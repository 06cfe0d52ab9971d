//! Command line arguments and the resolved run configuration.

use clap::{Parser, ValueEnum};
use dicebeacon_core::{Cadence, DeriveError, Round, Seed};

/// Rolls derived when `--steps` is absent: five paired turns.
pub const DEFAULT_ROLLS: u64 = 10;

/// Command line interface.
#[derive(Debug, Parser)]
#[command(
    name = "dicebeacon",
    version,
    about = "Replays the beacon's Keccak-256 dice roll chain off-chain",
    override_usage = "dicebeacon [OPTIONS] <SEED> <ROUND>\n\n\
        Example: dicebeacon 0x6f0a975977e8b685640b663af683567f09444f7c57da5f942c1dd38a7a1fb7a4 1"
)]
pub struct Args {
    /// Current random seed: 32 bytes of hex, with or without a `0x` prefix.
    pub seed: String,

    /// Starting round number, in decimal.
    pub round: String,

    /// Turns to print for `paired`, rolls for `sequential`.
    #[arg(long, env = "DICEBEACON_STEPS")]
    pub steps: Option<u64>,

    /// How the round number advances between rolls.
    #[arg(long, value_enum, env = "DICEBEACON_CADENCE", default_value_t = CadenceArg::Paired)]
    pub cadence: CadenceArg,

    /// Report format written to stdout.
    #[arg(long, value_enum, env = "DICEBEACON_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Emit logs as JSON on stderr.
    #[arg(long, env = "DICEBEACON_LOG_JSON")]
    pub log_json: bool,
}

/// `--cadence` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CadenceArg {
    /// One roll per round.
    Sequential,
    /// Two rolls per turn, as in the on-chain demo transcript.
    Paired,
}

impl From<CadenceArg> for Cadence {
    fn from(arg: CadenceArg) -> Self {
        match arg {
            CadenceArg::Sequential => Self::Sequential,
            CadenceArg::Paired => Self::Paired,
        }
    }
}

/// `--format` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable blocks.
    Text,
    /// One JSON object per roll.
    Json,
}

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Seed consumed by the first roll.
    pub seed: Seed,
    /// Round of the first roll.
    pub start: Round,
    /// Round advancement.
    pub cadence: Cadence,
    /// Total rolls to derive.
    pub rolls: u64,
    /// Report format.
    pub format: OutputFormat,
}

impl Args {
    /// Decodes the positional inputs and resolves defaults.
    ///
    /// # Errors
    ///
    /// Returns `DeriveError::InvalidHexEncoding` or
    /// `DeriveError::InvalidSeedLength` for a malformed seed, and
    /// `DeriveError::InvalidRound` for a malformed round.
    pub fn to_config(&self) -> Result<RunConfig, DeriveError> {
        let cadence = Cadence::from(self.cadence);
        let per_turn = cadence.rolls_per_turn();
        let rolls = match self.steps {
            Some(steps) => steps.saturating_mul(per_turn),
            None => DEFAULT_ROLLS,
        };
        Ok(RunConfig {
            seed: self.seed.parse()?,
            start: self.round.parse()?,
            cadence,
            rolls,
            format: self.format,
        })
    }
}
