//! Console report for a run of rolls.

use std::io::Write;

use dicebeacon_core::{Cadence, DiceRoll, RollSource, Seed};

use crate::args::{OutputFormat, RunConfig};
use crate::error::CliError;

/// What a finished report covered. Rolls are streamed, never retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    /// Rolls written.
    pub rolls: u64,
    /// Seed produced by the last roll, `None` if nothing was rolled.
    pub final_seed: Option<Seed>,
}

/// Pulls `config.rolls` rolls from `source` and writes them to `out` one at
/// a time.
///
/// On a derivation error, the rolls already printed stay printed and the
/// error is returned.
///
/// # Errors
///
/// Returns `CliError::Derive` if the source fails, `CliError::Io` or
/// `CliError::Json` if writing fails.
pub fn write_report<W: Write>(
    out: &mut W,
    source: &mut dyn RollSource,
    config: &RunConfig,
) -> Result<ReportSummary, CliError> {
    let per_turn = config.cadence.rolls_per_turn();
    let mut summary = ReportSummary {
        rolls: 0,
        final_seed: None,
    };

    for step in 0..config.rolls {
        let roll = source.next_roll()?;
        tracing::debug!(round = %roll.round, face = roll.face.value(), "rolled");

        match config.format {
            OutputFormat::Text => {
                write_text(out, config.cadence, step / per_turn + 1, step % per_turn, &roll)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &roll)?;
                writeln!(out)?;
            }
        }
        summary.rolls += 1;
        summary.final_seed = Some(roll.next_seed);
    }

    out.flush()?;
    Ok(summary)
}

/// One text block. Paired turns print a `Round <turn>` header followed by
/// numbered rolls; sequential rolls are headed by their actual round.
fn write_text<W: Write>(
    out: &mut W,
    cadence: Cadence,
    turn: u64,
    position: u64,
    roll: &DiceRoll,
) -> std::io::Result<()> {
    match cadence {
        Cadence::Sequential => {
            writeln!(out, "Round {}", roll.round)?;
            writeln!(out, "Dice Roll: {}", roll.face)?;
        }
        Cadence::Paired => {
            if position == 0 {
                writeln!(out, "Round {turn}")?;
            }
            writeln!(out, "Dice Roll{}: {}", position + 1, roll.face)?;
        }
    }
    writeln!(out, "New Random: {}", roll.next_seed)
}
