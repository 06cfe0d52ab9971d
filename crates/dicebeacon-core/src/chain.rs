//! Chained derivation across rounds.
//!
//! The chain is inherently serial: the seed for step `n + 1` is the digest of
//! step `n`.

use crate::error::DeriveError;
use crate::rng::RollSource;
use crate::roll::{DiceRoll, derive_roll};
use crate::round::Round;
use crate::seed::Seed;

/// How the round number advances from one roll to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Cadence {
    /// One roll per round: `start`, `start + 1`, `start + 2`, ...
    #[default]
    Sequential,
    /// Two rolls per turn. Turn `k` rolls at `start + k` and `start + k + 1`,
    /// so consecutive turns share a round number while the seed keeps chaining.
    Paired,
}

impl Cadence {
    /// Number of rolls grouped into one turn.
    #[must_use]
    pub fn rolls_per_turn(self) -> u64 {
        match self {
            Self::Sequential => 1,
            Self::Paired => 2,
        }
    }

    /// Offset from the starting round for the roll at index `step`.
    #[must_use]
    pub fn round_offset(self, step: u64) -> u64 {
        match self {
            Self::Sequential => step,
            Self::Paired => step / 2 + step % 2,
        }
    }
}

/// An endless chain of rolls starting from a seed and a round.
///
/// Iteration stops after the first error; the error itself is yielded once.
#[derive(Debug, Clone)]
pub struct RollChain {
    seed: Seed,
    start: Round,
    cadence: Cadence,
    step: u64,
    failure: Option<DeriveError>,
}

impl RollChain {
    /// Creates a chain whose first roll uses `seed` at `start`.
    #[must_use]
    pub fn new(seed: Seed, start: Round, cadence: Cadence) -> Self {
        Self {
            seed,
            start,
            cadence,
            step: 0,
            failure: None,
        }
    }

    /// The seed the next roll will consume.
    #[must_use]
    pub fn current_seed(&self) -> Seed {
        self.seed
    }

    /// The round the next roll will be derived for.
    #[must_use]
    pub fn next_round(&self) -> Round {
        self.start.offset(self.cadence.round_offset(self.step))
    }

    /// Number of rolls produced so far.
    #[must_use]
    pub fn steps_taken(&self) -> u64 {
        self.step
    }

    /// The cadence this chain advances with.
    #[must_use]
    pub fn cadence(&self) -> Cadence {
        self.cadence
    }
}

impl RollSource for RollChain {
    fn next_roll(&mut self) -> Result<DiceRoll, DeriveError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        let round = self.next_round();
        match derive_roll(&self.seed, &round) {
            Ok(roll) => {
                self.seed = roll.next_seed;
                self.step += 1;
                Ok(roll)
            }
            Err(err) => {
                tracing::debug!(%round, error = %err, "roll chain stopped");
                self.failure = Some(err.clone());
                Err(err)
            }
        }
    }
}

impl Iterator for RollChain {
    type Item = Result<DiceRoll, DeriveError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failure.is_some() {
            return None;
        }
        Some(self.next_roll())
    }
}

/// Recomputes the chain from `seed` and `start` and checks it against an
/// observed transcript, roll for roll.
///
/// # Errors
///
/// Returns the `DeriveError` raised while recomputing, e.g. when the rounds
/// run past the 32-byte window.
pub fn verify_chain(
    seed: Seed,
    start: Round,
    cadence: Cadence,
    observed: &[DiceRoll],
) -> Result<bool, DeriveError> {
    let mut chain = RollChain::new(seed, start, cadence);
    for (index, expected) in observed.iter().enumerate() {
        let actual = chain.next_roll()?;
        if &actual != expected {
            tracing::debug!(index, round = %actual.round, "transcript mismatch");
            return Ok(false);
        }
    }
    Ok(true)
}
