//! Scripted roll source — deterministic `RollSource` implementation for tests.

use dicebeacon_core::{DeriveError, DiceRoll, RollSource};

/// A roll source that replays a predetermined list of outcomes. Panics if the
/// script is exhausted. Used to drive report formatting and error paths
/// without computing real hashes.
#[derive(Debug)]
pub struct ScriptedRolls {
    script: Vec<Result<DiceRoll, DeriveError>>,
    index: usize,
}

impl ScriptedRolls {
    /// Create a new `ScriptedRolls` that yields the given outcomes in order.
    #[must_use]
    pub fn new(script: Vec<Result<DiceRoll, DeriveError>>) -> Self {
        Self { script, index: 0 }
    }

    /// Create a `ScriptedRolls` that only yields successful rolls.
    #[must_use]
    pub fn from_rolls(rolls: Vec<DiceRoll>) -> Self {
        Self::new(rolls.into_iter().map(Ok).collect())
    }

    /// Number of outcomes handed out so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl RollSource for ScriptedRolls {
    fn next_roll(&mut self) -> Result<DiceRoll, DeriveError> {
        let outcome = self.script[self.index].clone();
        self.index += 1;
        outcome
    }
}
