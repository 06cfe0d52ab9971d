//! Shared test fixtures and mocks for the dicebeacon workspace.

mod fixtures;
mod rng;

pub use fixtures::{
    EXAMPLE_SEED, PAIRED_FROM_ROUND_ONE, SEQUENTIAL_FROM_ROUND_ONE, example_seed,
    rolls_from_table,
};
pub use rng::ScriptedRolls;
