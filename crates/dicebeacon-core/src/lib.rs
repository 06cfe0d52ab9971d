//! Dicebeacon Core — off-chain replay of the beacon's dice rolls.
//!
//! Given a 32-byte seed and a round number, [`derive_roll`] hashes
//! `seed || round` with Keccak-256, maps the digest to a die face and returns
//! the digest as the next seed. [`RollChain`] re-applies it across rounds.
//! This crate performs no I/O.

pub mod chain;
pub mod error;
pub mod rng;
pub mod roll;
pub mod round;
pub mod seed;

pub use chain::{Cadence, RollChain, verify_chain};
pub use error::DeriveError;
pub use rng::RollSource;
pub use roll::{DiceFace, DiceRoll, derive_roll, keccak256, preimage};
pub use round::Round;
pub use seed::Seed;
