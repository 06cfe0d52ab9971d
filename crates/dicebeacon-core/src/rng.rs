//! Roll source abstraction.
//!
//! The CLI drives any `RollSource`; in production that is a [`RollChain`],
//! in tests a scripted replay is injected.
//!
//! [`RollChain`]: crate::chain::RollChain

use crate::error::DeriveError;
use crate::roll::DiceRoll;

/// Something that yields dice rolls one after another.
pub trait RollSource {
    /// Produces the next roll.
    ///
    /// # Errors
    ///
    /// Returns the `DeriveError` that stopped the source, e.g.
    /// `DeriveError::RoundTooLarge` once the round counter leaves the
    /// 32-byte window.
    fn next_roll(&mut self) -> Result<DiceRoll, DeriveError>;
}
