//! Derivation error types.

use thiserror::Error;

/// Errors raised while decoding inputs or deriving a roll.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeriveError {
    /// The seed did not decode to exactly 32 bytes.
    #[error("invalid seed length: expected 32 bytes, got {actual}")]
    InvalidSeedLength {
        /// Number of bytes actually decoded.
        actual: usize,
    },

    /// The seed text contained non-hex characters or an odd digit count.
    #[error("invalid hex encoding: {0}")]
    InvalidHexEncoding(String),

    /// The round number does not fit the 32-byte big-endian field.
    #[error("round too large: needs {bytes} bytes, at most 32 are allowed")]
    RoundTooLarge {
        /// Minimal big-endian byte length of the rejected round.
        bytes: usize,
    },

    /// The round text is not a non-negative decimal integer.
    #[error("invalid round: {0}")]
    InvalidRound(String),

    /// A die face outside `1..=6`.
    #[error("invalid dice face: {0}")]
    InvalidFace(u8),
}

impl From<hex::FromHexError> for DeriveError {
    fn from(err: hex::FromHexError) -> Self {
        Self::InvalidHexEncoding(err.to_string())
    }
}
