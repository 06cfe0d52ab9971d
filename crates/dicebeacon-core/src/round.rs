//! Round numbers and their fixed-width big-endian encoding.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DeriveError;

/// Width of the encoded round field in bytes.
pub const ROUND_LEN: usize = 32;

/// A non-negative, arbitrary-precision round number.
///
/// Rounds only become bounded when encoded: values of 2^256 or more are
/// rejected by [`Round::to_be_bytes32`] instead of being truncated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Round(BigUint);

impl Round {
    /// Round zero.
    #[must_use]
    pub fn zero() -> Self {
        Self(BigUint::default())
    }

    /// Returns the following round.
    #[must_use]
    pub fn next(&self) -> Self {
        Self(&self.0 + 1u32)
    }

    /// Returns `self + offset`.
    #[must_use]
    pub fn offset(&self, offset: u64) -> Self {
        Self(&self.0 + offset)
    }

    /// Borrows the underlying integer.
    #[must_use]
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Encodes the round as 32 big-endian bytes, left-padded with zeros.
    ///
    /// # Errors
    ///
    /// Returns `DeriveError::RoundTooLarge` if the minimal big-endian
    /// representation is longer than 32 bytes.
    pub fn to_be_bytes32(&self) -> Result<[u8; ROUND_LEN], DeriveError> {
        let minimal = self.0.to_bytes_be();
        if minimal.len() > ROUND_LEN {
            return Err(DeriveError::RoundTooLarge {
                bytes: minimal.len(),
            });
        }
        let mut encoded = [0u8; ROUND_LEN];
        encoded[ROUND_LEN - minimal.len()..].copy_from_slice(&minimal);
        Ok(encoded)
    }
}

impl From<u64> for Round {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<BigUint> for Round {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl FromStr for Round {
    type Err = DeriveError;

    /// Parses plain decimal digits. Signs, separators and empty input are
    /// rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DeriveError::InvalidRound(format!(
                "{s:?} is not a non-negative decimal integer"
            )));
        }
        digits
            .parse::<BigUint>()
            .map(Self)
            .map_err(|e| DeriveError::InvalidRound(e.to_string()))
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Serialized as a decimal string: rounds may exceed what JSON numbers carry.
impl Serialize for Round {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Round {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
