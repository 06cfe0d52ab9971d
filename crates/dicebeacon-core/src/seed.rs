//! The 32-byte randomness state carried from one round to the next.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DeriveError;

/// Length of a seed in bytes.
pub const SEED_LEN: usize = 32;

/// Current 256-bit randomness state.
///
/// A seed is never mutated: every derivation produces a fresh value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    /// Decodes a seed from hex text, with or without a `0x` prefix.
    ///
    /// # Errors
    ///
    /// Returns `DeriveError::InvalidHexEncoding` if the text is not valid hex,
    /// or `DeriveError::InvalidSeedLength` if it does not decode to 32 bytes.
    pub fn from_hex(text: &str) -> Result<Self, DeriveError> {
        let trimmed = text.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        let bytes = hex::decode(digits)?;
        Self::from_slice(&bytes)
    }

    /// Builds a seed from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `DeriveError::InvalidSeedLength` unless `bytes` is exactly 32 long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DeriveError> {
        let array: [u8; SEED_LEN] = bytes
            .try_into()
            .map_err(|_| DeriveError::InvalidSeedLength {
                actual: bytes.len(),
            })?;
        Ok(Self(array))
    }

    /// Borrows the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// Consumes the seed, returning the raw bytes.
    #[must_use]
    pub fn into_bytes(self) -> [u8; SEED_LEN] {
        self.0
    }

    /// `0x`-prefixed lowercase hex, always 66 characters.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl From<[u8; SEED_LEN]> for Seed {
    fn from(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Seed {
    type Err = DeriveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({self})")
    }
}

impl Serialize for Seed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Seed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(serde::de::Error::custom)
    }
}
