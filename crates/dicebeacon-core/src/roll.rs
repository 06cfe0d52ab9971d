//! The dice roll derivation: one Keccak-256 step of the beacon's hash chain.
//!
//! Each step hashes `seed || round` (round as a 32-byte big-endian field),
//! reads the digest as a big-endian integer to pick a face, and hands the raw
//! digest on as the next seed.

use std::fmt;

use serde::{Deserialize, Serialize};
use tiny_keccak::{Hasher, Keccak};

use crate::error::DeriveError;
use crate::round::{ROUND_LEN, Round};
use crate::seed::{SEED_LEN, Seed};

/// Length of the hashed preimage.
pub const PREIMAGE_LEN: usize = SEED_LEN + ROUND_LEN;

/// Number of faces on the die.
pub const FACES: u8 = 6;

/// A die face in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DiceFace(u8);

impl DiceFace {
    /// Maps a 32-byte digest to a face as `(digest mod 6) + 1`, reading the
    /// digest as an unsigned big-endian integer.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_digest(digest: &[u8; 32]) -> Self {
        // Horner's rule over the bytes; the accumulator stays below 6.
        let remainder = digest
            .iter()
            .fold(0u16, |acc, &b| (acc * 256 + u16::from(b)) % u16::from(FACES));
        Self(remainder as u8 + 1)
    }

    /// The face value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DiceFace {
    type Error = DeriveError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=FACES).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DeriveError::InvalidFace(value))
        }
    }
}

impl From<DiceFace> for u8 {
    fn from(face: DiceFace) -> Self {
        face.0
    }
}

impl fmt::Display for DiceFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Output of one derivation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    /// The round this roll was derived for.
    pub round: Round,
    /// The rolled face.
    pub face: DiceFace,
    /// The digest, carried forward as the next round's seed.
    pub next_seed: Seed,
}

/// Builds the 64-byte preimage `seed || encode32(round)`.
///
/// # Errors
///
/// Returns `DeriveError::RoundTooLarge` if the round needs more than 32 bytes.
pub fn preimage(seed: &Seed, round: &Round) -> Result<[u8; PREIMAGE_LEN], DeriveError> {
    let mut buf = [0u8; PREIMAGE_LEN];
    buf[..SEED_LEN].copy_from_slice(seed.as_bytes());
    buf[SEED_LEN..].copy_from_slice(&round.to_be_bytes32()?);
    Ok(buf)
}

/// Keccak-256 with the original (pre-FIPS 202) padding, as used on-chain.
#[must_use]
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut output);
    output
}

/// Derives the face and next seed for `round` from `seed`.
///
/// Pure and deterministic: the same inputs always produce the same roll.
///
/// # Errors
///
/// Returns `DeriveError::RoundTooLarge` if `round` is 2^256 or greater.
pub fn derive_roll(seed: &Seed, round: &Round) -> Result<DiceRoll, DeriveError> {
    let digest = keccak256(&preimage(seed, round)?);
    let face = DiceFace::from_digest(&digest);
    tracing::trace!(%round, face = face.value(), "derived roll");
    Ok(DiceRoll {
        round: round.clone(),
        face,
        next_seed: Seed::from(digest),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    const SEED_HEX: &str = "0x6f0a975977e8b685640b663af683567f09444f7c57da5f942c1dd38a7a1fb7a4";

    fn seed() -> Seed {
        Seed::from_hex(SEED_HEX).unwrap()
    }

    #[test]
    fn test_keccak256_matches_known_vectors() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
        assert_eq!(
            hex::encode(keccak256(b"abc")),
            "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"
        );
    }

    #[test]
    fn test_keccak256_is_not_sha3_256() {
        // SHA3-256("") under FIPS 202 padding.
        assert_ne!(
            hex::encode(keccak256(b"")),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
    }

    #[test]
    fn test_preimage_is_seed_then_round() {
        let buf = preimage(&seed(), &Round::from(1)).unwrap();
        assert_eq!(&buf[..32], seed().as_bytes());
        assert!(buf[32..63].iter().all(|&b| b == 0));
        assert_eq!(buf[63], 1);
    }

    #[test]
    fn test_derive_round_one_matches_reference() {
        let roll = derive_roll(&seed(), &Round::from(1)).unwrap();
        assert_eq!(roll.round, Round::from(1));
        assert_eq!(roll.face.value(), 5);
        assert_eq!(
            roll.next_seed.to_string(),
            "0xed2afe842a1771e410055ad3e88300e0a791e6b983b3e10158fa13e0afccfb38"
        );
    }

    #[test]
    fn test_derive_round_zero_matches_reference() {
        let roll = derive_roll(&seed(), &Round::zero()).unwrap();
        assert_eq!(roll.face.value(), 3);
        assert_eq!(
            roll.next_seed.to_string(),
            "0x50b0ff8b55abc9d57a5e07dde991bac37e46a2b1c929287474a47a0aecd89668"
        );
    }

    #[test]
    fn test_derive_zero_seed() {
        let roll = derive_roll(&Seed::from([0u8; 32]), &Round::zero()).unwrap();
        assert_eq!(roll.face.value(), 2);
        assert_eq!(
            roll.next_seed.to_string(),
            "0xad3228b676f7d3cd4284a5443f17f1962b36e491b30a40b2405849e597ba5fb5"
        );
    }

    #[test]
    fn test_derive_is_deterministic() {
        let a = derive_roll(&seed(), &Round::from(9)).unwrap();
        let b = derive_roll(&seed(), &Round::from(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_derive_rejects_oversized_round() {
        let round = Round::from(BigUint::from(1u8) << 256u32);
        assert_eq!(
            derive_roll(&seed(), &round).unwrap_err(),
            DeriveError::RoundTooLarge { bytes: 33 }
        );
    }

    #[test]
    fn test_face_from_digest_matches_bigint_reduction() {
        for _ in 0..256 {
            let digest: [u8; 32] = rand::random();
            let expected = BigUint::from_bytes_be(&digest) % 6u32 + 1u32;
            let face = DiceFace::from_digest(&digest);
            assert_eq!(BigUint::from(face.value()), expected);
            assert!((1..=6).contains(&face.value()));
        }
    }

    #[test]
    fn test_face_from_extreme_digests() {
        // 2^256 - 1 ≡ 3 (mod 6)
        assert_eq!(DiceFace::from_digest(&[0xff; 32]).value(), 4);
        assert_eq!(DiceFace::from_digest(&[0u8; 32]).value(), 1);
    }

    #[test]
    fn test_face_try_from_bounds() {
        assert!(DiceFace::try_from(1).is_ok());
        assert!(DiceFace::try_from(6).is_ok());
        assert_eq!(DiceFace::try_from(0), Err(DeriveError::InvalidFace(0)));
        assert_eq!(DiceFace::try_from(7), Err(DeriveError::InvalidFace(7)));
    }

    #[test]
    fn test_roll_serializes_round_as_string() {
        let roll = derive_roll(&seed(), &Round::from(1)).unwrap();
        let json = serde_json::to_value(&roll).unwrap();
        assert_eq!(json["round"], "1");
        assert_eq!(json["face"], 5);
        assert_eq!(
            json["next_seed"],
            "0xed2afe842a1771e410055ad3e88300e0a791e6b983b3e10158fa13e0afccfb38"
        );
    }
}
