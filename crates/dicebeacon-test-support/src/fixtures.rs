//! Pinned reference vectors.
//!
//! Computed once with a Keccak-256 implementation checked against the
//! standard `keccak256("")` and `keccak256("abc")` vectors.

use dicebeacon_core::{DiceFace, DiceRoll, Round, Seed};

/// The seed from the original tool's usage example.
pub const EXAMPLE_SEED: &str =
    "0x6f0a975977e8b685640b663af683567f09444f7c57da5f942c1dd38a7a1fb7a4";

/// `(round, face, next_seed)` for the sequential chain from [`EXAMPLE_SEED`]
/// starting at round 1.
pub const SEQUENTIAL_FROM_ROUND_ONE: [(u64, u8, &str); 5] = [
    (1, 5, "0xed2afe842a1771e410055ad3e88300e0a791e6b983b3e10158fa13e0afccfb38"),
    (2, 5, "0x09619d23f3527263492bba3d368f54abb0bb198dfa79d10465cb070eea391cc4"),
    (3, 2, "0x4c72c2853176e9dbb4d24320aeb3689035a07bf68b8afef3d7233eda84da3003"),
    (4, 2, "0x4c6efdd56436e02dc730f8c688d8cab5063b80b525ff3481157770ab3956e1ed"),
    (5, 5, "0xb19105932b08cdb97c02cb97cbac2d0610e83a5e43d92babd692e8af9419afd0"),
];

/// `(round, face, next_seed)` for three paired turns from [`EXAMPLE_SEED`]
/// starting at round 1.
pub const PAIRED_FROM_ROUND_ONE: [(u64, u8, &str); 6] = [
    (1, 5, "0xed2afe842a1771e410055ad3e88300e0a791e6b983b3e10158fa13e0afccfb38"),
    (2, 5, "0x09619d23f3527263492bba3d368f54abb0bb198dfa79d10465cb070eea391cc4"),
    (2, 4, "0xfd9e1ec0cda5c990ded04fb011b7c669e1150d043a3273ace915a154a0bc04a1"),
    (3, 3, "0xa4e248e8f8b469388e57f7184a54f425d7b5401786e4c978f336d9019f323c78"),
    (3, 2, "0x4ec06fed5b444fdd465db3471855fd95f0d0609cf4a47c2ffe3cff96b0b67827"),
    (4, 1, "0x6f550ffdd9253aa84f51bf923a0aceb0d78f766ccd21c1be2263f5567341f6ac"),
];

/// Parses [`EXAMPLE_SEED`].
///
/// # Panics
///
/// Never in practice; the constant is valid hex of the right length.
#[must_use]
pub fn example_seed() -> Seed {
    Seed::from_hex(EXAMPLE_SEED).expect("example seed is valid")
}

/// Expands a `(round, face, next_seed)` table into rolls.
///
/// # Panics
///
/// Panics if a table entry is malformed.
#[must_use]
pub fn rolls_from_table(table: &[(u64, u8, &str)]) -> Vec<DiceRoll> {
    table
        .iter()
        .map(|&(round, face, next_seed)| DiceRoll {
            round: Round::from(round),
            face: DiceFace::try_from(face).expect("fixture face is in range"),
            next_seed: Seed::from_hex(next_seed).expect("fixture seed is valid"),
        })
        .collect()
}
