//! Multiplier tables for the vector hash functions
//!
//! Each vector width owns one table. The narrow multipliers and final constant
//! feed [`crate::vector_hash::narrow_hash_lanes`]; the wide set feeds
//! [`crate::vector_hash::wide_hash_lanes`]. The values are fixed: changing any
//! of them changes every hash produced by the crate.

/// Constants used to hash an `N`-lane vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashConstants<const N: usize> {
    /// Per-lane multipliers for the narrow hash
    pub narrow: [u64; N],
    /// Added once after the lanes are summed
    pub narrow_offset: u64,
    /// Per-lane multipliers for the wide hash
    pub wide: [u64; N],
    /// Added to every lane of the wide hash
    pub wide_offset: u64,
}

impl<const N: usize> HashConstants<N> {
    /// Returns true if every multiplier in the table is odd.
    ///
    /// An odd multiplier is invertible mod 2^64, so no single-bit change of a
    /// lane can be cancelled by the multiplication.
    pub const fn multipliers_are_odd(&self) -> bool {
        let mut i = 0;
        while i < N {
            if self.narrow[i] & 1 == 0 || self.wide[i] & 1 == 0 {
                return false;
            }
            i += 1;
        }
        true
    }
}

pub const LONG2_HASH: HashConstants<2> = HashConstants {
    narrow: [0x83B5_8237, 0x833E_3E29],
    narrow_offset: 0xA9D9_19BF,
    wide: [0xA2FB_6347, 0x5E0D_5C2D],
    wide_offset: 0x5D3E_D947,
};

pub const LONG3_HASH: HashConstants<3> = HashConstants {
    narrow: [0x4C7F_6DD1, 0x4822_A3E9, 0xAAC3_C25D],
    narrow_offset: 0xD21D_0945,
    wide: [0x8815_1049, 0x7B2F_EED1, 0xA8D5_E979],
    wide_offset: 0x4E0D_8F5D,
};

pub const LONG4_HASH: HashConstants<4> = HashConstants {
    narrow: [0x6E05_0B01, 0x750F_DBF5, 0x7F3D_D499, 0x52EA_AEBB],
    narrow_offset: 0x4599_C793,
    wide: [0xD1C6_B6E9, 0x9A5C_2C47, 0x5E0F_1B6B, 0xB41F_2D1D],
    wide_offset: 0xF11A_D8C3,
};

// Every table must stay invertible lane by lane.
const _: () = assert!(LONG2_HASH.multipliers_are_odd());
const _: () = assert!(LONG3_HASH.multipliers_are_odd());
const _: () = assert!(LONG4_HASH.multipliers_are_odd());
