//! Deterministic hashing for 64-bit integer vectors
//!
//! Every vector width has two hash functions:
//!
//! * the **narrow** hash multiplies each lane by its own constant, sums the
//!   lanes and adds a final constant, producing one `u64`;
//! * the **wide** hash multiplies each lane by a second set of constants and
//!   adds a final constant to every lane, producing one `u64` per lane.
//!
//! Wide hashes are meant to be combined before narrowing once, e.g. when a
//! structure embeds several vectors. All arithmetic wraps mod 2^64 and the
//! lanes are read as raw two's-complement bits, so both functions are total.

use crate::hash_constants::HashConstants;

/// Reinterprets signed lanes as unsigned lanes without changing any bit.
///
/// # Examples
/// ```
/// use longvec_core::vector_hash::reinterpret_lanes;
/// assert_eq!(reinterpret_lanes([-1, 0]), [u64::MAX, 0]);
/// ```
#[inline]
pub fn reinterpret_lanes<const N: usize>(lanes: [i64; N]) -> [u64; N] {
    lanes.map(|lane| lane as u64)
}

/// Narrow hash of raw unsigned lanes using `constants`.
///
/// Lanes are summed left to right starting from lane 0.
#[inline]
pub fn narrow_hash_lanes<const N: usize>(lanes: [u64; N], constants: &HashConstants<N>) -> u64 {
    let mut sum = 0u64;
    for i in 0..N {
        sum = sum.wrapping_add(lanes[i].wrapping_mul(constants.narrow[i]));
    }
    sum.wrapping_add(constants.narrow_offset)
}

/// Wide hash of raw unsigned lanes using `constants`.
#[inline]
pub fn wide_hash_lanes<const N: usize>(lanes: [u64; N], constants: &HashConstants<N>) -> [u64; N] {
    let mut out = [0u64; N];
    for i in 0..N {
        out[i] = lanes[i]
            .wrapping_mul(constants.wide[i])
            .wrapping_add(constants.wide_offset);
    }
    out
}

/// A fixed-width vector with a narrow and a wide hash
pub trait VectorHash: Copy {
    /// Unsigned vector of the same width, returned by the wide hash
    type Wide: Copy;

    /// Hashes every lane into a single value.
    fn hash(self) -> u64;

    /// Hashes every lane independently, leaving the lanes uncombined.
    fn hash_wide(self) -> Self::Wide;
}

/// Narrow hash of any supported vector.
///
/// # Examples
/// ```
/// use longvec_core::{narrow_hash, Long2};
/// assert_eq!(narrow_hash(Long2::ZERO), 0xA9D9_19BF);
/// ```
#[inline]
pub fn narrow_hash<V: VectorHash>(v: V) -> u64 {
    v.hash()
}

/// Wide hash of any supported vector.
///
/// # Examples
/// ```
/// use longvec_core::{wide_hash, Long2, ULong2};
/// assert_eq!(wide_hash(Long2::ZERO), ULong2::splat(0x5D3E_D947));
/// ```
#[inline]
pub fn wide_hash<V: VectorHash>(v: V) -> V::Wide {
    v.hash_wide()
}
