//! Lane-array helpers shared by the vector types
//!
//! Conversions from `f64` lanes and index-driven reordering are written once
//! over plain arrays; the vector types wrap them.

use num_traits::ToPrimitive;

use crate::status::{check_lane, LongVecError, Result};

/// Truncates every lane toward zero.
///
/// Lanes beyond the `i64` range saturate at `i64::MIN` / `i64::MAX` and NaN
/// becomes 0, matching the `as` cast.
///
/// # Examples
/// ```
/// use longvec_core::lane_ops::truncate_f64_lanes;
/// assert_eq!(truncate_f64_lanes([1.9, -1.9]), [1, -1]);
/// assert_eq!(truncate_f64_lanes([f64::NAN, 1e300]), [0, i64::MAX]);
/// ```
#[inline]
pub fn truncate_f64_lanes<const N: usize>(lanes: [f64; N]) -> [i64; N] {
    lanes.map(|lane| lane as i64)
}

/// Truncates every lane toward zero, failing on the first lane that has no
/// `i64` counterpart (NaN, infinite or out of range).
pub fn checked_f64_lanes<const N: usize>(lanes: [f64; N]) -> Result<[i64; N]> {
    let mut out = [0i64; N];
    for (lane, (&value, slot)) in lanes.iter().zip(out.iter_mut()).enumerate() {
        *slot = value
            .to_i64()
            .ok_or(LongVecError::FloatConversion { lane, value })?;
    }
    Ok(out)
}

/// Builds an `M`-lane array by picking `lanes[indices[k]]` for every `k`.
///
/// # Examples
/// ```
/// use longvec_core::lane_ops::gather_lanes;
/// assert_eq!(gather_lanes([10, 20, 30], [2, 0]), Ok([30, 10]));
/// assert!(gather_lanes([10, 20], [0, 2]).is_err());
/// ```
pub fn gather_lanes<T: Copy + Default, const N: usize, const M: usize>(
    lanes: [T; N],
    indices: [usize; M],
) -> Result<[T; M]> {
    let mut out = [T::default(); M];
    for (slot, &index) in out.iter_mut().zip(indices.iter()) {
        check_lane(index, N)?;
        *slot = lanes[index];
    }
    Ok(out)
}
