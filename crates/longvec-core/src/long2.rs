//! Two-lane 64-bit integer vector

use crate::bool_vector::Bool2;
use crate::hash_constants::LONG2_HASH;
use crate::lane_ops::{checked_f64_lanes, gather_lanes, truncate_f64_lanes};
use crate::long3::Long3;
use crate::long4::Long4;
use crate::status::Result;
use crate::unsigned_vector::ULong2;
use crate::vector_hash::{narrow_hash_lanes, reinterpret_lanes, wide_hash_lanes, VectorHash};

/// A 2D vector with i64 components
///
/// Arithmetic wraps on overflow. Division and remainder by zero panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Long2 {
    pub x: i64,
    pub y: i64,
}

impl Long2 {
    pub const ZERO: Self = Self::splat(0);
    pub const ONE: Self = Self::splat(1);
    pub const NEG_ONE: Self = Self::splat(-1);
    pub const MIN: Self = Self::splat(i64::MIN);
    pub const MAX: Self = Self::splat(i64::MAX);
    pub const X: Self = Self::new(1, 0);
    pub const Y: Self = Self::new(0, 1);

    /// Creates a new 2D integer vector
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Creates a vector with all components set to the same value
    #[inline]
    pub const fn splat(value: i64) -> Self {
        Self { x: value, y: value }
    }

    /// Maps `true` lanes to 1 and `false` lanes to 0
    #[inline]
    pub const fn from_bool2(mask: Bool2) -> Self {
        Self::new(mask.x as i64, mask.y as i64)
    }

    /// Truncating cast from `f64` lanes (saturating, NaN becomes 0)
    #[inline]
    pub fn from_f64_array_truncating(lanes: [f64; 2]) -> Self {
        Self::from_array(truncate_f64_lanes(lanes))
    }

    /// Checked cast from `f64` lanes
    pub fn try_from_f64_array(lanes: [f64; 2]) -> Result<Self> {
        checked_f64_lanes(lanes).map(Self::from_array)
    }

    /// Reinterprets the bits of every lane as `u64`
    #[inline]
    pub const fn as_ulong2(self) -> ULong2 {
        ULong2::new(self.x as u64, self.y as u64)
    }

    /// Inverse of [`Long2::as_ulong2`]
    #[inline]
    pub const fn from_bits(bits: ULong2) -> Self {
        bits.as_long2()
    }

    /// Computes the dot product of two vectors (wrapping)
    #[inline]
    pub fn dot(self, other: Self) -> i64 {
        self.x.wrapping_mul(other.x).wrapping_add(self.y.wrapping_mul(other.y))
    }

    /// Sums the lanes (wrapping)
    #[inline]
    pub fn csum(self) -> i64 {
        self.x.wrapping_add(self.y)
    }

    /// Returns the smallest lane
    #[inline]
    pub fn cmin(self) -> i64 {
        self.x.min(self.y)
    }

    /// Returns the largest lane
    #[inline]
    pub fn cmax(self) -> i64 {
        self.x.max(self.y)
    }

    /// Returns the component-wise minimum of two vectors
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }

    /// Returns the component-wise maximum of two vectors
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }

    /// Clamps every lane into `[lo, hi]`, lane by lane
    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    /// Returns the component-wise absolute values; `i64::MIN` stays `i64::MIN`
    #[inline]
    pub fn abs(self) -> Self {
        Self {
            x: self.x.wrapping_abs(),
            y: self.y.wrapping_abs(),
        }
    }

    /// Returns -1, 0 or 1 per lane
    #[inline]
    pub fn signum(self) -> Self {
        Self {
            x: self.x.signum(),
            y: self.y.signum(),
        }
    }

    #[inline]
    pub fn yx(self) -> Self {
        Self::new(self.y, self.x)
    }

    /// Reorders lanes into a 2-lane vector, e.g. `[1, 1]` for `yy`
    pub fn swizzle2(self, indices: [usize; 2]) -> Result<Long2> {
        gather_lanes(self.to_array(), indices).map(Long2::from_array)
    }

    /// Reorders lanes into a 3-lane vector
    pub fn swizzle3(self, indices: [usize; 3]) -> Result<Long3> {
        gather_lanes(self.to_array(), indices).map(Long3::from_array)
    }

    /// Reorders lanes into a 4-lane vector
    pub fn swizzle4(self, indices: [usize; 4]) -> Result<Long4> {
        gather_lanes(self.to_array(), indices).map(Long4::from_array)
    }

    /// Narrow hash of the vector
    ///
    /// # Examples
    /// ```
    /// use longvec_core::Long2;
    /// assert_eq!(Long2::ZERO.hash(), 0xA9D9_19BF);
    /// ```
    #[inline]
    pub fn hash(self) -> u64 {
        narrow_hash_lanes(reinterpret_lanes(self.to_array()), &LONG2_HASH)
    }

    /// Wide hash of the vector, one hash per lane
    #[inline]
    pub fn hash_wide(self) -> ULong2 {
        ULong2::from_array(wide_hash_lanes(reinterpret_lanes(self.to_array()), &LONG2_HASH))
    }
}

impl VectorHash for Long2 {
    type Wide = ULong2;

    #[inline]
    fn hash(self) -> u64 {
        Long2::hash(self)
    }

    #[inline]
    fn hash_wide(self) -> ULong2 {
        Long2::hash_wide(self)
    }
}

impl std::hash::Hash for Long2 {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(Long2::hash(*self));
    }
}

impl From<(i64, i64)> for Long2 {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for Long2 {
    #[inline]
    fn from(a: [i32; 2]) -> Self {
        Self::new(a[0].into(), a[1].into())
    }
}

impl From<[u32; 2]> for Long2 {
    #[inline]
    fn from(a: [u32; 2]) -> Self {
        Self::new(a[0].into(), a[1].into())
    }
}

impl From<Bool2> for Long2 {
    #[inline]
    fn from(mask: Bool2) -> Self {
        Self::from_bool2(mask)
    }
}

impl_vector_lanes!(Long2, i64, 2, [0 => x, 1 => y]);
impl_vector_compare!(Long2, Bool2, [x, y]);

impl_vector_binop!(Long2, i64, [x, y], Add::add, AddAssign::add_assign, i64::wrapping_add);
impl_vector_binop!(Long2, i64, [x, y], Sub::sub, SubAssign::sub_assign, i64::wrapping_sub);
impl_vector_binop!(Long2, i64, [x, y], Mul::mul, MulAssign::mul_assign, i64::wrapping_mul);
impl_vector_binop!(Long2, i64, [x, y], Div::div, DivAssign::div_assign, i64::wrapping_div);
impl_vector_binop!(Long2, i64, [x, y], Rem::rem, RemAssign::rem_assign, i64::wrapping_rem);
impl_vector_unop!(Long2, [x, y], Neg::neg, i64::wrapping_neg);
impl_vector_bitwise!(Long2, i64, [x, y]);
impl_vector_shifts!(Long2, i64, [x, y]);

impl_vector_fmt!(Long2, "long2", [x, y], Display, LowerHex, UpperHex, Binary);
