//! Four-lane 64-bit integer vector

use crate::bool_vector::Bool4;
use crate::hash_constants::LONG4_HASH;
use crate::lane_ops::{checked_f64_lanes, gather_lanes, truncate_f64_lanes};
use crate::long2::Long2;
use crate::long3::Long3;
use crate::status::Result;
use crate::unsigned_vector::ULong4;
use crate::vector_hash::{narrow_hash_lanes, reinterpret_lanes, wide_hash_lanes, VectorHash};

/// A 4D vector with i64 components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Long4 {
    pub x: i64,
    pub y: i64,
    pub z: i64,
    pub w: i64,
}

impl Long4 {
    pub const ZERO: Self = Self::splat(0);
    pub const ONE: Self = Self::splat(1);
    pub const NEG_ONE: Self = Self::splat(-1);
    pub const MIN: Self = Self::splat(i64::MIN);
    pub const MAX: Self = Self::splat(i64::MAX);
    pub const X: Self = Self::new(1, 0, 0, 0);
    pub const Y: Self = Self::new(0, 1, 0, 0);
    pub const Z: Self = Self::new(0, 0, 1, 0);
    pub const W: Self = Self::new(0, 0, 0, 1);

    /// Creates a new 4D integer vector
    #[inline]
    pub const fn new(x: i64, y: i64, z: i64, w: i64) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector with all components set to the same value
    #[inline]
    pub const fn splat(value: i64) -> Self {
        Self { x: value, y: value, z: value, w: value }
    }

    /// Creates a 4D vector from a 3D vector and w component
    #[inline]
    pub const fn from_xyz(v: Long3, w: i64) -> Self {
        Self { x: v.x, y: v.y, z: v.z, w }
    }

    /// Creates a 4D vector from two 2D halves
    #[inline]
    pub const fn from_xy_zw(xy: Long2, zw: Long2) -> Self {
        Self { x: xy.x, y: xy.y, z: zw.x, w: zw.y }
    }

    #[inline]
    pub const fn from_bool4(mask: Bool4) -> Self {
        Self::new(mask.x as i64, mask.y as i64, mask.z as i64, mask.w as i64)
    }

    #[inline]
    pub fn from_f64_array_truncating(lanes: [f64; 4]) -> Self {
        Self::from_array(truncate_f64_lanes(lanes))
    }

    pub fn try_from_f64_array(lanes: [f64; 4]) -> Result<Self> {
        checked_f64_lanes(lanes).map(Self::from_array)
    }

    #[inline]
    pub const fn as_ulong4(self) -> ULong4 {
        ULong4::new(self.x as u64, self.y as u64, self.z as u64, self.w as u64)
    }

    #[inline]
    pub const fn from_bits(bits: ULong4) -> Self {
        bits.as_long4()
    }

    #[inline]
    pub fn dot(self, other: Self) -> i64 {
        (self * other).csum()
    }

    #[inline]
    pub fn csum(self) -> i64 {
        self.x
            .wrapping_add(self.y)
            .wrapping_add(self.z)
            .wrapping_add(self.w)
    }

    #[inline]
    pub fn cmin(self) -> i64 {
        self.x.min(self.y).min(self.z.min(self.w))
    }

    #[inline]
    pub fn cmax(self) -> i64 {
        self.x.max(self.y).max(self.z.max(self.w))
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
            z: self.z.min(other.z),
            w: self.w.min(other.w),
        }
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
            z: self.z.max(other.z),
            w: self.w.max(other.w),
        }
    }

    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self {
            x: self.x.wrapping_abs(),
            y: self.y.wrapping_abs(),
            z: self.z.wrapping_abs(),
            w: self.w.wrapping_abs(),
        }
    }

    #[inline]
    pub fn signum(self) -> Self {
        Self {
            x: self.x.signum(),
            y: self.y.signum(),
            z: self.z.signum(),
            w: self.w.signum(),
        }
    }

    #[inline]
    pub fn xy(self) -> Long2 {
        Long2::new(self.x, self.y)
    }

    #[inline]
    pub fn zw(self) -> Long2 {
        Long2::new(self.z, self.w)
    }

    /// Returns the xyz components as a 3D vector
    #[inline]
    pub fn xyz(self) -> Long3 {
        Long3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn wzyx(self) -> Self {
        Self::new(self.w, self.z, self.y, self.x)
    }

    pub fn swizzle2(self, indices: [usize; 2]) -> Result<Long2> {
        gather_lanes(self.to_array(), indices).map(Long2::from_array)
    }

    pub fn swizzle3(self, indices: [usize; 3]) -> Result<Long3> {
        gather_lanes(self.to_array(), indices).map(Long3::from_array)
    }

    pub fn swizzle4(self, indices: [usize; 4]) -> Result<Long4> {
        gather_lanes(self.to_array(), indices).map(Long4::from_array)
    }

    /// Narrow hash of the vector
    #[inline]
    pub fn hash(self) -> u64 {
        narrow_hash_lanes(reinterpret_lanes(self.to_array()), &LONG4_HASH)
    }

    /// Wide hash of the vector, one hash per lane
    #[inline]
    pub fn hash_wide(self) -> ULong4 {
        ULong4::from_array(wide_hash_lanes(reinterpret_lanes(self.to_array()), &LONG4_HASH))
    }
}

impl VectorHash for Long4 {
    type Wide = ULong4;

    #[inline]
    fn hash(self) -> u64 {
        Long4::hash(self)
    }

    #[inline]
    fn hash_wide(self) -> ULong4 {
        Long4::hash_wide(self)
    }
}

impl std::hash::Hash for Long4 {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(Long4::hash(*self));
    }
}

impl From<(i64, i64, i64, i64)> for Long4 {
    #[inline]
    fn from((x, y, z, w): (i64, i64, i64, i64)) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<[i32; 4]> for Long4 {
    #[inline]
    fn from(a: [i32; 4]) -> Self {
        Self::from_array(a.map(i64::from))
    }
}

impl From<[u32; 4]> for Long4 {
    #[inline]
    fn from(a: [u32; 4]) -> Self {
        Self::from_array(a.map(i64::from))
    }
}

impl From<Bool4> for Long4 {
    #[inline]
    fn from(mask: Bool4) -> Self {
        Self::from_bool4(mask)
    }
}

impl_vector_lanes!(Long4, i64, 4, [0 => x, 1 => y, 2 => z, 3 => w]);
impl_vector_compare!(Long4, Bool4, [x, y, z, w]);

impl_vector_binop!(Long4, i64, [x, y, z, w], Add::add, AddAssign::add_assign, i64::wrapping_add);
impl_vector_binop!(Long4, i64, [x, y, z, w], Sub::sub, SubAssign::sub_assign, i64::wrapping_sub);
impl_vector_binop!(Long4, i64, [x, y, z, w], Mul::mul, MulAssign::mul_assign, i64::wrapping_mul);
impl_vector_binop!(Long4, i64, [x, y, z, w], Div::div, DivAssign::div_assign, i64::wrapping_div);
impl_vector_binop!(Long4, i64, [x, y, z, w], Rem::rem, RemAssign::rem_assign, i64::wrapping_rem);
impl_vector_unop!(Long4, [x, y, z, w], Neg::neg, i64::wrapping_neg);
impl_vector_bitwise!(Long4, i64, [x, y, z, w]);
impl_vector_shifts!(Long4, i64, [x, y, z, w]);

impl_vector_fmt!(Long4, "long4", [x, y, z, w], Display, LowerHex, UpperHex, Binary);
