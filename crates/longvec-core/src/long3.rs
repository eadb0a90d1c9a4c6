//! Three-lane 64-bit integer vector

use crate::bool_vector::Bool3;
use crate::hash_constants::LONG3_HASH;
use crate::lane_ops::{checked_f64_lanes, gather_lanes, truncate_f64_lanes};
use crate::long2::Long2;
use crate::long4::Long4;
use crate::status::Result;
use crate::unsigned_vector::ULong3;
use crate::vector_hash::{narrow_hash_lanes, reinterpret_lanes, wide_hash_lanes, VectorHash};

/// A 3D vector with i64 components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Long3 {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Long3 {
    pub const ZERO: Self = Self::splat(0);
    pub const ONE: Self = Self::splat(1);
    pub const NEG_ONE: Self = Self::splat(-1);
    pub const MIN: Self = Self::splat(i64::MIN);
    pub const MAX: Self = Self::splat(i64::MAX);
    pub const X: Self = Self::new(1, 0, 0);
    pub const Y: Self = Self::new(0, 1, 0);
    pub const Z: Self = Self::new(0, 0, 1);

    /// Creates a new 3D integer vector
    #[inline]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value
    #[inline]
    pub const fn splat(value: i64) -> Self {
        Self { x: value, y: value, z: value }
    }

    /// Creates a vector from a 2D vector and z component
    #[inline]
    pub const fn from_xy(v: Long2, z: i64) -> Self {
        Self { x: v.x, y: v.y, z }
    }

    #[inline]
    pub const fn from_bool3(mask: Bool3) -> Self {
        Self::new(mask.x as i64, mask.y as i64, mask.z as i64)
    }

    #[inline]
    pub fn from_f64_array_truncating(lanes: [f64; 3]) -> Self {
        Self::from_array(truncate_f64_lanes(lanes))
    }

    pub fn try_from_f64_array(lanes: [f64; 3]) -> Result<Self> {
        checked_f64_lanes(lanes).map(Self::from_array)
    }

    #[inline]
    pub const fn as_ulong3(self) -> ULong3 {
        ULong3::new(self.x as u64, self.y as u64, self.z as u64)
    }

    #[inline]
    pub const fn from_bits(bits: ULong3) -> Self {
        bits.as_long3()
    }

    /// Computes the dot product of two vectors (wrapping)
    #[inline]
    pub fn dot(self, other: Self) -> i64 {
        (self * other).csum()
    }

    /// Computes the cross product of two vectors (wrapping)
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y.wrapping_mul(other.z).wrapping_sub(self.z.wrapping_mul(other.y)),
            y: self.z.wrapping_mul(other.x).wrapping_sub(self.x.wrapping_mul(other.z)),
            z: self.x.wrapping_mul(other.y).wrapping_sub(self.y.wrapping_mul(other.x)),
        }
    }

    #[inline]
    pub fn csum(self) -> i64 {
        self.x.wrapping_add(self.y).wrapping_add(self.z)
    }

    #[inline]
    pub fn cmin(self) -> i64 {
        self.x.min(self.y).min(self.z)
    }

    #[inline]
    pub fn cmax(self) -> i64 {
        self.x.max(self.y).max(self.z)
    }

    /// Returns the component-wise minimum of two vectors
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
            z: self.z.min(other.z),
        }
    }

    /// Returns the component-wise maximum of two vectors
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
            z: self.z.max(other.z),
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
        }
    }

    #[inline]
    pub fn signum(self) -> Self {
        Self {
            x: self.x.signum(),
            y: self.y.signum(),
            z: self.z.signum(),
        }
    }

    /// Returns the xy components as a 2D vector
    #[inline]
    pub fn xy(self) -> Long2 {
        Long2::new(self.x, self.y)
    }

    #[inline]
    pub fn xz(self) -> Long2 {
        Long2::new(self.x, self.z)
    }

    #[inline]
    pub fn yz(self) -> Long2 {
        Long2::new(self.y, self.z)
    }

    #[inline]
    pub fn zyx(self) -> Self {
        Self::new(self.z, self.y, self.x)
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
        narrow_hash_lanes(reinterpret_lanes(self.to_array()), &LONG3_HASH)
    }

    /// Wide hash of the vector, one hash per lane
    #[inline]
    pub fn hash_wide(self) -> ULong3 {
        ULong3::from_array(wide_hash_lanes(reinterpret_lanes(self.to_array()), &LONG3_HASH))
    }
}

impl VectorHash for Long3 {
    type Wide = ULong3;

    #[inline]
    fn hash(self) -> u64 {
        Long3::hash(self)
    }

    #[inline]
    fn hash_wide(self) -> ULong3 {
        Long3::hash_wide(self)
    }
}

impl std::hash::Hash for Long3 {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(Long3::hash(*self));
    }
}

impl From<(i64, i64, i64)> for Long3 {
    #[inline]
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[i32; 3]> for Long3 {
    #[inline]
    fn from(a: [i32; 3]) -> Self {
        Self::from_array(a.map(i64::from))
    }
}

impl From<[u32; 3]> for Long3 {
    #[inline]
    fn from(a: [u32; 3]) -> Self {
        Self::from_array(a.map(i64::from))
    }
}

impl From<Bool3> for Long3 {
    #[inline]
    fn from(mask: Bool3) -> Self {
        Self::from_bool3(mask)
    }
}

impl_vector_lanes!(Long3, i64, 3, [0 => x, 1 => y, 2 => z]);
impl_vector_compare!(Long3, Bool3, [x, y, z]);

impl_vector_binop!(Long3, i64, [x, y, z], Add::add, AddAssign::add_assign, i64::wrapping_add);
impl_vector_binop!(Long3, i64, [x, y, z], Sub::sub, SubAssign::sub_assign, i64::wrapping_sub);
impl_vector_binop!(Long3, i64, [x, y, z], Mul::mul, MulAssign::mul_assign, i64::wrapping_mul);
impl_vector_binop!(Long3, i64, [x, y, z], Div::div, DivAssign::div_assign, i64::wrapping_div);
impl_vector_binop!(Long3, i64, [x, y, z], Rem::rem, RemAssign::rem_assign, i64::wrapping_rem);
impl_vector_unop!(Long3, [x, y, z], Neg::neg, i64::wrapping_neg);
impl_vector_bitwise!(Long3, i64, [x, y, z]);
impl_vector_shifts!(Long3, i64, [x, y, z]);

impl_vector_fmt!(Long3, "long3", [x, y, z], Display, LowerHex, UpperHex, Binary);
