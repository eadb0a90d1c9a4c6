//! Unsigned 64-bit vectors
//!
//! These are the bit-for-bit unsigned views of [`Long2`], [`Long3`] and
//! [`Long4`]. The wide hash returns them, and callers combining several wide
//! hashes work on them with wrapping arithmetic before narrowing once.

use crate::long2::Long2;
use crate::long3::Long3;
use crate::long4::Long4;

/// A 2D vector with u64 components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct ULong2 {
    pub x: u64,
    pub y: u64,
}

/// A 3D vector with u64 components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct ULong3 {
    pub x: u64,
    pub y: u64,
    pub z: u64,
}

/// A 4D vector with u64 components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct ULong4 {
    pub x: u64,
    pub y: u64,
    pub z: u64,
    pub w: u64,
}

impl ULong2 {
    #[inline]
    pub const fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn splat(value: u64) -> Self {
        Self { x: value, y: value }
    }

    /// Sums the lanes mod 2^64, lane 0 first
    #[inline]
    pub fn wrapping_csum(self) -> u64 {
        self.x.wrapping_add(self.y)
    }

    /// Reinterprets the bits of every lane as `i64`
    #[inline]
    pub const fn as_long2(self) -> Long2 {
        Long2::new(self.x as i64, self.y as i64)
    }
}

impl ULong3 {
    #[inline]
    pub const fn new(x: u64, y: u64, z: u64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn splat(value: u64) -> Self {
        Self { x: value, y: value, z: value }
    }

    #[inline]
    pub fn wrapping_csum(self) -> u64 {
        self.x.wrapping_add(self.y).wrapping_add(self.z)
    }

    #[inline]
    pub const fn as_long3(self) -> Long3 {
        Long3::new(self.x as i64, self.y as i64, self.z as i64)
    }
}

impl ULong4 {
    #[inline]
    pub const fn new(x: u64, y: u64, z: u64, w: u64) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn splat(value: u64) -> Self {
        Self { x: value, y: value, z: value, w: value }
    }

    #[inline]
    pub fn wrapping_csum(self) -> u64 {
        self.x
            .wrapping_add(self.y)
            .wrapping_add(self.z)
            .wrapping_add(self.w)
    }

    #[inline]
    pub const fn as_long4(self) -> Long4 {
        Long4::new(self.x as i64, self.y as i64, self.z as i64, self.w as i64)
    }
}

impl_vector_lanes!(ULong2, u64, 2, [0 => x, 1 => y]);
impl_vector_lanes!(ULong3, u64, 3, [0 => x, 1 => y, 2 => z]);
impl_vector_lanes!(ULong4, u64, 4, [0 => x, 1 => y, 2 => z, 3 => w]);

impl_vector_binop!(ULong2, u64, [x, y], Add::add, AddAssign::add_assign, u64::wrapping_add);
impl_vector_binop!(ULong2, u64, [x, y], Sub::sub, SubAssign::sub_assign, u64::wrapping_sub);
impl_vector_binop!(ULong2, u64, [x, y], Mul::mul, MulAssign::mul_assign, u64::wrapping_mul);
impl_vector_binop!(ULong3, u64, [x, y, z], Add::add, AddAssign::add_assign, u64::wrapping_add);
impl_vector_binop!(ULong3, u64, [x, y, z], Sub::sub, SubAssign::sub_assign, u64::wrapping_sub);
impl_vector_binop!(ULong3, u64, [x, y, z], Mul::mul, MulAssign::mul_assign, u64::wrapping_mul);
impl_vector_binop!(ULong4, u64, [x, y, z, w], Add::add, AddAssign::add_assign, u64::wrapping_add);
impl_vector_binop!(ULong4, u64, [x, y, z, w], Sub::sub, SubAssign::sub_assign, u64::wrapping_sub);
impl_vector_binop!(ULong4, u64, [x, y, z, w], Mul::mul, MulAssign::mul_assign, u64::wrapping_mul);

impl_vector_bitwise!(ULong2, u64, [x, y]);
impl_vector_bitwise!(ULong3, u64, [x, y, z]);
impl_vector_bitwise!(ULong4, u64, [x, y, z, w]);

impl_vector_shifts!(ULong2, u64, [x, y]);
impl_vector_shifts!(ULong3, u64, [x, y, z]);
impl_vector_shifts!(ULong4, u64, [x, y, z, w]);

impl_vector_fmt!(ULong2, "ulong2", [x, y], Display, LowerHex, UpperHex, Binary);
impl_vector_fmt!(ULong3, "ulong3", [x, y, z], Display, LowerHex, UpperHex, Binary);
impl_vector_fmt!(ULong4, "ulong4", [x, y, z, w], Display, LowerHex, UpperHex, Binary);
