//! Boolean lane masks returned by the vector comparisons

/// A 2-lane boolean mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Bool2 {
    pub x: bool,
    pub y: bool,
}

/// A 3-lane boolean mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Bool3 {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

/// A 4-lane boolean mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Bool4 {
    pub x: bool,
    pub y: bool,
    pub z: bool,
    pub w: bool,
}

impl Bool2 {
    #[inline]
    pub const fn new(x: bool, y: bool) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn splat(value: bool) -> Self {
        Self { x: value, y: value }
    }

    /// Returns true if any lane is set
    #[inline]
    pub fn any(self) -> bool {
        self.x || self.y
    }

    /// Returns true if every lane is set
    #[inline]
    pub fn all(self) -> bool {
        self.x && self.y
    }

    /// Packs the lanes into the low bits of an integer, lane 0 in bit 0
    #[inline]
    pub fn bitmask(self) -> u32 {
        (self.x as u32) | (self.y as u32) << 1
    }
}

impl Bool3 {
    #[inline]
    pub const fn new(x: bool, y: bool, z: bool) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn splat(value: bool) -> Self {
        Self { x: value, y: value, z: value }
    }

    #[inline]
    pub fn any(self) -> bool {
        self.x || self.y || self.z
    }

    #[inline]
    pub fn all(self) -> bool {
        self.x && self.y && self.z
    }

    #[inline]
    pub fn bitmask(self) -> u32 {
        (self.x as u32) | (self.y as u32) << 1 | (self.z as u32) << 2
    }
}

impl Bool4 {
    #[inline]
    pub const fn new(x: bool, y: bool, z: bool, w: bool) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn splat(value: bool) -> Self {
        Self { x: value, y: value, z: value, w: value }
    }

    #[inline]
    pub fn any(self) -> bool {
        self.x || self.y || self.z || self.w
    }

    #[inline]
    pub fn all(self) -> bool {
        self.x && self.y && self.z && self.w
    }

    #[inline]
    pub fn bitmask(self) -> u32 {
        (self.x as u32) | (self.y as u32) << 1 | (self.z as u32) << 2 | (self.w as u32) << 3
    }
}

impl_vector_lanes!(Bool2, bool, 2, [0 => x, 1 => y]);
impl_vector_lanes!(Bool3, bool, 3, [0 => x, 1 => y, 2 => z]);
impl_vector_lanes!(Bool4, bool, 4, [0 => x, 1 => y, 2 => z, 3 => w]);

impl_vector_bitwise!(Bool2, bool, [x, y]);
impl_vector_bitwise!(Bool3, bool, [x, y, z]);
impl_vector_bitwise!(Bool4, bool, [x, y, z, w]);

impl_vector_fmt!(Bool2, "bool2", [x, y], Display);
impl_vector_fmt!(Bool3, "bool3", [x, y, z], Display);
impl_vector_fmt!(Bool4, "bool4", [x, y, z, w], Display);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_all() {
        assert!(Bool2::new(true, false).any());
        assert!(!Bool2::new(true, false).all());
        assert!(Bool3::splat(true).all());
        assert!(!Bool4::splat(false).any());
    }

    #[test]
    fn test_bitmask() {
        assert_eq!(Bool2::new(false, true).bitmask(), 0b10);
        assert_eq!(Bool3::new(true, false, true).bitmask(), 0b101);
        assert_eq!(Bool4::new(true, true, false, true).bitmask(), 0b1011);
    }

    #[test]
    fn test_logic_ops() {
        let a = Bool3::new(true, false, true);
        let b = Bool3::new(true, true, false);
        assert_eq!(a & b, Bool3::new(true, false, false));
        assert_eq!(a | b, Bool3::new(true, true, true));
        assert_eq!(a ^ b, Bool3::new(false, true, true));
        assert_eq!(!a, Bool3::new(false, true, false));
        assert_eq!(a & false, Bool3::splat(false));
    }

    #[test]
    fn test_display() {
        assert_eq!(Bool2::new(true, false).to_string(), "bool2(true, false)");
    }

    #[test]
    fn test_lane_access() {
        let mut m = Bool4::default();
        m[2] = true;
        assert_eq!(m.to_array(), [false, false, true, false]);
        assert_eq!(m.try_get(2), Ok(true));
        assert!(m.try_get(4).is_err());
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_bool2_index_mut_out_of_bounds() {
        let mut m = Bool2::splat(false);
        m[2] = true;
    }
}
