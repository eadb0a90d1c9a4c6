//! Internal macros for the per-width vector types.
//!
//! `Long2`, `Long3` and `Long4` (and their unsigned and boolean companions)
//! share identical operator and formatting code that only differs in the
//! lane list. These macros expand that code once per type.

/// Component-wise binary operator with vector and scalar operands.
///
/// Generates `$op<Self>`, `$op<$scalar>`, `$op<$ty> for $scalar` and both
/// assignment forms. `$lane` is the function applied to each pair of lanes,
/// e.g. `i64::wrapping_add`.
macro_rules! impl_vector_binop {
    (
        $ty:ident, $scalar:ty, [$($f:ident),+],
        $op:ident :: $method:ident, $assign_op:ident :: $assign_method:ident,
        $lane:path
    ) => {
        impl ::std::ops::$op for $ty {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self { $($f: $lane(self.$f, rhs.$f)),+ }
            }
        }

        impl ::std::ops::$op<$scalar> for $ty {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: $scalar) -> Self {
                Self { $($f: $lane(self.$f, rhs)),+ }
            }
        }

        impl ::std::ops::$op<$ty> for $scalar {
            type Output = $ty;
            #[inline]
            fn $method(self, rhs: $ty) -> $ty {
                $ty { $($f: $lane(self, rhs.$f)),+ }
            }
        }

        impl ::std::ops::$assign_op for $ty {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = ::std::ops::$op::$method(*self, rhs);
            }
        }

        impl ::std::ops::$assign_op<$scalar> for $ty {
            #[inline]
            fn $assign_method(&mut self, rhs: $scalar) {
                *self = ::std::ops::$op::$method(*self, rhs);
            }
        }
    };
}

/// Component-wise unary operator.
macro_rules! impl_vector_unop {
    ($ty:ident, [$($f:ident),+], $op:ident :: $method:ident, $lane:path) => {
        impl ::std::ops::$op for $ty {
            type Output = Self;
            #[inline]
            fn $method(self) -> Self {
                Self { $($f: $lane(self.$f)),+ }
            }
        }
    };
}

/// `Shl<u32>` and `Shr<u32>` with the shift count masked to the lane width.
macro_rules! impl_vector_shifts {
    ($ty:ident, $scalar:ident, [$($f:ident),+]) => {
        impl ::std::ops::Shl<u32> for $ty {
            type Output = Self;
            #[inline]
            fn shl(self, rhs: u32) -> Self {
                Self { $($f: $scalar::wrapping_shl(self.$f, rhs)),+ }
            }
        }

        impl ::std::ops::Shr<u32> for $ty {
            type Output = Self;
            #[inline]
            fn shr(self, rhs: u32) -> Self {
                Self { $($f: $scalar::wrapping_shr(self.$f, rhs)),+ }
            }
        }

        impl ::std::ops::ShlAssign<u32> for $ty {
            #[inline]
            fn shl_assign(&mut self, rhs: u32) {
                *self = *self << rhs;
            }
        }

        impl ::std::ops::ShrAssign<u32> for $ty {
            #[inline]
            fn shr_assign(&mut self, rhs: u32) {
                *self = *self >> rhs;
            }
        }
    };
}

/// `&`, `|`, `^` with vector and scalar operands, plus `!`.
macro_rules! impl_vector_bitwise {
    ($ty:ident, $scalar:ty, $fields:tt) => {
        impl_vector_binop!($ty, $scalar, $fields, BitAnd::bitand, BitAndAssign::bitand_assign, ::std::ops::BitAnd::bitand);
        impl_vector_binop!($ty, $scalar, $fields, BitOr::bitor, BitOrAssign::bitor_assign, ::std::ops::BitOr::bitor);
        impl_vector_binop!($ty, $scalar, $fields, BitXor::bitxor, BitXorAssign::bitxor_assign, ::std::ops::BitXor::bitxor);
        impl_vector_unop!($ty, $fields, Not::not, ::std::ops::Not::not);
    };
}

/// Lane-array conversions and checked lane access.
macro_rules! impl_vector_lanes {
    ($ty:ident, $scalar:ty, $n:literal, [$($idx:literal => $f:ident),+]) => {
        impl $ty {
            /// Number of lanes
            pub const LANES: usize = $n;

            /// Creates a vector from an array of lanes
            #[inline]
            pub const fn from_array(a: [$scalar; $n]) -> Self {
                let [$($f),+] = a;
                Self { $($f),+ }
            }

            /// Returns the lanes as an array
            #[inline]
            pub const fn to_array(self) -> [$scalar; $n] {
                [$(self.$f),+]
            }

            /// Returns lane `index`, or an error if the vector has no such lane.
            #[inline]
            pub fn try_get(&self, index: usize) -> $crate::status::Result<$scalar> {
                $crate::status::check_lane(index, $n)?;
                Ok(self.to_array()[index])
            }

            /// Overwrites lane `index`, or returns an error if the vector has no such lane.
            #[inline]
            pub fn try_set(&mut self, index: usize, value: $scalar) -> $crate::status::Result<()> {
                $crate::status::check_lane(index, $n)?;
                let mut lanes = self.to_array();
                lanes[index] = value;
                *self = Self::from_array(lanes);
                Ok(())
            }
        }

        impl From<[$scalar; $n]> for $ty {
            #[inline]
            fn from(a: [$scalar; $n]) -> Self {
                Self::from_array(a)
            }
        }

        impl From<$ty> for [$scalar; $n] {
            #[inline]
            fn from(v: $ty) -> Self {
                v.to_array()
            }
        }

        impl ::std::ops::Index<usize> for $ty {
            type Output = $scalar;
            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                match index {
                    $($idx => &self.$f,)+
                    _ => panic!(
                        "index out of bounds: {} has {} lanes but the index is {}",
                        stringify!($ty), $n, index
                    ),
                }
            }
        }

        impl ::std::ops::IndexMut<usize> for $ty {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                match index {
                    $($idx => &mut self.$f,)+
                    _ => panic!(
                        "index out of bounds: {} has {} lanes but the index is {}",
                        stringify!($ty), $n, index
                    ),
                }
            }
        }
    };
}

/// Mask-producing comparisons `cmpeq` .. `cmpge`.
macro_rules! impl_vector_compare {
    ($ty:ident, $mask:ident, [$($f:ident),+]) => {
        impl $ty {
            /// Component-wise `==`
            #[inline]
            pub fn cmpeq(self, other: Self) -> $mask {
                $mask { $($f: self.$f == other.$f),+ }
            }

            /// Component-wise `!=`
            #[inline]
            pub fn cmpne(self, other: Self) -> $mask {
                $mask { $($f: self.$f != other.$f),+ }
            }

            /// Component-wise `<`
            #[inline]
            pub fn cmplt(self, other: Self) -> $mask {
                $mask { $($f: self.$f < other.$f),+ }
            }

            /// Component-wise `<=`
            #[inline]
            pub fn cmple(self, other: Self) -> $mask {
                $mask { $($f: self.$f <= other.$f),+ }
            }

            /// Component-wise `>`
            #[inline]
            pub fn cmpgt(self, other: Self) -> $mask {
                $mask { $($f: self.$f > other.$f),+ }
            }

            /// Component-wise `>=`
            #[inline]
            pub fn cmpge(self, other: Self) -> $mask {
                $mask { $($f: self.$f >= other.$f),+ }
            }

            /// Picks lanes from `if_true` where `mask` is set and from `if_false` elsewhere.
            #[inline]
            pub fn select(mask: $mask, if_true: Self, if_false: Self) -> Self {
                Self { $($f: if mask.$f { if_true.$f } else { if_false.$f }),+ }
            }
        }
    };
}

/// Formatting traits that print `name(a, b, ..)`, forwarding the formatter
/// flags to each lane.
macro_rules! impl_vector_fmt {
    (@one $fmt_trait:ident, $ty:ident, $name:literal, [$first:ident $(, $rest:ident)*]) => {
        impl ::std::fmt::$fmt_trait for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(concat!($name, "("))?;
                ::std::fmt::$fmt_trait::fmt(&self.$first, f)?;
                $(
                    f.write_str(", ")?;
                    ::std::fmt::$fmt_trait::fmt(&self.$rest, f)?;
                )*
                f.write_str(")")
            }
        }
    };
    ($ty:ident, $name:literal, $fields:tt, $($fmt_trait:ident),+) => {
        $(impl_vector_fmt!(@one $fmt_trait, $ty, $name, $fields);)+
    };
}
