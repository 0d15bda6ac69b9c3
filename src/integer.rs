use std::fmt::{Debug, Display};

use num_traits::PrimInt;

/// Whether the values of an integer type are limited to a finite range.
///
/// Primitive integers are always [`Bound::Bounded`]. The other kinds are left for
/// implementations of [`Integer`] outside this crate, such as arbitrary precision integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Bounded,
    Unbounded,
    Unknown,
}

/// Whether an integer type can hold negative values.
///
/// [`Sign::Unknown`] is left for implementations of [`Integer`] outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Signed,
    Unsigned,
    Unknown,
}

/// The capabilities the algorithms of this crate require from an integer type.
///
/// Zero, one, and the bounds of the type come from [`PrimInt`]; this trait adds the queries
/// used to reason about ranges and to report values.
pub trait Integer: PrimInt + Debug + Display {
    /// The signed integer type of the same width.
    type Signed: Integer + num_traits::Signed;

    /// The unsigned integer type of the same width.
    type Unsigned: Integer + num_traits::Unsigned;

    /// Returns whether the type is bounded.
    fn bound() -> Bound;

    /// Returns whether the type is signed.
    fn sign() -> Sign;

    /// Returns the amount of non-sign bits of the type.
    fn digits() -> u32;

    /// Returns the absolute difference between self and other, which always fits in the unsigned
    /// type of the same width.
    fn distance(self, other: Self) -> Self::Unsigned;

    /// Returns the value as a 64 bits signed integer, if it fits.
    fn to_wide(self) -> Option<i64> {
        self.to_i64()
    }

    /// Returns the value as a floating point number, rounding if necessary.
    fn to_double(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

macro_rules! signed_integer {
    ($($t:ty => $u:ty),*) => {$(
        impl Integer for $t {
            type Signed = $t;
            type Unsigned = $u;

            fn bound() -> Bound {
                Bound::Bounded
            }

            fn sign() -> Sign {
                Sign::Signed
            }

            fn digits() -> u32 {
                <$t>::BITS - 1
            }

            fn distance(self, other: Self) -> $u {
                self.abs_diff(other)
            }
        }
    )*};
}

macro_rules! unsigned_integer {
    ($($t:ty => $s:ty),*) => {$(
        impl Integer for $t {
            type Signed = $s;
            type Unsigned = $t;

            fn bound() -> Bound {
                Bound::Bounded
            }

            fn sign() -> Sign {
                Sign::Unsigned
            }

            fn digits() -> u32 {
                <$t>::BITS
            }

            fn distance(self, other: Self) -> $t {
                self.abs_diff(other)
            }
        }
    )*};
}

signed_integer!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);
unsigned_integer!(u8 => i8, u16 => i16, u32 => i32, u64 => i64, u128 => i128, usize => isize);

/// Returns the greatest common divisor of the absolute values of a and b.
#[cfg_attr(not(feature = "dss"), allow(dead_code))]
pub(crate) fn gcd<T>(a: T, b: T) -> T
where
    T: Integer + num_traits::Signed,
{
    let (mut a, mut b) = (a.abs(), b.abs());
    while !b.is_zero() {
        (a, b) = (b, a % b);
    }

    a
}
