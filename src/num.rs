//! Type sets over the primitive numbers, for writing generic helpers.

use std::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
    str::FromStr,
};

/// Every integer and floating point primitive.
pub trait Numeric:
    Copy
    + Default
    + PartialEq
    + Debug
    + Display
    + FromStr
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    const ZERO: Self;
    const ONE: Self;
}

pub trait OrderedNumeric: Numeric + PartialOrd {}

pub trait Integer: OrderedNumeric + Ord + Eq + Hash + Rem<Output = Self> + RemAssign {}

pub trait SignedNumeric: OrderedNumeric + Neg<Output = Self> {}

pub trait SignedInteger: Integer + SignedNumeric {}

/// Anything comparable with `<`: the ordered numbers and strings.
pub trait Ordered: PartialOrd {}

macro_rules! impl_numeric {
    ($zero:literal, $one:literal => $($ty:ty),*) => {
        $(
            impl Numeric for $ty {
                const ZERO: Self = $zero;
                const ONE: Self = $one;
            }
            impl OrderedNumeric for $ty {}
            impl Ordered for $ty {}
        )*
    };
}

macro_rules! impl_marker {
    ($trait:ident: $($ty:ty),*) => {
        $(impl $trait for $ty {})*
    };
}

impl_numeric!(0, 1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric!(0.0, 1.0 => f32, f64);

impl_marker!(Integer: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_marker!(SignedNumeric: i8, i16, i32, i64, i128, isize, f32, f64);
impl_marker!(SignedInteger: i8, i16, i32, i64, i128, isize);
impl_marker!(Ordered: String, str);

pub fn sum<T: Numeric>(values: impl IntoIterator<Item = T>) -> T {
    values.into_iter().fold(T::ZERO, |total, value| total + value)
}

/// Greatest common divisor. `gcd(0, 0)` is `0`; the sign of the result
/// follows `%` for negative inputs.
pub fn gcd<T: Integer>(mut a: T, mut b: T) -> T {
    while b != T::ZERO {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

pub fn abs<T: SignedNumeric>(value: T) -> T {
    if value < T::ZERO { -value } else { value }
}

/// Returns the pair ordered smallest first.
pub fn min_max<T: Ordered>(a: T, b: T) -> (T, T) {
    if b < a { (b, a) } else { (a, b) }
}
