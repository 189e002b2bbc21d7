//! Numeric-capability traits used to bound the generic reductions.
//!
//! Two kinds of constraint live here:
//!
//! - **Closed sets** (`Int64OrFloat`, `Number`): sealed traits implemented
//!   for a fixed list of primitives. No type outside this crate can join.
//! - **Underlying-type sets** (`AnyInt`, `SignedInteger`): open traits
//!   satisfied by any type whose [`Underlying`] representation is a
//!   qualifying primitive, so newtypes opt in with [`underlying_newtype!`].
//!
//! [`underlying_newtype!`]: crate::underlying_newtype

use std::fmt;

use num_traits::Zero;

pub(crate) mod sealed {
    pub trait Sealed: Copy {
        /// Addition used by every reduction. Integers wrap on overflow so
        /// the result does not depend on the build profile.
        fn accumulate(self, other: Self) -> Self;
    }
}

use sealed::Sealed as _;

/// Either `i64` or `f64`.
pub trait Int64OrFloat: sealed::Sealed + Copy + Zero {}

/// Any of the built-in numeric types the reductions accept:
/// `i8`, `i16`, `i32`, `isize`, `i64`, `f32`, `f64`.
pub trait Number: sealed::Sealed + Copy + Zero + fmt::Display + fmt::Debug + 'static {}

/// Signed primitive integers usable as an underlying representation.
pub trait SignedPrimitive: sealed::Sealed + Copy + Zero {}

macro_rules! impl_sealed_int {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {
                fn accumulate(self, other: Self) -> Self {
                    self.wrapping_add(other)
                }
            }
        )*
    };
}

macro_rules! impl_sealed_float {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {
                fn accumulate(self, other: Self) -> Self {
                    self + other
                }
            }
        )*
    };
}

macro_rules! impl_marker {
    ($tr:ident: $($t:ty),*) => {
        $(impl $tr for $t {})*
    };
}

impl_sealed_int!(i8, i16, i32, isize, i64);
impl_sealed_float!(f32, f64);
impl_marker!(Int64OrFloat: i64, f64);
impl_marker!(Number: i8, i16, i32, isize, i64, f32, f64);
impl_marker!(SignedPrimitive: i8, i16, i32, isize, i64);

// =============================================================================
// UNDERLYING TYPES
// =============================================================================

/// A type backed by a primitive representation.
///
/// Primitives are their own representation; a newtype declares its inner
/// primitive with [`underlying_newtype!`](crate::underlying_newtype).
pub trait Underlying: Copy {
    /// The primitive this type is built on.
    type Repr: Copy;

    fn into_repr(self) -> Self::Repr;

    fn from_repr(repr: Self::Repr) -> Self;
}

macro_rules! impl_underlying_identity {
    ($($t:ty),*) => {
        $(
            impl Underlying for $t {
                type Repr = $t;

                fn into_repr(self) -> $t {
                    self
                }

                fn from_repr(repr: $t) -> Self {
                    repr
                }
            }
        )*
    };
}

impl_underlying_identity!(i8, i16, i32, isize, i64, f32, f64);

/// Implements [`Underlying`] for a single-field tuple newtype.
///
/// ```rust
/// use collectkit::numeric::{sum_signed, AnyInt};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Meters(isize);
/// collectkit::underlying_newtype!(Meters(isize));
///
/// fn takes_any_int<T: AnyInt>(_: T) {}
/// takes_any_int(Meters(3));
/// assert_eq!(sum_signed(&[Meters(1), Meters(2)]), Meters(3));
/// ```
#[macro_export]
macro_rules! underlying_newtype {
    ($name:ident($repr:ty)) => {
        impl $crate::numeric::Underlying for $name {
            type Repr = $repr;

            fn into_repr(self) -> $repr {
                self.0
            }

            fn from_repr(repr: $repr) -> Self {
                $name(repr)
            }
        }
    };
}

/// Types whose underlying representation is a signed primitive integer.
pub trait SignedInteger: Underlying {
    /// The additive identity, built from the representation's zero.
    fn underlying_zero() -> Self;

    /// Adds two values through their representation, wrapping on overflow.
    fn underlying_add(self, other: Self) -> Self;
}

impl<T> SignedInteger for T
where
    T: Underlying,
    T::Repr: SignedPrimitive,
{
    fn underlying_zero() -> Self {
        T::from_repr(T::Repr::zero())
    }

    fn underlying_add(self, other: Self) -> Self {
        T::from_repr(self.into_repr().accumulate(other.into_repr()))
    }
}

/// Types whose underlying representation is exactly `isize`.
pub trait AnyInt: SignedInteger {}

impl<T> AnyInt for T where T: Underlying<Repr = isize> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Celsius(i16);
    crate::underlying_newtype!(Celsius(i16));

    fn is_number<T: Number>() {}
    fn is_signed<T: SignedInteger>() {}
    fn is_any_int<T: AnyInt>() {}

    #[test]
    fn test_closed_sets() {
        is_number::<i8>();
        is_number::<isize>();
        is_number::<f32>();
    }

    #[test]
    fn test_newtype_underlying() {
        is_signed::<Celsius>();
        is_signed::<i64>();
        is_any_int::<isize>();

        let c = Celsius::from_repr(5);
        assert_eq!(c.into_repr(), 5);
        assert_eq!(Celsius::underlying_zero(), Celsius(0));
        assert_eq!(Celsius(2).underlying_add(Celsius(-7)), Celsius(-5));
    }

    #[test]
    fn test_accumulate_wraps_integers() {
        use super::sealed::Sealed;

        assert_eq!(i8::MAX.accumulate(1), i8::MIN);
        assert_eq!(i64::MIN.accumulate(-1), i64::MAX);
        assert_eq!(Celsius(i16::MAX).underlying_add(Celsius(1)), Celsius(i16::MIN));
        assert_eq!(1.5f64.accumulate(2.0), 3.5);
    }
}
