//! Sum reductions, from monomorphic baselines to constrained generics.
//!
//! Every sum starts from the additive identity, so empty input yields zero.
//! Integer sums wrap on overflow in every build profile.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::constraints::sealed::Sealed;
use super::constraints::{AnyInt, Int64OrFloat, Number, SignedInteger};

/// Sums a variadic list of numbers of one type.
///
/// ```rust
/// use collectkit::sum_numbers;
///
/// assert_eq!(sum_numbers!(1, 2, 3), 6);
/// ```
#[macro_export]
macro_rules! sum_numbers {
    ($($value:expr),* $(,)?) => {
        $crate::numeric::sum_numbers(&[$($value),*])
    };
}

// =============================================================================
// NON-GENERIC BASELINES
// =============================================================================

/// Sums a slice of `i64`.
pub fn sum_int64s(s: &[i64]) -> i64 {
    let mut sum: i64 = 0;
    for v in s {
        sum = sum.wrapping_add(*v);
    }
    sum
}

/// Sums a slice of `f64`.
pub fn sum_floats(s: &[f64]) -> f64 {
    let mut sum = 0.0;
    for v in s {
        sum += v;
    }
    sum
}

// =============================================================================
// CONSTRAINED GENERICS
// =============================================================================

/// Sums a slice of either `i64` or `f64`.
pub fn sum_int64s_or_floats<T: Int64OrFloat>(v: &[T]) -> T {
    v.iter().fold(T::zero(), |sum, val| sum.accumulate(*val))
}

/// Sums the values of a map whose values are `i64` or `f64`.
pub fn sum_with_map<K, V, S>(m: &HashMap<K, V, S>) -> V
where
    K: Eq + Hash,
    V: Int64OrFloat,
    S: BuildHasher,
{
    m.values().fold(V::zero(), |sum, val| sum.accumulate(*val))
}

/// Sums a slice of any [`Number`].
pub fn sum_numbers<T: Number>(nums: &[T]) -> T {
    nums.iter().fold(T::zero(), |sum, val| sum.accumulate(*val))
}

/// Sums the values of a map whose values are any [`Number`].
pub fn sum_with_map2<K, V, S>(m: &HashMap<K, V, S>) -> V
where
    K: Eq + Hash,
    V: Number,
    S: BuildHasher,
{
    m.values().fold(V::zero(), |sum, val| sum.accumulate(*val))
}

/// Sums values whose underlying type is a signed primitive integer.
///
/// Newtypes are added through their representation and rebuilt.
pub fn sum_signed<T: SignedInteger>(nums: &[T]) -> T {
    nums.iter()
        .fold(T::underlying_zero(), |sum, val| sum.underlying_add(*val))
}

/// Sums values whose underlying type is `isize`.
pub fn sum_any_int<T: AnyInt>(nums: &[T]) -> T {
    sum_signed(nums)
}
