//! Numeric module.
//!
//! Capability traits for numeric types and the sum reductions bounded by them.

pub mod constraints;
pub mod sum;

// Re-exports for convenience
pub use constraints::{AnyInt, Int64OrFloat, Number, SignedInteger, SignedPrimitive, Underlying};
pub use sum::{
    sum_any_int, sum_floats, sum_int64s, sum_int64s_or_floats, sum_numbers, sum_signed,
    sum_with_map, sum_with_map2,
};
