//! collectkit - Generic collection and constrained-numeric building blocks.
//!
//! This crate provides small parametric types and functions:
//!
//! - **Collection**: an ordered container with append, map and read-only access
//! - **Constrained sums**: reductions bounded by closed numeric sets
//!   (`Int64OrFloat`, `Number`) and by underlying-type sets (`AnyInt`, `SignedInteger`)
//! - **Typed wrappers**: generic mapping and list aliases, a `Number`-only slice
//!   and a bounded channel drained on one thread
//!
//! # Example
//!
//! ```rust
//! use collectkit::{Collection, sum_numbers};
//!
//! let mut c = Collection::new();
//! c.append([1, 2, 3]);
//! c.append([4, 5, 6]);
//!
//! // Mapping returns a new collection; the source is untouched
//! let doubled = c.map(|val| val * 2);
//! assert_eq!(doubled.result(), &[2, 4, 6, 8, 10, 12]);
//! assert_eq!(c.result(), &[1, 2, 3, 4, 5, 6]);
//!
//! assert_eq!(sum_numbers(c.result()), 21);
//! ```

pub mod error;

pub mod collection;
pub mod numeric;
pub mod print;
pub mod types;

// Re-exports for convenience
pub use collection::Collection;
pub use error::{CollectError, CollectResult};
pub use numeric::{
    sum_any_int, sum_floats, sum_int64s, sum_int64s_or_floats, sum_numbers, sum_signed,
    sum_with_map, sum_with_map2, AnyInt, Int64OrFloat, Number, SignedInteger, Underlying,
};
pub use types::{Channel, List, Mapping, NumberSlice};

#[cfg(feature = "wasm")]
pub use collection::JsNumberCollection;
