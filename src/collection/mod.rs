//! Collection module.
//!
//! Provides the generic ordered container.

pub mod container;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use container::Collection;

#[cfg(feature = "wasm")]
pub use wasm::JsNumberCollection;
