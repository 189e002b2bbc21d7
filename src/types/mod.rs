//! Generic type aliases and thin typed wrappers.

pub mod channel;
pub mod slice;

use std::collections::HashMap;

/// A map from any hashable, comparable key to any value.
pub type Mapping<K, V> = HashMap<K, V>;

/// A growable list of any element type.
pub type List<T> = Vec<T>;

// Re-exports for convenience
pub use channel::{Channel, Drain};
pub use slice::NumberSlice;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_over_several_types() {
        let m: Mapping<&str, i64> = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(m["b"], 2);

        let m2: Mapping<i32, i32> = [(1, 1), (2, 2)].into_iter().collect();
        assert_eq!(m2.len(), 2);

        let m3: Mapping<String, String> =
            [("a".to_string(), "abc".to_string())].into_iter().collect();
        assert_eq!(m3["a"], "abc");
    }

    #[test]
    fn test_list_alias() {
        let l: List<f64> = vec![1.0, 2.0, 3.0];
        assert_eq!(crate::numeric::sum_numbers(&l), 6.0);
    }
}
