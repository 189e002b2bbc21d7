//! List restricted to [`Number`] elements.

use serde::{Deserialize, Serialize};

use crate::numeric::{sum_numbers, Number};

/// A list whose element type must be a [`Number`].
///
/// Unlike a plain alias, the bound is checked wherever the type is named.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumberSlice<T: Number>(Vec<T>);

impl<T: Number> NumberSlice<T> {
    /// Creates an empty number slice.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the elements.
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Returns the sum of the elements.
    pub fn sum(&self) -> T {
        sum_numbers(&self.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: Number> From<Vec<T>> for NumberSlice<T> {
    fn from(values: Vec<T>) -> Self {
        Self(values)
    }
}

impl<T: Number> FromIterator<T> for NumberSlice<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Number> AsRef<[T]> for NumberSlice<T> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<'a, T: Number> IntoIterator for &'a NumberSlice<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
