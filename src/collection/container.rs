//! Generic ordered container with append, map and read-only access.
//!
//! `Collection<T>` keeps its elements in insertion order. Appending mutates
//! in place; mapping always allocates a new collection and leaves the source
//! untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CollectResult;

/// Builds a [`Collection`] from a list of values, in order.
///
/// ```rust
/// use collectkit::collection;
///
/// let c = collection![1, 2, 3];
/// assert_eq!(c.result(), &[1, 2, 3]);
/// ```
#[macro_export]
macro_rules! collection {
    () => {
        $crate::Collection::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut c = $crate::Collection::new();
        c.append([$($value),+]);
        c
    }};
}

// =============================================================================
// COLLECTION
// =============================================================================

/// An ordered, growable container over a single element type.
///
/// Serializes as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Collection<T> {
    // =========================================================================
    // CONSTRUCTION
    // =========================================================================

    /// Creates a new empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Appends every value to the end, in the order given.
    pub fn append<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(values);
    }

    /// Appends a single value.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    // =========================================================================
    // TRANSFORMATION
    // =========================================================================

    /// Returns a new collection holding `trans` applied to each element.
    ///
    /// The source collection is never modified.
    pub fn map<F>(&self, trans: F) -> Collection<T>
    where
        F: FnMut(&T) -> T,
    {
        log::trace!("mapping collection of {} elements", self.items.len());
        Collection {
            items: self.items.iter().map(trans).collect(),
        }
    }

    /// Fallible form of [`Collection::map`].
    ///
    /// Stops at the first error and returns it unchanged. No partial
    /// collection is ever produced.
    pub fn try_map<F, E>(&self, mut trans: F) -> Result<Collection<T>, E>
    where
        F: FnMut(&T) -> Result<T, E>,
    {
        let mut items = Vec::with_capacity(self.items.len());
        for (index, val) in self.items.iter().enumerate() {
            match trans(val) {
                Ok(mapped) => items.push(mapped),
                Err(err) => {
                    log::debug!("try_map aborted at index {} of {}", index, self.items.len());
                    return Err(err);
                }
            }
        }
        Ok(Collection { items })
    }

    // =========================================================================
    // READ ACCESS
    // =========================================================================

    /// Returns the elements as a read-only slice, in insertion order.
    pub fn result(&self) -> &[T] {
        &self.items
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the collection and returns its backing vector.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> Collection<T> {
    /// Returns an independent copy of the elements.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T: fmt::Display> Collection<T> {
    /// Renders one `current value:  {v}` line per element.
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl<T: Serialize> Collection<T> {
    /// Converts to a JSON value (an array).
    pub fn to_json_value(&self) -> CollectResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for val in &self.items {
            writeln!(f, "current value:  {}", val)?;
        }
        Ok(())
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append(iter);
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// =============================================================================
// TESTS
// =============================================================================
