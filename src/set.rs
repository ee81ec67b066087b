//! A hash-backed set with set algebra. Iteration order is unspecified.
//!
//! # Examples
//!
//! ```
//! use dsa::set::Set;
//!
//! let a: Set<_> = [1, 2, 3].iter().copied().collect();
//! let b: Set<_> = [2, 3, 4].iter().copied().collect();
//!
//! let both = a.intersection(&b);
//! assert!(both.contains(&2) && both.contains(&3));
//! assert_eq!(both.len(), 2);
//! ```

use std::collections::HashSet;
use std::hash::Hash;
use std::iter::FromIterator;

/// An unordered set of unique values.
#[derive(Clone, Debug)]
pub struct Set<T> {
    items: HashSet<T>,
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self { items: HashSet::new() }
    }
}

impl<T> Set<T>
where
    T: Eq + Hash,
{
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, returning `true` if it was not already present.
    pub fn insert(&mut self, value: T) -> bool {
        self.items.insert(value)
    }

    /// Removes a value, returning `true` if it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.items.remove(value)
    }

    /// Reports whether the value is in the set.
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Reports whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The elements, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Reports whether every element of `self` is also in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.items.is_subset(&other.items)
    }
}

impl<T> Set<T>
where
    T: Eq + Hash + Clone,
{
    /// A new set holding every element found in either set.
    pub fn union(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.items.extend(other.items.iter().cloned());
        out
    }

    /// A new set holding the elements found in both sets. Iterates the
    /// smaller set and probes the larger.
    pub fn intersection(&self, other: &Self) -> Self {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        Self {
            items: small
                .items
                .iter()
                .filter(|v| large.items.contains(*v))
                .cloned()
                .collect(),
        }
    }

    /// A new set holding the elements of `self` that are not in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|v| !other.items.contains(*v))
                .cloned()
                .collect(),
        }
    }
}

impl<T> FromIterator<T> for Set<T>
where
    T: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Set<T>
where
    T: Eq + Hash,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
