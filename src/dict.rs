//! A hash-backed dictionary: a thin facade over
//! [`HashMap`][std::collections::HashMap] with the surface shared by the
//! rest of this crate. Iteration order is unspecified.

use std::collections::HashMap;
use std::hash::Hash;
use std::iter::FromIterator;

/// An unordered key-value dictionary.
#[derive(Clone, Debug)]
pub struct Dictionary<K, V> {
    map: HashMap<K, V>,
}

impl<K, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Self { map: HashMap::new() }
    }
}

impl<K, V> Dictionary<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for `key`, returning the previous value if the key
    /// was already present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }

    /// Returns a reference to the value stored at `key`, or `None` if the
    /// key is absent.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.map.remove(key)
    }

    /// Reports whether `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Reports whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The keys, in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.map.keys()
    }

    /// The values, in unspecified order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.map.values()
    }

    /// The entries, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.map.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Dictionary<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut dict = Dictionary::new();
        dict.insert("one", 1);
        dict.insert("two", 2);

        assert_eq!(dict.get(&"one"), Some(&1));
        assert_eq!(dict.get(&"two"), Some(&2));
        assert_eq!(dict.get(&"three"), None);
    }

    #[test]
    fn insert_returns_previous_value() {
        let mut dict = Dictionary::new();

        assert_eq!(dict.insert(1, "first"), None);
        assert_eq!(dict.insert(1, "second"), Some("first"));
        assert_eq!(dict.get(&1), Some(&"second"));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn remove_returns_value() {
        let mut dict = Dictionary::new();
        dict.insert(1, "one");

        assert_eq!(dict.remove(&1), Some("one"));
        assert_eq!(dict.remove(&1), None);
        assert!(!dict.contains_key(&1));
    }

    #[test]
    fn empty_contracts() {
        let mut dict: Dictionary<i32, i32> = Dictionary::new();
        assert!(dict.is_empty());
        assert_eq!(dict.len(), 0);
        assert_eq!(dict.get(&1), None);
        assert_eq!(dict.remove(&1), None);
    }

    #[test]
    fn keys_and_values() {
        let dict: Dictionary<_, _> = vec![(1, "one"), (2, "two"), (3, "three")]
            .into_iter()
            .collect();

        let mut keys: Vec<_> = dict.keys().copied().collect();
        keys.sort_unstable();
        assert_eq!(keys, [1, 2, 3]);

        let mut values: Vec<_> = dict.values().copied().collect();
        values.sort_unstable();
        assert_eq!(values, ["one", "three", "two"]);

        assert_eq!(dict.iter().count(), 3);
    }

    #[test]
    fn clone_is_independent() {
        let mut dict = Dictionary::new();
        dict.insert(1, "one");

        let mut clone = dict.clone();
        clone.insert(2, "two");
        clone.remove(&1);

        assert!(dict.contains_key(&1));
        assert!(!dict.contains_key(&2));
        assert_eq!(clone.len(), 1);
    }
}
