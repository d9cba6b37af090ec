//! An insertion-ordered map with array-style helpers.
//!
//! [`OrderedMap`] wraps an owned [`IndexMap`] and exposes the usual map primitives
//! (`get`, `set`, `delete`, `has`, `len`, iteration) plus positional and derive
//! operations borrowed from arrays. Those live in their own submodules:
//!
//! - `array` - `filter`, `map`, `split`, `concat`, `index_of`, `first`, `last`
//! - `random` - uniformly random values, keys and pairs (`random` feature)
//! - `flat` - deprecated `flat`/`flat_map` over [`Nested`] values

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter, IterMut};

mod array;
pub mod errors;
pub mod flat;
#[cfg(feature = "random")]
mod random;

pub use errors::MapError;
pub use flat::Nested;

/// A map that remembers the order in which keys were first inserted.
///
/// Keys are unique. Setting a key that is already present replaces its value in place, so
/// the key keeps its original position. Deleting a key shifts the later pairs down by one,
/// keeping the relative order of everything else.
///
/// Equality is order-sensitive: two maps are equal only if they hold the same pairs in the
/// same order.
///
/// # Examples
///
/// ```
/// use ordstore::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.set("name", "Alice").set("role", "admin");
/// map.set("name", "Bob");
///
/// assert_eq!(map.keys(), vec![&"name", &"role"]);
/// assert_eq!(map.get("name"), Some(&"Bob"));
/// assert!(map.delete("role"));
/// assert_eq!(map.len(), 1);
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        transparent,
        bound(
            serialize = "K: serde::Serialize, V: serde::Serialize",
            deserialize = "K: serde::Deserialize<'de> + Eq + Hash, V: serde::Deserialize<'de>"
        )
    )
)]
pub struct OrderedMap<K, V> {
    pairs: IndexMap<K, V>,
}

impl<K, V> OrderedMap<K, V> {
    /// Create a new empty `OrderedMap`.
    pub fn new() -> Self {
        Self {
            pairs: IndexMap::new(),
        }
    }

    /// Create an empty `OrderedMap` with room for at least `capacity` pairs.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: IndexMap::with_capacity(capacity),
        }
    }

    /// Get the number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Alias for [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Check if the map holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Remove every pair.
    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.pairs.iter()
    }

    /// Iterate over pairs in insertion order with mutable access to the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.pairs.iter_mut()
    }

    /// Get the pair at `index` in insertion order.
    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        self.pairs.get_index(index)
    }

    /// Collect all keys in insertion order.
    ///
    /// The result is a snapshot, not a live view of the map.
    pub fn keys(&self) -> Vec<&K> {
        self.pairs.keys().collect()
    }

    /// Collect all values in insertion order.
    ///
    /// The result is a snapshot, not a live view of the map.
    pub fn values(&self) -> Vec<&V> {
        self.pairs.values().collect()
    }

    /// Collect all `(key, value)` pairs in insertion order.
    pub fn entries(&self) -> Vec<(&K, &V)> {
        self.pairs.iter().collect()
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: Hash + Eq,
{
    /// Get a value by key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.pairs.get(key)
    }

    /// Get a mutable reference to a value by key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.pairs.get_mut(key)
    }

    /// Set a key-value pair, returning the map for chaining.
    ///
    /// An existing key keeps its position and only its value changes.
    pub fn set(&mut self, key: K, value: V) -> &mut Self {
        self.pairs.insert(key, value);
        self
    }

    /// Insert a key-value pair, returning the previous value for the key if there was one.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.pairs.insert(key, value)
    }

    /// Remove a pair by key, returning its value.
    ///
    /// Later pairs shift down by one position.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.pairs.shift_remove(key)
    }

    /// Remove a pair by key. Returns true if the key was present.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove(key).is_some()
    }

    /// Check if the map holds `key`.
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.pairs.contains_key(key)
    }

    /// Alias for [`has`](Self::has).
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.has(key)
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.pairs.iter()).finish()
    }
}

// IndexMap equality ignores order, ours does not
impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: IndexMap::from_iter(iter),
        }
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.pairs.extend(iter);
    }
}

impl<K: Hash + Eq, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V> {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Hash + Eq, V> From<Vec<(K, V)>> for OrderedMap<K, V> {
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> From<IndexMap<K, V>> for OrderedMap<K, V> {
    fn from(pairs: IndexMap<K, V>) -> Self {
        Self { pairs }
    }
}

impl<K, V> From<OrderedMap<K, V>> for IndexMap<K, V> {
    fn from(map: OrderedMap<K, V>) -> Self {
        map.pairs
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut OrderedMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter_mut()
    }
}
