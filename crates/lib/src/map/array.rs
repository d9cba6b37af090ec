//! Array-style helpers for [`OrderedMap`].
//!
//! Callbacks receive `(value, key, index, map)`, where `index` is the pair's position in
//! insertion order and `map` is the map being traversed. Context that other languages pass
//! as a bound receiver is captured by the closure instead.

use std::borrow::Borrow;
use std::hash::Hash;

use tracing::trace;

use super::OrderedMap;

impl<K, V> OrderedMap<K, V> {
    /// Get the first value in insertion order.
    pub fn first(&self) -> Option<&V> {
        self.pairs.first().map(|(_, value)| value)
    }

    /// Get the first key in insertion order.
    pub fn first_key(&self) -> Option<&K> {
        self.pairs.first().map(|(key, _)| key)
    }

    /// Get the last value in insertion order.
    pub fn last(&self) -> Option<&V> {
        self.pairs.last().map(|(_, value)| value)
    }

    /// Get the last key in insertion order.
    pub fn last_key(&self) -> Option<&K> {
        self.pairs.last().map(|(key, _)| key)
    }

    /// Apply `f` to every pair and collect the results in insertion order.
    ///
    /// The result always has exactly [`len`](Self::len) elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordstore::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2)]);
    /// let labels = map.map(|v, k, i, _| format!("{i}:{k}={v}"));
    /// assert_eq!(labels, vec!["0:a=1", "1:b=2"]);
    /// ```
    pub fn map<U, F>(&self, mut f: F) -> Vec<U>
    where
        F: FnMut(&V, &K, usize, &Self) -> U,
    {
        self.pairs
            .iter()
            .enumerate()
            .map(|(index, (key, value))| f(value, key, index, self))
            .collect()
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: Hash + Eq,
{
    /// Find the position of `key` in insertion order.
    ///
    /// Returns `None` if the key is absent.
    pub fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.pairs.get_index_of(key)
    }

    /// Find the position of `key`, searching forward from `from_index`.
    ///
    /// Returns `None` if the key is absent or sits before `from_index`.
    pub fn index_of_from<Q>(&self, key: &Q, from_index: usize) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index_of(key).filter(|index| *index >= from_index)
    }

    /// Find the position of `key`, searching backward from the last pair.
    ///
    /// Keys are unique, so this always agrees with [`index_of`](Self::index_of).
    pub fn last_index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.pairs.get_index_of(key)
    }

    /// Find the position of `key`, searching backward from `from_index`.
    ///
    /// Returns `None` if the key is absent or sits after `from_index`.
    pub fn last_index_of_from<Q>(&self, key: &Q, from_index: usize) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.last_index_of(key).filter(|index| *index <= from_index)
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Build a new map holding only the pairs for which `predicate` returns true.
    ///
    /// Insertion order is preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordstore::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// let filtered = map.filter(|v, _, _, _| *v > 1);
    /// assert_eq!(filtered, OrderedMap::from([("b", 2), ("c", 3)]));
    /// ```
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&V, &K, usize, &Self) -> bool,
    {
        self.pairs
            .iter()
            .enumerate()
            .filter(|&(index, (key, value))| predicate(value, key, index, self))
            .map(|(_, (key, value))| (key.clone(), value.clone()))
            .collect()
    }

    /// Partition the pairs into two new maps.
    ///
    /// The first map holds the pairs for which `predicate` returns true, the second holds
    /// the rest. Each keeps the original relative order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordstore::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// let (big, small) = map.split(|v, _, _, _| *v > 1);
    /// assert_eq!(big, OrderedMap::from([("b", 2), ("c", 3)]));
    /// assert_eq!(small, OrderedMap::from([("a", 1)]));
    /// ```
    pub fn split<F>(&self, mut predicate: F) -> (Self, Self)
    where
        F: FnMut(&V, &K, usize, &Self) -> bool,
    {
        let mut matched = Self::new();
        let mut rest = Self::new();

        for (index, (key, value)) in self.pairs.iter().enumerate() {
            let target = if predicate(value, key, index, self) {
                &mut matched
            } else {
                &mut rest
            };
            target.pairs.insert(key.clone(), value.clone());
        }

        trace!(
            matched = matched.len(),
            rest = rest.len(),
            "Split ordered map"
        );
        (matched, rest)
    }

    /// Build a new map from this one followed by every pair of each map in `others`.
    ///
    /// Keys that already exist take the later value but keep their first position.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordstore::OrderedMap;
    ///
    /// let a = OrderedMap::from([("x", 1)]);
    /// let b = OrderedMap::from([("y", 2), ("z", 3)]);
    /// assert_eq!(a.concat([&b]), OrderedMap::from([("x", 1), ("y", 2), ("z", 3)]));
    /// ```
    pub fn concat<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        K: 'a,
        V: 'a,
    {
        let mut merged = self.clone();
        let mut sources = 0usize;

        for other in others {
            merged.extend(
                other
                    .pairs
                    .iter()
                    .map(|(key, value)| (key.clone(), value.clone())),
            );
            sources += 1;
        }

        trace!(sources, len = merged.len(), "Concatenated ordered maps");
        merged
    }
}
