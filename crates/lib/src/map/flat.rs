//! Deprecated flattening helpers.
//!
//! `flat` and `flat_map` are kept so older callers keep working. New code should iterate
//! the map and flatten with iterator adapters instead.

use tracing::{debug, warn};

use super::{MapError, OrderedMap};
use crate::Result;
use crate::constants::{DEFAULT_FLAT_DEPTH, MIN_FLAT_DEPTH};

/// A value that is either a single item or a list of nested values.
///
/// This is the input and output shape of [`OrderedMap::flat`] and [`OrderedMap::flat_map`].
/// With the `serde` feature it serializes untagged: an item as itself, a list as a sequence.
///
/// # Examples
///
/// ```
/// use ordstore::Nested;
///
/// let value = Nested::list([Nested::item(1), Nested::list([Nested::item(2)])]);
/// assert!(value.is_list());
/// assert_eq!(value.as_list().map(|l| l.len()), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Nested<T> {
    /// A single value
    Item(T),
    /// A list of nested values
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Create a single item.
    pub fn item(value: T) -> Self {
        Nested::Item(value)
    }

    /// Create a list from any iterable of nested values.
    pub fn list(values: impl IntoIterator<Item = Nested<T>>) -> Self {
        Nested::List(values.into_iter().collect())
    }

    /// Returns true if this is a single item
    pub fn is_item(&self) -> bool {
        matches!(self, Nested::Item(_))
    }

    /// Returns true if this is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Nested::List(_))
    }

    /// Returns the item if this is a single item
    pub fn as_item(&self) -> Option<&T> {
        match self {
            Nested::Item(value) => Some(value),
            Nested::List(_) => None,
        }
    }

    /// Returns the children if this is a list
    pub fn as_list(&self) -> Option<&[Nested<T>]> {
        match self {
            Nested::List(values) => Some(values),
            Nested::Item(_) => None,
        }
    }

    /// Consumes the value and returns the item if this is a single item
    pub fn into_item(self) -> Option<T> {
        match self {
            Nested::Item(value) => Some(value),
            Nested::List(_) => None,
        }
    }
}

/// Spread lists into `out`, descending at most `depth` levels.
fn flatten_into<T>(
    values: impl IntoIterator<Item = Nested<T>>,
    depth: usize,
    out: &mut Vec<Nested<T>>,
) {
    for value in values {
        match value {
            Nested::List(children) if depth > 0 => flatten_into(children, depth - 1, out),
            other => out.push(other),
        }
    }
}

impl<K, T: Clone> OrderedMap<K, Nested<T>> {
    /// Collect the values in insertion order, spreading list values up to `depth` levels.
    ///
    /// Lists nested deeper than `depth` are kept as lists.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidDepth`] if `depth` is 0.
    #[deprecated(
        since = "0.2.0",
        note = "iterate `values()` and flatten with iterator adapters instead"
    )]
    pub fn flat(&self, depth: usize) -> Result<Vec<Nested<T>>> {
        if depth < MIN_FLAT_DEPTH {
            debug!(depth, "Rejected flatten depth");
            return Err(MapError::InvalidDepth {
                depth,
                min: MIN_FLAT_DEPTH,
            }
            .into());
        }
        warn!(depth, "OrderedMap::flat is deprecated");

        let mut out = Vec::with_capacity(self.len());
        flatten_into(self.pairs.values().cloned(), depth, &mut out);
        Ok(out)
    }

    /// [`flat`](Self::flat) with the default depth of one level.
    #[deprecated(
        since = "0.2.0",
        note = "iterate `values()` and flatten with iterator adapters instead"
    )]
    #[allow(deprecated)]
    pub fn flat_default(&self) -> Result<Vec<Nested<T>>> {
        self.flat(DEFAULT_FLAT_DEPTH)
    }
}

impl<K, V> OrderedMap<K, V> {
    /// Apply `f` to every pair, then spread list results one level.
    ///
    /// Callbacks receive `(value, key, index, map)` like [`map`](Self::map).
    #[deprecated(since = "0.2.0", note = "use `iter()` with `Iterator::flat_map` instead")]
    pub fn flat_map<U, F>(&self, f: F) -> Vec<Nested<U>>
    where
        F: FnMut(&V, &K, usize, &Self) -> Nested<U>,
    {
        warn!("OrderedMap::flat_map is deprecated");

        let mut out = Vec::with_capacity(self.len());
        flatten_into(self.map(f), DEFAULT_FLAT_DEPTH, &mut out);
        out
    }
}
