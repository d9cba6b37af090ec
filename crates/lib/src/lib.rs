//!
//! Ordstore: an insertion-ordered map with array-style helpers.
//! This library provides [`OrderedMap`], a key-unique associative container that remembers
//! the order in which keys were first inserted and layers array ergonomics on top of the
//! usual map primitives.
//!
//! ## Core Concepts
//!
//! * **Pairs**: an `OrderedMap` holds `(key, value)` pairs. Keys are unique; re-inserting an
//!   existing key replaces its value but keeps its position.
//! * **Positions**: insertion order drives every positional operation (`first`, `last`,
//!   `index_of`, `get_index`, random access).
//! * **Derived maps**: `filter`, `split`, `concat` and `clone` produce new, independent maps.
//!   Mutating a derived map never affects its source.
//! * **Random access (`random` feature)**: `random`, `random_key` and `random_pair` draw a
//!   uniformly random position.
//! * **Serialization (`serde` feature)**: maps serialize as JSON-style objects in insertion order.
//!
//! ```
//! use ordstore::OrderedMap;
//!
//! let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
//!
//! let big = map.filter(|v, _, _, _| *v > 1);
//! assert_eq!(big.keys(), vec![&"b", &"c"]);
//!
//! let (big, small) = map.split(|v, _, _, _| *v > 1);
//! assert_eq!(big.len(), 2);
//! assert_eq!(small.first(), Some(&1));
//! assert_eq!(map.index_of(&"b"), Some(1));
//! ```

pub mod constants;
pub mod map;

/// Re-export the `OrderedMap` struct for easier access.
pub use map::{MapError, Nested, OrderedMap};

/// Result type used throughout the Ordstore library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Ordstore library.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured errors from the map module
    #[error(transparent)]
    Map(map::MapError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Map(_) => "map",
        }
    }

    /// Check if this error was caused by an argument outside an operation's contract.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_invalid_argument(),
        }
    }

    /// Check if this error is map-related.
    pub fn is_map_error(&self) -> bool {
        matches!(self, Error::Map(_))
    }
}
