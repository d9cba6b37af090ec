//! Named defaults shared across the crate.

/// Depth used by [`OrderedMap::flat_default`](crate::OrderedMap::flat_default).
pub const DEFAULT_FLAT_DEPTH: usize = 1;

/// Smallest depth accepted by [`OrderedMap::flat`](crate::OrderedMap::flat).
pub const MIN_FLAT_DEPTH: usize = 1;
