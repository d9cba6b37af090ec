//! Uniformly random access to map pairs.
//!
//! The plain methods draw from [`rand::thread_rng`]. The `_with` variants take any
//! [`Rng`], so callers can use a seeded generator for reproducible picks.

use std::hash::Hash;

use rand::Rng;

use super::OrderedMap;

impl<K, V> OrderedMap<K, V> {
    /// Get a uniformly random value, or `None` if the map is empty.
    pub fn random(&self) -> Option<&V> {
        self.random_with(&mut rand::thread_rng())
    }

    /// Get a random value using the given generator.
    pub fn random_with<R: Rng>(&self, rng: &mut R) -> Option<&V> {
        let index = self.random_index(rng)?;
        self.pairs.get_index(index).map(|(_, value)| value)
    }

    /// Get a uniformly random key, or `None` if the map is empty.
    pub fn random_key(&self) -> Option<&K> {
        self.random_key_with(&mut rand::thread_rng())
    }

    /// Get a random key using the given generator.
    pub fn random_key_with<R: Rng>(&self, rng: &mut R) -> Option<&K> {
        let index = self.random_index(rng)?;
        self.pairs.get_index(index).map(|(key, _)| key)
    }

    fn random_index<R: Rng>(&self, rng: &mut R) -> Option<usize> {
        if self.pairs.is_empty() {
            return None;
        }
        Some(rng.gen_range(0..self.pairs.len()))
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: Hash + Eq,
{
    /// Get a uniformly random `(key, value)` pair, or `None` if the map is empty.
    pub fn random_pair(&self) -> Option<(&K, &V)> {
        self.random_pair_with(&mut rand::thread_rng())
    }

    /// Get a random pair using the given generator. The pair is chosen through
    /// [`random_key_with`](Self::random_key_with).
    pub fn random_pair_with<R: Rng>(&self, rng: &mut R) -> Option<(&K, &V)> {
        let key = self.random_key_with(rng)?;
        self.pairs.get_key_value(key)
    }
}
