//! Word categories and random word selection.
//!
//! The catalog is a fixed, in-memory dataset loaded once at first use.
//! [`WordProvider`] draws uniformly random words from it with an
//! injectable RNG so tests can be deterministic.

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

pub mod catalog;

/// Identifier for a category in the catalog.
pub type CategoryId = u32;

/// A named, fixed pool of candidate words.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Ordered word pool. Non-empty for every catalog category.
    pub words: Vec<String>,
}

impl Category {
    #[must_use]
    pub fn new(id: CategoryId, name: &str, words: &[&str]) -> Self {
        Self {
            id,
            name: name.to_string(),
            words: words.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Draws random words from the catalog.
///
/// A lookup miss (unknown id or empty pool) yields `None` and callers
/// substitute an empty string. This is the documented degraded behavior,
/// not a failure. Repeated draws may repeat previously seen words; there
/// is no anti-repeat tracking.
#[derive(Debug)]
pub struct WordProvider {
    rng: StdRng,
}

impl Default for WordProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl WordProvider {
    /// Create a provider seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a deterministic provider from a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Get a uniformly random word from the given category's pool.
    pub fn random_word(&mut self, category_id: CategoryId) -> Option<String> {
        let category = catalog::get(category_id)?;
        category.words.choose(&mut self.rng).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_word_stays_in_pool() {
        let mut words = WordProvider::seeded(7);
        for category in catalog::all() {
            for _ in 0..50 {
                let word = words.random_word(category.id).unwrap();
                assert!(category.words.contains(&word));
            }
        }
    }

    #[test]
    fn test_unknown_category_yields_none() {
        let mut words = WordProvider::seeded(7);
        assert_eq!(words.random_word(99), None);
        assert_eq!(words.random_word(0), None);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = WordProvider::seeded(42);
        let mut b = WordProvider::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.random_word(1), b.random_word(1));
        }
    }

    #[test]
    fn test_catalog_shape() {
        let categories = catalog::all();
        assert_eq!(categories.len(), 5);
        for (i, category) in categories.iter().enumerate() {
            assert_eq!(category.id, i as CategoryId + 1);
            assert!(!category.words.is_empty());
        }
        assert_eq!(catalog::get(1).unwrap().name, "Animales");
        assert!(catalog::get(6).is_none());
    }
}
