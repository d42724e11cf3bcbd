//! Deck configuration.
//!
//! Callers describe how decks draw randomness and how incoming image records
//! are pre-processed. The config is plain serde data so it can live in any
//! settings file the game layer already reads.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Configuration shared by the decks of one game.
///
/// ## Example
///
/// ```
/// use memo_deck::core::DeckConfig;
///
/// let config = DeckConfig::new().with_seed(7).clean_alt_text();
/// assert_eq!(config.seed, Some(7));
/// assert!(config.clean_alt_text);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Strip photo ids and hyphens from upstream alt text before building
    /// records.
    pub clean_alt_text: bool,
}

impl DeckConfig {
    /// Create a config with entropy seeding and verbatim alt text.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed so arrangements can be replayed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable alt-text cleaning for upstream payloads.
    #[must_use]
    pub fn clean_alt_text(mut self) -> Self {
        self.clean_alt_text = true;
        self
    }

    /// Build the RNG described by this config.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DeckRng;

    #[test]
    fn test_defaults() {
        let config = DeckConfig::new();
        assert_eq!(config.seed, None);
        assert!(!config.clean_alt_text);
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let config = DeckConfig::new().with_seed(99);
        let mut a = config.rng();
        let mut b = config.rng();
        assert_eq!(a.seed(), 99);
        assert_eq!(a.index_below(100), b.index_below(100));
    }

    #[test]
    fn test_partial_json() {
        let config: DeckConfig = serde_json::from_str(r#"{"seed": 3}"#).unwrap();
        assert_eq!(config, DeckConfig::new().with_seed(3));

        let config: DeckConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DeckConfig::default());
    }
}
