//! Decks: one ordered sequence of card ids over a shared registry.
//!
//! ## Registry vs Sequence
//!
//! - The registry (`SharedRegistry`) is the card pool. Every deck built from
//!   the same handle sees the same cards.
//! - The sequence is owned by one deck. It may repeat ids, and every id in it
//!   was registered when it was pushed.
//!
//! Comparing a "game" deck against a "player" deck is a prefix check: the
//! receiver must be at least as long as the other sequence.

use std::rc::Rc;

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use super::shuffle;
use crate::cards::{Card, CardId, ImgData, SharedRegistry};
use crate::core::{DeckConfig, DeckRng, GameRng};
use crate::error::{DeckError, Result};

/// An arrangement of cards drawn from a shared pool.
///
/// ## Usage
///
/// ```
/// use memo_deck::cards::{ImgData, SharedRegistry};
/// use memo_deck::sequence::Deck;
///
/// let pool = SharedRegistry::new();
/// let mut game = Deck::seeded(&pool, 42);
/// let mut player = Deck::seeded(&pool, 7);
///
/// let ids = game.load_deck(&[ImgData::default(), ImgData::default(), ImgData::default()]);
/// game.load_card_ids_to_sequence();
/// game.shuffle_sequence().unwrap();
///
/// player.add_to_sequence(&game.sequence()[0]).unwrap();
/// assert!(game.has_same_sequence_as(&player).unwrap());
/// assert_eq!(ids.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Deck<R: DeckRng = GameRng> {
    registry: SharedRegistry,
    sequence: Vec<CardId>,
    rng: R,
}

impl Deck<GameRng> {
    /// Create an empty deck over `registry`, seeded from entropy.
    #[must_use]
    pub fn new(registry: &SharedRegistry) -> Self {
        Self::with_rng(registry, GameRng::from_entropy())
    }

    /// Create an empty deck with a fixed seed.
    #[must_use]
    pub fn seeded(registry: &SharedRegistry, seed: u64) -> Self {
        Self::with_rng(registry, GameRng::new(seed))
    }

    /// Create an empty deck using the RNG described by `config`.
    #[must_use]
    pub fn from_config(registry: &SharedRegistry, config: &DeckConfig) -> Self {
        Self::with_rng(registry, config.rng())
    }
}

impl<R: DeckRng> Deck<R> {
    /// Create an empty deck drawing from a custom random source.
    #[must_use]
    pub fn with_rng(registry: &SharedRegistry, rng: R) -> Self {
        Self {
            registry: registry.clone(),
            sequence: Vec::new(),
            rng,
        }
    }

    /// The shared registry this deck draws from.
    #[must_use]
    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    /// The current sequence.
    #[must_use]
    pub fn sequence(&self) -> &[CardId] {
        &self.sequence
    }

    /// Mutable access to the random source.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    // === Registry ===

    /// Build a card for each record and add it to the shared registry.
    ///
    /// Accumulates with earlier loads. Returns the new ids in record order.
    pub fn load_deck(&mut self, records: &[ImgData]) -> Vec<CardId> {
        self.registry.load(records)
    }

    /// Look up a registered card.
    #[must_use]
    pub fn get_card_by_id(&self, id: &CardId) -> Option<Rc<Card>> {
        self.registry.get(id)
    }

    /// All registered ids in insertion order.
    #[must_use]
    pub fn current_ids(&self) -> Vec<CardId> {
        self.registry.ids()
    }

    // === Sequence ===

    /// Replace the sequence with every registered id, once each.
    pub fn load_card_ids_to_sequence(&mut self) {
        self.sequence = self.registry.ids();
        debug!(len = self.sequence.len(), "sequence loaded from registry");
    }

    /// Empty the sequence.
    pub fn flush_sequence(&mut self) {
        self.sequence.clear();
    }

    /// Append `id` to the sequence.
    ///
    /// Fails with `UnknownCard` if `id` is not registered. Repeats are kept.
    pub fn add_to_sequence(&mut self, id: &CardId) -> Result<()> {
        self.ensure_registered(id)?;
        self.sequence.push(id.clone());
        Ok(())
    }

    /// Append a registered id picked uniformly at random and return it.
    ///
    /// With `no_repeat`, ids already in the sequence are not eligible.
    /// Fails with `ExhaustedPool` when nothing is eligible.
    pub fn add_random_to_sequence(&mut self, no_repeat: bool) -> Result<CardId> {
        let candidates = {
            let present: FxHashSet<&CardId> = if no_repeat {
                self.sequence.iter().collect()
            } else {
                FxHashSet::default()
            };
            self.registry.with(|registry| {
                registry
                    .ids()
                    .iter()
                    .filter(|id| !present.contains(id))
                    .cloned()
                    .collect::<Vec<_>>()
            })
        };

        if candidates.is_empty() {
            return Err(DeckError::ExhaustedPool {
                registered: self.registry.len(),
            });
        }

        let picked = candidates[self.rng.index_below(candidates.len())].clone();
        self.sequence.push(picked.clone());
        Ok(picked)
    }

    /// Remove every occurrence of `id` and return how many were removed.
    ///
    /// Fails with `UnknownCard` if `id` is not registered, whether or not it
    /// is in the sequence.
    pub fn remove_from_sequence(&mut self, id: &CardId) -> Result<usize> {
        self.ensure_registered(id)?;
        let before = self.sequence.len();
        self.sequence.retain(|card_id| card_id != id);
        Ok(before - self.sequence.len())
    }

    /// Check if `id` appears in the sequence.
    #[must_use]
    pub fn contains_card(&self, id: &CardId) -> bool {
        self.sequence.contains(id)
    }

    // === Shuffling ===

    /// Fully shuffle the sequence (Fisher–Yates).
    ///
    /// Fails with `InsufficientLength` for fewer than 2 ids.
    pub fn shuffle_sequence(&mut self) -> Result<()> {
        if self.sequence.len() < 2 {
            return Err(DeckError::InsufficientLength {
                operation: "shuffle",
                len: self.sequence.len(),
            });
        }
        shuffle::fisher_yates(&mut self.sequence, &mut self.rng);
        trace!(len = self.sequence.len(), "sequence shuffled");
        Ok(())
    }

    /// Swap `min(amount, len)` random pairs of positions.
    ///
    /// Fails with `InsufficientLength` for fewer than 2 ids. A non-positive
    /// `amount` performs no swaps.
    pub fn swap_cards_on_sequence(&mut self, amount: i64) -> Result<()> {
        let swaps = shuffle::swap_pairs(&mut self.sequence, amount, &mut self.rng)?;
        trace!(swaps, "sequence perturbed");
        Ok(())
    }

    /// Two distinct random positions of the sequence.
    ///
    /// Fails with `InsufficientLength` for fewer than 2 ids.
    pub fn two_random_indexes(&mut self) -> Result<(usize, usize)> {
        shuffle::two_random_indexes(self.sequence.len(), &mut self.rng)
    }

    // === Comparison ===

    /// Check that `other`'s sequence is a prefix of this one.
    ///
    /// Fails with `AsymmetricLength` if this sequence is shorter than
    /// `other`'s.
    pub fn has_same_sequence_as<S: DeckRng>(&self, other: &Deck<S>) -> Result<bool> {
        if self.sequence.len() < other.sequence.len() {
            return Err(DeckError::AsymmetricLength {
                receiver: self.sequence.len(),
                other: other.sequence.len(),
            });
        }
        Ok(self.sequence.starts_with(&other.sequence))
    }

    fn ensure_registered(&self, id: &CardId) -> Result<()> {
        if self.registry.contains(id) {
            Ok(())
        } else {
            Err(DeckError::UnknownCard { id: id.clone() })
        }
    }
}
