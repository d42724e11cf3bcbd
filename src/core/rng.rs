//! Random sources for deck operations.
//!
//! ## Key Features
//!
//! - **`DeckRng`**: the seam every randomized deck operation draws from.
//!   Draws are unit floats, so a scripted source reproduces recorded
//!   arrangements exactly.
//! - **Deterministic**: `GameRng` with the same seed produces the same
//!   shuffles, swaps and picks.
//! - **Serializable**: O(1) state capture and restore for replays.
//!
//! ## Usage
//!
//! ```
//! use memo_deck::core::{DeckRng, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let index = rng.index_below(16);
//! assert!(index < 16);
//!
//! // Same seed, same draws
//! let mut replay = GameRng::new(42);
//! assert_eq!(replay.index_below(16), index);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Source of uniform draws used by shuffles, swaps and random picks.
pub trait DeckRng {
    /// Next draw, uniform in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Index uniform in `[0, bound)`, computed as `floor(next_unit() * bound)`.
    ///
    /// Returns 0 when `bound` is 0.
    fn index_below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        let scaled = (self.next_unit() * bound as f64).floor() as usize;
        scaled.min(bound - 1)
    }
}

impl<R: DeckRng + ?Sized> DeckRng for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Deterministic RNG for deck arrangements.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the thread RNG.
    ///
    /// The chosen seed is still recorded, so `seed()` can be logged and the
    /// game replayed later.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence. Used to
    /// give every deck built from one game seed its own stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed
    /// (e.g., "game" and "player" decks).
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl DeckRng for GameRng {
    fn next_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

/// Replays a fixed list of unit draws, cycling when exhausted.
///
/// Lets callers pin an arrangement to recorded expectations.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedRng {
    /// Create a source replaying `draws` in order.
    ///
    /// Values are clamped into `[0, 1)`. An empty script always draws 0.
    #[must_use]
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        let draws = draws
            .into()
            .into_iter()
            .map(|d| d.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { draws, cursor: 0 }
    }
}

impl DeckRng for ScriptedRng {
    fn next_unit(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let draw = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        draw
    }
}
