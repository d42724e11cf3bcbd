//! Ordered card sequences and the algorithms behind them.
//!
//! - `Deck`: sequence CRUD, shuffling and comparison over a `SharedRegistry`
//! - `shuffle`: standalone Fisher–Yates and bounded swap algorithms

pub mod deck;
pub mod shuffle;

pub use deck::Deck;
pub use shuffle::{fisher_yates, shifted, shuffled, swap_pairs, two_random_indexes};
