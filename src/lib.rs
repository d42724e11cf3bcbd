//! # memo-deck
//!
//! Card pool and sequence engine for memory-matching games.
//!
//! ## Design Principles
//!
//! 1. **One Pool, Many Arrangements**: Cards live in a `SharedRegistry` that
//!    the caller creates and hands to every `Deck`. Each deck owns its own
//!    ordered sequence of ids.
//!
//! 2. **Typed Identity**: Cards are addressed by `CardId`, a generated
//!    `"<author>_<hex>"` string wrapped in a newtype.
//!
//! 3. **Injectable Randomness**: Every shuffle, swap and random pick draws
//!    from a `DeckRng`. `GameRng` is seedable and replayable; `ScriptedRng`
//!    pins recorded arrangements.
//!
//! ## Modules
//!
//! - `core`: Random sources and configuration
//! - `cards`: Card ids, image records, cards and the registry
//! - `sequence`: Decks and shuffle/swap algorithms
//! - `source`: Parsing fetched JSON into image records
//! - `error`: Error taxonomy

pub mod core;
pub mod cards;
pub mod sequence;
pub mod source;
pub mod error;

// Re-export commonly used types
pub use crate::core::{DeckConfig, DeckRng, GameRng, GameRngState, ScriptedRng};

pub use crate::cards::{
    create_id, Card, CardId, CardRegistry, Credits, ImageRef, ImgData, LocalizedText,
    SharedRegistry,
};

pub use crate::sequence::Deck;

pub use crate::error::{DeckError, Result};
