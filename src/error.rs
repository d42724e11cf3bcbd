//! Error types for deck and sequence operations.

use thiserror::Error;

use crate::cards::CardId;

/// Failure of a deck operation.
///
/// Every variant is raised where the violated precondition is detected and
/// is handed back to the caller unchanged.
#[derive(Debug, Error)]
pub enum DeckError {
    /// The referenced id is not a key of the card registry.
    #[error("There is no card with id '{id}'")]
    UnknownCard { id: CardId },

    /// No eligible card remains to be picked.
    #[error("Cannot add more cards to the sequence ({registered} registered)")]
    ExhaustedPool { registered: usize },

    /// The sequence is too short for the requested operation.
    #[error("{operation} needs a sequence of at least 2 cards, got {len}")]
    InsufficientLength { operation: &'static str, len: usize },

    /// The receiver of a comparison is shorter than the other sequence.
    #[error("Sequence of length {other} cannot be compared against a shorter one of length {receiver}")]
    AsymmetricLength { receiver: usize, other: usize },

    /// Image records could not be parsed.
    #[error("Malformed image records: {0}")]
    MalformedRecords(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DeckError>;
