//! Card identity.
//!
//! Cards are identified by a generated string that combines the image
//! author with a hex suffix built from the clock and the thread RNG, e.g.
//! `"Jane Doe_17f3a9c2b4e1d0a85c3e91f2"`.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Separator between the author and the suffix of a `CardId`.
pub const ID_SEPARATOR: char = '_';

/// Unique identifier for a card.
///
/// A newtype so registry lookups cannot be confused with arbitrary strings.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Wrap an existing id string.
    ///
    /// Use `create_id` to mint ids for new cards.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Get the raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Author part (everything before the last separator).
    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.0.rsplit_once(ID_SEPARATOR).map(|(author, _)| author)
    }

    /// Generated suffix (everything after the last separator).
    #[must_use]
    pub fn suffix(&self) -> Option<&str> {
        self.0.rsplit_once(ID_SEPARATOR).map(|(_, suffix)| suffix)
    }
}

impl From<&str> for CardId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for CardId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl AsRef<str> for CardId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Create a unique id for a card by `author`.
///
/// The suffix is the current time in nanoseconds followed by eight hex
/// digits drawn from the thread RNG, all lowercase hex, so calls within the
/// same clock tick still differ.
///
/// Panics if the system clock reads earlier than the Unix epoch.
///
/// ```
/// use memo_deck::cards::create_id;
///
/// let id = create_id("author1");
/// assert_eq!(id.author(), Some("author1"));
/// assert!(id.suffix().unwrap().chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[must_use]
pub fn create_id(author: &str) -> CardId {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is set before the Unix epoch")
        .as_nanos();
    let salt: u32 = rand::random();
    CardId(format!("{author}{ID_SEPARATOR}{nanos:x}{salt:08x}"))
}
