//! Image records consumed by the deck.
//!
//! `ImgData` is the validated record handed over by the fetch layer:
//!
//! ```json
//! { "url": "...",
//!   "alt": { "es": "...", "en": "..." },
//!   "credits": { "author": "...", "link": "...", "portfolio": "..." } }
//! ```

use serde::{Deserialize, Serialize};

/// Text in the two languages the game ships.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub es: String,
    pub en: String,
}

/// Attribution for an image.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credits {
    /// Display name of the photographer.
    pub author: String,
    /// Link to the image on its host.
    pub link: String,
    /// Link to the author's portfolio. May be empty.
    pub portfolio: String,
}

/// One image record, the input for a single card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImgData {
    pub url: String,
    pub alt: LocalizedText,
    pub credits: Credits,
}

impl ImgData {
    /// Build a record from its parts.
    #[must_use]
    pub fn new(url: impl Into<String>, alt: LocalizedText, credits: Credits) -> Self {
        Self {
            url: url.into(),
            alt,
            credits,
        }
    }
}

/// Reference to the image a card displays.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef {
    /// Source URL.
    pub src: String,
    /// Alternative text (English).
    pub alt: String,
}
