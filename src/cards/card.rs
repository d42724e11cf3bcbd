//! Cards - one playable tile per image record.
//!
//! A `Card` is built once from an `ImgData` record and never changes. The
//! registry shares it as `Rc<Card>`, so fields are private and exposed
//! through accessors only.

use serde::Serialize;

use super::id::{create_id, CardId};
use super::image::{ImageRef, ImgData};

/// One playable tile.
///
/// ## Example
///
/// ```
/// use memo_deck::cards::{Card, Credits, ImgData, LocalizedText};
///
/// let record = ImgData::new(
///     "https://test1.com",
///     LocalizedText { es: "perro".into(), en: "dog".into() },
///     Credits { author: "author1".into(), ..Default::default() },
/// );
/// let card = Card::new(&record);
///
/// assert_eq!(card.author(), "author1");
/// assert_eq!(card.img().alt, "dog");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    id: CardId,
    author: String,
    alt_es: String,
    alt_en: String,
    img: ImageRef,
    link: String,
    portfolio: String,
}

impl Card {
    /// Create a card from a record, minting a fresh id from its author.
    #[must_use]
    pub fn new(record: &ImgData) -> Self {
        Self {
            id: create_id(&record.credits.author),
            author: record.credits.author.clone(),
            alt_es: record.alt.es.clone(),
            alt_en: record.alt.en.clone(),
            img: ImageRef {
                src: record.url.clone(),
                alt: record.alt.en.clone(),
            },
            link: record.credits.link.clone(),
            portfolio: record.credits.portfolio.clone(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &CardId {
        &self.id
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Spanish description.
    #[must_use]
    pub fn alt_es(&self) -> &str {
        &self.alt_es
    }

    /// English description.
    #[must_use]
    pub fn alt_en(&self) -> &str {
        &self.alt_en
    }

    #[must_use]
    pub fn img(&self) -> &ImageRef {
        &self.img
    }

    /// Link to the image on its host.
    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Link to the author's portfolio. May be empty.
    #[must_use]
    pub fn portfolio(&self) -> &str {
        &self.portfolio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Credits, LocalizedText};

    fn record(n: u32) -> ImgData {
        ImgData::new(
            format!("https://test{n}.com"),
            LocalizedText {
                es: format!("testEs{n}"),
                en: format!("testEn{n}"),
            },
            Credits {
                author: format!("author{n}"),
                link: format!("https://link{n}.com"),
                portfolio: format!("https://portfolio{n}.com"),
            },
        )
    }

    #[test]
    fn test_fields_copied_verbatim() {
        let data = record(1);
        let card = Card::new(&data);

        assert_eq!(card.author(), "author1");
        assert_eq!(card.alt_es(), "testEs1");
        assert_eq!(card.alt_en(), "testEn1");
        assert_eq!(card.img().src, "https://test1.com");
        assert_eq!(card.img().alt, card.alt_en());
        assert_eq!(card.link(), "https://link1.com");
        assert_eq!(card.portfolio(), "https://portfolio1.com");
    }

    #[test]
    fn test_id_derived_from_author() {
        let card = Card::new(&record(2));
        assert_eq!(card.id().author(), Some("author2"));
    }

    #[test]
    fn test_same_record_gets_distinct_ids() {
        let data = record(3);
        let a = Card::new(&data);
        let b = Card::new(&data);
        assert_ne!(a.id(), b.id());
    }
}
