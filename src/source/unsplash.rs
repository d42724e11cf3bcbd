//! Mapping of the upstream photo payload into image records.
//!
//! The fetch layer receives a JSON array of photos shaped like:
//!
//! ```json
//! [{ "id": "AbC123", "slug": "brown-dog-AbC123",
//!    "alternative_slugs": { "es": "perro-marron-AbC123" },
//!    "urls": { "small": "https://..." },
//!    "links": { "html": "https://..." },
//!    "user": { "name": "Jane", "portfolio_url": null } }]
//! ```
//!
//! Nothing here touches the network; callers hand over the body they
//! already fetched.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{Credits, ImgData, LocalizedText};
use crate::core::DeckConfig;
use crate::error::Result;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoUrls {
    pub small: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeSlugs {
    pub es: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoLinks {
    pub html: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoUser {
    pub name: String,
    #[serde(default)]
    pub portfolio_url: Option<String>,
}

/// One photo as returned by the image API.
///
/// Fields the deck does not use are ignored during deserialization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsplashPhoto {
    #[serde(default)]
    pub id: Option<String>,
    pub slug: String,
    pub alternative_slugs: AlternativeSlugs,
    pub urls: PhotoUrls,
    pub links: PhotoLinks,
    pub user: PhotoUser,
}

impl UnsplashPhoto {
    /// Convert into an image record.
    ///
    /// With `clean_alt`, both slugs go through `clean_alt_text` using the
    /// photo id.
    #[must_use]
    pub fn into_img_data(self, clean_alt: bool) -> ImgData {
        let (es, en) = if clean_alt {
            let id = self.id.as_deref().unwrap_or_default();
            (
                clean_alt_text(&self.alternative_slugs.es, id),
                clean_alt_text(&self.slug, id),
            )
        } else {
            (self.alternative_slugs.es, self.slug)
        };

        ImgData {
            url: self.urls.small,
            alt: LocalizedText { es, en },
            credits: Credits {
                author: self.user.name,
                link: self.links.html,
                portfolio: self.user.portfolio_url.unwrap_or_default(),
            },
        }
    }
}

/// Turn a slug into readable text.
///
/// Removes `photo_id`, replaces hyphens with spaces and collapses the
/// remaining whitespace.
///
/// ```
/// use memo_deck::source::clean_alt_text;
///
/// assert_eq!(clean_alt_text("brown-dog-on-grass-AbC123", "AbC123"), "brown dog on grass");
/// ```
#[must_use]
pub fn clean_alt_text(text: &str, photo_id: &str) -> String {
    let without_id = if photo_id.is_empty() {
        text.to_string()
    } else {
        text.replace(photo_id, "")
    };
    without_id
        .replace('-', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse an array of already-mapped image records.
pub fn parse_records(json: &str) -> Result<Vec<ImgData>> {
    let records: Vec<ImgData> = serde_json::from_str(json)?;
    debug!(count = records.len(), "parsed image records");
    Ok(records)
}

/// Parse a raw photo payload and map it into image records.
pub fn parse_unsplash(json: &str, config: &DeckConfig) -> Result<Vec<ImgData>> {
    let photos: Vec<UnsplashPhoto> = serde_json::from_str(json)?;
    debug!(
        count = photos.len(),
        clean_alt = config.clean_alt_text,
        "parsed photo payload"
    );
    Ok(photos
        .into_iter()
        .map(|photo| photo.into_img_data(config.clean_alt_text))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeckError;

    const PAYLOAD: &str = r#"[
        {
            "id": "AbC123",
            "slug": "brown-dog-on-grass-AbC123",
            "alternative_slugs": { "es": "perro-marron-sobre-cesped-AbC123", "fr": "chien" },
            "urls": { "small": "https://images.test/small/1", "full": "https://images.test/full/1" },
            "links": { "html": "https://photos.test/AbC123" },
            "user": { "name": "Jane Doe", "portfolio_url": "https://jane.test" },
            "likes": 12
        },
        {
            "slug": "red-car",
            "alternative_slugs": { "es": "coche-rojo" },
            "urls": { "small": "https://images.test/small/2" },
            "links": { "html": "https://photos.test/2" },
            "user": { "name": "John", "portfolio_url": null }
        }
    ]"#;

    #[test]
    fn test_parse_verbatim() {
        let records = parse_unsplash(PAYLOAD, &DeckConfig::new()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].url, "https://images.test/small/1");
        assert_eq!(records[0].alt.en, "brown-dog-on-grass-AbC123");
        assert_eq!(records[0].alt.es, "perro-marron-sobre-cesped-AbC123");
        assert_eq!(records[0].credits.author, "Jane Doe");
        assert_eq!(records[0].credits.link, "https://photos.test/AbC123");
        assert_eq!(records[0].credits.portfolio, "https://jane.test");
        assert_eq!(records[1].credits.portfolio, "");
    }

    #[test]
    fn test_parse_cleaned() {
        let records = parse_unsplash(PAYLOAD, &DeckConfig::new().clean_alt_text()).unwrap();

        assert_eq!(records[0].alt.en, "brown dog on grass");
        assert_eq!(records[0].alt.es, "perro marron sobre cesped");
        // No id: only hyphens are stripped
        assert_eq!(records[1].alt.en, "red car");
    }

    #[test]
    fn test_clean_alt_text_edges() {
        assert_eq!(clean_alt_text("", "id"), "");
        assert_eq!(clean_alt_text("--a--b--", ""), "a b");
        assert_eq!(clean_alt_text("plain text", "zzz"), "plain text");
    }

    #[test]
    fn test_parse_records() {
        let json = r#"[{
            "url": "https://test1.com",
            "alt": { "es": "testEs1", "en": "testEn1" },
            "credits": { "author": "author1", "link": "l", "portfolio": "p" }
        }]"#;

        let records = parse_records(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].credits.author, "author1");
    }

    #[test]
    fn test_malformed_payload() {
        let err = parse_records(r#"[{ "url": 3 }]"#).unwrap_err();
        assert!(matches!(err, DeckError::MalformedRecords(_)));

        let err = parse_unsplash("{}", &DeckConfig::new()).unwrap_err();
        assert!(matches!(err, DeckError::MalformedRecords(_)));
    }
}
