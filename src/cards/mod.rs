//! Card system: identity, image records, cards, and the registry.
//!
//! ## Key Types
//!
//! - `CardId`: Generated `"<author>_<hex>"` identifier
//! - `ImgData`: Validated image record from the fetch layer
//! - `Card`: Immutable tile built from one record
//! - `CardRegistry` / `SharedRegistry`: Card pool shared across decks

pub mod id;
pub mod image;
pub mod card;
pub mod registry;

pub use id::{create_id, CardId, ID_SEPARATOR};
pub use image::{Credits, ImageRef, ImgData, LocalizedText};
pub use card::Card;
pub use registry::{CardRegistry, SharedRegistry};
