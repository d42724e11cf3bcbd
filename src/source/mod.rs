//! Input boundary: turning fetched JSON into image records.

pub mod unsplash;

pub use unsplash::{clean_alt_text, parse_records, parse_unsplash, UnsplashPhoto};
