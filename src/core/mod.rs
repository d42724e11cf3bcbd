//! Core building blocks: random sources and configuration.

pub mod rng;
pub mod config;

pub use rng::{DeckRng, GameRng, GameRngState, ScriptedRng};
pub use config::DeckConfig;
