//! Core types: pieces, deterministic RNG, inventory configuration.
//!
//! Everything else in the crate is built from these.

pub mod piece;
pub mod rng;
pub mod config;

pub use piece::Piece;
pub use rng::DeckRng;
pub use config::{ConfigError, InventoryConfig, DEFAULT_SEED};
