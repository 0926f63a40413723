//! # bazar-deck
//!
//! Deck generation for Bazar Bizarre-style matching card games.
//!
//! Players share a handful of pieces, each with a unique shape and a
//! unique colour. Every card shows two pieces, and points to exactly one
//! piece in the inventory: either a piece shown exactly, or the one piece
//! that shares nothing with the card. Players race to grab it.
//!
//! ## Quick Start
//!
//! ```
//! use bazar_deck::{DeckBuilder, Piece};
//!
//! let builder = DeckBuilder::new([
//!     Piece::new("ghost", "white"),
//!     Piece::new("bottle", "green"),
//!     Piece::new("mouse", "grey"),
//! ])?;
//!
//! for card in builder.generate_deck() {
//!     let answer = builder.chosen_piece(&card).expect("deck cards point to one piece");
//!     println!("{card} -> {answer}");
//! }
//! # Ok::<(), bazar_deck::DeckError>(())
//! ```
//!
//! ## Modules
//!
//! - `core`: pieces, RNG, inventory configuration
//! - `cards`: the two-piece `Card`
//! - `deck`: validation, the choosability rule, generation, draw piles
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ## Known Issue
//!
//! Inventories of three and four pieces produce the expected decks (9
//! and 48 cards). Five pieces yield only 60 cards, about half of what
//! the rule should admit. The behaviour is pinned by tests until the
//! intended rule is settled.

pub mod core;
pub mod cards;
pub mod deck;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{ConfigError, DeckRng, InventoryConfig, Piece};

pub use crate::cards::Card;

pub use crate::deck::{
    can_choose, choosable_count, chosen_piece, is_valid_card,
    Attribute, DeckBuilder, DeckError, DrawPile, MAX_PIECES, MIN_PIECES,
};
