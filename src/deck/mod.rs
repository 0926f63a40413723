//! Deck generation: inventory validation, the choosability rule, and
//! dealing.
//!
//! ## Key Types
//!
//! - `DeckBuilder`: validated inventory, generates the deck
//! - `DeckError`: inventory validation failures
//! - `DrawPile`: a generated deck shuffled for play
//!
//! The choosability rule lives in `choose` so it can be changed without
//! touching enumeration or validation.

pub mod builder;
pub mod choose;
pub mod error;
pub mod pile;

pub use builder::{DeckBuilder, MAX_PIECES, MIN_PIECES};
pub use choose::{can_choose, choosable_count, chosen_piece, is_valid_card};
pub use error::{Attribute, DeckError};
pub use pile::DrawPile;
