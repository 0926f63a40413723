//! Cards: unordered pairs of pieces.
//!
//! ## Key Types
//!
//! - `Card`: two pieces, compared as an unordered pair
//!
//! ## Degenerate Cards
//!
//! A card may hold the same piece twice. Such cards are legal values but
//! never point to a piece, so deck generation always drops them.

pub mod card;

pub use card::Card;
