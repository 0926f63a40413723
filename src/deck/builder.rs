//! Deck generation from a piece inventory.
//!
//! `DeckBuilder` validates the inventory once, then `generate_deck`
//! enumerates every candidate card and keeps those that point to exactly
//! one inventory piece.
//!
//! ## Algorithm
//!
//! 1. Build the synthetic universe: one piece for every
//!    (shape, colour) pair in the inventory, `n²` pieces in all. The `n²-n`
//!    pieces not in the inventory are "chimeras".
//! 2. Enumerate every unordered pair of universe pieces, a piece paired
//!    with itself included: `n²(n²+1)/2` candidates.
//! 3. Keep a candidate iff `is_valid_card` holds against the original
//!    inventory.
//!
//! Resulting deck sizes are 9, 48 and 60 for three, four and five pieces.
//! The five-piece deck is known to come up short.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::Piece;

use super::choose::{self, is_valid_card};
use super::error::{Attribute, DeckError};

/// Fewest pieces a game can be played with.
pub const MIN_PIECES: usize = 3;

/// Most pieces a game can be played with.
pub const MAX_PIECES: usize = 5;

/// Validated piece inventory that generates decks.
///
/// ## Example
///
/// ```
/// use bazar_deck::core::Piece;
/// use bazar_deck::deck::DeckBuilder;
///
/// let builder = DeckBuilder::new([
///     Piece::new("circle", "red"),
///     Piece::new("square", "blue"),
///     Piece::new("triangle", "green"),
/// ])
/// .unwrap();
///
/// let deck = builder.generate_deck();
/// assert_eq!(deck.len(), 9);
/// assert!(deck.iter().all(|card| builder.chosen_piece(card).is_some()));
/// ```
#[derive(Clone, Debug)]
pub struct DeckBuilder {
    objects: SmallVec<[Piece; MAX_PIECES]>,
    /// Distinct shapes, first-seen order.
    shapes: SmallVec<[String; MAX_PIECES]>,
    /// Distinct colours, first-seen order.
    colours: SmallVec<[String; MAX_PIECES]>,
}

impl DeckBuilder {
    /// Validate `pieces` and build a deck builder.
    ///
    /// # Errors
    ///
    /// - `InvalidInventorySize` unless there are 3 to 5 pieces.
    /// - `DuplicateAttribute` if two pieces share a shape or a colour.
    pub fn new(pieces: impl IntoIterator<Item = Piece>) -> Result<Self, DeckError> {
        let objects: SmallVec<[Piece; MAX_PIECES]> = pieces.into_iter().collect();

        if !(MIN_PIECES..=MAX_PIECES).contains(&objects.len()) {
            log::debug!("Rejected inventory of {} pieces", objects.len());
            return Err(DeckError::InvalidInventorySize {
                count: objects.len(),
            });
        }

        let shapes = distinct(objects.iter().map(Piece::shape), Attribute::Shape)?;
        let colours = distinct(objects.iter().map(Piece::colour), Attribute::Colour)?;

        Ok(Self {
            objects,
            shapes,
            colours,
        })
    }

    /// The inventory, in the order supplied.
    #[must_use]
    pub fn objects(&self) -> &[Piece] {
        &self.objects
    }

    /// Distinct shapes in the inventory.
    #[must_use]
    pub fn shapes(&self) -> &[String] {
        &self.shapes
    }

    /// Distinct colours in the inventory.
    #[must_use]
    pub fn colours(&self) -> &[String] {
        &self.colours
    }

    /// Number of pieces in the inventory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Always false; an inventory holds at least `MIN_PIECES`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Every (shape, colour) combination, shape-major.
    #[must_use]
    pub fn synthetic_pieces(&self) -> Vec<Piece> {
        self.shapes
            .iter()
            .flat_map(|shape| {
                self.colours
                    .iter()
                    .map(move |colour| Piece::new(shape.as_str(), colour.as_str()))
            })
            .collect()
    }

    /// Every unordered pair of synthetic pieces, repeats included.
    pub fn candidate_cards(&self) -> impl Iterator<Item = Card> {
        let universe = self.synthetic_pieces();
        let mut cards = Vec::with_capacity(universe.len() * (universe.len() + 1) / 2);
        for (i, first) in universe.iter().enumerate() {
            for second in &universe[i..] {
                cards.push(Card::new(first.clone(), second.clone()));
            }
        }
        cards.into_iter()
    }

    /// Generate the deck: every candidate card that points to exactly one
    /// inventory piece, in enumeration order.
    #[must_use]
    pub fn generate_deck(&self) -> Vec<Card> {
        let mut candidates = 0usize;
        let deck: Vec<Card> = self
            .candidate_cards()
            .inspect(|_| candidates += 1)
            .filter(|card| is_valid_card(card, &self.objects))
            .collect();

        log::debug!(
            "Generated {} cards from {} candidates ({} pieces)",
            deck.len(),
            candidates,
            self.objects.len(),
        );
        deck
    }

    /// The inventory piece `card` points to, if exactly one.
    #[must_use]
    pub fn chosen_piece(&self, card: &Card) -> Option<&Piece> {
        choose::chosen_piece(card, &self.objects)
    }
}

/// Collect `values` in first-seen order, rejecting any repeat.
fn distinct<'a>(
    values: impl Iterator<Item = &'a str>,
    attribute: Attribute,
) -> Result<SmallVec<[String; MAX_PIECES]>, DeckError> {
    let mut seen = FxHashSet::default();
    let mut out = SmallVec::new();
    for value in values {
        if !seen.insert(value) {
            log::debug!("Rejected inventory: duplicate {} {:?}", attribute, value);
            return Err(DeckError::DuplicateAttribute {
                attribute,
                value: value.to_string(),
            });
        }
        out.push(value.to_string());
    }
    Ok(out)
}
