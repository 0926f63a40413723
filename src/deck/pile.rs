//! Shuffled draw pile.
//!
//! A generated deck comes out in enumeration order. `DrawPile` shuffles
//! it with a seed so a session deals the same sequence every time it is
//! replayed.

use crate::cards::Card;
use crate::core::DeckRng;

/// A shuffled deck that cards are drawn from, top first.
///
/// ## Example
///
/// ```
/// use bazar_deck::core::Piece;
/// use bazar_deck::deck::{DeckBuilder, DrawPile};
///
/// let builder = DeckBuilder::new([
///     Piece::new("circle", "red"),
///     Piece::new("square", "blue"),
///     Piece::new("triangle", "green"),
/// ])
/// .unwrap();
///
/// let mut pile = DrawPile::shuffled(builder.generate_deck(), 42);
/// assert_eq!(pile.remaining(), 9);
///
/// let card = pile.draw().unwrap();
/// assert!(builder.chosen_piece(&card).is_some());
/// assert_eq!(pile.remaining(), 8);
/// ```
#[derive(Clone, Debug)]
pub struct DrawPile {
    /// Top of the pile is the last element.
    cards: Vec<Card>,
    rng: DeckRng,
}

impl DrawPile {
    /// Shuffle `deck` with `seed` into a new pile.
    #[must_use]
    pub fn shuffled(deck: Vec<Card>, seed: u64) -> Self {
        let mut rng = DeckRng::new(seed);
        let mut cards = deck;
        rng.shuffle(&mut cards);
        Self { cards, rng }
    }

    /// Seed the pile was shuffled with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Take the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Look at the top card without taking it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Put cards back and reshuffle the whole pile.
    ///
    /// Uses a fork of the pile's RNG, so repeated reshuffles differ from
    /// each other but replay identically for the same seed.
    pub fn reshuffle(&mut self, returned: impl IntoIterator<Item = Card>) {
        self.cards.extend(returned);
        let mut branch = self.rng.fork();
        branch.shuffle(&mut self.cards);
    }

    /// Cards left in the pile.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// No cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
