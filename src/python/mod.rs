//! Python bindings for bazar-deck.
//!
//! # Quick Start
//!
//! ```python
//! import bazar_deck as bz
//!
//! builder = bz.DeckBuilder([
//!     bz.Piece("ghost", "white"),
//!     bz.Piece("bottle", "green"),
//!     bz.Piece("mouse", "grey"),
//! ])
//!
//! for card in builder.generate_deck():
//!     print(card, "->", builder.chosen_piece(card))
//! ```

use pyo3::prelude::*;

mod py_deck;

pub use py_deck::*;

/// bazar_deck: deck generation for Bazar Bizarre-style games.
#[pymodule]
fn bazar_deck(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPiece>()?;
    m.add_class::<PyCard>()?;
    m.add_class::<PyDeckBuilder>()?;

    Ok(())
}
