//! Piece, card and deck builder bindings for Python.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::Card;
use crate::core::Piece;
use crate::deck::{DeckBuilder, DeckError};

impl From<DeckError> for PyErr {
    fn from(err: DeckError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Python wrapper for Piece.
#[pyclass(name = "Piece", frozen)]
#[derive(Clone, Debug)]
pub struct PyPiece(pub Piece);

#[pymethods]
impl PyPiece {
    #[new]
    fn new(shape: String, colour: String) -> Self {
        Self(Piece::new(shape, colour))
    }

    #[getter]
    fn shape(&self) -> &str {
        self.0.shape()
    }

    #[getter]
    fn colour(&self) -> &str {
        self.0.colour()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        hash_of(&self.0)
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Piece({:?}, {:?})", self.0.shape(), self.0.colour())
    }
}

/// Python wrapper for Card.
#[pyclass(name = "Card", frozen)]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    #[new]
    fn new(first: &PyPiece, second: &PyPiece) -> Self {
        Self(Card::new(first.0.clone(), second.0.clone()))
    }

    /// Copies of the two pieces on the card.
    #[getter]
    fn content(&self) -> (PyPiece, PyPiece) {
        let (first, second) = self.0.content();
        (PyPiece(first), PyPiece(second))
    }

    fn is_degenerate(&self) -> bool {
        self.0.is_degenerate()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        hash_of(&self.0)
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Card({})", self.0)
    }
}

/// Python wrapper for DeckBuilder.
///
/// Raises `ValueError` for an invalid inventory.
#[pyclass(name = "DeckBuilder", frozen)]
pub struct PyDeckBuilder(DeckBuilder);

#[pymethods]
impl PyDeckBuilder {
    #[new]
    fn new(pieces: Vec<PyPiece>) -> PyResult<Self> {
        let builder = DeckBuilder::new(pieces.into_iter().map(|p| p.0))?;
        Ok(Self(builder))
    }

    /// The inventory, in the order supplied.
    #[getter]
    fn objects(&self) -> Vec<PyPiece> {
        self.0.objects().iter().cloned().map(PyPiece).collect()
    }

    /// Generate every valid card.
    fn generate_deck(&self) -> Vec<PyCard> {
        self.0.generate_deck().into_iter().map(PyCard).collect()
    }

    /// The piece a card points to, or None.
    fn chosen_piece(&self, card: &PyCard) -> Option<PyPiece> {
        self.0.chosen_piece(&card.0).cloned().map(PyPiece)
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __repr__(&self) -> String {
        format!("DeckBuilder({} pieces)", self.0.len())
    }
}
