//! Inventory configuration.
//!
//! A game session starts from a list of pieces, usually read from a JSON
//! file:
//!
//! ```json
//! {
//!   "pieces": [
//!     { "shape": "ghost", "colour": "white" },
//!     { "shape": "bottle", "colour": "green" },
//!     { "shape": "mouse", "colour": "grey" }
//!   ],
//!   "seed": 42
//! }
//! ```
//!
//! `seed` is optional and only matters when the deck is dealt into a
//! `DrawPile`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Piece;
use crate::deck::{DeckBuilder, DeckError, DrawPile};

/// Seed used when the configuration does not name one.
pub const DEFAULT_SEED: u64 = 42;

/// Piece inventory plus dealing options.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Pieces in play.
    pub pieces: Vec<Piece>,

    /// Seed for shuffling the deck into a draw pile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl InventoryConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a piece.
    #[must_use]
    pub fn with_piece(mut self, shape: impl Into<String>, colour: impl Into<String>) -> Self {
        self.pieces.push(Piece::new(shape, colour));
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or missing `pieces`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Json)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Json)
    }

    /// The configured seed, or `DEFAULT_SEED`.
    #[must_use]
    pub fn seed_or_default(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// Validate the inventory and build a `DeckBuilder`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Inventory` if the pieces are not a valid
    /// inventory.
    pub fn to_builder(&self) -> Result<DeckBuilder, ConfigError> {
        Ok(DeckBuilder::new(self.pieces.iter().cloned())?)
    }

    /// Generate the deck and shuffle it into a draw pile.
    ///
    /// # Errors
    ///
    /// Same as [`InventoryConfig::to_builder`].
    pub fn deal(&self) -> Result<DrawPile, ConfigError> {
        let deck = self.to_builder()?.generate_deck();
        Ok(DrawPile::shuffled(deck, self.seed_or_default()))
    }
}

/// Errors loading an inventory configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid inventory JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error(transparent)]
    Inventory(#[from] DeckError),
}
