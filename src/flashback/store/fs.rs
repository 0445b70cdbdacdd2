use crate::error::{FlashbackError, Result};
use crate::model::Deck;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// The JSON file a deck is loaded from and saved to.
pub struct DeckFile {
    path: PathBuf,
}

impl DeckFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the deck, or returns an empty one if the file does not exist yet.
    pub fn load(&self) -> Result<Deck> {
        if !self.path.exists() {
            debug!("No deck file at {}, starting empty", self.path.display());
            return Ok(Deck::default());
        }
        let content = fs::read_to_string(&self.path).map_err(FlashbackError::Io)?;
        let mut deck: Deck =
            serde_json::from_str(&content).map_err(FlashbackError::Serialization)?;
        let dropped = deck.remove_duplicates();
        if dropped > 0 {
            warn!(
                dropped,
                "Dropped duplicate flashcards from {}",
                self.path.display()
            );
        }
        debug!("Loaded {} cards from {}", deck.len(), self.path.display());
        Ok(deck)
    }

    pub fn save(&self, deck: &Deck) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(FlashbackError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(deck).map_err(FlashbackError::Serialization)?;
        fs::write(&self.path, content).map_err(FlashbackError::Io)?;
        debug!("Saved {} cards to {}", deck.len(), self.path.display());
        Ok(())
    }
}
