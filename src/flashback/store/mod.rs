//! # Storage Layer
//!
//! The [`DataStore`] trait is the only view commands have of the deck. It is
//! deliberately small: card-level mutations, a filtered/sorted listing, and
//! whole-deck [`snapshot`](DataStore::snapshot) / [`restore`](DataStore::restore)
//! for the undo/redo history.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the deck lives in a `Vec`. Used by the CLI at
//!   runtime and by every test.
//! - [`fs::DeckFile`]: not a store, but the JSON file a store is loaded from
//!   and saved to. Persistence happens outside the command layer; commands
//!   never touch the disk.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── deck.json     # { "cards": [ { "question": ..., "tags": [...], ... } ] }
//! └── config.json   # deck file name and the alias table
//! ```

use crate::error::Result;
use crate::model::{Deck, Flashcard};
use crate::query::{CardFilter, SortOrder};

pub mod fs;
pub mod memory;

/// Abstract interface over the flashcard deck.
pub trait DataStore {
    /// Append a card. Fails with `DuplicateFlashcard` if the same card exists.
    fn add_flashcard(&mut self, card: Flashcard) -> Result<()>;

    /// Remove `target` (compared by full equality) and return it.
    fn remove_flashcard(&mut self, target: &Flashcard) -> Result<Flashcard>;

    /// Replace `target` with `edited`, keeping its position.
    fn update_flashcard(&mut self, target: &Flashcard, edited: Flashcard) -> Result<()>;

    /// Replace every card at once (clear, sort).
    fn set_flashcards(&mut self, cards: Vec<Flashcard>);

    /// Whether a card asking the same question with the same answer exists.
    fn has_flashcard(&self, card: &Flashcard) -> bool;

    /// Cards matching `filter` (all when `None`), ordered by `sort` when given,
    /// otherwise in deck order.
    fn list_flashcards(&self, filter: Option<&CardFilter>, sort: Option<SortOrder>)
        -> Vec<Flashcard>;

    fn snapshot(&self) -> Deck;

    fn restore(&mut self, snapshot: Deck);
}
