use super::DataStore;
use crate::error::{FlashbackError, Result};
use crate::model::{Deck, Flashcard};
use crate::query::{CardFilter, SortOrder};

/// In-memory deck storage.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    deck: Deck,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing deck. Repeated cards are dropped so that every card
    /// can be addressed on its own.
    pub fn from_deck(mut deck: Deck) -> Self {
        deck.remove_duplicates();
        Self { deck }
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    fn position_of(&self, target: &Flashcard) -> Result<usize> {
        self.deck
            .cards
            .iter()
            .position(|c| c == target)
            .ok_or(FlashbackError::FlashcardNotFound)
    }
}

impl DataStore for InMemoryStore {
    fn add_flashcard(&mut self, card: Flashcard) -> Result<()> {
        if self.has_flashcard(&card) {
            return Err(FlashbackError::DuplicateFlashcard);
        }
        self.deck.cards.push(card);
        Ok(())
    }

    fn remove_flashcard(&mut self, target: &Flashcard) -> Result<Flashcard> {
        let pos = self.position_of(target)?;
        Ok(self.deck.cards.remove(pos))
    }

    fn update_flashcard(&mut self, target: &Flashcard, edited: Flashcard) -> Result<()> {
        let pos = self.position_of(target)?;
        let clashes = self
            .deck
            .cards
            .iter()
            .enumerate()
            .any(|(i, c)| i != pos && c.is_same_card(&edited));
        if clashes {
            return Err(FlashbackError::DuplicateFlashcard);
        }
        self.deck.cards[pos] = edited;
        Ok(())
    }

    fn set_flashcards(&mut self, cards: Vec<Flashcard>) {
        self.deck.cards = cards;
    }

    fn has_flashcard(&self, card: &Flashcard) -> bool {
        self.deck.cards.iter().any(|c| c.is_same_card(card))
    }

    fn list_flashcards(
        &self,
        filter: Option<&CardFilter>,
        sort: Option<SortOrder>,
    ) -> Vec<Flashcard> {
        let mut cards: Vec<Flashcard> = self
            .deck
            .cards
            .iter()
            .filter(|c| filter.map_or(true, |f| f.matches(c)))
            .cloned()
            .collect();
        if let Some(order) = sort {
            cards.sort_by(|a, b| order.compare(a, b));
        }
        cards
    }

    fn snapshot(&self) -> Deck {
        self.deck.clone()
    }

    fn restore(&mut self, snapshot: Deck) {
        self.deck = snapshot;
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::fields::Priority;
    use std::collections::BTreeSet;

    pub fn card(question: &str, answer: &str, category: &str, priority: Priority) -> Flashcard {
        Flashcard::new(
            question.parse().unwrap(),
            answer.parse().unwrap(),
            category.parse().unwrap(),
            priority,
            BTreeSet::new(),
        )
    }

    pub fn tagged(mut card: Flashcard, tags: &[&str]) -> Flashcard {
        card.tags = tags.iter().map(|t| t.parse().unwrap()).collect();
        card
    }

    /// A small deck shared by command and session tests.
    pub fn typical_cards() -> Vec<Flashcard> {
        vec![
            tagged(
                card("What is 2+2?", "4", "Math", Priority::Low),
                &["arithmetic"],
            ),
            tagged(
                card(
                    "Who proposed the theory of relativity?",
                    "Einstein",
                    "Physics",
                    Priority::High,
                ),
                &["general", "science"],
            ),
            card(
                "How many hearts does an octopus have?",
                "Three",
                "Biology",
                Priority::Mid,
            ),
        ]
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_typical_cards(mut self) -> Self {
            for card in typical_cards() {
                self.store.add_flashcard(card).unwrap();
            }
            self
        }
    }
}
