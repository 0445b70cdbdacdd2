//! # Session
//!
//! The session is the single context object every parse and execute call goes
//! through. It owns:
//!
//! - the [`DataStore`] holding the deck,
//! - the [`AliasTable`] (seeded at boot, changed only by `alias`),
//! - the undo/redo [`History`] of deck snapshots,
//! - the active display filter set by `find` / `filter`.
//!
//! Nothing here is global, so tests build as many independent sessions as
//! they like. A session is not `Sync`-aware: callers sharing one across
//! threads must serialize access themselves (e.g. behind a `Mutex`) to keep
//! the history cursor consistent.
//!
//! Indexes given by the user address the **displayed list**: the deck after
//! the active filter is applied.

use crate::alias::AliasTable;
use crate::commands::{CmdResult, Command};
use crate::error::{FlashbackError, Result};
use crate::history::History;
use crate::index::Index;
use crate::model::{Deck, Flashcard};
use crate::parser;
use crate::query::CardFilter;
use crate::store::DataStore;
use tracing::{info, warn};

pub struct Session<S: DataStore> {
    store: S,
    aliases: AliasTable,
    history: History<Deck>,
    filter: Option<CardFilter>,
}

impl<S: DataStore> Session<S> {
    pub fn new(store: S, aliases: AliasTable) -> Self {
        let history = History::new(store.snapshot());
        Self {
            store,
            aliases,
            history,
            filter: None,
        }
    }

    /// Interprets one line of input without running it.
    pub fn parse(&self, input: &str) -> Result<Command> {
        parser::parse_command(input, &self.aliases)
    }

    /// Parses and runs one line of input.
    pub fn execute(&mut self, input: &str) -> Result<CmdResult> {
        let outcome = self.parse(input).and_then(|command| self.run(command));
        if let Err(e) = &outcome {
            warn!(input, kind = ?e.kind(), "Command failed: {}", e);
        }
        outcome
    }

    pub fn run(&mut self, command: Command) -> Result<CmdResult> {
        let word = command.word();
        let result = command.execute(self)?;
        info!(command = %word, "Command executed");
        Ok(result)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn history(&self) -> &History<Deck> {
        &self.history
    }

    pub fn filter(&self) -> Option<&CardFilter> {
        self.filter.as_ref()
    }

    /// The cards the user currently sees, in order.
    pub fn displayed(&self) -> Vec<Flashcard> {
        self.store.list_flashcards(self.filter.as_ref(), None)
    }

    /// The displayed card at `index`, or `InvalidIndex`.
    pub fn card_at(&self, index: Index) -> Result<Flashcard> {
        self.displayed()
            .into_iter()
            .nth(index.zero_based())
            .ok_or(FlashbackError::InvalidIndex(index))
    }

    /// Records the outcome of reviewing the displayed card at `index`.
    ///
    /// This is a deck change like any other, so it is committed and undoable.
    pub fn record_review(&mut self, index: Index, correct: bool) -> Result<Flashcard> {
        let target = self.card_at(index)?;
        let mut reviewed = target.clone();
        reviewed.stats.record(correct);
        self.store.update_flashcard(&target, reviewed.clone())?;
        self.commit();
        Ok(reviewed)
    }

    pub(crate) fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub(crate) fn aliases_mut(&mut self) -> &mut AliasTable {
        &mut self.aliases
    }

    pub(crate) fn set_filter(&mut self, filter: Option<CardFilter>) {
        self.filter = filter;
    }

    /// Pushes the current deck onto the history, pruning any redo branch.
    pub(crate) fn commit(&mut self) {
        self.history.commit(self.store.snapshot());
        info!(
            cursor = self.history.cursor(),
            states = self.history.len(),
            "Deck committed"
        );
    }

    pub(crate) fn undo(&mut self) -> Result<()> {
        let snapshot = self.history.undo()?.clone();
        self.store.restore(snapshot);
        self.filter = None;
        Ok(())
    }

    pub(crate) fn redo(&mut self) -> Result<()> {
        let snapshot = self.history.redo()?.clone();
        self.store.restore(snapshot);
        self.filter = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn typical_session() -> Session<InMemoryStore> {
        Session::new(
            StoreFixture::new().with_typical_cards().store,
            AliasTable::new(),
        )
    }

    #[test]
    fn test_failed_parse_leaves_state_untouched() {
        let mut session = typical_session();
        let before = session.store().snapshot();

        let err = session.execute("add q/only a question").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert_eq!(session.store().snapshot(), before);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_failed_execution_leaves_state_untouched() {
        let mut session = typical_session();
        let before = session.store().snapshot();

        let err = session.execute("delete 10").unwrap_err();
        assert!(matches!(err, FlashbackError::InvalidIndex(_)));
        assert_eq!(session.store().snapshot(), before);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_card_at_uses_displayed_list() {
        let mut session = typical_session();
        session.execute("find physics").unwrap();
        let card = session.card_at(Index::from_zero_based(0)).unwrap();
        assert_eq!(card.category.as_str(), "Physics");
        assert!(session.card_at(Index::from_zero_based(1)).is_err());
    }

    #[test]
    fn test_record_review_is_undoable() {
        let mut session = typical_session();
        let first = Index::from_zero_based(0);

        let reviewed = session.record_review(first, true).unwrap();
        assert_eq!(reviewed.stats.review_count, 1);
        assert_eq!(session.card_at(first).unwrap().stats.success_count, 1);

        session.execute("undo").unwrap();
        assert_eq!(session.card_at(first).unwrap().stats.review_count, 0);
    }
}
