//! # Undo/Redo History
//!
//! A linear list of snapshots plus a cursor pointing at the active one.
//!
//! ```text
//!   [s0, s1, s2, s3]
//!            ^ cursor = 2   (s3 is a redo target)
//! ```
//!
//! - `commit` drops everything after the cursor, appends, and moves the cursor
//!   to the new tail. Committing after an undo therefore prunes the redo branch.
//! - `undo` / `redo` only move the cursor. Commands are never replayed, so
//!   restoring a state costs the same no matter how many edits preceded it.
//!
//! The cursor always points at a valid snapshot: the history is created with
//! an initial snapshot and nothing ever removes the one under the cursor.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    #[error("There is nothing to undo")]
    NothingToUndo,
    #[error("There is nothing to redo")]
    NothingToRedo,
}

#[derive(Debug, Clone)]
pub struct History<T> {
    states: Vec<T>,
    cursor: usize,
}

impl<T> History<T> {
    pub fn new(initial: T) -> Self {
        Self {
            states: vec![initial],
            cursor: 0,
        }
    }

    pub fn commit(&mut self, snapshot: T) {
        self.states.truncate(self.cursor + 1);
        self.states.push(snapshot);
        self.cursor = self.states.len() - 1;
    }

    pub fn undo(&mut self) -> Result<&T, HistoryError> {
        if !self.can_undo() {
            return Err(HistoryError::NothingToUndo);
        }
        self.cursor -= 1;
        Ok(&self.states[self.cursor])
    }

    pub fn redo(&mut self) -> Result<&T, HistoryError> {
        if !self.can_redo() {
            return Err(HistoryError::NothingToRedo);
        }
        self.cursor += 1;
        Ok(&self.states[self.cursor])
    }

    pub fn current(&self) -> &T {
        &self.states[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.states.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }
}
