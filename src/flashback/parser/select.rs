//! Parsers for commands addressing a single card by index.

use crate::commands::{Command, CommandWord};
use crate::error::{FlashbackError, Result};
use crate::index::Index;

fn parse_index(tail: &str, word: CommandWord) -> Result<Index> {
    tail.parse()
        .map_err(|_| FlashbackError::InvalidFormat(word.usage()))
}

/// `delete INDEX`
pub fn parse_delete(tail: &str) -> Result<Command> {
    parse_index(tail, CommandWord::Delete).map(Command::Delete)
}

/// `view INDEX`
pub fn parse_view(tail: &str) -> Result<Command> {
    parse_index(tail, CommandWord::View).map(Command::View)
}

/// `stats [INDEX]`
pub fn parse_stats(tail: &str) -> Result<Command> {
    if tail.trim().is_empty() {
        return Ok(Command::Stats(None));
    }
    parse_index(tail, CommandWord::Stats).map(|index| Command::Stats(Some(index)))
}
