//! # Input Parsing
//!
//! Turns one raw input line into a [`Command`]:
//!
//! ```text
//!  "  a q/2+2 a/4 c/Math p/Low "
//!        │
//!        ▼  split_command          ("a", " q/2+2 a/4 c/Math p/Low")
//!        ▼  AliasTable::resolve    "a" -> "add"
//!        ▼  CommandWord::from_str  CommandWord::Add
//!        ▼  add::parse             Command::Add(Flashcard { .. })
//! ```
//!
//! Each command word maps to exactly one parser function through an
//! exhaustive `match`, so adding a word to [`CommandWord`] without a parser
//! does not compile.
//!
//! ## Failure reporting
//!
//! - Shape problems (missing fields, bad index, stray text) are
//!   `InvalidFormat` carrying the command's usage text.
//! - Field values failing validation are `Constraint` errors. For fields that
//!   may only appear once, the last occurrence wins and is the only one
//!   validated. When several validated values are bad, the one appearing
//!   earliest in the input is reported.
//! - Zero-argument commands (`clear`, `list`, `exit`, `help`, `review`,
//!   `undo`, `redo`) ignore any trailing text.

use crate::alias::AliasTable;
use crate::commands::{Command, CommandWord};
use crate::error::{FlashbackError, Result};
use crate::fields::ConstraintViolation;
use std::str::FromStr;
use tracing::debug;

pub mod add;
pub mod alias;
pub mod args;
pub mod edit;
pub mod search;
pub mod select;
pub mod sort;

use args::PrefixedValue;

type ParseFn = fn(&str) -> Result<Command>;

/// Splits trimmed input into the command word and the untouched remainder.
pub fn split_command(input: &str) -> Result<(&str, &str)> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FlashbackError::InvalidFormat(CommandWord::Help.usage()));
    }
    Ok(trimmed
        .find(char::is_whitespace)
        .map_or((trimmed, ""), |pos| trimmed.split_at(pos)))
}

/// Parses one line of user input, resolving aliases first.
pub fn parse_command(input: &str, aliases: &AliasTable) -> Result<Command> {
    let (word, tail) = split_command(input)?;
    let resolved = aliases.resolve(word);
    if resolved != word {
        debug!(alias = word, command = resolved, "Resolved alias");
    }

    let command_word = CommandWord::from_str(resolved)
        .map_err(|_| FlashbackError::UnknownCommand(word.to_string()))?;
    debug!(command = %command_word, tail, "Dispatching");
    parser_for(command_word)(tail)
}

fn parser_for(word: CommandWord) -> ParseFn {
    match word {
        CommandWord::Add => add::parse,
        CommandWord::Edit => edit::parse,
        CommandWord::Delete => select::parse_delete,
        CommandWord::View => select::parse_view,
        CommandWord::Stats => select::parse_stats,
        CommandWord::Find => search::parse_find,
        CommandWord::Filter => search::parse_filter,
        CommandWord::Sort => sort::parse,
        CommandWord::Alias => alias::parse,
        CommandWord::Clear => |_| Ok(Command::Clear),
        CommandWord::List => |_| Ok(Command::List),
        CommandWord::Exit => |_| Ok(Command::Exit),
        CommandWord::Help => |_| Ok(Command::Help),
        CommandWord::Review => |_| Ok(Command::Review),
        CommandWord::Undo => |_| Ok(Command::Undo),
        CommandWord::Redo => |_| Ok(Command::Redo),
    }
}

/// Validates field values while remembering where each failure sat in the
/// input, so the earliest one can be reported.
#[derive(Debug, Default)]
pub(crate) struct FieldCheck {
    failures: Vec<(usize, ConstraintViolation)>,
}

impl FieldCheck {
    pub(crate) fn check<T>(&mut self, entry: Option<&PrefixedValue>) -> Option<T>
    where
        T: FromStr<Err = ConstraintViolation>,
    {
        let entry = entry?;
        match entry.value.parse() {
            Ok(value) => Some(value),
            Err(violation) => {
                self.failures.push((entry.position, violation));
                None
            }
        }
    }

    pub(crate) fn check_all<'a, T, I>(&mut self, entries: I) -> Vec<T>
    where
        T: FromStr<Err = ConstraintViolation>,
        I: IntoIterator<Item = &'a PrefixedValue>,
    {
        entries
            .into_iter()
            .filter_map(|entry| self.check(Some(entry)))
            .collect()
    }

    pub(crate) fn finish(self) -> std::result::Result<(), ConstraintViolation> {
        match self.failures.into_iter().min_by_key(|(pos, _)| *pos) {
            Some((_, violation)) => Err(violation),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::index::Index;

    fn parse(input: &str) -> Result<Command> {
        parse_command(input, &AliasTable::new())
    }

    #[test]
    fn test_split_command() {
        assert_eq!(split_command("  list  ").unwrap(), ("list", ""));
        assert_eq!(
            split_command(" add q/x a/y ").unwrap(),
            ("add", " q/x a/y")
        );
        assert_eq!(split_command("view\t2").unwrap(), ("view", "\t2"));
    }

    #[test]
    fn test_blank_input_is_format_error() {
        for input in ["", "   ", "\n"] {
            let err = split_command(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Format);
            assert!(err.to_string().contains(CommandWord::Help.usage()));
        }
    }

    #[test]
    fn test_unknown_command() {
        let err = parse("bogus").unwrap_err();
        assert!(matches!(err, FlashbackError::UnknownCommand(ref w) if w == "bogus"));
        assert_eq!(err.kind(), ErrorKind::UnknownCommand);
    }

    #[test]
    fn test_command_words_are_case_sensitive() {
        assert!(matches!(
            parse("LIST"),
            Err(FlashbackError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_zero_arity_commands() {
        assert_eq!(parse("clear").unwrap(), Command::Clear);
        assert_eq!(parse("list").unwrap(), Command::List);
        assert_eq!(parse("exit").unwrap(), Command::Exit);
        assert_eq!(parse("help").unwrap(), Command::Help);
        assert_eq!(parse("review").unwrap(), Command::Review);
        assert_eq!(parse("undo").unwrap(), Command::Undo);
        assert_eq!(parse("redo").unwrap(), Command::Redo);
    }

    #[test]
    fn test_zero_arity_commands_ignore_trailing_text() {
        assert_eq!(parse("clear 3").unwrap(), Command::Clear);
        assert_eq!(parse("list everything please").unwrap(), Command::List);
        assert_eq!(parse("exit now").unwrap(), Command::Exit);
        assert_eq!(parse("help add").unwrap(), Command::Help);
        assert_eq!(parse("review q/x").unwrap(), Command::Review);
        assert_eq!(parse("undo 2").unwrap(), Command::Undo);
        assert_eq!(parse("redo 2").unwrap(), Command::Redo);
    }

    #[test]
    fn test_every_word_dispatches() {
        let inputs = [
            "add q/q a/a c/c p/low",
            "edit 1 q/q",
            "delete 1",
            "clear",
            "find x",
            "list",
            "exit",
            "help",
            "view 1",
            "review",
            "undo",
            "redo",
            "filter c/x",
            "stats",
            "sort question -a",
            "alias cmd/add al/a",
        ];
        for (input, word) in inputs.iter().zip(CommandWord::ALL) {
            assert_eq!(parse(input).unwrap().word(), word, "input: {}", input);
        }
    }

    #[test]
    fn test_alias_is_resolved_before_dispatch() {
        let mut aliases = AliasTable::new();
        aliases.register("rm", CommandWord::Delete).unwrap();

        let command = parse_command("rm 2", &aliases).unwrap();
        assert_eq!(
            command,
            Command::Delete(Index::from_one_based(2).unwrap())
        );

        let command = parse_command("delete 2", &aliases).unwrap();
        assert_eq!(command.word(), CommandWord::Delete);
    }

    #[test]
    fn test_alias_errors_use_target_usage() {
        let mut aliases = AliasTable::new();
        aliases.register("rm", CommandWord::Delete).unwrap();
        let err = parse_command("rm", &aliases).unwrap_err();
        assert!(err.to_string().contains(CommandWord::Delete.usage()));
    }
}
