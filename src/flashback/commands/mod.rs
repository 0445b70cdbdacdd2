//! # Command Layer
//!
//! A [`Command`] is the fully validated form of one input line. Parsers build
//! it, [`Command::execute`] consumes it against a [`Session`], and what comes
//! back is a [`CmdResult`]: feedback messages plus the UI transitions the
//! front end should perform (help, exit, view, review, stats).
//!
//! Each command's logic lives in its own module as a `run` function. Commands
//! that change the deck commit a snapshot to the session history as their
//! last step, after every check has passed, so a failed command never leaves
//! a trace in the store or the history.

use crate::error::Result;
use crate::index::Index;
use crate::model::{Flashcard, Statistics};
use crate::query::{FieldFilter, SortOrder};
use crate::session::Session;
use crate::store::DataStore;
use std::fmt;
use std::str::FromStr;

pub mod add;
pub mod alias;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod history;
pub mod list;
pub mod review;
pub mod search;
pub mod sort;
pub mod stats;
pub mod view;

pub use edit::{EditDescriptor, FieldUpdate, TagUpdate};

/// The closed set of canonical command words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommandWord {
    Add,
    Edit,
    Delete,
    Clear,
    Find,
    List,
    Exit,
    Help,
    View,
    Review,
    Undo,
    Redo,
    Filter,
    Stats,
    Sort,
    Alias,
}

impl CommandWord {
    pub const ALL: [CommandWord; 16] = [
        CommandWord::Add,
        CommandWord::Edit,
        CommandWord::Delete,
        CommandWord::Clear,
        CommandWord::Find,
        CommandWord::List,
        CommandWord::Exit,
        CommandWord::Help,
        CommandWord::View,
        CommandWord::Review,
        CommandWord::Undo,
        CommandWord::Redo,
        CommandWord::Filter,
        CommandWord::Stats,
        CommandWord::Sort,
        CommandWord::Alias,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandWord::Add => "add",
            CommandWord::Edit => "edit",
            CommandWord::Delete => "delete",
            CommandWord::Clear => "clear",
            CommandWord::Find => "find",
            CommandWord::List => "list",
            CommandWord::Exit => "exit",
            CommandWord::Help => "help",
            CommandWord::View => "view",
            CommandWord::Review => "review",
            CommandWord::Undo => "undo",
            CommandWord::Redo => "redo",
            CommandWord::Filter => "filter",
            CommandWord::Stats => "stats",
            CommandWord::Sort => "sort",
            CommandWord::Alias => "alias",
        }
    }

    /// The usage text shown when input does not match the command's shape.
    pub fn usage(&self) -> &'static str {
        match self {
            CommandWord::Add => {
                "add: Adds a flashcard to the deck.\n\
                 Parameters: q/QUESTION a/ANSWER c/CATEGORY p/PRIORITY [t/TAG]...\n\
                 Example: add q/What is 2+2? a/4 c/Math p/Low t/arithmetic"
            }
            CommandWord::Edit => {
                "edit: Edits the flashcard at INDEX in the displayed list. \
                 Existing values are overwritten; t/ alone removes every tag.\n\
                 Parameters: INDEX (positive integer) [q/QUESTION] [a/ANSWER] [c/CATEGORY] [p/PRIORITY] [t/TAG]...\n\
                 Example: edit 1 a/Four p/Mid"
            }
            CommandWord::Delete => {
                "delete: Deletes the flashcard at INDEX in the displayed list.\n\
                 Parameters: INDEX (positive integer)\n\
                 Example: delete 1"
            }
            CommandWord::Clear => "clear: Removes every flashcard from the deck.",
            CommandWord::Find => {
                "find: Lists flashcards whose question, category or tags contain any of the keywords (case-insensitive).\n\
                 Parameters: KEYWORD [MORE_KEYWORDS]...\n\
                 Example: find physics math"
            }
            CommandWord::List => "list: Lists every flashcard in the deck.",
            CommandWord::Exit => "exit: Exits the program.",
            CommandWord::Help => "help: Shows program usage instructions.",
            CommandWord::View => {
                "view: Shows the flashcard at INDEX in the displayed list.\n\
                 Parameters: INDEX (positive integer)\n\
                 Example: view 2"
            }
            CommandWord::Review => "review: Starts reviewing the displayed flashcards.",
            CommandWord::Undo => "undo: Reverts the last change to the deck.",
            CommandWord::Redo => "redo: Reapplies the last undone change.",
            CommandWord::Filter => {
                "filter: Lists flashcards matching every given field.\n\
                 Parameters: [q/KEYWORDS] [a/KEYWORDS] [c/KEYWORDS] [p/PRIORITY] [t/TAG]...\n\
                 Example: filter c/Physics p/High"
            }
            CommandWord::Stats => {
                "stats: Shows review statistics of the flashcard at INDEX, or of every displayed flashcard.\n\
                 Parameters: [INDEX (positive integer)]\n\
                 Example: stats 1"
            }
            CommandWord::Sort => {
                "sort: Sorts the deck.\n\
                 Parameters: priority|question|category|reviewed|success -a|-d\n\
                 Example: sort priority -d"
            }
            CommandWord::Alias => {
                "alias: Defines an alias for a command. A command has at most one alias.\n\
                 Parameters: cmd/COMMAND al/ALIAS\n\
                 Example: alias cmd/add al/a"
            }
        }
    }
}

impl FromStr for CommandWord {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        CommandWord::ALL
            .iter()
            .find(|w| w.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Unknown command: {}", s))
    }
}

impl fmt::Display for CommandWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(Flashcard),
    Edit {
        index: Index,
        descriptor: EditDescriptor,
    },
    Delete(Index),
    Clear,
    Find(Vec<String>),
    List,
    Exit,
    Help,
    View(Index),
    Review,
    Undo,
    Redo,
    Filter(FieldFilter),
    Stats(Option<Index>),
    Sort(SortOrder),
    Alias {
        alias: String,
        command: CommandWord,
    },
}

impl Command {
    pub fn word(&self) -> CommandWord {
        match self {
            Command::Add(_) => CommandWord::Add,
            Command::Edit { .. } => CommandWord::Edit,
            Command::Delete(_) => CommandWord::Delete,
            Command::Clear => CommandWord::Clear,
            Command::Find(_) => CommandWord::Find,
            Command::List => CommandWord::List,
            Command::Exit => CommandWord::Exit,
            Command::Help => CommandWord::Help,
            Command::View(_) => CommandWord::View,
            Command::Review => CommandWord::Review,
            Command::Undo => CommandWord::Undo,
            Command::Redo => CommandWord::Redo,
            Command::Filter(_) => CommandWord::Filter,
            Command::Stats(_) => CommandWord::Stats,
            Command::Sort(_) => CommandWord::Sort,
            Command::Alias { .. } => CommandWord::Alias,
        }
    }

    pub fn execute<S: DataStore>(self, session: &mut Session<S>) -> Result<CmdResult> {
        match self {
            Command::Add(card) => add::run(session, card),
            Command::Edit { index, descriptor } => edit::run(session, index, &descriptor),
            Command::Delete(index) => delete::run(session, index),
            Command::Clear => clear::run(session),
            Command::Find(keywords) => search::find(session, keywords),
            Command::List => list::run(session),
            Command::Exit => Ok(CmdResult::default()
                .with_message(CmdMessage::info("Exiting FlashBack as requested ..."))
                .with_exit()),
            Command::Help => Ok(CmdResult::default()
                .with_message(CmdMessage::info("Opened help window."))
                .with_help()),
            Command::View(index) => view::run(session, index),
            Command::Review => review::run(session),
            Command::Undo => history::undo(session),
            Command::Redo => history::redo(session),
            Command::Filter(filter) => search::filter(session, filter),
            Command::Stats(index) => stats::run(session, index),
            Command::Sort(order) => sort::run(session, order),
            Command::Alias { alias, command } => alias::run(session, &alias, command),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Statistics to display, and the card they belong to when not aggregated.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsReport {
    pub statistics: Statistics,
    pub index: Option<Index>,
    pub card_count: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    /// The displayed list after the command, for commands that change it.
    pub listed: Vec<Flashcard>,
    pub show_help: bool,
    pub exit: bool,
    pub view_index: Option<Index>,
    pub review_mode: bool,
    pub stats: Option<StatsReport>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed(mut self, cards: Vec<Flashcard>) -> Self {
        self.listed = cards;
        self
    }

    pub fn with_help(mut self) -> Self {
        self.show_help = true;
        self
    }

    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self
    }

    pub fn with_view(mut self, index: Index) -> Self {
        self.view_index = Some(index);
        self
    }

    pub fn with_review(mut self) -> Self {
        self.review_mode = true;
        self
    }

    pub fn with_stats(mut self, report: StatsReport) -> Self {
        self.stats = Some(report);
        self
    }

    /// All message text, one message per line.
    pub fn feedback(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::AliasTable;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_command_words_round_trip() {
        for word in CommandWord::ALL {
            assert_eq!(word.as_str().parse::<CommandWord>(), Ok(word));
            assert!(!word.usage().is_empty());
        }
        assert!("Add".parse::<CommandWord>().is_err());
        assert!("bogus".parse::<CommandWord>().is_err());
    }

    #[test]
    fn test_help_and_exit_set_flags() {
        let mut session = Session::new(InMemoryStore::new(), AliasTable::new());

        let result = Command::Help.execute(&mut session).unwrap();
        assert!(result.show_help);
        assert!(!result.exit);

        let result = Command::Exit.execute(&mut session).unwrap();
        assert!(result.exit);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_feedback_joins_messages() {
        let result = CmdResult::default()
            .with_message(CmdMessage::success("one"))
            .with_message(CmdMessage::info("two"));
        assert_eq!(result.feedback(), "one\ntwo");
    }
}
