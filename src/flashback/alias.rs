//! # Command Aliases
//!
//! Users may bind a short token to any canonical command word, e.g. `a` for
//! `add`. The table is consulted once per input line, before dispatch.
//!
//! Invariants enforced at registration:
//! - an alias is a single token and never a canonical command word,
//! - an alias is bound to at most one command,
//! - each command has at most one alias (a new one replaces the old one),
//! - targets are [`CommandWord`]s, so aliases never chain.

use crate::commands::CommandWord;
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AliasError {
    #[error("Alias must be a single word without spaces")]
    InvalidToken,
    #[error("'{0}' is a command word and cannot be used as an alias")]
    ReservedWord(String),
    #[error("Alias '{alias}' is already in use for '{command}'")]
    InUse { alias: String, command: CommandWord },
    #[error("'{0}' is not a valid command")]
    UnknownTarget(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    aliases: BTreeMap<String, CommandWord>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_alias(&self, word: &str) -> bool {
        self.aliases.contains_key(word)
    }

    /// Maps an alias to its command word; any other word comes back unchanged.
    pub fn resolve<'a>(&self, word: &'a str) -> &'a str {
        match self.aliases.get(word) {
            Some(command) => command.as_str(),
            None => word,
        }
    }

    /// Binds `alias` to `command`, returning the alias the command had before.
    /// Repeating an existing binding changes nothing.
    pub fn register(
        &mut self,
        alias: &str,
        command: CommandWord,
    ) -> Result<Option<String>, AliasError> {
        if alias.is_empty() || alias.chars().any(char::is_whitespace) {
            return Err(AliasError::InvalidToken);
        }
        if CommandWord::from_str(alias).is_ok() {
            return Err(AliasError::ReservedWord(alias.to_string()));
        }
        if let Some(existing) = self.aliases.get(alias) {
            if *existing == command {
                return Ok(None);
            }
            return Err(AliasError::InUse {
                alias: alias.to_string(),
                command: *existing,
            });
        }

        let previous = self.alias_for(command).map(str::to_string);
        if let Some(old) = &previous {
            self.aliases.remove(old);
        }
        self.aliases.insert(alias.to_string(), command);
        Ok(previous)
    }

    pub fn alias_for(&self, command: CommandWord) -> Option<&str> {
        self.aliases
            .iter()
            .find(|(_, c)| **c == command)
            .map(|(a, _)| a.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, CommandWord)> {
        self.aliases.iter().map(|(a, c)| (a.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
