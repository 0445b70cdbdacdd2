use super::args::{
    tokenize, Prefix, PREFIX_ANSWER, PREFIX_CATEGORY, PREFIX_PRIORITY, PREFIX_QUESTION,
    PREFIX_TAG,
};
use super::FieldCheck;
use crate::commands::{Command, CommandWord};
use crate::error::{FlashbackError, Result};
use crate::fields::{Answer, Category, Priority, Question, Tag};
use crate::query::FieldFilter;

const PREFIXES: &[Prefix] = &[
    PREFIX_QUESTION,
    PREFIX_ANSWER,
    PREFIX_CATEGORY,
    PREFIX_PRIORITY,
    PREFIX_TAG,
];

fn keywords(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// `find KEYWORD [MORE_KEYWORDS]...`
pub fn parse_find(tail: &str) -> Result<Command> {
    let words = keywords(tail);
    if words.is_empty() {
        return Err(FlashbackError::InvalidFormat(CommandWord::Find.usage()));
    }
    Ok(Command::Find(words))
}

/// `filter [q/KEYWORDS] [a/KEYWORDS] [c/KEYWORDS] [p/PRIORITY] [t/TAG]...`
///
/// Keyword fields go through the matching field validator first, so a blank
/// `q/` is reported like a blank question.
pub fn parse_filter(tail: &str) -> Result<Command> {
    let usage = CommandWord::Filter.usage();
    let map = tokenize(tail, PREFIXES);
    if !map.preamble().is_empty() || map.is_empty() {
        return Err(FlashbackError::InvalidFormat(usage));
    }

    let mut check = FieldCheck::default();
    let question = check.check::<Question>(map.last_entry(PREFIX_QUESTION));
    let answer = check.check::<Answer>(map.last_entry(PREFIX_ANSWER));
    let category = check.check::<Category>(map.last_entry(PREFIX_CATEGORY));
    let priority = check.check::<Priority>(map.last_entry(PREFIX_PRIORITY));
    let tags = check.check_all::<Tag, _>(map.entries(PREFIX_TAG));
    check.finish()?;

    Ok(Command::Filter(FieldFilter {
        question: question.map_or_else(Vec::new, |q| keywords(q.as_str())),
        answer: answer.map_or_else(Vec::new, |a| keywords(a.as_str())),
        category: category.map_or_else(Vec::new, |c| keywords(c.as_str())),
        priority,
        tags: tags.into_iter().collect(),
    }))
}
