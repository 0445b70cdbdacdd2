use super::args::{
    tokenize, Prefix, PREFIX_ANSWER, PREFIX_CATEGORY, PREFIX_PRIORITY, PREFIX_QUESTION,
    PREFIX_TAG,
};
use super::FieldCheck;
use crate::commands::{Command, CommandWord};
use crate::error::{FlashbackError, Result};
use crate::fields::{Answer, Category, Priority, Question, Tag};
use crate::model::Flashcard;

const PREFIXES: &[Prefix] = &[
    PREFIX_QUESTION,
    PREFIX_ANSWER,
    PREFIX_CATEGORY,
    PREFIX_PRIORITY,
    PREFIX_TAG,
];

const MANDATORY: &[Prefix] =
    &[PREFIX_QUESTION, PREFIX_ANSWER, PREFIX_CATEGORY, PREFIX_PRIORITY];

/// `add q/QUESTION a/ANSWER c/CATEGORY p/PRIORITY [t/TAG]...`
///
/// Text before the first prefix is ignored.
pub fn parse(tail: &str) -> Result<Command> {
    let usage = CommandWord::Add.usage();
    let map = tokenize(tail, PREFIXES);
    if !map.are_present(MANDATORY) {
        return Err(FlashbackError::InvalidFormat(usage));
    }

    let mut check = FieldCheck::default();
    let question = check.check::<Question>(map.last_entry(PREFIX_QUESTION));
    let answer = check.check::<Answer>(map.last_entry(PREFIX_ANSWER));
    let category = check.check::<Category>(map.last_entry(PREFIX_CATEGORY));
    let priority = check.check::<Priority>(map.last_entry(PREFIX_PRIORITY));
    let tags = check.check_all::<Tag, _>(map.entries(PREFIX_TAG));
    check.finish()?;

    match (question, answer, category, priority) {
        (Some(q), Some(a), Some(c), Some(p)) => Ok(Command::Add(Flashcard::new(
            q,
            a,
            c,
            p,
            tags.into_iter().collect(),
        ))),
        _ => Err(FlashbackError::InvalidFormat(usage)),
    }
}
