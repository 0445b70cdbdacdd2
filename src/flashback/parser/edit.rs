use super::args::{
    tokenize, ArgMultimap, Prefix, PREFIX_ANSWER, PREFIX_CATEGORY, PREFIX_PRIORITY,
    PREFIX_QUESTION, PREFIX_TAG,
};
use super::FieldCheck;
use crate::commands::{Command, CommandWord, EditDescriptor, FieldUpdate, TagUpdate};
use crate::error::{FlashbackError, Result};
use crate::fields::{Answer, Category, Priority, Question, Tag};
use crate::index::Index;

const PREFIXES: &[Prefix] = &[
    PREFIX_QUESTION,
    PREFIX_ANSWER,
    PREFIX_CATEGORY,
    PREFIX_PRIORITY,
    PREFIX_TAG,
];

fn to_update<T>(value: Option<T>) -> FieldUpdate<T> {
    value.map_or(FieldUpdate::Keep, FieldUpdate::Set)
}

/// A lone empty `t/` clears the tags. An empty `t/` next to real tags is
/// validated like any other tag and fails.
fn tag_update(map: &ArgMultimap, check: &mut FieldCheck) -> TagUpdate {
    let values = map.all_values(PREFIX_TAG);
    match values.as_slice() {
        [] => TagUpdate::Keep,
        [only] if only.is_empty() => TagUpdate::Clear,
        _ => TagUpdate::Replace(
            check
                .check_all::<Tag, _>(map.entries(PREFIX_TAG))
                .into_iter()
                .collect(),
        ),
    }
}

/// `edit INDEX [q/QUESTION] [a/ANSWER] [c/CATEGORY] [p/PRIORITY] [t/TAG]...`
pub fn parse(tail: &str) -> Result<Command> {
    let usage = CommandWord::Edit.usage();
    let map = tokenize(tail, PREFIXES);
    let index: Index = map
        .preamble()
        .parse()
        .map_err(|_| FlashbackError::InvalidFormat(usage))?;

    let mut check = FieldCheck::default();
    let descriptor = EditDescriptor {
        question: to_update(check.check::<Question>(map.last_entry(PREFIX_QUESTION))),
        answer: to_update(check.check::<Answer>(map.last_entry(PREFIX_ANSWER))),
        category: to_update(check.check::<Category>(map.last_entry(PREFIX_CATEGORY))),
        priority: to_update(check.check::<Priority>(map.last_entry(PREFIX_PRIORITY))),
        tags: tag_update(&map, &mut check),
    };
    check.finish()?;

    if !descriptor.is_any_field_edited() {
        return Err(FlashbackError::NotEdited);
    }
    Ok(Command::Edit { index, descriptor })
}
