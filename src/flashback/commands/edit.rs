//! Editing a flashcard.
//!
//! Each editable field is a tri-state rather than an `Option`, so "leave tags
//! alone" and "remove every tag" are distinct, explicit values.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::fields::{Answer, Category, Priority, Question, Tag};
use crate::index::Index;
use crate::model::Flashcard;
use crate::session::Session;
use crate::store::DataStore;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    Keep,
    Set(T),
}

// Manual impl: a derive would demand `T: Default`.
impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::Keep
    }
}

impl<T: Clone> FieldUpdate<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, FieldUpdate::Set(_))
    }

    fn apply(&self, current: &T) -> T {
        match self {
            FieldUpdate::Keep => current.clone(),
            FieldUpdate::Set(value) => value.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagUpdate {
    #[default]
    Keep,
    Replace(BTreeSet<Tag>),
    Clear,
}

impl TagUpdate {
    fn apply(&self, current: &BTreeSet<Tag>) -> BTreeSet<Tag> {
        match self {
            TagUpdate::Keep => current.clone(),
            TagUpdate::Replace(tags) => tags.clone(),
            TagUpdate::Clear => BTreeSet::new(),
        }
    }
}

/// The fields an `edit` changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditDescriptor {
    pub question: FieldUpdate<Question>,
    pub answer: FieldUpdate<Answer>,
    pub category: FieldUpdate<Category>,
    pub priority: FieldUpdate<Priority>,
    pub tags: TagUpdate,
}

impl EditDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.question.is_set()
            || self.answer.is_set()
            || self.category.is_set()
            || self.priority.is_set()
            || self.tags != TagUpdate::Keep
    }

    /// The edited copy of `card`. Review statistics carry over.
    pub fn apply(&self, card: &Flashcard) -> Flashcard {
        Flashcard {
            question: self.question.apply(&card.question),
            answer: self.answer.apply(&card.answer),
            category: self.category.apply(&card.category),
            priority: self.priority.apply(&card.priority),
            tags: self.tags.apply(&card.tags),
            stats: card.stats,
        }
    }
}

pub fn run<S: DataStore>(
    session: &mut Session<S>,
    index: Index,
    descriptor: &EditDescriptor,
) -> Result<CmdResult> {
    let target = session.card_at(index)?;
    let edited = descriptor.apply(&target);
    session
        .store_mut()
        .update_flashcard(&target, edited.clone())?;
    session.set_filter(None);
    session.commit();
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Edited flashcard: {}", edited)))
        .with_listed(session.displayed()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::AliasTable;
    use crate::error::FlashbackError;
    use crate::store::memory::fixtures::{typical_cards, StoreFixture};
    use crate::store::memory::InMemoryStore;

    fn session() -> Session<InMemoryStore> {
        Session::new(
            StoreFixture::new().with_typical_cards().store,
            AliasTable::new(),
        )
    }

    fn first() -> Index {
        Index::from_zero_based(0)
    }

    #[test]
    fn test_edits_only_set_fields() {
        let mut session = session();
        let descriptor = EditDescriptor {
            answer: FieldUpdate::Set("Four".parse().unwrap()),
            priority: FieldUpdate::Set(Priority::Mid),
            ..Default::default()
        };

        run(&mut session, first(), &descriptor).unwrap();
        let card = session.card_at(first()).unwrap();
        let original = &typical_cards()[0];
        assert_eq!(card.answer.as_str(), "Four");
        assert_eq!(card.priority, Priority::Mid);
        assert_eq!(card.question, original.question);
        assert_eq!(card.tags, original.tags);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_clear_removes_every_tag() {
        let mut session = session();
        let descriptor = EditDescriptor {
            tags: TagUpdate::Clear,
            ..Default::default()
        };
        assert!(descriptor.is_any_field_edited());

        run(&mut session, Index::from_zero_based(1), &descriptor).unwrap();
        assert!(session
            .card_at(Index::from_zero_based(1))
            .unwrap()
            .tags
            .is_empty());
    }

    #[test]
    fn test_out_of_range_index_fails() {
        let mut session = session();
        let descriptor = EditDescriptor {
            priority: FieldUpdate::Set(Priority::High),
            ..Default::default()
        };
        let err = run(&mut session, Index::from_zero_based(3), &descriptor).unwrap_err();
        assert!(matches!(err, FlashbackError::InvalidIndex(_)));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_editing_into_existing_card_fails() {
        let mut session = session();
        let original = &typical_cards()[0];
        let descriptor = EditDescriptor {
            question: FieldUpdate::Set(original.question.clone()),
            answer: FieldUpdate::Set(original.answer.clone()),
            ..Default::default()
        };
        let err = run(&mut session, Index::from_zero_based(2), &descriptor).unwrap_err();
        assert!(matches!(err, FlashbackError::DuplicateFlashcard));
    }

    #[test]
    fn test_empty_descriptor_edits_nothing() {
        assert!(!EditDescriptor::default().is_any_field_edited());
    }
}
