//! Predicates and orderings over flashcards.
//!
//! These are the values `find`, `filter` and `sort` produce, and what
//! [`DataStore::list_flashcards`](crate::store::DataStore::list_flashcards)
//! accepts to narrow and order its output.

use crate::fields::{Priority, Tag};
use crate::model::Flashcard;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

fn same_word(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn contains_word(text: &str, keyword: &str) -> bool {
    text.split_whitespace().any(|word| same_word(word, keyword))
}

fn contains_any_word(text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| contains_word(text, k))
}

/// Per-field criteria for `filter`. Every supplied criterion must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldFilter {
    pub question: Vec<String>,
    pub answer: Vec<String>,
    pub category: Vec<String>,
    pub priority: Option<Priority>,
    pub tags: BTreeSet<Tag>,
}

impl FieldFilter {
    pub fn matches(&self, card: &Flashcard) -> bool {
        (self.question.is_empty() || contains_any_word(card.question.as_str(), &self.question))
            && (self.answer.is_empty() || contains_any_word(card.answer.as_str(), &self.answer))
            && (self.category.is_empty()
                || contains_any_word(card.category.as_str(), &self.category))
            && self.priority.map_or(true, |p| card.priority == p)
            && (self.tags.is_empty() || self.tags.iter().any(|t| card.tags.contains(t)))
    }
}

/// Which cards the displayed list shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardFilter {
    /// `find`: any keyword appears as a word in the question, the category or
    /// one of the tags.
    Keywords(Vec<String>),
    /// `filter`: all field criteria hold.
    Fields(FieldFilter),
}

impl CardFilter {
    pub fn matches(&self, card: &Flashcard) -> bool {
        match self {
            CardFilter::Keywords(keywords) => keywords.iter().any(|k| {
                contains_word(card.question.as_str(), k)
                    || contains_word(card.category.as_str(), k)
                    || card.tags.iter().any(|t| same_word(t.as_str(), k))
            }),
            CardFilter::Fields(filter) => filter.matches(card),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Priority,
    Question,
    Category,
    Reviewed,
    Success,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "priority" => Ok(SortKey::Priority),
            "question" => Ok(SortKey::Question),
            "category" => Ok(SortKey::Category),
            "reviewed" => Ok(SortKey::Reviewed),
            "success" => Ok(SortKey::Success),
            _ => Err(format!("Unknown sort criterion: {}", s)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortKey::Priority => "priority",
            SortKey::Question => "question",
            SortKey::Category => "category",
            SortKey::Reviewed => "reviewed",
            SortKey::Success => "success",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-a" => Ok(Direction::Ascending),
            "-d" => Ok(Direction::Descending),
            _ => Err(format!("Unknown sort order: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: Direction,
}

impl SortOrder {
    pub fn new(key: SortKey, direction: Direction) -> Self {
        Self { key, direction }
    }

    pub fn compare(&self, a: &Flashcard, b: &Flashcard) -> Ordering {
        let ordering = match self.key {
            SortKey::Priority => a.priority.cmp(&b.priority),
            SortKey::Question => a
                .question
                .as_str()
                .to_lowercase()
                .cmp(&b.question.as_str().to_lowercase()),
            SortKey::Category => a
                .category
                .as_str()
                .to_lowercase()
                .cmp(&b.category.as_str().to_lowercase()),
            SortKey::Reviewed => a.stats.review_count.cmp(&b.stats.review_count),
            SortKey::Success => a.stats.success_rate().total_cmp(&b.stats.success_rate()),
        };
        match self.direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = match self.direction {
            Direction::Ascending => "ascending",
            Direction::Descending => "descending",
        };
        write!(f, "{} ({})", self.key, order)
    }
}
