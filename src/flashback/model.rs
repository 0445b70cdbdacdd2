use crate::fields::{Answer, Category, Priority, Question, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Review counters for a card, or for a set of cards once summed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub review_count: u32,
    pub success_count: u32,
}

impl Statistics {
    pub fn new(review_count: u32, success_count: u32) -> Self {
        Self {
            review_count,
            success_count,
        }
    }

    /// Percentage of reviews answered correctly, 0.0 when never reviewed.
    pub fn success_rate(&self) -> f64 {
        if self.review_count == 0 {
            return 0.0;
        }
        f64::from(self.success_count) * 100.0 / f64::from(self.review_count)
    }

    pub fn record(&mut self, correct: bool) {
        self.review_count = self.review_count.saturating_add(1);
        if correct {
            self.success_count = self.success_count.saturating_add(1);
        }
    }

    pub fn merge(self, other: Statistics) -> Statistics {
        Statistics {
            review_count: self.review_count.saturating_add(other.review_count),
            success_count: self.success_count.saturating_add(other.success_count),
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reviewed {} time(s), {} correct ({:.1}%)",
            self.review_count,
            self.success_count,
            self.success_rate()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: Question,
    pub answer: Answer,
    pub category: Category,
    pub priority: Priority,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
    #[serde(default)]
    pub stats: Statistics,
}

impl Flashcard {
    pub fn new(
        question: Question,
        answer: Answer,
        category: Category,
        priority: Priority,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            question,
            answer,
            category,
            priority,
            tags,
            stats: Statistics::default(),
        }
    }

    /// Weaker notion of equality used for duplicate detection: two cards asking
    /// the same question with the same answer are the same card.
    pub fn is_same_card(&self, other: &Flashcard) -> bool {
        self.question == other.question && self.answer == other.answer
    }
}

impl fmt::Display for Flashcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Answer: {}; Category: {}; Priority: {}",
            self.question, self.answer, self.category, self.priority
        )?;
        if !self.tags.is_empty() {
            write!(f, "; Tags: ")?;
            for tag in &self.tags {
                write!(f, "{}", tag)?;
            }
        }
        Ok(())
    }
}

/// An immutable copy of the whole deck, in display order.
///
/// This is the unit the undo/redo history stores and the unit the deck file
/// persists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub cards: Vec<Flashcard>,
}

impl Deck {
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Drops every card that repeats an earlier one (same question and
    /// answer), keeping the first. Returns how many were dropped.
    pub fn remove_duplicates(&mut self) -> usize {
        let before = self.cards.len();
        let mut kept: Vec<Flashcard> = Vec::with_capacity(before);
        for card in self.cards.drain(..) {
            if !kept.iter().any(|k| k.is_same_card(&card)) {
                kept.push(card);
            }
        }
        self.cards = kept;
        before - self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(q: &str, a: &str) -> Flashcard {
        Flashcard::new(
            q.parse().unwrap(),
            a.parse().unwrap(),
            "Math".parse().unwrap(),
            Priority::Low,
            BTreeSet::new(),
        )
    }

    #[test]
    fn test_success_rate() {
        assert_eq!(Statistics::default().success_rate(), 0.0);
        assert_eq!(Statistics::new(4, 1).success_rate(), 25.0);
    }

    #[test]
    fn test_record_and_merge() {
        let mut stats = Statistics::default();
        stats.record(true);
        stats.record(false);
        assert_eq!(stats, Statistics::new(2, 1));
        assert_eq!(stats.merge(Statistics::new(1, 1)), Statistics::new(3, 2));
    }

    #[test]
    fn test_counters_saturate() {
        let full = Statistics::new(u32::MAX, u32::MAX);
        assert_eq!(full.merge(Statistics::new(5, 1)), full);

        let mut stats = full;
        stats.record(true);
        assert_eq!(stats, full);
    }

    #[test]
    fn test_same_card_ignores_metadata() {
        let a = card("2+2", "4");
        let mut b = card("2+2", "4");
        b.priority = Priority::High;
        b.stats.record(true);
        assert!(a.is_same_card(&b));
        assert_ne!(a, b);
        assert!(!a.is_same_card(&card("2+2", "5")));
    }

    #[test]
    fn test_remove_duplicates_keeps_first_copy() {
        let mut reviewed = card("2+2", "4");
        reviewed.stats.record(true);
        let mut deck = Deck::new(vec![
            reviewed.clone(),
            card("3+3", "6"),
            card("2+2", "4"),
        ]);

        assert_eq!(deck.remove_duplicates(), 1);
        assert_eq!(deck.cards, vec![reviewed, card("3+3", "6")]);
        assert_eq!(deck.remove_duplicates(), 0);
    }

    #[test]
    fn test_display_lists_tags() {
        let mut c = card("2+2", "4");
        c.tags.insert("arith".parse().unwrap());
        assert_eq!(
            c.to_string(),
            "2+2; Answer: 4; Category: Math; Priority: Low; Tags: [arith]"
        );
    }
}
