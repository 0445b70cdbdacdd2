//! Prefix-tagged argument extraction.
//!
//! An argument tail such as ` 1 q/What is 2+2? t/math t/easy` is split on the
//! prefix markers the current command recognizes:
//!
//! ```text
//!  preamble: "1"
//!  q/ -> ["What is 2+2?"]
//!  t/ -> ["math", "easy"]
//! ```
//!
//! A marker only counts when it starts the tail or follows whitespace, so
//! `http://x` inside a value is left alone. Markers the command does not
//! recognize stay part of the surrounding value; parsers decide whether that
//! text is an error.

use std::fmt;

/// A short literal marker introducing a field value, e.g. `q/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(marker: &'static str) -> Self {
        Prefix(marker)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_QUESTION: Prefix = Prefix::new("q/");
pub const PREFIX_ANSWER: Prefix = Prefix::new("a/");
pub const PREFIX_CATEGORY: Prefix = Prefix::new("c/");
pub const PREFIX_PRIORITY: Prefix = Prefix::new("p/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_COMMAND: Prefix = Prefix::new("cmd/");
pub const PREFIX_ALIAS: Prefix = Prefix::new("al/");

/// One occurrence of a prefix and the (trimmed) value following it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixedValue {
    pub prefix: Prefix,
    pub value: String,
    /// Byte offset of the marker in the tail; used to compare which of two
    /// fields appeared first.
    pub position: usize,
}

/// Ordered multimap of prefix occurrences plus the free-text preamble.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgMultimap {
    preamble: String,
    entries: Vec<PrefixedValue>,
}

impl ArgMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.last_entry(prefix).map(|e| e.value.as_str())
    }

    /// The last occurrence of `prefix`, with its position.
    pub fn last_entry(&self, prefix: Prefix) -> Option<&PrefixedValue> {
        self.entries.iter().rev().find(|e| e.prefix == prefix)
    }

    /// Every occurrence of `prefix`, in input order.
    pub fn entries(&self, prefix: Prefix) -> impl Iterator<Item = &PrefixedValue> {
        self.entries.iter().filter(move |e| e.prefix == prefix)
    }

    /// Every value given for `prefix`, in input order.
    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.entries(prefix).map(|e| e.value.as_str()).collect()
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        self.entries.iter().any(|e| e.prefix == prefix)
    }

    pub fn are_present(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.is_present(*p))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_marker_boundary(tail: &str, pos: usize) -> bool {
    pos == 0
        || tail[..pos]
            .chars()
            .next_back()
            .is_some_and(char::is_whitespace)
}

/// Splits `tail` into a preamble and the values of every recognized prefix.
pub fn tokenize(tail: &str, prefixes: &[Prefix]) -> ArgMultimap {
    let mut markers: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|prefix| {
            tail.match_indices(prefix.as_str())
                .map(move |(pos, _)| (pos, *prefix))
        })
        .filter(|(pos, _)| is_marker_boundary(tail, *pos))
        .collect();
    markers.sort_by_key(|(pos, _)| *pos);

    let preamble_end = markers.first().map_or(tail.len(), |(pos, _)| *pos);
    let preamble = tail[..preamble_end].trim().to_string();

    let entries = markers
        .iter()
        .enumerate()
        .map(|(i, (pos, prefix))| {
            let value_start = pos + prefix.as_str().len();
            let value_end = markers.get(i + 1).map_or(tail.len(), |(next, _)| *next);
            PrefixedValue {
                prefix: *prefix,
                value: tail[value_start..value_end].trim().to_string(),
                position: *pos,
            }
        })
        .collect();

    ArgMultimap { preamble, entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD_PREFIXES: &[Prefix] = &[
        PREFIX_QUESTION,
        PREFIX_ANSWER,
        PREFIX_CATEGORY,
        PREFIX_PRIORITY,
        PREFIX_TAG,
    ];

    #[test]
    fn test_empty_tail() {
        let map = tokenize("", CARD_PREFIXES);
        assert_eq!(map.preamble(), "");
        assert!(map.is_empty());
    }

    #[test]
    fn test_preamble_only() {
        let map = tokenize("  some random text  ", CARD_PREFIXES);
        assert_eq!(map.preamble(), "some random text");
        assert!(!map.is_present(PREFIX_QUESTION));
    }

    #[test]
    fn test_preamble_and_values() {
        let map = tokenize(" 1 q/2+2 a/4 c/Math p/Low", CARD_PREFIXES);
        assert_eq!(map.preamble(), "1");
        assert_eq!(map.value(PREFIX_QUESTION), Some("2+2"));
        assert_eq!(map.value(PREFIX_ANSWER), Some("4"));
        assert_eq!(map.value(PREFIX_CATEGORY), Some("Math"));
        assert_eq!(map.value(PREFIX_PRIORITY), Some("Low"));
        assert_eq!(map.value(PREFIX_TAG), None);
    }

    #[test]
    fn test_repeated_prefix_keeps_order_and_last_wins() {
        let map = tokenize(" a/first t/x a/second t/y t/z", CARD_PREFIXES);
        assert_eq!(map.value(PREFIX_ANSWER), Some("second"));
        assert_eq!(map.all_values(PREFIX_ANSWER), vec!["first", "second"]);
        assert_eq!(map.all_values(PREFIX_TAG), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_empty_value_is_recorded() {
        let map = tokenize(" 1 t/", CARD_PREFIXES);
        assert_eq!(map.all_values(PREFIX_TAG), vec![""]);
    }

    #[test]
    fn test_marker_needs_leading_whitespace() {
        let map = tokenize(" q/see http://a/b a/x", CARD_PREFIXES);
        assert_eq!(map.value(PREFIX_QUESTION), Some("see http://a/b"));
        assert_eq!(map.value(PREFIX_ANSWER), Some("x"));
    }

    #[test]
    fn test_unrecognized_prefix_stays_in_value() {
        let map = tokenize(" 1 i/ string", CARD_PREFIXES);
        assert_eq!(map.preamble(), "1 i/ string");

        let map = tokenize(" q/what x/y", &[PREFIX_QUESTION]);
        assert_eq!(map.value(PREFIX_QUESTION), Some("what x/y"));
    }

    #[test]
    fn test_only_requested_prefixes_are_split() {
        let map = tokenize(" q/a a/b", &[PREFIX_QUESTION]);
        assert_eq!(map.value(PREFIX_QUESTION), Some("a a/b"));
    }

    #[test]
    fn test_positions_follow_input_order() {
        let map = tokenize(" c/x q/y", CARD_PREFIXES);
        let c = map.last_entry(PREFIX_CATEGORY).unwrap().position;
        let q = map.last_entry(PREFIX_QUESTION).unwrap().position;
        assert!(c < q);
    }
}
