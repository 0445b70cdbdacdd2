//! User-facing flashcard indexes.
//!
//! Users address cards by their one-based position in the displayed list
//! (`1` is the first card shown). Internally the zero-based offset is used to
//! index into slices, so [`Index`] keeps both views behind one type.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(usize);

impl Index {
    /// Builds an index from a one-based position. Returns `None` for `0`.
    pub fn from_one_based(n: usize) -> Option<Self> {
        n.checked_sub(1).map(Index)
    }

    pub fn from_zero_based(n: usize) -> Self {
        Index(n)
    }

    pub fn one_based(&self) -> usize {
        self.0 + 1
    }

    pub fn zero_based(&self) -> usize {
        self.0
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

impl FromStr for Index {
    type Err = String;

    /// Accepts strictly positive integers only: no sign, no surrounding text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("Invalid index format: {}", s));
        }
        trimmed
            .parse::<usize>()
            .ok()
            .and_then(Index::from_one_based)
            .ok_or_else(|| format!("Index must be a positive integer: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive() {
        let idx: Index = "1".parse().unwrap();
        assert_eq!(idx.one_based(), 1);
        assert_eq!(idx.zero_based(), 0);

        let idx: Index = " 12 ".parse().unwrap();
        assert_eq!(idx.one_based(), 12);
        assert_eq!(idx.to_string(), "12");
    }

    #[test]
    fn test_parse_rejects_zero_and_negative() {
        assert!("0".parse::<Index>().is_err());
        assert!("-5".parse::<Index>().is_err());
        assert!("+3".parse::<Index>().is_err());
    }

    #[test]
    fn test_parse_rejects_noise() {
        assert!("".parse::<Index>().is_err());
        assert!("1 2".parse::<Index>().is_err());
        assert!("1 some random string".parse::<Index>().is_err());
        assert!("abc".parse::<Index>().is_err());
        assert!("99999999999999999999999".parse::<Index>().is_err());
    }

    #[test]
    fn test_one_based_round_trip() {
        assert_eq!(Index::from_one_based(0), None);
        assert_eq!(Index::from_one_based(3), Some(Index::from_zero_based(2)));
    }
}
