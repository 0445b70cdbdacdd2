//! Typed flashcard fields.
//!
//! Every field is a small immutable value that can only be built by parsing
//! a raw string. Parsing either yields a fully valid value or a
//! [`ConstraintViolation`] naming the rule the input broke:
//!
//! - `Question`, `Answer`, `Category`: non-blank after trimming
//! - `Priority`: one of `High`, `Mid`, `Low` (any letter case on input)
//! - `Tag`: non-blank, no whitespace, no `/` (the prefix delimiter)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The rule a raw field value failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    #[error("Questions can take any values, and it should not be blank")]
    Question,
    #[error("Answers can take any values, and it should not be blank")]
    Answer,
    #[error("Categories can take any values, and it should not be blank")]
    Category,
    #[error("Priority should only be High, Mid or Low")]
    Priority,
    #[error("Tags should not be blank and should not contain whitespace or '/'")]
    Tag,
}

fn non_blank(raw: &str, violation: ConstraintViolation) -> Result<String, ConstraintViolation> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(violation);
    }
    Ok(trimmed.to_string())
}

macro_rules! text_field {
    ($name:ident, $violation:expr) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = ConstraintViolation;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                non_blank(s, $violation).map($name)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ConstraintViolation;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text_field!(Question, ConstraintViolation::Question);
text_field!(Answer, ConstraintViolation::Answer);
text_field!(Category, ConstraintViolation::Category);

/// How urgently a card should be studied. Ordered `Low < Mid < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Mid,
    High,
}

impl FromStr for Priority {
    type Err = ConstraintViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "mid" => Ok(Priority::Mid),
            "low" => Ok(Priority::Low),
            _ => Err(ConstraintViolation::Priority),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::High => "High",
            Priority::Mid => "Mid",
            Priority::Low => "Low",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Tag {
    type Err = ConstraintViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.chars().any(|c| c.is_whitespace() || c == '/') {
            return Err(ConstraintViolation::Tag);
        }
        Ok(Tag(trimmed.to_string()))
    }
}

impl TryFrom<String> for Tag {
    type Error = ConstraintViolation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Tag> for String {
    fn from(value: Tag) -> Self {
        value.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}
