use crate::alias::AliasError;
use crate::fields::ConstraintViolation;
use crate::history::HistoryError;
use crate::index::Index;
use thiserror::Error;

/// Broad category of a failure, used by front ends to label messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Format,
    Constraint,
    UnknownCommand,
    History,
    Domain,
    Storage,
}

#[derive(Error, Debug)]
pub enum FlashbackError {
    #[error("Invalid command format!\n{0}")]
    InvalidFormat(&'static str),

    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),

    #[error("At least one field to edit must be provided.")]
    NotEdited,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Alias(#[from] AliasError),

    #[error("This flashcard already exists in the deck")]
    DuplicateFlashcard,

    #[error("The flashcard index provided is invalid: {0}")]
    InvalidIndex(Index),

    #[error("Flashcard not found in the deck")]
    FlashcardNotFound,

    #[error("There are no flashcards to review")]
    EmptyReview,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl FlashbackError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FlashbackError::InvalidFormat(_) | FlashbackError::NotEdited => ErrorKind::Format,
            FlashbackError::Constraint(_) => ErrorKind::Constraint,
            FlashbackError::UnknownCommand(_) => ErrorKind::UnknownCommand,
            FlashbackError::History(_) => ErrorKind::History,
            FlashbackError::Alias(_)
            | FlashbackError::DuplicateFlashcard
            | FlashbackError::InvalidIndex(_)
            | FlashbackError::FlashcardNotFound
            | FlashbackError::EmptyReview => ErrorKind::Domain,
            FlashbackError::Io(_)
            | FlashbackError::Serialization(_)
            | FlashbackError::Config(_) => ErrorKind::Storage,
        }
    }
}

pub type Result<T> = std::result::Result<T, FlashbackError>;
