//! Error types for the LexiQuest system.
//!
//! Uses `thiserror` for ergonomic error definition with categorized kinds.

use std::fmt;

use thiserror::Error as ThisError;

use crate::types::WordId;

/// Convenience alias for results using the LexiQuest [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for LexiQuest operations.
#[derive(Debug, ThisError)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an empty-catalog error.
    #[must_use]
    pub fn empty_catalog() -> Self {
        Self::new(ErrorKind::EmptyCatalog)
    }

    /// Creates a no-eligible-words error for the given level.
    #[must_use]
    pub fn no_eligible_words(level: u8) -> Self {
        Self::new(ErrorKind::NoEligibleWords { level })
    }

    /// Creates a catalog validation error.
    #[must_use]
    pub fn catalog_validation(issue: ValidationIssue) -> Self {
        Self::new(ErrorKind::CatalogValidation(issue))
    }

    /// Creates a no-active-round error.
    #[must_use]
    pub fn no_active_round() -> Self {
        Self::new(ErrorKind::NoActiveRound)
    }

    /// Creates a round-already-answered error.
    #[must_use]
    pub fn round_already_answered() -> Self {
        Self::new(ErrorKind::RoundAlreadyAnswered)
    }

    /// Creates a game-over error.
    #[must_use]
    pub fn game_over() -> Self {
        Self::new(ErrorKind::GameOver)
    }

    /// Creates an I/O error with a message.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IoError(message.into()))
    }

    /// Creates a parse error with a message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParseError(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, ThisError)]
pub enum ErrorKind {
    /// The catalog contains no words at all.
    #[error("catalog is empty")]
    EmptyCatalog,

    /// No word satisfies the eligibility filter for the current level.
    #[error("no eligible words at level {level}")]
    NoEligibleWords {
        /// The level the filter ran against.
        level: u8,
    },

    /// A catalog record failed validation at load time.
    #[error("catalog validation failed: {0}")]
    CatalogValidation(ValidationIssue),

    /// An answer was submitted with no round in play.
    #[error("no active round")]
    NoActiveRound,

    /// The current round was already answered.
    #[error("round already answered")]
    RoundAlreadyAnswered,

    /// The session is in its terminal state.
    #[error("game is over")]
    GameOver,

    /// I/O failure reading the catalog document.
    #[error("i/o error: {0}")]
    IoError(String),

    /// The catalog document could not be parsed.
    #[error("parse error: {0}")]
    ParseError(String),
}

/// Reasons a catalog record can be rejected at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Two records share the same identifier.
    DuplicateId(WordId),
    /// A required text field is empty or blank.
    BlankField {
        /// The offending record.
        id: WordId,
        /// The field that was blank.
        field: &'static str,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate word id {id}"),
            Self::BlankField { id, field } => {
                write!(f, "word {id} has a blank {field}")
            }
        }
    }
}
