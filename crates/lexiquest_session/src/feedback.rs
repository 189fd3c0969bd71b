//! Grading feedback shown after each answer.

use std::fmt;

/// Outcome of grading one answer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Feedback {
    /// The choice matched the correct option.
    Correct,
    /// The choice missed; carries the material shown to the player.
    Incorrect {
        /// The option that would have been correct.
        correct_answer: String,
        /// The target's first example sentence, when one exists.
        example: Option<String>,
        /// The target's synonyms. Empty when the record has none.
        synonyms: Vec<String>,
    },
}

impl Feedback {
    /// Returns true for a correct answer.
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct => write!(f, "Correct!"),
            Self::Incorrect { correct_answer, .. } => {
                write!(f, "Incorrect! The correct answer was: {correct_answer}")
            }
        }
    }
}
