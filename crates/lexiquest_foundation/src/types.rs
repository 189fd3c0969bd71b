//! Core vocabulary types shared across all layers.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};

/// Stable identifier for a word in the catalog.
///
/// Identifiers are assigned by the catalog document and are unique across
/// the catalog; they never change after load.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WordId(u32);

impl WordId {
    /// Creates a new word identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Difficulty tier of a word.
///
/// Tiers map to ordinals 1–3; round eligibility compares the ordinal
/// against the player's level.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    /// Ordinal 1. Eligible from level 1.
    Easy,
    /// Ordinal 2. Eligible from level 1.
    Medium,
    /// Ordinal 3. Eligible from level 2.
    Hard,
}

impl Difficulty {
    /// All tiers in ascending order.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the ordinal for eligibility comparisons (1, 2, or 3).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(Error::new(ErrorKind::ParseError(format!(
                "unknown difficulty: {other}"
            )))),
        }
    }
}

/// Grammatical category of a word.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PartOfSpeech {
    /// Names a person, place, thing, or idea.
    Noun,
    /// Stands in for a noun.
    Pronoun,
    /// Expresses an action or state.
    Verb,
    /// Modifies a noun.
    Adjective,
    /// Modifies a verb, adjective, or other adverb.
    Adverb,
    /// Relates a noun to another word.
    Preposition,
    /// Joins words or clauses.
    Conjunction,
    /// Expresses emotion in isolation.
    Interjection,
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Noun => "noun",
            Self::Pronoun => "pronoun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
            Self::Preposition => "preposition",
            Self::Conjunction => "conjunction",
            Self::Interjection => "interjection",
        };
        write!(f, "{name}")
    }
}

/// Play mode: which field of a record the player must identify.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum GameMode {
    /// The word is shown; the player picks its definition.
    #[default]
    DefinitionMatch,
    /// The definition is shown; the player picks the word.
    WordMatch,
}

impl GameMode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::DefinitionMatch => Self::WordMatch,
            Self::WordMatch => Self::DefinitionMatch,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DefinitionMatch => "definition-match",
            Self::WordMatch => "word-match",
        };
        write!(f, "{name}")
    }
}
