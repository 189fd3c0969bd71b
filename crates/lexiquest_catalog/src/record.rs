//! A single vocabulary entry.

use serde::{Deserialize, Serialize};

use lexiquest_foundation::{Difficulty, GameMode, PartOfSpeech, WordId};

/// One word in the catalog.
///
/// Records are deserialized from the catalog document and never mutated
/// after load. `synonyms` may be absent in the document and defaults to
/// the empty list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    /// Unique, stable identifier within the catalog.
    pub id: WordId,
    /// The target vocabulary item.
    pub word: String,
    /// Dictionary definition shown (or hidden) depending on game mode.
    pub definition: String,
    /// Grammatical category; distractors are drawn from the same category.
    #[serde(rename = "partOfSpeech")]
    pub part_of_speech: PartOfSpeech,
    /// Difficulty tier; gates eligibility by level.
    pub difficulty: Difficulty,
    /// Example sentences, in display order. May be empty.
    pub examples: Vec<String>,
    /// Synonyms shown as feedback after a miss.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
}

impl WordRecord {
    /// Returns the display string tested under the given mode.
    ///
    /// In definition-match mode the player picks among definitions; in
    /// word-match mode they pick among words.
    #[must_use]
    pub fn display_text(&self, mode: GameMode) -> &str {
        match mode {
            GameMode::DefinitionMatch => &self.definition,
            GameMode::WordMatch => &self.word,
        }
    }

    /// Returns the first example sentence, if any.
    #[must_use]
    pub fn first_example(&self) -> Option<&str> {
        self.examples.first().map(String::as_str)
    }
}
