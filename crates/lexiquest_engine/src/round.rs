//! State of a single quiz round.

use lexiquest_catalog::WordRecord;
use lexiquest_tagger::SentenceTags;

/// One generated round: the word under test, its shuffled option set, and
/// the tagged example sentence.
///
/// A round is created by the engine, displayed by the presentation layer,
/// marked answered exactly once, and discarded when the next round starts.
#[derive(Clone, Debug)]
pub struct RoundState {
    /// The word being tested.
    pub target: WordRecord,
    /// Distinct display strings in final (shuffled) order. Contains
    /// [`RoundState::correct_option`]; holds fewer than four entries when
    /// the catalog is short on same-category distractors.
    pub options: Vec<String>,
    /// The option string that matches the target under the round's mode.
    pub correct_option: String,
    /// Tagger output for the target's first example sentence, when one exists.
    pub sentence_tags: Option<SentenceTags>,
    /// Set once an answer has been graded; blocks further answers.
    pub answered: bool,
}

impl RoundState {
    /// Returns true if the choice exactly matches the correct option.
    #[must_use]
    pub fn is_correct(&self, choice: &str) -> bool {
        choice == self.correct_option
    }

    /// Returns the option at a zero-based index, if in range.
    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }
}
