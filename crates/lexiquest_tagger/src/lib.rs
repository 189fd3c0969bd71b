//! Heuristic sentence tagger for LexiQuest example sentences.
//!
//! Classifies the tokens of a sentence as nouns, verbs, and adjectives
//! using fixed lexical patterns. This is deliberately *not* grammatical
//! analysis: the rules are surface heuristics over capitalization and
//! suffixes, good enough to decorate an example sentence in the quiz UI.
//!
//! The rules:
//! - **noun**: more than 3 characters and the first character is uppercase
//! - **verb**: ends with `ing` or `ed`
//! - **adjective**: ends with `ful` or `ous`
//!
//! Classifications are independent; one token may land in several groups,
//! or in none.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Tokens of a sentence grouped by heuristic classification.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SentenceTags {
    /// Tokens classified as nouns.
    pub nouns: Vec<String>,
    /// Tokens classified as verbs.
    pub verbs: Vec<String>,
    /// Tokens classified as adjectives.
    pub adjectives: Vec<String>,
}

impl SentenceTags {
    /// Returns true if no token was classified into any group.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nouns.is_empty() && self.verbs.is_empty() && self.adjectives.is_empty()
    }
}

/// Tags a sentence by splitting on whitespace and applying the lexical rules.
///
/// Pure and deterministic. Empty or whitespace-only input yields three
/// empty groups.
#[must_use]
pub fn tag(sentence: &str) -> SentenceTags {
    let mut tags = SentenceTags::default();
    for token in sentence.split_whitespace() {
        if is_noun(token) {
            tags.nouns.push(token.to_string());
        }
        if is_verb(token) {
            tags.verbs.push(token.to_string());
        }
        if is_adjective(token) {
            tags.adjectives.push(token.to_string());
        }
    }
    tags
}

/// More than 3 characters, starting uppercase.
fn is_noun(token: &str) -> bool {
    token.chars().count() > 3 && token.chars().next().is_some_and(char::is_uppercase)
}

/// Ends with `ing` or `ed`.
fn is_verb(token: &str) -> bool {
    token.ends_with("ing") || token.ends_with("ed")
}

/// Ends with `ful` or `ous`.
fn is_adjective(token: &str) -> bool {
    token.ends_with("ful") || token.ends_with("ous")
}
