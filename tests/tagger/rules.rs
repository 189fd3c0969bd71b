//! The tagger's lexical rules, exercised end to end.
//!
//! These assert only the stated suffix/capitalization heuristics; the
//! tagger makes no claim of linguistic correctness.

use lexiquest_tagger::{SentenceTags, tag};

#[test]
fn classifies_overlapping_groups() {
    let tags = tag("Running quickly Joyous dog");
    assert_eq!(tags.nouns, vec!["Running", "Joyous"]);
    assert_eq!(tags.verbs, vec!["Running"]);
    assert_eq!(tags.adjectives, vec!["Joyous"]);
}

#[test]
fn repeated_calls_are_identical() {
    let sentence = "The Watchmaker was meticulous, checking every Gleaming gear twice.";
    assert_eq!(tag(sentence), tag(sentence));
}

#[test]
fn empty_and_blank_input() {
    assert_eq!(tag(""), SentenceTags::default());
    assert_eq!(tag(" \t \n "), SentenceTags::default());
}

#[test]
fn punctuation_is_part_of_the_token() {
    // Tokens are split on whitespace only, so a trailing period defeats
    // the suffix rules.
    let tags = tag("She walked. He walked");
    assert_eq!(tags.verbs, vec!["walked"]);
}

#[test]
fn short_capitalized_words_are_not_nouns() {
    let tags = tag("Sky Sea Ash Oak");
    assert!(tags.nouns.is_empty());
}

#[test]
fn a_token_can_match_no_rule() {
    assert!(tag("dog cat sun").is_empty());
}

#[test]
fn classifies_a_full_example_sentence() {
    let tags = tag("Fishing boats rested in the harbor while Evening settled over the water.");
    assert_eq!(tags.nouns, vec!["Fishing", "Evening"]);
    assert_eq!(tags.verbs, vec!["Fishing", "rested", "Evening", "settled"]);
    assert!(tags.adjectives.is_empty());
}
