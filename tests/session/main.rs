//! Integration tests for Layer 2: the session state machine.
//!
//! Tests for scoring, leveling, progress, and lifecycle transitions.

mod transitions;

use lexiquest_catalog::{Catalog, WordRecord};
use lexiquest_foundation::{Difficulty, PartOfSpeech, WordId};
use lexiquest_session::{Session, SessionConfig};

/// Builds a catalog with enough words at every difficulty for full rounds.
pub fn catalog() -> Catalog {
    let entries = [
        ("harbor", Difficulty::Easy),
        ("meadow", Difficulty::Easy),
        ("terrace", Difficulty::Easy),
        ("orchard", Difficulty::Easy),
        ("summit", Difficulty::Medium),
        ("citadel", Difficulty::Medium),
        ("lagoon", Difficulty::Medium),
        ("zenith", Difficulty::Hard),
        ("gossamer", Difficulty::Hard),
        ("archipelago", Difficulty::Hard),
    ];
    let records = entries
        .into_iter()
        .enumerate()
        .map(|(i, (word, difficulty))| WordRecord {
            id: WordId::new(u32::try_from(i).unwrap() + 1),
            word: word.to_string(),
            definition: format!("definition of {word}"),
            part_of_speech: PartOfSpeech::Noun,
            difficulty,
            examples: vec![format!("The {word} was there.")],
            synonyms: vec![format!("{word}-synonym")],
        })
        .collect();
    Catalog::from_records(records).unwrap()
}

/// A started session with a fixed seed.
pub fn session(seed: u64) -> Session {
    let mut session = Session::new(
        catalog(),
        SessionConfig {
            seed: Some(seed),
            ..SessionConfig::default()
        },
    );
    session.start().unwrap();
    session
}

/// Submits the correct answer for the current round.
pub fn answer_correctly(session: &mut Session) {
    let correct = session.current_round().unwrap().correct_option.clone();
    session.submit_answer(&correct).unwrap();
}

/// Submits a string that matches no option.
pub fn answer_incorrectly(session: &mut Session) {
    session.submit_answer("definitely not an option").unwrap();
}
