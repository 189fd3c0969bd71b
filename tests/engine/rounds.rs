//! Round assembly: options, modes, distractors, and failure cases.

use lexiquest_catalog::{Catalog, WordRecord};
use lexiquest_engine::{OPTION_COUNT, RoundEngine};
use lexiquest_foundation::{Difficulty, ErrorKind, GameMode, PartOfSpeech, WordId};

fn noun(id: u32, word: &str, difficulty: Difficulty) -> WordRecord {
    WordRecord {
        id: WordId::new(id),
        word: word.to_string(),
        definition: format!("definition of {word}"),
        part_of_speech: PartOfSpeech::Noun,
        difficulty,
        examples: vec![format!("A Curious traveler admired the {word}.")],
        synonyms: Vec::new(),
    }
}

fn catalog() -> Catalog {
    Catalog::from_records(vec![
        noun(1, "harbor", Difficulty::Easy),
        noun(2, "meadow", Difficulty::Easy),
        noun(3, "summit", Difficulty::Medium),
        noun(4, "citadel", Difficulty::Medium),
        noun(5, "zenith", Difficulty::Hard),
        noun(6, "lagoon", Difficulty::Easy),
    ])
    .unwrap()
}

#[test]
fn options_are_distinct_and_contain_the_answer() {
    let catalog = catalog();
    let mut engine = RoundEngine::new(1);

    for _ in 0..50 {
        let round = engine
            .start_round(&catalog, 1, GameMode::DefinitionMatch)
            .unwrap();
        assert_eq!(round.options.len(), OPTION_COUNT);
        assert!(round.options.contains(&round.correct_option));
        let mut sorted = round.options.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), OPTION_COUNT);
    }
}

#[test]
fn target_is_always_eligible() {
    let catalog = catalog();
    let mut engine = RoundEngine::new(2);

    for _ in 0..50 {
        let round = engine
            .start_round(&catalog, 1, GameMode::DefinitionMatch)
            .unwrap();
        assert!(round.target.difficulty.ordinal() <= 2);
    }
}

#[test]
fn correct_option_tracks_the_mode() {
    let catalog = catalog();
    let mut engine = RoundEngine::new(3);

    let definition_round = engine
        .start_round(&catalog, 1, GameMode::DefinitionMatch)
        .unwrap();
    assert_eq!(
        definition_round.correct_option,
        definition_round.target.definition
    );

    let word_round = engine
        .start_round(&catalog, 1, GameMode::WordMatch)
        .unwrap();
    assert_eq!(word_round.correct_option, word_round.target.word);
}

#[test]
fn sentence_tags_come_from_the_first_example() {
    let catalog = catalog();
    let mut engine = RoundEngine::new(4);
    let round = engine
        .start_round(&catalog, 1, GameMode::DefinitionMatch)
        .unwrap();
    let tags = round.sentence_tags.unwrap();
    assert_eq!(tags.nouns, vec!["Curious"]);
    assert_eq!(tags.adjectives, vec!["Curious"]);
}

#[test]
fn shortfall_produces_a_smaller_round() {
    let catalog = Catalog::from_records(vec![
        noun(1, "harbor", Difficulty::Easy),
        noun(2, "meadow", Difficulty::Easy),
        noun(3, "summit", Difficulty::Easy),
    ])
    .unwrap();
    let mut engine = RoundEngine::new(5);
    let round = engine
        .start_round(&catalog, 1, GameMode::DefinitionMatch)
        .unwrap();
    assert_eq!(round.options.len(), 3);
    assert!(round.options.contains(&round.correct_option));
}

#[test]
fn empty_catalog_fails() {
    let catalog = Catalog::from_records(Vec::new()).unwrap();
    let mut engine = RoundEngine::new(6);
    let err = engine
        .start_round(&catalog, 1, GameMode::DefinitionMatch)
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyCatalog));
}

#[test]
fn all_hard_catalog_fails_at_level_one() {
    let catalog = Catalog::from_records(vec![noun(1, "zenith", Difficulty::Hard)]).unwrap();
    let mut engine = RoundEngine::new(7);
    let err = engine
        .start_round(&catalog, 1, GameMode::DefinitionMatch)
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NoEligibleWords { level: 1 }));
}

#[test]
fn seeded_engines_agree() {
    let catalog = catalog();
    let mut a = RoundEngine::new(1234);
    let mut b = RoundEngine::new(1234);

    for _ in 0..20 {
        let ra = a.start_round(&catalog, 3, GameMode::WordMatch).unwrap();
        let rb = b.start_round(&catalog, 3, GameMode::WordMatch).unwrap();
        assert_eq!(ra.target.id, rb.target.id);
        assert_eq!(ra.options, rb.options);
        assert_eq!(ra.correct_option, rb.correct_option);
    }
}
