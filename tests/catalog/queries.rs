//! Catalog queries: lookup, filtering, statistics.

use lexiquest_catalog::{Catalog, WordRecord};
use lexiquest_foundation::{Difficulty, PartOfSpeech, WordId};

fn catalog() -> Catalog {
    let records = vec![
        ("harbor", Difficulty::Easy, PartOfSpeech::Noun),
        ("meadow", Difficulty::Easy, PartOfSpeech::Noun),
        ("luminous", Difficulty::Medium, PartOfSpeech::Adjective),
        ("gossamer", Difficulty::Hard, PartOfSpeech::Noun),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (word, difficulty, part_of_speech))| WordRecord {
        id: WordId::new(u32::try_from(i).unwrap() + 1),
        word: word.to_string(),
        definition: format!("definition of {word}"),
        part_of_speech,
        difficulty,
        examples: Vec::new(),
        synonyms: Vec::new(),
    })
    .collect();
    Catalog::from_records(records).unwrap()
}

#[test]
fn get_finds_records_by_id() {
    let catalog = catalog();
    assert_eq!(catalog.get(WordId::new(2)).unwrap().word, "meadow");
    assert!(catalog.get(WordId::new(99)).is_none());
}

#[test]
fn words_at_filters_by_difficulty() {
    let catalog = catalog();
    let easy: Vec<_> = catalog.words_at(Difficulty::Easy).collect();
    assert_eq!(easy.len(), 2);
    assert!(easy.iter().all(|w| w.difficulty == Difficulty::Easy));
}

#[test]
fn stats_sum_to_total() {
    let stats = catalog().stats();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.easy + stats.medium + stats.hard, stats.total);
    assert_eq!(stats.hard, 1);
}

#[test]
fn iteration_preserves_document_order() {
    let words: Vec<_> = catalog().iter().map(|w| w.word.clone()).collect();
    assert_eq!(words, vec!["harbor", "meadow", "luminous", "gossamer"]);
}

#[test]
fn clones_see_the_same_records() {
    let catalog = catalog();
    let clone = catalog.clone();
    assert_eq!(clone.len(), catalog.len());
    assert_eq!(
        clone.get(WordId::new(1)).unwrap().word,
        catalog.get(WordId::new(1)).unwrap().word
    );
}
