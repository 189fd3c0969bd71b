//! Catalog browsing: the word list and the catalog overview.

use lexiquest_catalog::Catalog;
use lexiquest_foundation::Difficulty;

/// Prints the word list, optionally filtered by difficulty.
pub fn print_word_list(catalog: &Catalog, filter: Option<Difficulty>) {
    let heading = match filter {
        Some(difficulty) => format!("Word List ({difficulty})"),
        None => "Word List".to_string(),
    };
    println!("{heading}");
    println!("{}", "=".repeat(heading.len()));

    for word in catalog {
        if filter.is_some_and(|d| d != word.difficulty) {
            continue;
        }
        println!();
        println!("{}  ({} \u{2022} {})", word.word, word.part_of_speech, word.difficulty);
        println!("  {}", word.definition);
        if let Some(example) = word.first_example() {
            println!("  \"{example}\"");
        }
        if !word.synonyms.is_empty() {
            println!("  synonyms: {}", word.synonyms.join(", "));
        }
    }
}

/// Prints per-difficulty word counts for the catalog.
pub fn print_stats(catalog: &Catalog) {
    let stats = catalog.stats();
    println!("Catalog overview");
    println!("================");
    println!("total words: {}", stats.total);
    println!("  easy:   {}", stats.easy);
    println!("  medium: {}", stats.medium);
    println!("  hard:   {}", stats.hard);
}
