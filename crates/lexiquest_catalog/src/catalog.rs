//! The immutable word catalog.
//!
//! The catalog is loaded wholesale at startup, validated once, and shared
//! behind an `Arc` thereafter. Cloning a catalog is O(1) and no operation
//! mutates it.

use std::collections::HashSet;
use std::slice;
use std::sync::Arc;

use serde::Deserialize;

use lexiquest_foundation::{Difficulty, Error, Result, ValidationIssue, WordId};

use crate::record::WordRecord;

/// Wire shape of the catalog document: `{ "words": [...] }`.
#[derive(Deserialize)]
struct CatalogDocument {
    words: Vec<WordRecord>,
}

/// The validated, immutable word collection.
#[derive(Clone, Debug)]
pub struct Catalog {
    words: Arc<[WordRecord]>,
}

impl Catalog {
    /// Builds a catalog from records, validating them first.
    ///
    /// Every record must carry a non-blank `word` and `definition`, and
    /// identifiers must be unique across the set. An empty record list is
    /// accepted here; emptiness surfaces at round time instead.
    ///
    /// # Errors
    ///
    /// Returns a catalog validation error naming the first offending record.
    pub fn from_records(records: Vec<WordRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(Error::catalog_validation(ValidationIssue::DuplicateId(
                    record.id,
                )));
            }
            validate_text(record.id, "word", &record.word)?;
            validate_text(record.id, "definition", &record.definition)?;
        }

        tracing::debug!(words = records.len(), "catalog validated");
        Ok(Self {
            words: records.into(),
        })
    }

    /// Parses and validates a catalog from its JSON document form.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the document is malformed, or a validation
    /// error if any record is rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|e| Error::parse(e.to_string()))?;
        Self::from_records(document.words)
    }

    /// Returns the number of words in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the catalog holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over all records in document order.
    pub fn iter(&self) -> slice::Iter<'_, WordRecord> {
        self.words.iter()
    }

    /// Looks up a record by identifier.
    #[must_use]
    pub fn get(&self, id: WordId) -> Option<&WordRecord> {
        self.words.iter().find(|w| w.id == id)
    }

    /// Iterates over records of the given difficulty.
    pub fn words_at(&self, difficulty: Difficulty) -> impl Iterator<Item = &WordRecord> {
        self.words.iter().filter(move |w| w.difficulty == difficulty)
    }

    /// Computes per-difficulty word counts.
    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            total: self.words.len(),
            ..CatalogStats::default()
        };
        for word in self.words.iter() {
            match word.difficulty {
                Difficulty::Easy => stats.easy += 1,
                Difficulty::Medium => stats.medium += 1,
                Difficulty::Hard => stats.hard += 1,
            }
        }
        stats
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a WordRecord;
    type IntoIter = slice::Iter<'a, WordRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Per-difficulty word counts for the catalog overview.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CatalogStats {
    /// Total number of words.
    pub total: usize,
    /// Number of easy words.
    pub easy: usize,
    /// Number of medium words.
    pub medium: usize,
    /// Number of hard words.
    pub hard: usize,
}

fn validate_text(id: WordId, field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::catalog_validation(ValidationIssue::BlankField {
            id, field,
        }));
    }
    Ok(())
}
