//! The round engine: eligibility filtering, target selection, distractor
//! sampling, and option shuffling.

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use lexiquest_catalog::{Catalog, WordRecord};
use lexiquest_foundation::{Error, GameMode, Result};

use crate::round::RoundState;

/// Target size of a round's option set.
pub const OPTION_COUNT: usize = 4;

/// Number of distractors sampled per round.
pub const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

/// Generates quiz rounds from a catalog.
///
/// The engine owns a seeded ChaCha RNG: two engines constructed with the
/// same seed generate identical round sequences against the same catalog.
/// Both shuffles are Fisher–Yates, so target and option order are uniform.
#[derive(Clone, Debug)]
pub struct RoundEngine {
    rng: ChaCha8Rng,
}

impl RoundEngine {
    /// Creates an engine with an explicit seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates an engine seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().next_u64())
    }

    /// Returns the records a player at `level` may be tested on.
    ///
    /// A record is eligible iff its difficulty ordinal is at most
    /// `level + 1`, so a level-1 player sees easy and medium words and hard
    /// words unlock at level 2. The filter widens monotonically with level.
    #[must_use]
    pub fn eligible<'a>(catalog: &'a Catalog, level: u8) -> Vec<&'a WordRecord> {
        catalog
            .iter()
            .filter(|w| w.difficulty.ordinal() <= level.saturating_add(1))
            .collect()
    }

    /// Generates a round for the given level and mode.
    ///
    /// Picks an eligible target uniformly at random, samples up to three
    /// distractors sharing the target's part of speech, and shuffles the
    /// combined option set. When fewer than three distinct distractors
    /// exist the round proceeds with a smaller option set.
    ///
    /// # Errors
    ///
    /// Returns an empty-catalog error if the catalog holds no words, or a
    /// no-eligible-words error if the level filter rejects all of them.
    pub fn start_round(
        &mut self,
        catalog: &Catalog,
        level: u8,
        mode: GameMode,
    ) -> Result<RoundState> {
        if catalog.is_empty() {
            return Err(Error::empty_catalog());
        }

        let eligible = Self::eligible(catalog, level);
        let target = eligible
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| Error::no_eligible_words(level))?;

        let correct_option = target.display_text(mode).to_string();

        let mut candidates: Vec<&WordRecord> = catalog
            .iter()
            .filter(|w| w.id != target.id && w.part_of_speech == target.part_of_speech)
            .collect();
        candidates.shuffle(&mut self.rng);

        let mut options = Vec::with_capacity(OPTION_COUNT);
        options.push(correct_option.clone());
        for candidate in candidates {
            if options.len() > DISTRACTOR_COUNT {
                break;
            }
            let text = candidate.display_text(mode);
            // Skip display-text collisions so the option set stays distinct.
            if options.iter().any(|o| o == text) {
                continue;
            }
            options.push(text.to_string());
        }
        options.shuffle(&mut self.rng);

        let sentence_tags = target.first_example().map(lexiquest_tagger::tag);

        tracing::debug!(
            word_id = %target.id,
            word = %target.word,
            %level,
            %mode,
            options = options.len(),
            "round generated"
        );

        Ok(RoundState {
            target: target.clone(),
            options,
            correct_option,
            sentence_tags,
            answered: false,
        })
    }
}
