//! The session state machine.
//!
//! One [`Session`] per active game. The session owns the catalog handle,
//! the round engine, and all mutable game state; the presentation layer
//! reads projections and calls transition methods.

use std::fmt;

use lexiquest_catalog::Catalog;
use lexiquest_engine::{RoundEngine, RoundState};
use lexiquest_foundation::{Error, GameMode, Result};

use crate::feedback::Feedback;
use crate::speaker::{SilentSpeaker, Speaker};

/// Progress gained per answered round.
pub const PROGRESS_STEP: u8 = 10;

/// Progress value at which the session becomes terminal.
pub const PROGRESS_COMPLETE: u8 = 100;

/// Highest reachable level.
pub const MAX_LEVEL: u8 = 5;

/// A level is gained every this many cumulative correct answers.
pub const LEVEL_UP_INTERVAL: u32 = 3;

/// Lifecycle state of a session.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SessionStatus {
    /// Rounds are being played.
    InProgress,
    /// The final round has been answered. Absorbing except via restart.
    Terminal,
}

/// Construction parameters for a session.
#[derive(Copy, Clone, Debug)]
pub struct SessionConfig {
    /// RNG seed for the round engine. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Level the session starts (and restarts) at. Clamped to `1..=MAX_LEVEL`.
    pub starting_level: u8,
    /// Initial game mode.
    pub mode: GameMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            starting_level: 1,
            mode: GameMode::default(),
        }
    }
}

/// Summary of a finished game.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FinalReport {
    /// Correct answers over the whole session.
    pub score: u32,
    /// Level reached when the session ended.
    pub level: u8,
    /// Rounds answered (always the full game length).
    pub rounds: u32,
}

impl fmt::Display for FinalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "final score {}/{}, reached level {}",
            self.score, self.rounds, self.level
        )
    }
}

/// One game in progress.
///
/// Score is monotonically non-decreasing, level never exceeds
/// [`MAX_LEVEL`], and progress advances by [`PROGRESS_STEP`] per answered
/// round until the session reaches its terminal state.
pub struct Session {
    catalog: Catalog,
    engine: RoundEngine,
    speaker: Box<dyn Speaker>,
    mode: GameMode,
    status: SessionStatus,
    score: u32,
    level: u8,
    progress: u8,
    starting_level: u8,
    current_round: Option<RoundState>,
    feedback: Option<Feedback>,
}

impl Session {
    /// Creates a session over the given catalog.
    ///
    /// No round is in play until [`Session::start`] is called.
    #[must_use]
    pub fn new(catalog: Catalog, config: SessionConfig) -> Self {
        let engine = match config.seed {
            Some(seed) => RoundEngine::new(seed),
            None => RoundEngine::from_entropy(),
        };
        let starting_level = config.starting_level.clamp(1, MAX_LEVEL);
        Self {
            catalog,
            engine,
            speaker: Box::new(SilentSpeaker),
            mode: config.mode,
            status: SessionStatus::InProgress,
            score: 0,
            level: starting_level,
            progress: 0,
            starting_level,
            current_round: None,
            feedback: None,
        }
    }

    /// Replaces the pronunciation backend.
    #[must_use]
    pub fn with_speaker(mut self, speaker: Box<dyn Speaker>) -> Self {
        self.speaker = speaker;
        self
    }

    /// Starts a new round, replacing any current one.
    ///
    /// Clears prior feedback and pronounces the new target word.
    ///
    /// # Errors
    ///
    /// Returns a game-over error in the terminal state, and propagates
    /// round-generation failures from the engine.
    pub fn start(&mut self) -> Result<()> {
        if self.status == SessionStatus::Terminal {
            return Err(Error::game_over());
        }
        let round = self
            .engine
            .start_round(&self.catalog, self.level, self.mode)?;
        self.speaker.speak(&round.target.word);
        self.feedback = None;
        self.current_round = Some(round);
        Ok(())
    }

    /// Grades a submitted choice against the current round.
    ///
    /// A match increments the score and, every [`LEVEL_UP_INTERVAL`]
    /// cumulative correct answers, raises the level (capped at
    /// [`MAX_LEVEL`]). Either way progress advances one step, and at
    /// [`PROGRESS_COMPLETE`] the session becomes terminal.
    ///
    /// # Errors
    ///
    /// Returns a game-over error in the terminal state, a no-active-round
    /// error before the first round, and a round-already-answered error if
    /// the current round was already graded.
    pub fn submit_answer(&mut self, choice: &str) -> Result<Feedback> {
        if self.status == SessionStatus::Terminal {
            return Err(Error::game_over());
        }
        let round = self
            .current_round
            .as_mut()
            .ok_or_else(Error::no_active_round)?;
        if round.answered {
            return Err(Error::round_already_answered());
        }
        round.answered = true;

        let graded_correct = round.is_correct(choice);
        let feedback = if graded_correct {
            Feedback::Correct
        } else {
            Feedback::Incorrect {
                correct_answer: round.correct_option.clone(),
                example: round.target.first_example().map(ToString::to_string),
                synonyms: round.target.synonyms.clone(),
            }
        };

        if graded_correct {
            self.score += 1;
            if self.score % LEVEL_UP_INTERVAL == 0 && self.level < MAX_LEVEL {
                self.level += 1;
                tracing::info!(level = self.level, score = self.score, "level up");
            }
        }

        self.progress += PROGRESS_STEP;
        if self.progress >= PROGRESS_COMPLETE {
            self.status = SessionStatus::Terminal;
            tracing::info!(score = self.score, level = self.level, "game over");
        }

        self.feedback = Some(feedback.clone());
        Ok(feedback)
    }

    /// Starts the next round unless the session has ended.
    ///
    /// Returns `false` (without error) in the terminal state, so front-ends
    /// can drive the answer/advance loop without special-casing the end.
    ///
    /// # Errors
    ///
    /// Propagates round-generation failures from the engine.
    pub fn advance(&mut self) -> Result<bool> {
        if self.status == SessionStatus::Terminal {
            return Ok(false);
        }
        self.start()?;
        Ok(true)
    }

    /// Flips between definition-match and word-match.
    ///
    /// The current round keeps displaying until the next round starts.
    ///
    /// # Errors
    ///
    /// Returns a game-over error in the terminal state.
    pub fn toggle_mode(&mut self) -> Result<GameMode> {
        if self.status == SessionStatus::Terminal {
            return Err(Error::game_over());
        }
        self.mode = self.mode.toggled();
        tracing::debug!(mode = %self.mode, "mode toggled");
        Ok(self.mode)
    }

    /// Resets all game state and starts a fresh round.
    ///
    /// Valid from either state; this is the only way out of the terminal
    /// state.
    ///
    /// # Errors
    ///
    /// Propagates round-generation failures from the engine.
    pub fn restart(&mut self) -> Result<()> {
        self.score = 0;
        self.progress = 0;
        self.level = self.starting_level;
        self.status = SessionStatus::InProgress;
        self.feedback = None;
        self.current_round = None;
        tracing::info!("session restarted");
        self.start()
    }

    /// Current score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Current level, in `1..=MAX_LEVEL`.
    #[must_use]
    pub const fn level(&self) -> u8 {
        self.level
    }

    /// Progress toward completion, in `0..=PROGRESS_COMPLETE`.
    #[must_use]
    pub const fn progress(&self) -> u8 {
        self.progress
    }

    /// Current game mode.
    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    /// Lifecycle state.
    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// The round in play, if any.
    #[must_use]
    pub const fn current_round(&self) -> Option<&RoundState> {
        self.current_round.as_ref()
    }

    /// Feedback from the most recent answer, cleared when a round starts.
    #[must_use]
    pub const fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Number of rounds answered so far.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        (self.progress / PROGRESS_STEP) as u32
    }

    /// Returns true once the session is terminal.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == SessionStatus::Terminal
    }

    /// The catalog this session draws from.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Final summary, present only in the terminal state.
    #[must_use]
    pub fn final_report(&self) -> Option<FinalReport> {
        if self.is_over() {
            Some(FinalReport {
                score: self.score,
                level: self.level,
                rounds: self.rounds_played(),
            })
        } else {
            None
        }
    }
}
