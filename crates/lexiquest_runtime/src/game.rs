//! The interactive quiz loop.
//!
//! Renders session state, forwards the player's choices into the session
//! state machine, and owns the pacing between rounds. All game rules live
//! below this layer.

use std::thread;
use std::time::Duration;

use lexiquest_engine::RoundState;
use lexiquest_foundation::{GameMode, Result};
use lexiquest_session::{Feedback, Session};
use lexiquest_tagger::SentenceTags;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// Pause between grading an answer and showing the next round.
const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(1500);

/// What the player asked for at the round prompt.
enum PlayerInput {
    /// Zero-based option index.
    Option(usize),
    ToggleMode,
    Restart,
    Quit,
}

/// The interactive quiz front-end.
pub struct Game<E: LineEditor = RustylineEditor> {
    editor: E,
    session: Session,
    feedback_delay: Duration,
}

impl Game<RustylineEditor> {
    /// Creates a game with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        Ok(Self::with_editor(RustylineEditor::new()?, session))
    }
}

impl<E: LineEditor> Game<E> {
    /// Creates a game with the given editor.
    pub fn with_editor(editor: E, session: Session) -> Self {
        Self {
            editor,
            session,
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
        }
    }

    /// Overrides the pause shown after feedback.
    #[must_use]
    pub fn with_feedback_delay(mut self, delay: Duration) -> Self {
        self.feedback_delay = delay;
        self
    }

    /// Read-only view of the underlying session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the quiz until the player quits or declines a replay.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read or a round cannot be
    /// generated.
    pub fn run(&mut self) -> Result<()> {
        self.session.start()?;
        loop {
            if self.session.is_over() {
                if self.prompt_replay()? {
                    self.session.restart()?;
                    continue;
                }
                return Ok(());
            }

            self.render_round();
            match self.read_input()? {
                PlayerInput::Quit => return Ok(()),
                PlayerInput::ToggleMode => {
                    let mode = self.session.toggle_mode()?;
                    println!("Mode switched to {mode}; takes effect next round.");
                }
                PlayerInput::Restart => self.session.restart()?,
                PlayerInput::Option(index) => {
                    let choice = self
                        .session
                        .current_round()
                        .and_then(|r| r.option(index))
                        .map(str::to_string);
                    let Some(choice) = choice else {
                        println!("No such option.");
                        continue;
                    };
                    let feedback = self.session.submit_answer(&choice)?;
                    render_feedback(&feedback);
                    if !self.session.is_over() {
                        thread::sleep(self.feedback_delay);
                    }
                    self.session.advance()?;
                }
            }
        }
    }

    fn read_input(&mut self) -> Result<PlayerInput> {
        loop {
            match self.editor.read_line("> ")? {
                ReadResult::Interrupted | ReadResult::Eof => return Ok(PlayerInput::Quit),
                ReadResult::Line(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    self.editor.add_history(trimmed);
                    if let Some(input) = parse_input(trimmed) {
                        return Ok(input);
                    }
                    println!(
                        "Enter an option number, 'm' to switch modes, 'r' to restart, \
                         or 'q' to quit."
                    );
                }
            }
        }
    }

    fn render_round(&self) {
        let Some(round) = self.session.current_round() else {
            return;
        };

        println!();
        println!(
            "Level: {}   Score: {}   {}",
            self.session.level(),
            self.session.score(),
            progress_bar(self.session.progress())
        );
        println!();

        match round_mode(round) {
            GameMode::DefinitionMatch => {
                println!("  {}  ({})", round.target.word, round.target.part_of_speech);
                if let Some(example) = round.target.first_example() {
                    println!("  \"{example}\"");
                }
                if let Some(tags) = &round.sentence_tags {
                    render_tags(tags);
                }
            }
            GameMode::WordMatch => {
                println!("  {}", round.target.definition);
            }
        }

        println!();
        for (i, option) in round.options.iter().enumerate() {
            println!("  {}) {option}", i + 1);
        }
    }

    fn prompt_replay(&mut self) -> Result<bool> {
        if let Some(report) = self.session.final_report() {
            println!();
            println!("Game complete! {report}");
        }
        loop {
            match self.editor.read_line("Play again? [y/n] ")? {
                ReadResult::Interrupted | ReadResult::Eof => return Ok(false),
                ReadResult::Line(line) => match line.trim() {
                    "y" | "yes" => return Ok(true),
                    "n" | "no" | "q" => return Ok(false),
                    _ => {}
                },
            }
        }
    }
}

/// The mode a round was generated under, recovered from its content.
///
/// Mode toggles take effect at the next round, so the round itself is the
/// authority on how it should display.
fn round_mode(round: &RoundState) -> GameMode {
    if round.correct_option == round.target.word {
        GameMode::WordMatch
    } else {
        GameMode::DefinitionMatch
    }
}

fn render_feedback(feedback: &Feedback) {
    println!();
    println!("{feedback}");
    if let Feedback::Incorrect {
        example, synonyms, ..
    } = feedback
    {
        if let Some(example) = example {
            println!("  example: \"{example}\"");
        }
        if !synonyms.is_empty() {
            println!("  synonyms: {}", synonyms.join(", "));
        }
    }
}

fn render_tags(tags: &SentenceTags) {
    if tags.is_empty() {
        return;
    }
    let mut parts = Vec::new();
    if !tags.nouns.is_empty() {
        parts.push(format!("nouns: {}", tags.nouns.join(", ")));
    }
    if !tags.verbs.is_empty() {
        parts.push(format!("verbs: {}", tags.verbs.join(", ")));
    }
    if !tags.adjectives.is_empty() {
        parts.push(format!("adjectives: {}", tags.adjectives.join(", ")));
    }
    println!("  analysis: {}", parts.join(" | "));
}

fn progress_bar(progress: u8) -> String {
    let filled = usize::from(progress / 10);
    format!("[{}{}] {progress}%", "#".repeat(filled), "-".repeat(10 - filled))
}

fn parse_input(line: &str) -> Option<PlayerInput> {
    match line {
        "m" | "mode" => Some(PlayerInput::ToggleMode),
        "r" | "restart" => Some(PlayerInput::Restart),
        "q" | "quit" | "exit" => Some(PlayerInput::Quit),
        other => other
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .map(PlayerInput::Option),
    }
}
