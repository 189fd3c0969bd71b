//! Best-effort pronunciation through an external speech command.
//!
//! Looks for a text-to-speech program on `PATH` and shells out to it,
//! fire-and-forget. When no program is found, speaking is a no-op; a
//! missing audio capability is never an error.

use std::env;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use lexiquest_session::Speaker;

/// Candidate speech programs, tried in order.
const CANDIDATES: [&str; 2] = ["espeak", "say"];

/// Pronounces words by spawning an external speech command.
#[derive(Clone, Debug)]
pub struct CommandSpeaker {
    program: Option<PathBuf>,
}

impl CommandSpeaker {
    /// Searches `PATH` for a known speech program.
    #[must_use]
    pub fn detect() -> Self {
        let program = env::var_os("PATH").and_then(|path| {
            env::split_paths(&path)
                .flat_map(|dir| CANDIDATES.iter().map(move |c| dir.join(c)))
                .find(|candidate| candidate.is_file())
        });
        if let Some(found) = &program {
            tracing::debug!(program = %found.display(), "speech backend detected");
        }
        Self { program }
    }

    /// Returns true if a speech program was found.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.program.is_some()
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&self, text: &str) {
        let Some(program) = &self.program else {
            return;
        };
        // Fire and forget; failures are intentionally swallowed.
        let _ = Command::new(program)
            .arg(text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
    }
}
