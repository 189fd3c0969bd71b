//! Session state machine for LexiQuest.
//!
//! This crate provides:
//! - [`Session`] - One game in progress: score, level, progress, mode
//! - [`Feedback`] - Grading result shown after each answer
//! - [`Speaker`] - Injected pronunciation capability
//!
//! All mutation is routed through the session's transition methods; the
//! presentation layer holds a read-only view between transitions.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod feedback;
mod session;
mod speaker;

pub use feedback::Feedback;
pub use session::{
    FinalReport, LEVEL_UP_INTERVAL, MAX_LEVEL, PROGRESS_COMPLETE, PROGRESS_STEP, Session,
    SessionConfig, SessionStatus,
};
pub use speaker::{SilentSpeaker, Speaker};
