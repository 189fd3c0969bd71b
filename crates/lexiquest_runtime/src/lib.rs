//! Terminal front-end, catalog loading, and logging setup for LexiQuest.
//!
//! This crate provides:
//! - [`Game`] - The interactive quiz loop
//! - [`load_catalog`] / [`default_catalog`] - Catalog document loading
//! - [`CommandSpeaker`] - Best-effort pronunciation via an external command
//! - [`init_logging`] - Tracing subscriber setup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod browse;
mod editor;
mod game;
mod loader;
mod logging;
mod speaker;

pub use browse::{print_stats, print_word_list};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use game::Game;
pub use loader::{default_catalog, load_catalog};
pub use logging::init_logging;
pub use speaker::CommandSpeaker;
