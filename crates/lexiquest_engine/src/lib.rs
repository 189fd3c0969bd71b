//! Round generation for LexiQuest.
//!
//! This crate provides:
//! - [`RoundEngine`] - Seeded generator of quiz rounds
//! - [`RoundState`] - One generated round: target, options, tags
//!
//! The engine reads the catalog, never mutates it, and owns its own RNG so
//! that a fixed seed reproduces an identical sequence of rounds.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod engine;
mod round;

pub use engine::{DISTRACTOR_COUNT, OPTION_COUNT, RoundEngine};
pub use round::RoundState;
