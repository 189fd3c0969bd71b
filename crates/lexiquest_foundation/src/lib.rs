//! Core types and errors for LexiQuest.
//!
//! This crate provides:
//! - [`Difficulty`] - Word difficulty tiers with ordinal mapping
//! - [`PartOfSpeech`] - Grammatical category tags
//! - [`GameMode`] - Definition-match vs. word-match play
//! - [`WordId`] - Stable catalog identifiers
//! - [`Error`] - Categorized error types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod types;

pub use error::{Error, ErrorKind, Result, ValidationIssue};
pub use types::{Difficulty, GameMode, PartOfSpeech, WordId};
