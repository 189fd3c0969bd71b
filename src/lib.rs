//! LexiQuest - Vocabulary quiz engine
//!
//! This crate re-exports all layers of the LexiQuest system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: lexiquest_runtime    — Terminal front-end, catalog loading, logging
//! Layer 2: lexiquest_session    — Session state machine, feedback, speech seam
//!          lexiquest_engine     — Round generation: eligibility, distractors
//! Layer 1: lexiquest_catalog    — Word catalog: records, validation, queries
//!          lexiquest_tagger     — Heuristic sentence tagger
//! Layer 0: lexiquest_foundation — Core types (Difficulty, GameMode, Error)
//! ```

pub use lexiquest_catalog as catalog;
pub use lexiquest_engine as engine;
pub use lexiquest_foundation as foundation;
pub use lexiquest_runtime as runtime;
pub use lexiquest_session as session;
pub use lexiquest_tagger as tagger;
