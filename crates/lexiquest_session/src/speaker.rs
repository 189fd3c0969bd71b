//! Injected pronunciation capability.
//!
//! Speaking the target word aloud is a side effect of starting a round, but
//! the state machine must stay testable without an audio backend. The
//! [`Speaker`] trait is the seam: the runtime injects a real backend, tests
//! and headless use get [`SilentSpeaker`].

/// A text-to-speech capability.
///
/// Implementations must be infallible from the caller's point of view: a
/// missing or broken backend is silently ignored, never an error.
pub trait Speaker {
    /// Pronounces the given text. Best effort.
    fn speak(&self, text: &str);
}

/// The no-op speaker used when no audio backend is available.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentSpeaker;

impl Speaker for SilentSpeaker {
    fn speak(&self, _text: &str) {}
}
