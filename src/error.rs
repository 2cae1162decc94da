//! Error types
//!
//! Everything here is fatal to a session: the loop stops and the error
//! bubbles up to the binary.

use std::io;

use thiserror::Error;

/// Errors that can end a game session.
#[derive(Error, Debug)]
pub enum GameError {
    /// A platform record (display, notification service) could not be opened.
    #[error("record unavailable: {0}")]
    RecordUnavailable(&'static str),

    /// Terminal setup or teardown failed.
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    /// Pushing a finished frame to the screen failed.
    #[error("failed to present frame: {0}")]
    Present(#[source] io::Error),

    /// A worker thread could not be started.
    #[error("failed to spawn {name} thread")]
    Spawn {
        /// Thread name.
        name: &'static str,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// The input producer went away; no Back key can ever arrive.
    #[error("input event source closed")]
    InputClosed,
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, GameError>;
