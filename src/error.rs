//! Error types and submission status values.
//!
//! Only [`GameError`] is ever escalated to the host. Everything that can go
//! wrong while a round is being played is absorbed and reported through
//! [`SubmitOutcome`] instead.

use std::path::PathBuf;
use thiserror::Error;

use crate::wordlists::WordList;

/// Errors that prevent a round from starting.
#[derive(Debug, Error)]
pub enum GameError {
    /// A word list is missing or has no usable entries.
    #[error("{list} word list unavailable: {reason}")]
    DataUnavailable { list: WordList, reason: String },

    /// Failed to read a file.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed or is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Row-level misuse. The board never triggers these; they guard the `Row` API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("a reveal is already running on this row")]
    RevealInProgress,

    #[error("expected {expected} feedback states, got {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("a tile was already spliced out of this row")]
    AlreadySpliced,

    #[error("index {index} is outside a row of length {len}")]
    OutOfBounds { index: usize, len: usize },
}

/// Result of pressing Enter on the active row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The word was accepted and its reveal started.
    Accepted { won: bool },
    /// The word was refused; the row and cursor are unchanged.
    Rejected(Rejection),
    /// Nothing happened.
    Ignored(IgnoreReason),
}

/// Why a submitted word was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Not in the accepted word list for the current mode.
    InvalidWord,
    /// Chain word does not start with the previous word's last letter.
    ChainLetterMismatch { expected: char, found: char },
}

/// Why a submission was a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A reveal is still running.
    DoubleSubmission,
    /// The cursor has not passed the last column.
    Incomplete,
    /// The board is idle, fading or complete.
    NotAcceptingInput,
}

impl SubmitOutcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}
