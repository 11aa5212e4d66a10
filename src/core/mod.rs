//! Core domain types for the puzzle
//!
//! This module contains the fundamental domain types with no I/O and no timing.
//! Everything here is pure and deterministic.

mod feedback;
mod word;

pub use feedback::{FeedbackState, is_winning, score_guess, to_emoji};
pub use word::{Word, WordError};
