//! Per-letter feedback states and the guess scoring algorithm
//!
//! Scoring follows Wordle's duplicate-letter rules:
//! 1. First pass: exact position matches become `Correct` and their solution
//!    slot is blanked so it cannot be matched again
//! 2. Second pass: every remaining letter consumes the first unblanked
//!    occurrence in the solution (`WrongSpot`) or becomes `Incorrect`
//!
//! A locked (carried) column is never rescored.

/// Visual and logical state of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FeedbackState {
    /// No letter
    #[default]
    Empty,
    /// Letter typed, not yet submitted
    Occupied,
    /// Right letter, right position
    Correct,
    /// Letter is in the solution elsewhere
    WrongSpot,
    /// Letter is not in the solution (or all its occurrences are used up)
    Incorrect,
    /// Tile carried over from a previous row; never rescored
    Locked,
    /// Part of an accepted word-chain entry
    ValidChainWord,
}

impl FeedbackState {
    /// True for the states produced by scoring a submission
    #[must_use]
    pub const fn is_scored(self) -> bool {
        matches!(
            self,
            Self::Correct | Self::WrongSpot | Self::Incorrect | Self::ValidChainWord
        )
    }

    /// Emoji square used in terminal output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct | Self::ValidChainWord => '🟩',
            Self::WrongSpot => '🟨',
            Self::Locked => '🟦',
            Self::Empty | Self::Occupied | Self::Incorrect => '⬜',
        }
    }
}

const BLANK: u8 = b' ';

/// Score `guess` against `solution`
///
/// Both words must be the same length. When `locked` is set, that column keeps
/// `FeedbackState::Locked`; if its letter already matches the solution, the
/// solution slot is consumed so the carried letter cannot also be credited as
/// a `WrongSpot` elsewhere.
///
/// # Examples
/// ```
/// use wordle_buildoff::core::{score_guess, FeedbackState::*};
///
/// let feedback = score_guess("slate", "crane", None);
/// assert_eq!(feedback, vec![Incorrect, Incorrect, Correct, Incorrect, Correct]);
/// ```
///
/// # Panics
/// Panics in debug mode if the lengths differ
#[must_use]
pub fn score_guess(solution: &str, guess: &str, locked: Option<usize>) -> Vec<FeedbackState> {
    let solution = solution.as_bytes();
    let guess = guess.as_bytes();
    debug_assert_eq!(solution.len(), guess.len(), "guess and solution lengths differ");

    let mut remaining = solution.to_vec();
    let mut result = vec![FeedbackState::Empty; guess.len()];

    if let Some(column) = locked
        && column < guess.len()
    {
        result[column] = FeedbackState::Locked;
        if remaining.get(column) == Some(&guess[column]) {
            remaining[column] = BLANK;
        }
    }

    // First pass: exact matches
    for (i, &letter) in guess.iter().enumerate() {
        if result[i] == FeedbackState::Locked {
            continue;
        }
        if solution.get(i) == Some(&letter) {
            result[i] = FeedbackState::Correct;
            remaining[i] = BLANK;
        }
    }

    // Second pass: displaced letters consume the first remaining occurrence
    for (i, &letter) in guess.iter().enumerate() {
        if result[i] != FeedbackState::Empty {
            continue;
        }
        if let Some(index) = remaining.iter().position(|&r| r == letter) {
            result[i] = FeedbackState::WrongSpot;
            remaining[index] = BLANK;
        } else {
            result[i] = FeedbackState::Incorrect;
        }
    }

    result
}

/// True when every non-locked column is `Correct`
#[must_use]
pub fn is_winning(feedback: &[FeedbackState]) -> bool {
    !feedback.is_empty()
        && feedback
            .iter()
            .all(|&state| matches!(state, FeedbackState::Correct | FeedbackState::Locked))
        && feedback.iter().any(|&state| state == FeedbackState::Correct)
}

/// Render feedback as an emoji string like "🟩🟨⬜🟩🟨"
#[must_use]
pub fn to_emoji(feedback: &[FeedbackState]) -> String {
    feedback.iter().map(|state| state.emoji()).collect()
}
