//! Score command
//!
//! Scores a single guess against a solution, outside of any round.

use crate::core::{FeedbackState, Word, is_winning, score_guess};

/// Result of scoring one guess
pub struct ScoreResult {
    pub solution: String,
    pub guess: String,
    pub feedback: Vec<FeedbackState>,
    pub won: bool,
}

/// Score `guess` against `solution`
///
/// # Errors
///
/// Returns an error if either word is not plain ASCII letters or if their
/// lengths differ.
pub fn score_words(solution: &str, guess: &str) -> Result<ScoreResult, String> {
    let solution = Word::new(solution).map_err(|e| format!("Invalid solution: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    if solution.len() != guess.len() {
        return Err(format!(
            "Guess has {} letters but the solution has {}",
            guess.len(),
            solution.len()
        ));
    }

    let feedback = score_guess(solution.text(), guess.text(), None);
    let won = is_winning(&feedback);
    Ok(ScoreResult {
        solution: solution.text().to_string(),
        guess: guess.text().to_string(),
        feedback,
        won,
    })
}
