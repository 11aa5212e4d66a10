//! Dictionary store: solutions, accepted guesses and chain words
//!
//! A `Dictionary` only exists once every list has loaded, so drawing a
//! solution can never happen against an empty list.

use super::source::{WordList, WordSource};
use crate::core::Word;
use crate::error::GameError;
use rand::Rng;
use rustc_hash::FxHashSet;

/// Load solution words of exactly `length` letters, deduplicated in file order
///
/// # Errors
///
/// Returns `GameError::DataUnavailable` if the list is missing or has no
/// word of the requested length.
pub fn load_solutions(source: &impl WordSource, length: usize) -> Result<Vec<Word>, GameError> {
    let mut seen = FxHashSet::default();
    let words: Vec<Word> = source
        .read(WordList::Solutions)?
        .into_iter()
        .filter(|word| word.len() == length && seen.insert(word.text().to_string()))
        .collect();

    non_empty(WordList::Solutions, words, length)
}

/// Load the accepted-guess set
///
/// # Errors
///
/// Returns `GameError::DataUnavailable` if the list is missing.
pub fn load_accepted_guesses(source: &impl WordSource) -> Result<FxHashSet<String>, GameError> {
    Ok(source
        .read(WordList::AcceptedGuesses)?
        .into_iter()
        .map(|word| word.text().to_string())
        .collect())
}

/// Load chain words filtered to exactly `length` letters
///
/// # Errors
///
/// Returns `GameError::DataUnavailable` if the list is missing or has no
/// word of the requested length.
pub fn load_chain_words(
    source: &impl WordSource,
    length: usize,
) -> Result<FxHashSet<String>, GameError> {
    let words: Vec<Word> = source
        .read(WordList::ChainWords)?
        .into_iter()
        .filter(|word| word.len() == length)
        .collect();

    Ok(non_empty(WordList::ChainWords, words, length)?
        .into_iter()
        .map(|word| word.text().to_string())
        .collect())
}

fn non_empty(list: WordList, words: Vec<Word>, length: usize) -> Result<Vec<Word>, GameError> {
    if words.is_empty() {
        Err(GameError::DataUnavailable {
            list,
            reason: format!("no {length}-letter words"),
        })
    } else {
        Ok(words)
    }
}

/// All word lists a board consults
#[derive(Debug, Clone)]
pub struct Dictionary {
    solutions: Vec<Word>,
    accepted: FxHashSet<String>,
    chain_words: FxHashSet<String>,
    word_length: usize,
    chain_word_length: usize,
}

impl Dictionary {
    /// Load all three lists from `source`
    ///
    /// Every solution is also an accepted guess.
    ///
    /// # Errors
    ///
    /// Returns `GameError::DataUnavailable` if any list is missing or empty
    /// after filtering by length.
    pub fn load(
        source: &impl WordSource,
        word_length: usize,
        chain_word_length: usize,
    ) -> Result<Self, GameError> {
        let solutions = load_solutions(source, word_length)?;
        let mut accepted = load_accepted_guesses(source)?;
        accepted.extend(solutions.iter().map(|word| word.text().to_string()));
        let chain_words = load_chain_words(source, chain_word_length)?;

        tracing::debug!(
            solutions = solutions.len(),
            accepted = accepted.len(),
            chain_words = chain_words.len(),
            "dictionary loaded"
        );

        Ok(Self {
            solutions,
            accepted,
            chain_words,
            word_length,
            chain_word_length,
        })
    }

    /// Case-insensitive membership test against the accepted guesses
    #[must_use]
    pub fn is_accepted_guess(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|word| self.accepted.contains(word.text()))
    }

    /// Case-insensitive membership test against the chain words
    #[must_use]
    pub fn is_chain_word(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|word| self.chain_words.contains(word.text()))
    }

    /// Uniform draw from the solutions
    pub fn pick_random_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.solutions[rng.random_range(0..self.solutions.len())]
    }

    /// Uniform draw from the solutions that have `letter` at `column`, other than `excluding`
    pub fn pick_solution_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        column: usize,
        letter: char,
        excluding: &str,
    ) -> Option<&Word> {
        let candidates: Vec<&Word> = self
            .solutions
            .iter()
            .filter(|word| word.letter_at(column) == Some(letter) && word.text() != excluding)
            .collect();

        if candidates.is_empty() {
            None
        } else {
            Some(candidates[rng.random_range(0..candidates.len())])
        }
    }

    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub const fn chain_word_length(&self) -> usize {
        self.chain_word_length
    }
}
