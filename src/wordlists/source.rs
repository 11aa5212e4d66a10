//! Backing resources for the three word lists

use super::embedded::{CHAIN_WORDS, GUESSES, SOLUTIONS};
use super::loader::{load_from_file, words_from_slice, words_from_text};
use crate::core::Word;
use crate::error::GameError;
use rustc_hash::FxHashMap;
use std::fmt;
use std::path::PathBuf;

/// The word lists a game needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordList {
    Solutions,
    AcceptedGuesses,
    ChainWords,
}

impl WordList {
    /// File name used by [`DirectorySource`]
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Solutions => "solutions.txt",
            Self::AcceptedGuesses => "guesses.txt",
            Self::ChainWords => "chain_words.txt",
        }
    }
}

impl fmt::Display for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solutions => write!(f, "solutions"),
            Self::AcceptedGuesses => write!(f, "accepted guesses"),
            Self::ChainWords => write!(f, "chain words"),
        }
    }
}

/// Somewhere word lists can be read from
pub trait WordSource {
    /// Read every valid, normalized entry of `list`
    ///
    /// # Errors
    ///
    /// Returns `GameError::DataUnavailable` if the list does not exist.
    fn read(&self, list: WordList) -> Result<Vec<Word>, GameError>;
}

/// Lists compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl WordSource for EmbeddedSource {
    fn read(&self, list: WordList) -> Result<Vec<Word>, GameError> {
        let slice = match list {
            WordList::Solutions => SOLUTIONS,
            WordList::AcceptedGuesses => GUESSES,
            WordList::ChainWords => CHAIN_WORDS,
        };
        Ok(words_from_slice(slice))
    }
}

/// Lists read from `solutions.txt`, `guesses.txt` and `chain_words.txt` in a directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl WordSource for DirectorySource {
    fn read(&self, list: WordList) -> Result<Vec<Word>, GameError> {
        let path = self.root.join(list.file_name());
        load_from_file(&path)?.ok_or_else(|| GameError::DataUnavailable {
            list,
            reason: format!("{} not found", path.display()),
        })
    }
}

/// Lists held in memory as line-delimited text
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    lists: FxHashMap<WordList, String>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw text of one list
    #[must_use]
    pub fn with(mut self, list: WordList, text: impl Into<String>) -> Self {
        self.lists.insert(list, text.into());
        self
    }
}

impl WordSource for MemorySource {
    fn read(&self, list: WordList) -> Result<Vec<Word>, GameError> {
        self.lists
            .get(&list)
            .map(|text| words_from_text(text))
            .ok_or_else(|| GameError::DataUnavailable {
                list,
                reason: "not provided".to_string(),
            })
    }
}
