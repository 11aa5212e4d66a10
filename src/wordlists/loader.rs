//! Word list loading utilities
//!
//! Word lists are line-delimited text. `\n`, `\r\n` and `\r` are all treated
//! as separators, blank lines are skipped and every entry is normalized
//! (trimmed, lowercased) through [`Word::new`].

use crate::core::Word;
use crate::error::GameError;
use std::fs;
use std::io;
use std::path::Path;

/// Split line-delimited text on any of `\r\n`, `\r`, `\n`
///
/// # Examples
/// ```
/// use wordle_buildoff::wordlists::loader::split_lines;
///
/// let lines: Vec<_> = split_lines("crane\r\nslate\raudio\n").collect();
/// assert_eq!(lines, vec!["crane", "slate", "audio"]);
/// ```
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\r', '\n']).filter(|line| !line.trim().is_empty())
}

/// Parse line-delimited text into words, skipping invalid entries
#[must_use]
pub fn words_from_text(text: &str) -> Vec<Word> {
    split_lines(text)
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Load words from a file
///
/// Returns `Ok(None)` when the file does not exist so the caller can report
/// the list as unavailable.
///
/// # Errors
///
/// Returns `GameError::Io` if the file exists but cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_buildoff::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/solutions.txt").unwrap().unwrap_or_default();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Option<Vec<Word>>, GameError> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(words_from_text(&content))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(GameError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_buildoff::wordlists::loader::words_from_slice;
/// use wordle_buildoff::wordlists::SOLUTIONS;
///
/// let words = words_from_slice(SOLUTIONS);
/// assert_eq!(words.len(), SOLUTIONS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
