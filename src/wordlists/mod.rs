//! Word lists and the dictionary store
//!
//! Provides embedded word lists compiled into the binary, plus directory and
//! in-memory sources for custom lists.

mod dictionary;
mod embedded;
pub mod loader;
mod source;

pub use dictionary::{Dictionary, load_accepted_guesses, load_chain_words, load_solutions};
pub use embedded::{
    CHAIN_WORDS, CHAIN_WORDS_COUNT, GUESSES, GUESSES_COUNT, SOLUTIONS, SOLUTIONS_COUNT,
};
pub use source::{DirectorySource, EmbeddedSource, MemorySource, WordList, WordSource};
