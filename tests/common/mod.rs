#![allow(dead_code)]

use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_buildoff::board::{Board, Key, RecordingHost};
use wordle_buildoff::config::{GameConfig, Timings};
use wordle_buildoff::core::Word;
use wordle_buildoff::wordlists::{Dictionary, MemorySource, WordList};

/// Every letter of "crane" appears at the same column in another solution
pub const SOLUTIONS: &str = "crane\ncloud\nbrick\nshake\npoint\nhouse\n";
pub const GUESSES: &str = "audio\nthink\nplumb\n";
/// A chain word exists for the last letter of every solution above, and for
/// the last letter of each of those
pub const CHAIN_WORDS: &str = "dinner\nkitten\neleven\ntunnel\nrabbit\nnumber\nlonely\n";

pub fn dictionary() -> Dictionary {
    let source = MemorySource::new()
        .with(WordList::Solutions, SOLUTIONS)
        .with(WordList::AcceptedGuesses, GUESSES)
        .with(WordList::ChainWords, CHAIN_WORDS);
    Dictionary::load(&source, 5, 6).unwrap()
}

pub fn board_with(config: GameConfig, seed: u64) -> Board<RecordingHost> {
    board_from(dictionary(), config, seed)
}

/// Board over `dictionary` with "crane" as the first solution
pub fn board_from(dictionary: Dictionary, config: GameConfig, seed: u64) -> Board<RecordingHost> {
    let mut board = Board::with_rng(
        dictionary,
        config,
        RecordingHost::new(),
        StdRng::seed_from_u64(seed),
    );
    board.start_round_with(Word::new("crane").unwrap());
    board
}

pub fn instant_board(seed: u64) -> Board<RecordingHost> {
    let config = GameConfig {
        timings: Timings::instant(),
        ..GameConfig::default()
    };
    board_with(config, seed)
}

pub fn timed_board(seed: u64) -> Board<RecordingHost> {
    board_with(GameConfig::default(), seed)
}

pub fn keys(word: &str) -> Vec<Key> {
    word.chars().filter_map(Key::from_char).collect()
}

/// Type `word` and press Enter in a single tick
pub fn type_and_submit(board: &mut Board<RecordingHost>, word: &str) {
    let mut keys = keys(word);
    keys.push(Key::Enter);
    board.tick(0.0, &keys);
}

/// Letters of `word` outside the locked column
pub fn free_letters(word: &str, locked: Option<usize>) -> String {
    word.chars()
        .enumerate()
        .filter(|(i, _)| Some(*i) != locked)
        .map(|(_, c)| c)
        .collect()
}
