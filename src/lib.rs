//! Wordle Build-off
//!
//! A Wordle-family puzzle engine. Win a round and a new word is built off one
//! of the winning tiles on a perpendicular row; win that and finish with a
//! chain of words linked by their first and last letters.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_buildoff::board::{Board, Key, NullHost};
//! use wordle_buildoff::config::GameConfig;
//!
//! let mut board = Board::from_config(GameConfig::default(), NullHost, None).unwrap();
//! board.new_round();
//!
//! let keys: Vec<Key> = "crane".chars().filter_map(Key::from_char).collect();
//! board.tick(1.0 / 60.0, &keys);
//! board.tick(1.0 / 60.0, &[Key::Enter]);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Board engine
pub mod board;

// Settings, errors and logging
pub mod config;
pub mod error;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
