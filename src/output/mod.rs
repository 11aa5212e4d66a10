//! Terminal output formatting
//!
//! Display utilities for line-based play and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{format_row, print_board, print_outcome, print_score};
