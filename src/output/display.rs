//! Printing rows, scores and round results

use super::formatters::colored_letter;
use crate::board::{Axis, Board, Host, RoundOutcome, Row, TileArena};
use crate::core::{FeedbackState, to_emoji};
use colored::Colorize;

/// One row as a line of colored cells
#[must_use]
pub fn format_row(row: &Row, arena: &TileArena) -> String {
    let cells: Vec<String> = row
        .tiles()
        .iter()
        .filter_map(|&id| arena.get(id))
        .map(|tile| colored_letter(tile.letter().unwrap_or(' '), tile.feedback()).to_string())
        .collect();
    cells.join("")
}

/// Print every live row of the board, marking the active one
pub fn print_board<H: Host>(board: &Board<H>) {
    let active = board.active_row().map(Row::id);
    println!();
    for row in board.rows() {
        let marker = if Some(row.id()) == active { "▶" } else { " " };
        let axis = match row.axis() {
            Axis::Horizontal => "",
            Axis::Vertical => " (built off)",
        };
        println!(
            "  {} {}{}",
            marker.bright_cyan(),
            format_row(row, board.arena()),
            axis.bright_black()
        );
    }
    println!();
}

/// Print feedback for a solution/guess pair
pub fn print_score(solution: &str, guess: &str, feedback: &[FeedbackState]) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Solution: {}   Guess: {}",
        solution.to_uppercase().bright_yellow().bold(),
        guess.to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let cells: String = guess
        .chars()
        .zip(feedback)
        .map(|(letter, &state)| colored_letter(letter, state).to_string())
        .collect();
    println!("\n  {cells}   {}\n", to_emoji(feedback));
}

/// Print the end-of-round banner
pub fn print_outcome(outcome: RoundOutcome, solution: Option<&str>) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match outcome {
        RoundOutcome::Won {
            build_offs,
            chain_words,
        } => {
            println!("{}", "    🎉  R O U N D   W O N !  🎉    ".bright_green().bold());
            println!(
                "\n  Build-offs: {}   Chain words: {}",
                build_offs.to_string().bright_cyan().bold(),
                chain_words.to_string().bright_cyan().bold()
            );
        }
        RoundOutcome::Lost { build_offs } => {
            println!("{}", "    ❌  Round lost".red().bold());
            if let Some(solution) = solution {
                println!(
                    "\n  The word was {}",
                    solution.to_uppercase().bright_yellow().bold()
                );
            }
            if build_offs > 0 {
                println!("  Build-offs completed: {build_offs}");
            }
        }
    }
    println!("{}", "═".repeat(60).bright_cyan());
}
