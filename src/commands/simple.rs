//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Each line is turned into key presses for
//! the board, and the board is then ticked at a fixed rate until its reveal
//! and fade timers have settled.

use crate::board::{Board, GameMode, Host, Key, Phase, RoundOutcome, SoundCue, TimerCue};
use crate::output::formatters::create_progress_bar;
use crate::output::{print_board, print_outcome};
use colored::Colorize;
use std::io::{self, Write};
use std::time::Instant;

/// Fixed tick used while waiting for reveals and fades
pub const TICK: f32 = 1.0 / 60.0;

/// Upper bound on ticks spent settling one submission
const MAX_SETTLE_TICKS: usize = 60 * 60;

/// Host printing cues as text lines
#[derive(Debug, Default)]
pub struct ConsoleHost {
    outcome: Option<RoundOutcome>,
}

impl ConsoleHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Outcome of the last completed round, cleared when read
    pub fn take_outcome(&mut self) -> Option<RoundOutcome> {
        self.outcome.take()
    }
}

impl Host for ConsoleHost {
    fn invalid_word(&mut self, visible: bool) {
        if visible {
            println!("{}", "❌ Not in word list".red().bold());
        }
    }

    fn play(&mut self, cue: SoundCue) {
        match cue {
            SoundCue::CorrectGuess => println!("{}", "✓ Correct!".green().bold()),
            SoundCue::WrongGuess => println!("{}", "✗ Not quite".yellow()),
            SoundCue::Win | SoundCue::Lose | SoundCue::Button => {}
        }
    }

    fn time_warning(&mut self, active: bool) {
        if active {
            println!("{}", "⏰ Take your time... but not too much!".bright_yellow());
        }
    }

    fn timer(&mut self, cue: TimerCue) {
        tracing::trace!(?cue, "timer cue");
    }

    fn round_complete(&mut self, outcome: RoundOutcome) {
        self.outcome = Some(outcome);
    }
}

/// Turn a typed line into the keys that replace the active row's letters
///
/// `line` may be the whole word, or only the free letters when a column is
/// locked. Returns `None` if the length fits neither.
#[must_use]
pub fn line_to_keys(line: &str, row_len: usize, locked: Option<usize>) -> Option<Vec<Key>> {
    let letters: Vec<char> = line.trim().chars().collect();
    let free = row_len - usize::from(locked.is_some_and(|c| c < row_len));

    let typed: Vec<char> = if letters.len() == row_len {
        letters
            .into_iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != locked)
            .map(|(_, c)| c)
            .collect()
    } else if letters.len() == free {
        letters
    } else {
        return None;
    };

    let mut keys = vec![Key::Backspace; row_len];
    for c in typed {
        keys.push(Key::from_char(c)?);
    }
    keys.push(Key::Enter);
    Some(keys)
}

/// Tick until the board is back to accepting input or the round is over
pub fn settle<H: Host>(board: &mut Board<H>) {
    for _ in 0..MAX_SETTLE_TICKS {
        if matches!(board.phase(), Phase::Submitted | Phase::Fading) {
            board.tick(TICK, &[]);
        } else {
            return;
        }
    }
    tracing::warn!(phase = ?board.phase(), "board did not settle");
}

/// Tick the board by the wall time since `since`, then restart `since`
///
/// Time spent reading a line counts toward the round timer before the
/// line's keys are applied.
pub fn feed_elapsed<H: Host>(board: &mut Board<H>, since: &mut Instant) {
    let now = Instant::now();
    board.tick(now.duration_since(*since).as_secs_f32(), &[]);
    *since = now;
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(board: &mut Board<ConsoleHost>) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Build-off - Simple Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the word. Win, and a new word is built off one of its letters.");
    println!("Win that too and finish with a chain of words, each starting with");
    println!("the last letter of the one before.\n");
    println!("Commands: 'quit' to exit, 'new' for a new word, 'again' to retry\n");

    board.new_round();
    let mut last_input = Instant::now();

    loop {
        print_board(board);

        let warn_after = board.config().timings.time_warning_after;
        println!(
            "  ⏱  {} {:.0}s",
            create_progress_bar(board.round_elapsed(), warn_after, 18).bright_black(),
            board.round_elapsed()
        );

        let input = get_user_input(&prompt(board))?.to_lowercase();
        feed_elapsed(board, &mut last_input);

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                board.new_round();
                println!("\n🔄 New round started!\n");
                continue;
            }
            "again" | "retry" => {
                board.try_again();
                println!("\n🔄 Same word, fresh board!\n");
                continue;
            }
            "" => continue,
            line => {
                let row_len = board.active_row().map_or(0, |row| row.len());
                let Some(keys) = line_to_keys(line, row_len, board.column_skip()) else {
                    println!("{}", format!("Enter a {row_len}-letter word").red());
                    continue;
                };
                board.tick(0.0, &keys);
                settle(board);
            }
        }

        if let Some(outcome) = board.host_mut().take_outcome() {
            print_board(board);
            let solution = board.solution().map(|word| word.text().to_string());
            print_outcome(outcome, solution.as_deref());

            match get_user_input("Play again? (yes/again/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => board.new_round(),
                "again" | "a" => board.try_again(),
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
            last_input = Instant::now();
        }
    }
}

fn prompt<H: Host>(board: &Board<H>) -> String {
    match board.mode() {
        GameMode::Standard => "Guess".to_string(),
        GameMode::BuildOff => {
            let locked = board.column_skip().and_then(|column| {
                let id = board.active_row()?.tile_at(column)?;
                let letter = board.tile(id)?.letter()?;
                Some(format!("column {} is {}", column + 1, letter.to_ascii_uppercase()))
            });
            match locked {
                Some(locked) => format!("Build-off guess ({locked})"),
                None => "Build-off guess".to_string(),
            }
        }
        GameMode::WordChain {
            last_letter,
            accepted,
        } => format!(
            "Chain word {} starting with {}",
            accepted + 1,
            last_letter.to_ascii_uppercase()
        ),
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
