//! Wordle Build-off - CLI
//!
//! Play in the TUI (default), in a line-based terminal mode, or score a
//! single guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_buildoff::{
    board::Board,
    commands::{ConsoleHost, run_simple, score_words},
    config::GameConfig,
    interactive::{App, TuiHost, run_tui},
    logging::{LogConfig, init_logging},
    output::print_score,
};

#[derive(Parser)]
#[command(
    name = "wordle_buildoff",
    about = "Wordle with build-off continuations and a word-chain finale",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory with solutions.txt, guesses.txt and chain_words.txt
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Seed for reproducible solution draws
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// Score a guess against a solution
    Score {
        /// The solution word
        solution: String,

        /// The guessed word
        guess: String,
    },
}

/// Load the configuration file (if any) and apply CLI overrides
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(dir) = &cli.data {
        config.data_dir = Some(dir.clone());
    }
    Ok(config)
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    let log_config = LogConfig::from_verbosity(cli.verbose).with_log_file(cli.log_file.clone());
    let log_config = match &command {
        // The TUI owns the terminal
        Commands::Play => log_config.file_only(),
        Commands::Simple | Commands::Score { .. } => log_config,
    };
    init_logging(&log_config).context("initializing logging")?;

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
        Commands::Score { solution, guess } => run_score_command(&solution, &guess),
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let board = Board::from_config(config, TuiHost::default(), cli.seed)?;
    run_tui(App::new(board))
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let mut board = Board::from_config(config, ConsoleHost::new(), cli.seed)?;
    run_simple(&mut board)?;
    Ok(())
}

fn run_score_command(solution: &str, guess: &str) -> Result<()> {
    let result = score_words(solution, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_score(&result.solution, &result.guess, &result.feedback);
    if result.won {
        println!("✅ Solved!");
    }
    Ok(())
}
