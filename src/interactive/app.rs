//! TUI application state and logic

use crate::board::{Board, Host, Key, RoundOutcome, SoundCue, TimerCue};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Fixed update tick
const TICK: Duration = Duration::from_millis(16);

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Host state the renderer reads back
#[derive(Debug, Default)]
pub struct TuiHost {
    pub messages: Vec<Message>,
    pub invalid_banner: bool,
    pub time_warning: bool,
    pub timer_visible: bool,
    /// Number of valid submissions since the timer was shown
    pub timer_flips: usize,
    outcome: Option<RoundOutcome>,
}

impl TuiHost {
    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

impl Host for TuiHost {
    fn invalid_word(&mut self, visible: bool) {
        self.invalid_banner = visible;
    }

    fn play(&mut self, cue: SoundCue) {
        match cue {
            SoundCue::CorrectGuess => self.add_message("Correct!", MessageStyle::Success),
            SoundCue::WrongGuess => self.add_message("Not quite.", MessageStyle::Info),
            SoundCue::Win => self.add_message("🎉 Round won! 🎉", MessageStyle::Success),
            SoundCue::Lose => self.add_message("Out of rows.", MessageStyle::Error),
            SoundCue::Button => {}
        }
    }

    fn time_warning(&mut self, active: bool) {
        self.time_warning = active;
    }

    fn timer(&mut self, cue: TimerCue) {
        match cue {
            TimerCue::Show => {
                self.timer_visible = true;
                self.timer_flips = 0;
            }
            TimerCue::Flip => self.timer_flips += 1,
            TimerCue::Hide => self.timer_visible = false,
        }
    }

    fn round_complete(&mut self, outcome: RoundOutcome) {
        self.outcome = Some(outcome);
    }
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_rounds: usize,
    pub rounds_won: usize,
    pub build_offs: usize,
    pub chain_words: usize,
}

impl Statistics {
    fn record(&mut self, outcome: RoundOutcome) {
        self.total_rounds += 1;
        match outcome {
            RoundOutcome::Won {
                build_offs,
                chain_words,
            } => {
                self.rounds_won += 1;
                self.build_offs += build_offs;
                self.chain_words += chain_words;
            }
            RoundOutcome::Lost { build_offs } => self.build_offs += build_offs,
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_rounds > 0 {
            self.rounds_won as f64 / self.total_rounds as f64 * 100.0
        } else {
            0.0
        }
    }
}

/// Application state
pub struct App {
    pub board: Board<TuiHost>,
    pub stats: Statistics,
    pub last_outcome: Option<RoundOutcome>,
    pub should_quit: bool,
    pending: Vec<Key>,
}

impl App {
    #[must_use]
    pub fn new(board: Board<TuiHost>) -> Self {
        Self {
            board,
            stats: Statistics::default(),
            last_outcome: None,
            should_quit: false,
            pending: Vec::new(),
        }
    }

    pub fn new_round(&mut self) {
        self.pending.clear();
        self.last_outcome = None;
        self.board.new_round();
        self.board
            .host_mut()
            .add_message("New round! Type a word and press Enter.", MessageStyle::Info);
    }

    pub fn try_again(&mut self) {
        self.pending.clear();
        self.last_outcome = None;
        self.board.try_again();
        self.board
            .host_mut()
            .add_message("Same word, fresh board.", MessageStyle::Info);
    }

    /// Route a terminal key press to the app or queue it for the board
    pub fn on_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_round(),
            KeyCode::Char('r') if ctrl => self.try_again(),
            KeyCode::Char(c) => {
                if let Some(key) = Key::from_char(c) {
                    self.pending.push(key);
                }
            }
            KeyCode::Backspace => self.pending.push(Key::Backspace),
            KeyCode::Enter => self.pending.push(Key::Enter),
            _ => {}
        }
    }

    /// Advance the board by `dt` seconds with the keys queued since the last tick
    pub fn tick(&mut self, dt: f32) {
        let keys = std::mem::take(&mut self.pending);
        self.board.tick(dt, &keys);

        if let Some(outcome) = self.board.host_mut().outcome.take() {
            self.stats.record(outcome);
            self.last_outcome = Some(outcome);
            let text = format!("Round {outcome}. Ctrl-N: new word, Ctrl-R: try again");
            self.board.host_mut().add_message(&text, MessageStyle::Info);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.new_round();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = TICK.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.on_key(key);
        }

        if last_tick.elapsed() >= TICK {
            app.tick(last_tick.elapsed().as_secs_f32());
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
