//! Host bindings
//!
//! The board never renders, plays audio or draws widgets itself. It is handed
//! a [`Host`] at construction and forwards every cue to it. All methods are
//! fire-and-forget and default to doing nothing.

use super::state::RoundOutcome;
use super::tile::{Tile, TileId};

/// Audio cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    CorrectGuess,
    WrongGuess,
    Win,
    Lose,
    Button,
}

/// Round-timer widget cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCue {
    Show,
    Flip,
    Hide,
}

/// Everything outside the board: renderer, audio and UI widgets
pub trait Host {
    /// A tile's letter, feedback, reveal progress or alpha changed
    fn tile_changed(&mut self, _id: TileId, _tile: &Tile) {}

    /// Show or hide the "not in word list" banner
    fn invalid_word(&mut self, _visible: bool) {}

    fn play(&mut self, _cue: SoundCue) {}

    /// Toggle the "running out of time" indicator
    fn time_warning(&mut self, _active: bool) {}

    fn timer(&mut self, _cue: TimerCue) {}

    fn round_complete(&mut self, _outcome: RoundOutcome) {}
}

/// Discards every cue
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHost;

impl Host for NullHost {}

/// A cue as seen by [`RecordingHost`]
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    TileChanged(TileId),
    InvalidWord(bool),
    Sound(SoundCue),
    TimeWarning(bool),
    Timer(TimerCue),
    RoundComplete(RoundOutcome),
}

/// Keeps every cue in order, for tests and headless drivers
#[derive(Debug, Default, Clone)]
pub struct RecordingHost {
    pub events: Vec<HostEvent>,
}

impl RecordingHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded cues other than tile updates
    pub fn cues(&self) -> impl Iterator<Item = &HostEvent> {
        self.events
            .iter()
            .filter(|event| !matches!(event, HostEvent::TileChanged(_)))
    }

    /// How many times `event` was recorded
    #[must_use]
    pub fn count(&self, event: &HostEvent) -> usize {
        self.events.iter().filter(|e| *e == event).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Host for RecordingHost {
    fn tile_changed(&mut self, id: TileId, _tile: &Tile) {
        self.events.push(HostEvent::TileChanged(id));
    }

    fn invalid_word(&mut self, visible: bool) {
        self.events.push(HostEvent::InvalidWord(visible));
    }

    fn play(&mut self, cue: SoundCue) {
        self.events.push(HostEvent::Sound(cue));
    }

    fn time_warning(&mut self, active: bool) {
        self.events.push(HostEvent::TimeWarning(active));
    }

    fn timer(&mut self, cue: TimerCue) {
        self.events.push(HostEvent::Timer(cue));
    }

    fn round_complete(&mut self, outcome: RoundOutcome) {
        self.events.push(HostEvent::RoundComplete(outcome));
    }
}
