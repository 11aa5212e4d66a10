//! Rows of tiles with their reveal and fade-out timers
//!
//! A row never touches board state. It advances its own timers when ticked
//! and pushes a [`RowEvent`] for every subscribed signal that resolves.

use super::signal::OneShot;
use super::tile::{TileArena, TileId};
use super::timing::cubic_in;
use crate::config::Timings;
use crate::core::FeedbackState;
use crate::error::RowError;

/// Stable identity of a row for the lifetime of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(pub(crate) u32);

/// Layout direction of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Completion signals a row can raise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEvent {
    RevealComplete(RowId),
    Disappeared(RowId),
    Destroyed(RowId),
}

#[derive(Debug, Clone)]
struct Reveal {
    states: Vec<FeedbackState>,
    elapsed: f32,
    duration: f32,
}

#[derive(Debug, Clone, Copy)]
struct Fade {
    delay: f32,
    duration: f32,
    elapsed: f32,
}

/// An ordered line of tiles
#[derive(Debug)]
pub struct Row {
    id: RowId,
    tiles: Vec<TileId>,
    axis: Axis,
    carried: Option<usize>,
    order: usize,
    reveal: Option<Reveal>,
    revealed: bool,
    fade: Option<Fade>,
    spliced: bool,
    destroyed: bool,
    on_reveal_complete: OneShot,
    on_disappeared: OneShot,
    on_destroyed: OneShot,
}

impl Row {
    /// Allocate a row of `length` empty tiles
    pub fn new(id: RowId, axis: Axis, order: usize, length: usize, arena: &mut TileArena) -> Self {
        let tiles = (0..length).map(|_| arena.alloc()).collect();
        Self::from_tiles(id, axis, order, tiles, None)
    }

    /// Allocate a row around a tile carried over from another row
    ///
    /// `carried` sits at `column`; every other tile is new. `column` is
    /// clamped into the row.
    pub fn with_carried(
        id: RowId,
        axis: Axis,
        order: usize,
        length: usize,
        column: usize,
        carried: TileId,
        arena: &mut TileArena,
    ) -> Self {
        let column = column.min(length.saturating_sub(1));
        let tiles = (0..length.max(1))
            .map(|i| if i == column { carried } else { arena.alloc() })
            .collect();
        Self::from_tiles(id, axis, order, tiles, Some(column))
    }

    fn from_tiles(
        id: RowId,
        axis: Axis,
        order: usize,
        tiles: Vec<TileId>,
        carried: Option<usize>,
    ) -> Self {
        Self {
            id,
            tiles,
            axis,
            carried,
            order,
            reveal: None,
            revealed: false,
            fade: None,
            spliced: false,
            destroyed: false,
            on_reveal_complete: OneShot::default(),
            on_disappeared: OneShot::default(),
            on_destroyed: OneShot::default(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> RowId {
        self.id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Column of the carried (locked) tile, if any
    #[must_use]
    pub const fn carried_column(&self) -> Option<usize> {
        self.carried
    }

    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    #[must_use]
    pub fn tiles(&self) -> &[TileId] {
        &self.tiles
    }

    #[must_use]
    pub fn tile_at(&self, column: usize) -> Option<TileId> {
        self.tiles.get(column).copied()
    }

    /// Letters in column order; empty cells read as a blank
    #[must_use]
    pub fn current_word(&self, arena: &TileArena) -> String {
        self.tiles
            .iter()
            .map(|&id| arena.get(id).and_then(|tile| tile.letter()).unwrap_or(' '))
            .collect()
    }

    /// Detach a tile so it can be carried into a new row
    ///
    /// The remaining tiles close the gap and the row gets one shorter. Only
    /// one tile can ever be spliced out of a row.
    ///
    /// # Errors
    ///
    /// `AlreadySpliced` on a second call, `OutOfBounds` for a bad index.
    pub fn remove_tile_at(&mut self, index: usize) -> Result<TileId, RowError> {
        if self.spliced {
            return Err(RowError::AlreadySpliced);
        }
        if index >= self.tiles.len() {
            return Err(RowError::OutOfBounds {
                index,
                len: self.tiles.len(),
            });
        }

        self.spliced = true;
        self.carried = match self.carried {
            Some(c) if c == index => None,
            Some(c) if c > index => Some(c - 1),
            other => other,
        };
        Ok(self.tiles.remove(index))
    }

    /// Start the timed tile-by-tile reveal
    ///
    /// Tile `i` of `n` flips between `i * T/n` and `(i + 1) * T/n`; its new
    /// state shows from the midpoint of its flip. The carried tile is skipped.
    ///
    /// # Errors
    ///
    /// `RevealInProgress` if an earlier reveal has not finished,
    /// `LengthMismatch` if `states` does not cover every tile.
    pub fn start_reveal(
        &mut self,
        states: Vec<FeedbackState>,
        duration: f32,
    ) -> Result<(), RowError> {
        if self.reveal.is_some() {
            return Err(RowError::RevealInProgress);
        }
        if states.len() != self.tiles.len() {
            return Err(RowError::LengthMismatch {
                expected: self.tiles.len(),
                found: states.len(),
            });
        }

        self.revealed = false;
        self.reveal = Some(Reveal {
            states,
            elapsed: 0.0,
            duration: duration.max(0.0),
        });
        self.on_reveal_complete.subscribe();
        Ok(())
    }

    /// True once every tile has fully flipped
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub const fn is_revealing(&self) -> bool {
        self.reveal.is_some()
    }

    /// Start fading out after `order * fade_delay_factor` seconds
    pub fn start_fade_out(&mut self, order: usize, timings: &Timings) {
        self.fade = Some(Fade {
            delay: order as f32 * timings.fade_delay_factor,
            duration: timings.fade_duration,
            elapsed: 0.0,
        });
        self.on_disappeared.subscribe();
        self.on_destroyed.subscribe();
    }

    #[must_use]
    pub const fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    #[must_use]
    pub const fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Drop every subscription and cancel running timers
    pub fn detach(&mut self) {
        self.on_reveal_complete.clear();
        self.on_disappeared.clear();
        self.on_destroyed.clear();
        self.reveal = None;
        self.fade = None;
    }

    /// Release the row's tiles back to the arena
    pub fn destroy(&mut self, arena: &mut TileArena, events: &mut Vec<RowEvent>) {
        if self.destroyed {
            return;
        }
        for id in self.tiles.drain(..) {
            arena.release(id);
        }
        self.destroyed = true;
        self.reveal = None;
        self.fade = None;
        if self.on_destroyed.fire() {
            events.push(RowEvent::Destroyed(self.id));
        }
    }

    /// Advance the reveal and fade timers by `dt` seconds
    pub fn tick(&mut self, dt: f32, arena: &mut TileArena, events: &mut Vec<RowEvent>) {
        if self.destroyed {
            return;
        }
        if self.reveal.is_some() {
            self.tick_reveal(dt, arena, events);
        } else if self.fade.is_some() {
            self.tick_fade(dt, arena, events);
        }
    }

    fn tick_reveal(&mut self, dt: f32, arena: &mut TileArena, events: &mut Vec<RowEvent>) {
        let Some(reveal) = self.reveal.as_mut() else {
            return;
        };
        reveal.elapsed += dt;

        let finished = reveal.elapsed >= reveal.duration;
        let slice = reveal.duration / reveal.states.len().max(1) as f32;

        for (i, &id) in self.tiles.iter().enumerate() {
            if Some(i) == self.carried {
                continue;
            }
            let Some(tile) = arena.get_mut(id) else {
                continue;
            };
            let progress = if finished || slice <= 0.0 {
                1.0
            } else {
                (reveal.elapsed - i as f32 * slice) / slice
            };
            if progress <= 0.0 {
                continue;
            }
            tile.set_reveal_progress(progress);
            if progress >= 0.5 {
                tile.set_state(reveal.states[i]);
            }
        }

        if finished {
            self.reveal = None;
            self.revealed = true;
            if self.on_reveal_complete.fire() {
                events.push(RowEvent::RevealComplete(self.id));
            }
        }
    }

    fn tick_fade(&mut self, dt: f32, arena: &mut TileArena, events: &mut Vec<RowEvent>) {
        let Some(fade) = self.fade.as_mut() else {
            return;
        };
        fade.elapsed += dt;
        if fade.elapsed <= fade.delay {
            return;
        }

        let remaining = if fade.duration > 0.0 {
            1.0 - (fade.elapsed - fade.delay) / fade.duration
        } else {
            -1.0
        };
        let alpha = cubic_in(remaining);
        for &id in &self.tiles {
            if let Some(tile) = arena.get_mut(id) {
                tile.set_alpha(alpha);
            }
        }

        if alpha < 0.0 {
            self.fade = None;
            if self.on_disappeared.fire() {
                events.push(RowEvent::Disappeared(self.id));
            }
            self.destroy(arena, events);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use FeedbackState::*;

    fn timings() -> Timings {
        Timings {
            reveal_duration: 1.0,
            fade_duration: 0.4,
            fade_delay_factor: 0.1,
            time_warning_after: 9.0,
        }
    }

    fn row_with_word(word: &str, arena: &mut TileArena) -> Row {
        let row = Row::new(RowId(0), Axis::Horizontal, 0, word.len(), arena);
        for (id, letter) in row.tiles().iter().zip(word.chars()) {
            let tile = arena.get_mut(*id).unwrap();
            tile.set_letter(Some(letter));
            tile.set_state(Occupied);
        }
        row
    }

    #[test]
    fn new_row_has_empty_tiles() {
        let mut arena = TileArena::new();
        let row = Row::new(RowId(3), Axis::Vertical, 2, 5, &mut arena);
        assert_eq!(row.len(), 5);
        assert_eq!(arena.len(), 5);
        assert_eq!(row.current_word(&arena), "     ");
        assert_eq!(row.axis(), Axis::Vertical);
        assert_eq!(row.carried_column(), None);
    }

    #[test]
    fn current_word_in_column_order() {
        let mut arena = TileArena::new();
        let row = row_with_word("crane", &mut arena);
        assert_eq!(row.current_word(&arena), "crane");
    }

    #[test]
    fn remove_tile_shortens_row_once() {
        let mut arena = TileArena::new();
        let mut row = row_with_word("crane", &mut arena);

        let taken = row.remove_tile_at(2).unwrap();
        assert_eq!(arena.get(taken).unwrap().letter(), Some('a'));
        assert_eq!(row.len(), 4);
        assert_eq!(row.current_word(&arena), "crne");

        assert_eq!(row.remove_tile_at(0), Err(RowError::AlreadySpliced));
    }

    #[test]
    fn remove_tile_out_of_bounds() {
        let mut arena = TileArena::new();
        let mut row = row_with_word("crane", &mut arena);
        assert_eq!(
            row.remove_tile_at(5),
            Err(RowError::OutOfBounds { index: 5, len: 5 })
        );
        assert_eq!(row.len(), 5);
    }

    #[test]
    fn carried_row_keeps_transplanted_tile() {
        let mut arena = TileArena::new();
        let mut donor = row_with_word("crane", &mut arena);
        let carried = donor.remove_tile_at(1).unwrap();

        let row = Row::with_carried(RowId(1), Axis::Vertical, 0, 5, 1, carried, &mut arena);
        assert_eq!(row.tile_at(1), Some(carried));
        assert_eq!(row.carried_column(), Some(1));
        assert_eq!(row.current_word(&arena), " r   ");
        // 5 original + 4 new
        assert_eq!(arena.len(), 9);
    }

    #[test]
    fn reveal_is_time_sliced_per_tile() {
        let mut arena = TileArena::new();
        let mut row = row_with_word("crane", &mut arena);
        let mut events = Vec::new();
        row.start_reveal(vec![Correct; 5], 1.0).unwrap();

        // 0.25s in: tile 0 is past its midpoint (0.1), tile 1 is not (0.3)
        row.tick(0.25, &mut arena, &mut events);
        let states: Vec<_> = row
            .tiles()
            .iter()
            .map(|&id| arena.get(id).unwrap().feedback())
            .collect();
        assert_eq!(states, vec![Correct, Occupied, Occupied, Occupied, Occupied]);
        assert!(!row.is_revealed());
        assert!(events.is_empty());

        row.tick(0.75, &mut arena, &mut events);
        assert!(row.is_revealed());
        assert_eq!(events, vec![RowEvent::RevealComplete(RowId(0))]);
        for &id in row.tiles() {
            let tile = arena.get(id).unwrap();
            assert_eq!(tile.feedback(), Correct);
            assert!((tile.reveal_progress() - 1.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn no_tile_shows_feedback_before_its_slot() {
        let mut arena = TileArena::new();
        let mut row = row_with_word("crane", &mut arena);
        let mut events = Vec::new();
        row.start_reveal(vec![Incorrect; 5], 1.0).unwrap();

        let dt = 0.01;
        let mut elapsed = 0.0_f32;
        while !row.is_revealed() {
            row.tick(dt, &mut arena, &mut events);
            elapsed += dt;
            for (i, &id) in row.tiles().iter().enumerate() {
                if arena.get(id).unwrap().feedback() == Incorrect {
                    assert!(elapsed >= i as f32 * 0.2, "tile {i} shown at {elapsed}");
                }
            }
        }
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn reveal_skips_carried_tile() {
        let mut arena = TileArena::new();
        let mut donor = row_with_word("crane", &mut arena);
        let carried = donor.remove_tile_at(0).unwrap();
        arena.get_mut(carried).unwrap().lock();

        let mut row = Row::with_carried(RowId(1), Axis::Vertical, 0, 5, 0, carried, &mut arena);
        let mut events = Vec::new();
        row.start_reveal(vec![Incorrect; 5], 0.5).unwrap();
        row.tick(1.0, &mut arena, &mut events);

        assert_eq!(arena.get(carried).unwrap().feedback(), Locked);
        assert_eq!(events, vec![RowEvent::RevealComplete(RowId(1))]);
    }

    #[test]
    fn second_reveal_while_running_is_refused() {
        let mut arena = TileArena::new();
        let mut row = row_with_word("crane", &mut arena);
        row.start_reveal(vec![Correct; 5], 1.0).unwrap();
        assert_eq!(
            row.start_reveal(vec![Correct; 5], 1.0),
            Err(RowError::RevealInProgress)
        );
    }

    #[test]
    fn reveal_length_must_match() {
        let mut arena = TileArena::new();
        let mut row = row_with_word("crane", &mut arena);
        assert_eq!(
            row.start_reveal(vec![Correct; 4], 1.0),
            Err(RowError::LengthMismatch {
                expected: 5,
                found: 4
            })
        );
    }

    #[test]
    fn fade_waits_for_delay_then_disappears() {
        let mut arena = TileArena::new();
        let mut row = row_with_word("crane", &mut arena);
        let mut events = Vec::new();
        row.start_fade_out(2, &timings());

        // Delay is 0.2s: nothing happens yet
        row.tick(0.15, &mut arena, &mut events);
        let first = row.tile_at(0).unwrap();
        assert!((arena.get(first).unwrap().alpha() - 1.0).abs() < f32::EPSILON);

        // Halfway through the fade: cubic ease of 0.5
        row.tick(0.25, &mut arena, &mut events);
        let alpha = arena.get(first).unwrap().alpha();
        assert!((alpha - 0.125).abs() < 1e-3, "alpha {alpha}");
        assert!(events.is_empty());

        row.tick(0.3, &mut arena, &mut events);
        assert!(row.is_destroyed());
        assert_eq!(
            events,
            vec![RowEvent::Disappeared(RowId(0)), RowEvent::Destroyed(RowId(0))]
        );
        assert!(arena.is_empty());
    }

    #[test]
    fn detached_row_raises_nothing() {
        let mut arena = TileArena::new();
        let mut row = row_with_word("crane", &mut arena);
        let mut events = Vec::new();
        row.start_fade_out(0, &timings());
        row.detach();

        row.tick(5.0, &mut arena, &mut events);
        row.destroy(&mut arena, &mut events);
        assert!(events.is_empty());
        assert!(row.is_destroyed());
    }
}
