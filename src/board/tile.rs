//! Letter tiles and the arena that owns them
//!
//! Rows hold `TileId`s, not tiles. Moving a tile from one row to another is a
//! matter of handing its id over; the tile itself never moves or gets copied.

use crate::core::FeedbackState;

/// Handle to a tile in a [`TileArena`]
///
/// The generation makes a stale id (whose tile was released and whose slot
/// was reused) resolve to nothing instead of to an unrelated tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId {
    index: u32,
    generation: u32,
}

/// A single letter cell
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    letter: Option<char>,
    feedback: FeedbackState,
    reveal_progress: f32,
    alpha: f32,
    locked: bool,
    dirty: bool,
}

impl Default for Tile {
    fn default() -> Self {
        Self {
            letter: None,
            feedback: FeedbackState::Empty,
            reveal_progress: 0.0,
            alpha: 1.0,
            locked: false,
            dirty: true,
        }
    }
}

impl Tile {
    #[must_use]
    pub const fn letter(&self) -> Option<char> {
        self.letter
    }

    #[must_use]
    pub const fn feedback(&self) -> FeedbackState {
        self.feedback
    }

    /// Flip progress of the reveal, 0 before it starts and 1 once flipped
    #[must_use]
    pub const fn reveal_progress(&self) -> f32 {
        self.reveal_progress
    }

    /// Opacity, only lowered while the owning row fades out
    #[must_use]
    pub const fn alpha(&self) -> f32 {
        self.alpha
    }

    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Set the displayed letter. No validation.
    pub fn set_letter(&mut self, letter: Option<char>) {
        if self.letter != letter {
            self.letter = letter;
            self.dirty = true;
        }
    }

    /// Replace the feedback state
    ///
    /// Returns false, leaving the tile untouched, if the tile is locked.
    pub fn set_state(&mut self, feedback: FeedbackState) -> bool {
        if self.locked {
            return false;
        }
        if self.feedback != feedback {
            self.feedback = feedback;
            self.dirty = true;
        }
        true
    }

    /// Clamped to `[0, 1]`
    pub fn set_reveal_progress(&mut self, progress: f32) {
        let progress = progress.clamp(0.0, 1.0);
        if (self.reveal_progress - progress).abs() > f32::EPSILON {
            self.reveal_progress = progress;
            self.dirty = true;
        }
    }

    /// Clamped to `[0, 1]`
    pub fn set_alpha(&mut self, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        if (self.alpha - alpha).abs() > f32::EPSILON {
            self.alpha = alpha;
            self.dirty = true;
        }
    }

    /// Mark the tile as carried into a continuation row. Permanent.
    pub(crate) fn lock(&mut self) {
        self.feedback = FeedbackState::Locked;
        self.reveal_progress = 1.0;
        self.locked = true;
        self.dirty = true;
    }
}

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    tile: Option<Tile>,
}

/// Storage for every live tile on a board
#[derive(Debug, Default)]
pub struct TileArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl TileArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an empty tile
    pub fn alloc(&mut self) -> TileId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.generation += 1;
            slot.tile = Some(Tile::default());
            TileId {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                tile: Some(Tile::default()),
            });
            TileId {
                index,
                generation: 0,
            }
        }
    }

    /// Destroy a tile. Stale or already released ids are ignored.
    pub fn release(&mut self, id: TileId) {
        if let Some(slot) = self.slots.get_mut(id.index as usize)
            && slot.generation == id.generation
            && slot.tile.take().is_some()
        {
            self.free.push(id.index);
        }
    }

    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.tile.as_ref())
    }

    pub fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.tile.as_mut())
    }

    /// Number of live tiles
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ids of tiles changed since the last drain
    pub fn drain_dirty(&mut self) -> Vec<TileId> {
        let mut changed = Vec::new();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if let Some(tile) = slot.tile.as_mut()
                && std::mem::take(&mut tile.dirty)
            {
                changed.push(TileId {
                    index: index as u32,
                    generation: slot.generation,
                });
            }
        }
        changed
    }
}
