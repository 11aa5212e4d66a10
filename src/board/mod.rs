//! Board engine
//!
//! Tiles live in an arena and rows refer to them by id, so a tile can be
//! carried from a winning row into the row built off it. The [`Board`] owns
//! every row and is the only thing that mutates them.

mod game;
pub mod host;
mod row;
mod signal;
mod state;
mod tile;
pub mod timing;

pub use game::{Board, Cursor};
pub use host::{Host, HostEvent, NullHost, RecordingHost, SoundCue, TimerCue};
pub use row::{Axis, Row, RowEvent, RowId};
pub use signal::OneShot;
pub use state::{GameMode, Key, Phase, RoundOutcome};
pub use tile::{Tile, TileArena, TileId};
pub use timing::{RoundTimer, cubic_in, flip_scale};
