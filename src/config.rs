//! Game configuration loaded from TOML.
//!
//! Every field is optional in the file; missing values fall back to the
//! defaults below.
//!
//! ```toml
//! rows = 6
//! word_length = 5
//! chain_word_length = 6
//!
//! [timings]
//! reveal_duration = 1.0
//! time_warning_after = 9.0
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GameError;

/// Durations in seconds driving reveals, fades and the round timer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Total time for a row's tile-by-tile reveal.
    pub reveal_duration: f32,
    /// Time for a row to fade from opaque to gone once its delay has passed.
    pub fade_duration: f32,
    /// Extra fade delay per row, multiplied by the row's fade order.
    pub fade_delay_factor: f32,
    /// Round time spent entering letters before the host is warned.
    pub time_warning_after: f32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            reveal_duration: 1.0,
            fade_duration: 0.4,
            fade_delay_factor: 0.1,
            time_warning_after: 9.0,
        }
    }
}

impl Timings {
    /// All-zero timings: reveals and fades finish on the next tick.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            reveal_duration: 0.0,
            fade_duration: 0.0,
            fade_delay_factor: 0.0,
            time_warning_after: 9.0,
        }
    }
}

/// Board and rule settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Rows available in a standard round.
    pub rows: usize,
    /// Letters per standard and build-off row.
    pub word_length: usize,
    /// Letters per word-chain row.
    pub chain_word_length: usize,
    /// Accepted chain words needed to finish the round.
    pub chain_rows: usize,
    /// Perpendicular continuations before the chain phase starts.
    pub max_build_offs: usize,
    /// Look submissions up in the accepted-guess list. When off, any full row
    /// is scored.
    pub validate_guesses: bool,
    /// Directory holding `solutions.txt`, `guesses.txt` and `chain_words.txt`.
    /// The embedded lists are used when unset.
    pub data_dir: Option<PathBuf>,
    pub timings: Timings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            word_length: 5,
            chain_word_length: 6,
            chain_rows: 6,
            max_build_offs: 1,
            validate_guesses: true,
            data_dir: None,
            timings: Timings::default(),
        }
    }
}

impl GameConfig {
    /// Load and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Io` if the file cannot be read and
    /// `GameError::Config` if it does not parse or fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration text.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Config` on parse or validation failure.
    pub fn from_toml(content: &str) -> Result<Self, GameError> {
        let config: Self =
            toml::from_str(content).map_err(|e| GameError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the board can actually be built from these settings.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Config` naming the first offending field.
    pub fn validate(&self) -> Result<(), GameError> {
        let positive = [
            ("rows", self.rows),
            ("word_length", self.word_length),
            ("chain_word_length", self.chain_word_length),
            ("chain_rows", self.chain_rows),
        ];
        for (name, value) in positive {
            if value == 0 {
                return Err(GameError::Config(format!("{name} must be at least 1")));
            }
        }

        let t = &self.timings;
        let durations = [
            ("reveal_duration", t.reveal_duration),
            ("fade_duration", t.fade_duration),
            ("fade_delay_factor", t.fade_delay_factor),
            ("time_warning_after", t.time_warning_after),
        ];
        for (name, value) in durations {
            if !value.is_finite() || value < 0.0 {
                return Err(GameError::Config(format!(
                    "timings.{name} must be a non-negative number"
                )));
            }
        }

        Ok(())
    }
}
