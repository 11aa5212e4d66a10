//! The board: rows, cursor, game mode and the submission pipeline
//!
//! Everything is driven from [`Board::tick`]. Within one tick the board
//! advances row timers first and handles the signals they raise, then applies
//! the tick's keys, then advances the round timer, and finally pushes changed
//! tiles to the host. A reveal that completes in a tick is therefore handled
//! before any input from that same tick.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace, warn};

use super::host::{Host, SoundCue, TimerCue};
use super::row::{Axis, Row, RowEvent, RowId};
use super::state::{GameMode, Key, Phase, RoundOutcome};
use super::tile::{Tile, TileArena, TileId};
use super::timing::RoundTimer;
use crate::config::GameConfig;
use crate::core::{FeedbackState, Word, is_winning, score_guess};
use crate::error::{GameError, IgnoreReason, Rejection, SubmitOutcome};
use crate::wordlists::{Dictionary, DirectorySource, EmbeddedSource};

/// Active row and column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub column: usize,
}

/// The submission whose reveal is running
#[derive(Debug, Clone)]
struct InFlight {
    row: RowId,
    word: String,
    won: bool,
}

/// Game board driving one round at a time
pub struct Board<H: Host> {
    dictionary: Dictionary,
    config: GameConfig,
    host: H,
    rng: StdRng,
    arena: TileArena,
    rows: Vec<Row>,
    next_row_id: u32,
    cursor: Cursor,
    column_skip: Option<usize>,
    round_solution: Option<Word>,
    solution: Option<Word>,
    check_word: bool,
    mode: GameMode,
    phase: Phase,
    continuation_count: usize,
    rows_fading: usize,
    in_flight: Option<InFlight>,
    /// Winning row and word waiting for the other rows to fade
    continuing: Option<(RowId, String)>,
    timer: RoundTimer,
    invalid_visible: bool,
    events: Vec<RowEvent>,
}

impl<H: Host> Board<H> {
    /// Create a board with an OS-seeded random source
    pub fn new(dictionary: Dictionary, config: GameConfig, host: H) -> Self {
        Self::with_rng(dictionary, config, host, StdRng::from_os_rng())
    }

    /// Create a board with a caller-supplied random source
    ///
    /// Row lengths follow the dictionary: a `config` whose word lengths
    /// disagree with the loaded lists is corrected with a warning.
    pub fn with_rng(dictionary: Dictionary, mut config: GameConfig, host: H, rng: StdRng) -> Self {
        if config.word_length != dictionary.word_length() {
            warn!(
                configured = config.word_length,
                loaded = dictionary.word_length(),
                "word length taken from the dictionary"
            );
            config.word_length = dictionary.word_length();
        }
        if config.chain_word_length != dictionary.chain_word_length() {
            warn!(
                configured = config.chain_word_length,
                loaded = dictionary.chain_word_length(),
                "chain word length taken from the dictionary"
            );
            config.chain_word_length = dictionary.chain_word_length();
        }
        Self {
            dictionary,
            config,
            host,
            rng,
            arena: TileArena::new(),
            rows: Vec::new(),
            next_row_id: 0,
            cursor: Cursor::default(),
            column_skip: None,
            round_solution: None,
            solution: None,
            check_word: true,
            mode: GameMode::Standard,
            phase: Phase::Idle,
            continuation_count: 0,
            rows_fading: 0,
            in_flight: None,
            continuing: None,
            timer: RoundTimer::default(),
            invalid_visible: false,
            events: Vec::new(),
        }
    }

    /// Validate `config`, load its word lists and build a board
    ///
    /// Lists come from `config.data_dir` when set, otherwise from the
    /// embedded lists. `seed` makes solution draws reproducible.
    ///
    /// # Errors
    ///
    /// `GameError::Config` for invalid settings, `GameError::DataUnavailable`
    /// when a word list is missing or empty.
    pub fn from_config(config: GameConfig, host: H, seed: Option<u64>) -> Result<Self, GameError> {
        config.validate()?;
        let dictionary = match &config.data_dir {
            Some(dir) => Dictionary::load(
                &DirectorySource::new(dir.clone()),
                config.word_length,
                config.chain_word_length,
            )?,
            None => Dictionary::load(
                &EmbeddedSource,
                config.word_length,
                config.chain_word_length,
            )?,
        };
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Ok(Self::with_rng(dictionary, config, host, rng))
    }

    // ---- Round control ----

    /// Start a round with a freshly drawn solution
    pub fn new_round(&mut self) {
        let solution = self.dictionary.pick_random_solution(&mut self.rng).clone();
        self.start_round_with(solution);
    }

    /// Restart the round with the same solution
    pub fn try_again(&mut self) {
        self.host.play(SoundCue::Button);
        match self.round_solution.clone() {
            Some(solution) => self.start_round_with(solution),
            None => self.new_round(),
        }
    }

    /// Start a round with a known solution
    pub fn start_round_with(&mut self, solution: Word) {
        self.clear_board();

        for order in 0..self.config.rows {
            let row = self.create_row(Axis::Horizontal, order, self.config.word_length);
            self.rows.push(row);
        }

        info!(solution = %solution, rows = self.rows.len(), "round started");
        self.round_solution = Some(solution.clone());
        self.solution = Some(solution);
        self.check_word = true;
        self.mode = GameMode::Standard;
        self.cursor = Cursor::default();
        self.phase = Phase::Entering;

        self.host.timer(TimerCue::Show);
        self.flush_tiles();
    }

    /// Cancel everything in flight and drop every row
    ///
    /// Rows are detached before they are destroyed, so nothing they were
    /// running can signal the board afterwards.
    pub fn clear_board(&mut self) {
        let mut discarded = Vec::new();
        for row in &mut self.rows {
            row.detach();
            row.destroy(&mut self.arena, &mut discarded);
        }
        debug_assert!(discarded.is_empty());
        self.rows.clear();
        self.events.clear();

        self.cursor = Cursor::default();
        self.column_skip = None;
        self.continuation_count = 0;
        self.rows_fading = 0;
        self.in_flight = None;
        self.continuing = None;
        self.mode = GameMode::Standard;
        self.phase = Phase::Idle;

        if self.timer.reset() {
            self.host.time_warning(false);
        }
        self.hide_invalid_word();
        self.flush_tiles();
    }

    // ---- Tick ----

    /// Advance the board by `dt` seconds and apply `keys` in order
    pub fn tick(&mut self, dt: f32, keys: &[Key]) {
        let mut events = std::mem::take(&mut self.events);
        for row in &mut self.rows {
            row.tick(dt, &mut self.arena, &mut events);
        }
        for event in events.drain(..) {
            self.on_row_event(event);
        }
        self.events = events;

        if self.phase == Phase::Fading && self.rows_fading == 0 {
            self.continue_chain();
        }

        for &key in keys {
            self.handle_key(key);
        }

        if self.phase == Phase::Entering
            && self.timer.tick(dt, self.config.timings.time_warning_after)
        {
            debug!(elapsed = self.timer.elapsed(), "time warning");
            self.host.time_warning(true);
        }

        self.flush_tiles();
    }

    fn handle_key(&mut self, key: Key) {
        if self.phase != Phase::Entering {
            trace!(?key, phase = ?self.phase, "key ignored");
            return;
        }

        match key {
            Key::Letter(c) if c.is_ascii_alphabetic() => self.type_letter(c.to_ascii_lowercase()),
            Key::Letter(c) => trace!(%c, "not a letter"),
            Key::Backspace => self.backspace(),
            Key::Enter => {
                self.submit();
            }
        }
    }

    fn type_letter(&mut self, letter: char) {
        let Some(row) = self.rows.get(self.cursor.row) else {
            return;
        };
        if self.cursor.column >= row.len() {
            trace!(%letter, "row full");
            return;
        }
        if let Some(tile) = row
            .tile_at(self.cursor.column)
            .and_then(|id| self.arena.get_mut(id))
        {
            tile.set_letter(Some(letter));
            tile.set_state(FeedbackState::Occupied);
        }
        self.cursor.column = self.next_column(self.cursor.column);
    }

    fn backspace(&mut self) {
        self.hide_invalid_word();
        let Some(column) = self.previous_column(self.cursor.column) else {
            debug!(column = self.cursor.column, "cursor clamped at row start");
            return;
        };
        if let Some(tile) = self
            .rows
            .get(self.cursor.row)
            .and_then(|row| row.tile_at(column))
            .and_then(|id| self.arena.get_mut(id))
        {
            tile.set_letter(None);
            tile.set_state(FeedbackState::Empty);
        }
        self.cursor.column = column;
    }

    /// Column after `column`, stepping over the locked column and clamped to
    /// one past the last
    fn next_column(&self, column: usize) -> usize {
        let len = self.active_row_len();
        let mut next = column + 1;
        while Some(next) == self.column_skip {
            next += 1;
        }
        if next > len {
            debug!(column = next, len, "cursor clamped at row end");
        }
        next.min(len)
    }

    /// Column before `column`, stepping over the locked column
    fn previous_column(&self, column: usize) -> Option<usize> {
        let mut previous = column;
        loop {
            previous = previous.checked_sub(1)?;
            if Some(previous) != self.column_skip {
                return Some(previous);
            }
        }
    }

    fn first_column(&self) -> usize {
        if self.column_skip == Some(0) {
            self.next_column(0)
        } else {
            0
        }
    }

    fn active_row_len(&self) -> usize {
        self.rows.get(self.cursor.row).map_or(0, Row::len)
    }

    // ---- Submission ----

    /// Submit the active row
    ///
    /// Only a full row is considered. A valid word starts the reveal and
    /// closes input until it completes; an invalid one raises the banner and
    /// leaves the row and cursor as they were.
    pub fn submit(&mut self) -> SubmitOutcome {
        match self.phase {
            Phase::Entering => {}
            Phase::Submitted => {
                debug!("submission while a reveal is running");
                return SubmitOutcome::Ignored(IgnoreReason::DoubleSubmission);
            }
            _ => return SubmitOutcome::Ignored(IgnoreReason::NotAcceptingInput),
        }

        let Some(row) = self.rows.get(self.cursor.row) else {
            return SubmitOutcome::Ignored(IgnoreReason::NotAcceptingInput);
        };
        if self.cursor.column < row.len() {
            return SubmitOutcome::Ignored(IgnoreReason::Incomplete);
        }
        let row_id = row.id();
        let len = row.len();
        let word = row.current_word(&self.arena);

        let verdict = match self.mode {
            GameMode::WordChain { last_letter, .. } => self.check_chain_word(&word, last_letter, len),
            GameMode::Standard | GameMode::BuildOff => self.check_guess(&word, len),
        };
        let states = match verdict {
            Ok(states) => states,
            Err(rejection) => {
                info!(%word, ?rejection, "submission rejected");
                self.invalid_visible = true;
                self.host.invalid_word(true);
                return SubmitOutcome::Rejected(rejection);
            }
        };

        let won = match self.mode {
            GameMode::WordChain { accepted, .. } => accepted + 1 >= self.config.chain_rows,
            GameMode::Standard | GameMode::BuildOff => is_winning(&states),
        };

        let duration = self.config.timings.reveal_duration;
        if let Some(row) = self.rows.get_mut(self.cursor.row)
            && let Err(err) = row.start_reveal(states, duration)
        {
            warn!(%err, "could not start reveal");
            return SubmitOutcome::Ignored(IgnoreReason::DoubleSubmission);
        }

        info!(%word, won, mode = %self.mode, "submission accepted");
        self.hide_invalid_word();
        if self.timer.reset() {
            self.host.time_warning(false);
        }
        self.host.timer(TimerCue::Flip);
        self.in_flight = Some(InFlight {
            row: row_id,
            word,
            won,
        });
        self.phase = Phase::Submitted;
        SubmitOutcome::Accepted { won }
    }

    fn check_guess(&self, word: &str, len: usize) -> Result<Vec<FeedbackState>, Rejection> {
        let solution = self.solution.as_ref().filter(|_| self.check_word);
        let Some(solution) = solution else {
            return Ok(filler_states(len, self.column_skip));
        };
        if self.config.validate_guesses && !self.dictionary.is_accepted_guess(word) {
            return Err(Rejection::InvalidWord);
        }
        Ok(score_guess(solution.text(), word, self.column_skip))
    }

    fn check_chain_word(
        &self,
        word: &str,
        last_letter: char,
        len: usize,
    ) -> Result<Vec<FeedbackState>, Rejection> {
        if !self.dictionary.is_chain_word(word) {
            return Err(Rejection::InvalidWord);
        }
        let found = word.chars().next().unwrap_or(' ');
        if found != last_letter {
            return Err(Rejection::ChainLetterMismatch {
                expected: last_letter,
                found,
            });
        }
        Ok(vec![FeedbackState::ValidChainWord; len])
    }

    fn hide_invalid_word(&mut self) {
        if std::mem::take(&mut self.invalid_visible) {
            self.host.invalid_word(false);
        }
    }

    // ---- Row signals and continuation ----

    fn on_row_event(&mut self, event: RowEvent) {
        trace!(?event, "row event");
        match event {
            RowEvent::RevealComplete(id) => {
                if let Some(flight) = self.in_flight.take_if(|flight| flight.row == id) {
                    self.on_reveal_complete(flight);
                }
            }
            RowEvent::Disappeared(_) => {
                self.rows_fading = self.rows_fading.saturating_sub(1);
            }
            RowEvent::Destroyed(id) => {
                self.rows.retain(|row| row.id() != id);
                self.focus_winner();
            }
        }
    }

    fn on_reveal_complete(&mut self, flight: InFlight) {
        if let GameMode::WordChain { accepted, .. } = self.mode {
            self.host.play(SoundCue::CorrectGuess);
            let accepted = accepted + 1;
            let last_letter = flight.word.chars().last().unwrap_or(' ');
            self.mode = GameMode::WordChain {
                last_letter,
                accepted,
            };
            if accepted >= self.config.chain_rows {
                self.complete(RoundOutcome::Won {
                    build_offs: self.continuation_count,
                    chain_words: accepted,
                });
            } else {
                self.append_chain_row();
            }
            return;
        }

        if flight.won {
            self.host.play(SoundCue::CorrectGuess);
            self.begin_continuation(flight);
            return;
        }

        self.host.play(SoundCue::WrongGuess);
        if self.cursor.row + 1 >= self.rows.len() {
            self.complete(RoundOutcome::Lost {
                build_offs: self.continuation_count,
            });
        } else {
            self.cursor.row += 1;
            self.cursor.column = self.first_column();
            self.phase = Phase::Entering;
        }
    }

    /// Fade every row but the winner, then continue once they are gone
    fn begin_continuation(&mut self, flight: InFlight) {
        let timings = self.config.timings;
        let mut order = 0;
        for row in self.rows.iter_mut().filter(|row| row.id() != flight.row) {
            row.start_fade_out(order, &timings);
            order += 1;
        }
        self.rows_fading = order;
        debug!(rows_fading = order, "continuing after win");

        self.continuing = Some((flight.row, flight.word));
        self.focus_winner();
        self.phase = Phase::Fading;
        if self.rows_fading == 0 {
            self.continue_chain();
        }
    }

    /// Keep the cursor on the winning row while rows around it disappear
    fn focus_winner(&mut self) {
        let Some((winner, _)) = &self.continuing else {
            return;
        };
        if let Some(index) = self.rows.iter().position(|row| row.id() == *winner) {
            self.cursor.row = index;
        }
    }

    fn continue_chain(&mut self) {
        let Some((winner, word)) = self.continuing.take() else {
            return;
        };
        if self.continuation_count < self.config.max_build_offs {
            self.spawn_build_off(winner, &word);
        } else {
            self.start_word_chain(winner, &word);
        }
    }

    /// Splice a random tile off the winning row into a new perpendicular row
    fn spawn_build_off(&mut self, winner: RowId, word: &str) {
        self.retain_only(winner);
        let Some(mut row) = self.rows.pop() else {
            warn!("winning row is gone");
            return;
        };

        let candidates: Vec<usize> = (0..row.len())
            .filter(|&column| Some(column) != row.carried_column())
            .collect();
        if candidates.is_empty() {
            self.rows.push(row);
            self.start_word_chain(winner, word);
            return;
        }
        let column = candidates[self.rng.random_range(0..candidates.len())];

        let carried = match row.remove_tile_at(column) {
            Ok(id) => id,
            Err(err) => {
                warn!(%err, "could not splice winning row");
                self.rows.push(row);
                self.start_word_chain(winner, word);
                return;
            }
        };
        let mut discarded = Vec::new();
        row.detach();
        row.destroy(&mut self.arena, &mut discarded);

        let letter = self.arena.get_mut(carried).and_then(|tile| {
            tile.lock();
            tile.letter()
        });

        let id = self.next_id();
        let new_row = Row::with_carried(
            id,
            row.axis().perpendicular(),
            0,
            self.config.word_length,
            column,
            carried,
            &mut self.arena,
        );
        self.rows.push(new_row);

        let previous = self.solution.as_ref().map_or("", Word::text);
        let next = letter.and_then(|letter| {
            self.dictionary
                .pick_solution_with(&mut self.rng, column, letter, previous)
                .cloned()
        });
        self.check_word = next.is_some();
        if next.is_none() {
            info!(column, ?letter, "no solution fits the carried letter, filler row");
        }
        self.solution = next;

        self.continuation_count += 1;
        self.mode = GameMode::BuildOff;
        self.column_skip = Some(column);
        self.cursor = Cursor {
            row: 0,
            column: self.first_column(),
        };
        self.phase = Phase::Entering;
        info!(
            column,
            ?letter,
            build_offs = self.continuation_count,
            "build-off row spawned"
        );
    }

    /// Keep the winning row and open the first chain row under it
    fn start_word_chain(&mut self, winner: RowId, word: &str) {
        self.retain_only(winner);
        let last_letter = word.chars().last().unwrap_or(' ');
        self.mode = GameMode::WordChain {
            last_letter,
            accepted: 0,
        };
        info!(%last_letter, "word chain started");
        self.append_chain_row();
    }

    fn append_chain_row(&mut self) {
        let order = self.rows.len();
        let row = self.create_row(Axis::Horizontal, order, self.config.chain_word_length);
        self.rows.push(row);
        self.column_skip = None;
        self.cursor = Cursor {
            row: self.rows.len() - 1,
            column: 0,
        };
        self.phase = Phase::Entering;
    }

    fn complete(&mut self, outcome: RoundOutcome) {
        info!(%outcome, "round complete");
        self.phase = Phase::Complete(outcome);
        match outcome {
            RoundOutcome::Won { .. } => self.host.play(SoundCue::Win),
            RoundOutcome::Lost { .. } if self.continuation_count == 0 => {
                self.host.play(SoundCue::Lose);
            }
            RoundOutcome::Lost { .. } => {}
        }
        if self.timer.reset() {
            self.host.time_warning(false);
        }
        self.host.timer(TimerCue::Hide);
        self.host.round_complete(outcome);
    }

    /// Destroy every row except `keep`
    fn retain_only(&mut self, keep: RowId) {
        let mut discarded = Vec::new();
        for row in self.rows.iter_mut().filter(|row| row.id() != keep) {
            row.detach();
            row.destroy(&mut self.arena, &mut discarded);
        }
        self.rows.retain(|row| row.id() == keep);
        self.rows_fading = 0;
    }

    fn create_row(&mut self, axis: Axis, order: usize, length: usize) -> Row {
        let id = self.next_id();
        Row::new(id, axis, order, length, &mut self.arena)
    }

    fn next_id(&mut self) -> RowId {
        let id = RowId(self.next_row_id);
        self.next_row_id += 1;
        id
    }

    fn flush_tiles(&mut self) {
        for id in self.arena.drain_dirty() {
            if let Some(tile) = self.arena.get(id) {
                self.host.tile_changed(id, tile);
            }
        }
    }

    // ---- Accessors ----

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Column of the carried tile in the active row
    #[must_use]
    pub const fn column_skip(&self) -> Option<usize> {
        self.column_skip
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn active_row(&self) -> Option<&Row> {
        self.rows.get(self.cursor.row)
    }

    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.arena.get(id)
    }

    #[must_use]
    pub const fn arena(&self) -> &TileArena {
        &self.arena
    }

    /// Solution of the active row; `None` before a round or on a filler row
    #[must_use]
    pub const fn solution(&self) -> Option<&Word> {
        self.solution.as_ref()
    }

    /// Whether the active row is scored against a solution
    #[must_use]
    pub const fn is_checking_words(&self) -> bool {
        self.check_word
    }

    #[must_use]
    pub const fn continuation_count(&self) -> usize {
        self.continuation_count
    }

    #[must_use]
    pub const fn rows_fading(&self) -> usize {
        self.rows_fading
    }

    #[must_use]
    pub const fn is_invalid_word_visible(&self) -> bool {
        self.invalid_visible
    }

    /// Seconds spent entering since the last valid submission
    #[must_use]
    pub const fn round_elapsed(&self) -> f32 {
        self.timer.elapsed()
    }

    #[must_use]
    pub const fn is_time_warning(&self) -> bool {
        self.timer.is_warning()
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

/// Feedback for a row with no solution: every free tile is a miss
fn filler_states(len: usize, locked: Option<usize>) -> Vec<FeedbackState> {
    (0..len)
        .map(|i| {
            if Some(i) == locked {
                FeedbackState::Locked
            } else {
                FeedbackState::Incorrect
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::host::{HostEvent, RecordingHost};
    use crate::config::Timings;
    use crate::wordlists::{MemorySource, WordList};

    fn dictionary() -> Dictionary {
        let source = MemorySource::new()
            .with(WordList::Solutions, "crane\nslate\n")
            .with(WordList::AcceptedGuesses, "audio\nhouse\n")
            .with(WordList::ChainWords, "eleven\nnumber\n");
        Dictionary::load(&source, 5, 6).unwrap()
    }

    fn board() -> Board<RecordingHost> {
        let config = GameConfig {
            timings: Timings::instant(),
            ..GameConfig::default()
        };
        let mut board = Board::with_rng(
            dictionary(),
            config,
            RecordingHost::new(),
            StdRng::seed_from_u64(7),
        );
        board.start_round_with(Word::new("crane").unwrap());
        board
    }

    fn type_word(board: &mut Board<RecordingHost>, word: &str) {
        let keys: Vec<Key> = word.chars().filter_map(Key::from_char).collect();
        board.tick(0.0, &keys);
    }

    #[test]
    fn round_start_lays_out_rows() {
        let board = board();
        assert_eq!(board.rows().len(), 6);
        assert!(board.rows().iter().all(|row| row.len() == 5));
        assert_eq!(board.phase(), Phase::Entering);
        assert_eq!(board.cursor(), Cursor::default());
        assert_eq!(board.host().count(&HostEvent::Timer(TimerCue::Show)), 1);
    }

    #[test]
    fn row_length_follows_dictionary() {
        let config = GameConfig {
            word_length: 6,
            chain_word_length: 4,
            ..GameConfig::default()
        };
        let mut board = Board::with_rng(
            dictionary(),
            config,
            RecordingHost::new(),
            StdRng::seed_from_u64(7),
        );
        assert_eq!(board.config().word_length, 5);
        assert_eq!(board.config().chain_word_length, 6);

        board.start_round_with(Word::new("crane").unwrap());
        assert!(board.rows().iter().all(|row| row.len() == 5));
        type_word(&mut board, "audio");
        assert_eq!(board.submit(), SubmitOutcome::Accepted { won: false });
    }

    #[test]
    fn typing_fills_and_clamps() {
        let mut board = board();
        type_word(&mut board, "audioX");
        let row = board.active_row().unwrap();
        assert_eq!(row.current_word(board.arena()), "audio");
        assert_eq!(board.cursor().column, 5);
    }

    #[test]
    fn backspace_stops_at_zero() {
        let mut board = board();
        type_word(&mut board, "au");
        board.tick(0.0, &[Key::Backspace, Key::Backspace, Key::Backspace]);
        assert_eq!(board.cursor().column, 0);
        assert_eq!(board.active_row().unwrap().current_word(board.arena()), "     ");
    }

    #[test]
    fn incomplete_row_is_ignored() {
        let mut board = board();
        type_word(&mut board, "aud");
        assert_eq!(
            board.submit(),
            SubmitOutcome::Ignored(IgnoreReason::Incomplete)
        );
    }

    #[test]
    fn reveal_blocks_further_submission() {
        let mut board = board();
        type_word(&mut board, "audio");
        assert_eq!(board.submit(), SubmitOutcome::Accepted { won: false });
        assert_eq!(
            board.submit(),
            SubmitOutcome::Ignored(IgnoreReason::DoubleSubmission)
        );

        board.tick(0.0, &[]);
        assert_eq!(board.phase(), Phase::Entering);
        assert_eq!(board.cursor(), Cursor { row: 1, column: 0 });
    }

    #[test]
    fn filler_row_marks_free_tiles_incorrect() {
        assert_eq!(
            filler_states(3, Some(1)),
            vec![
                FeedbackState::Incorrect,
                FeedbackState::Locked,
                FeedbackState::Incorrect
            ]
        );
    }

    #[test]
    fn clear_board_returns_to_idle() {
        let mut board = board();
        type_word(&mut board, "crane");
        board.submit();
        board.clear_board();

        assert_eq!(board.phase(), Phase::Idle);
        assert!(board.rows().is_empty());
        assert!(board.arena().is_empty());
        board.tick(1.0, &[Key::Letter('a')]);
        assert!(board.rows().is_empty());
    }
}
