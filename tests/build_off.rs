mod common;

use common::{free_letters, instant_board, keys, timed_board, type_and_submit};
use wordle_buildoff::board::{
    Axis, Board, GameMode, HostEvent, Key, NullHost, Phase, RecordingHost, RoundOutcome,
    SoundCue,
};
use wordle_buildoff::commands::simple::settle;
use wordle_buildoff::config::GameConfig;
use wordle_buildoff::core::FeedbackState;
use wordle_buildoff::error::{GameError, Rejection, SubmitOutcome};
use wordle_buildoff::wordlists::{Dictionary, MemorySource, WordList};

/// Win "crane" on the second row and let the continuation play out
fn win_first_round(board: &mut Board<RecordingHost>) {
    type_and_submit(board, "audio");
    settle(board);
    type_and_submit(board, "crane");
    settle(board);
}

#[test]
fn winning_row_spawns_perpendicular_build_off() {
    let mut board = timed_board(11);
    type_and_submit(&mut board, "audio");
    settle(&mut board);
    type_and_submit(&mut board, "crane");
    assert_eq!(board.phase(), Phase::Submitted);

    while board.phase() == Phase::Submitted {
        board.tick(1.0 / 60.0, &[]);
    }
    assert_eq!(board.phase(), Phase::Fading);
    assert_eq!(board.rows_fading(), 5);

    // The last row to fade waits 0.4s and fades for another 0.4s
    for _ in 0..20 {
        board.tick(1.0 / 60.0, &[]);
    }
    assert_eq!(board.phase(), Phase::Fading);

    settle(&mut board);
    assert_eq!(board.phase(), Phase::Entering);
    assert_eq!(board.mode(), GameMode::BuildOff);
    assert_eq!(board.continuation_count(), 1);

    assert_eq!(board.rows().len(), 1);
    let row = &board.rows()[0];
    assert_eq!(row.axis(), Axis::Vertical);
    assert_eq!(row.len(), 5);

    let column = board.column_skip().unwrap();
    assert_eq!(row.carried_column(), Some(column));
    let carried = board.tile(row.tile_at(column).unwrap()).unwrap();
    let letter = "crane".chars().nth(column).unwrap();
    assert_eq!(carried.letter(), Some(letter));
    assert_eq!(carried.feedback(), FeedbackState::Locked);
    assert!(carried.is_locked());

    // New solution shares the carried letter
    let solution = board.solution().unwrap();
    assert_ne!(solution.text(), "crane");
    assert_eq!(solution.letter_at(column), Some(letter));
    assert!(board.is_checking_words());

    let host = board.host();
    assert_eq!(host.count(&HostEvent::Sound(SoundCue::CorrectGuess)), 1);
    assert_eq!(host.count(&HostEvent::Sound(SoundCue::WrongGuess)), 1);
    assert_eq!(host.count(&HostEvent::Sound(SoundCue::Win)), 0);

    // Only the carried tile survived from the first round
    assert_eq!(board.arena().len(), 5);
}

#[test]
fn cursor_stays_on_winner_while_rows_fade() {
    let mut board = timed_board(4);
    for _ in 0..5 {
        type_and_submit(&mut board, "audio");
        settle(&mut board);
    }
    type_and_submit(&mut board, "crane");
    let winner = board.active_row().unwrap().id();

    while board.phase() == Phase::Submitted {
        board.tick(1.0 / 60.0, &[]);
    }
    let mut fading_ticks = 0;
    while board.phase() == Phase::Fading {
        assert!(board.cursor().row < board.rows().len());
        assert_eq!(board.active_row().map(|row| row.id()), Some(winner));
        board.tick(1.0 / 60.0, &[]);
        fading_ticks += 1;
    }
    assert!(fading_ticks > 1);
    assert_eq!(board.mode(), GameMode::BuildOff);
    assert_eq!(board.cursor().row, 0);
}

#[test]
fn build_off_without_matching_solution_is_a_filler_row() {
    let source = MemorySource::new()
        .with(WordList::Solutions, "crane\nzzzzz\n")
        .with(WordList::AcceptedGuesses, common::GUESSES)
        .with(WordList::ChainWords, common::CHAIN_WORDS);
    let dictionary = Dictionary::load(&source, 5, 6).unwrap();
    let config = GameConfig {
        timings: wordle_buildoff::config::Timings::instant(),
        ..GameConfig::default()
    };
    let mut board = common::board_from(dictionary, config, 3);

    type_and_submit(&mut board, "crane");
    settle(&mut board);
    assert_eq!(board.mode(), GameMode::BuildOff);
    assert!(!board.is_checking_words());
    assert!(board.solution().is_none());

    // Any letters go through, none of them can score
    let skip = board.column_skip().unwrap();
    board.tick(0.0, &keys("qqqq"));
    assert_eq!(board.submit(), SubmitOutcome::Accepted { won: false });
    settle(&mut board);

    let row = &board.rows()[0];
    for (i, &id) in row.tiles().iter().enumerate() {
        let expected = if i == skip {
            FeedbackState::Locked
        } else {
            FeedbackState::Incorrect
        };
        assert_eq!(board.tile(id).unwrap().feedback(), expected, "column {i}");
    }
    assert_eq!(
        board.phase(),
        Phase::Complete(RoundOutcome::Lost { build_offs: 1 })
    );
}

#[test]
fn cursor_skips_locked_column() {
    for seed in 0..12 {
        let mut board = instant_board(seed);
        win_first_round(&mut board);
        assert_eq!(board.mode(), GameMode::BuildOff);

        let skip = board.column_skip().unwrap();
        assert_ne!(board.cursor().column, skip);

        for key in keys("think") {
            board.tick(0.0, &[key]);
            assert_ne!(board.cursor().column, skip, "seed {seed}");
        }
        assert_eq!(board.cursor().column, 5);

        for _ in 0..7 {
            board.tick(0.0, &[Key::Backspace]);
            assert_ne!(board.cursor().column, skip, "seed {seed}");
        }
        let first = usize::from(skip == 0);
        assert_eq!(board.cursor().column, first);

        // Carried letter survives the backspaces
        let row = board.active_row().unwrap();
        let carried = board.tile(row.tile_at(skip).unwrap()).unwrap();
        assert_eq!(carried.letter(), "crane".chars().nth(skip));
    }
}

#[test]
fn build_off_scoring_excludes_locked_column() {
    let mut board = instant_board(5);
    win_first_round(&mut board);
    let skip = board.column_skip().unwrap();

    // "crane" always fits the carried letter and is never the new solution
    board.tick(0.0, &keys(&free_letters("crane", Some(skip))));
    assert_eq!(
        board.active_row().unwrap().current_word(board.arena()),
        "crane"
    );
    assert_eq!(board.submit(), SubmitOutcome::Accepted { won: false });
    settle(&mut board);

    let row = &board.rows()[0];
    for (i, &id) in row.tiles().iter().enumerate() {
        let feedback = board.tile(id).unwrap().feedback();
        if i == skip {
            assert_eq!(feedback, FeedbackState::Locked);
        } else {
            assert!(feedback.is_scored(), "column {i} is {feedback:?}");
        }
    }
}

#[test]
fn missing_the_build_off_loses_without_lose_cue() {
    let mut board = instant_board(5);
    win_first_round(&mut board);
    let skip = board.column_skip();

    type_and_submit(&mut board, &free_letters("crane", skip));
    settle(&mut board);

    let outcome = RoundOutcome::Lost { build_offs: 1 };
    assert_eq!(board.phase(), Phase::Complete(outcome));
    assert_eq!(board.host().count(&HostEvent::Sound(SoundCue::Lose)), 0);
    assert_eq!(board.host().count(&HostEvent::RoundComplete(outcome)), 1);
}

#[test]
fn second_win_starts_word_chain_and_chain_completes_round() {
    let config = GameConfig {
        chain_rows: 2,
        timings: wordle_buildoff::config::Timings::instant(),
        ..GameConfig::default()
    };
    let mut board = common::board_with(config, 9);
    win_first_round(&mut board);

    let skip = board.column_skip();
    let solution = board.solution().unwrap().text().to_string();
    board.tick(0.0, &keys(&free_letters(&solution, skip)));
    assert_eq!(board.submit(), SubmitOutcome::Accepted { won: true });
    settle(&mut board);

    let last = solution.chars().last().unwrap();
    assert_eq!(
        board.mode(),
        GameMode::WordChain {
            last_letter: last,
            accepted: 0
        }
    );
    assert_eq!(board.continuation_count(), 1);
    assert_eq!(board.column_skip(), None);
    let chain_row = board.active_row().unwrap();
    assert_eq!(chain_row.len(), 6);
    assert_eq!(chain_row.axis(), Axis::Horizontal);

    // Wrong first letter
    let wrong = common::CHAIN_WORDS
        .lines()
        .find(|w| !w.starts_with(last))
        .unwrap();
    type_and_submit(&mut board, wrong);
    assert!(matches!(
        board.submit(),
        SubmitOutcome::Rejected(Rejection::ChainLetterMismatch { expected, .. }) if expected == last
    ));

    // Not a chain word at all
    board.tick(0.0, &[Key::Backspace; 6]);
    type_and_submit(&mut board, "zzzzzz");
    assert_eq!(board.submit(), SubmitOutcome::Rejected(Rejection::InvalidWord));
    board.tick(0.0, &[Key::Backspace; 6]);

    let mut required = last;
    for accepted in 0..2 {
        let word = common::CHAIN_WORDS
            .lines()
            .find(|w| w.starts_with(required))
            .unwrap();
        type_and_submit(&mut board, word);
        settle(&mut board);

        let row = board.rows().iter().rev().nth(usize::from(accepted == 0)).unwrap();
        assert!(
            row.tiles()
                .iter()
                .all(|&id| board.tile(id).unwrap().feedback() == FeedbackState::ValidChainWord)
        );
        required = word.chars().last().unwrap();
    }

    let outcome = RoundOutcome::Won {
        build_offs: 1,
        chain_words: 2,
    };
    assert_eq!(board.phase(), Phase::Complete(outcome));
    assert_eq!(board.host().count(&HostEvent::Sound(SoundCue::Win)), 1);
    assert_eq!(board.host().count(&HostEvent::RoundComplete(outcome)), 1);
}

#[test]
fn no_build_offs_goes_straight_to_chain() {
    let config = GameConfig {
        max_build_offs: 0,
        timings: wordle_buildoff::config::Timings::instant(),
        ..GameConfig::default()
    };
    let mut board = common::board_with(config, 2);
    type_and_submit(&mut board, "crane");
    settle(&mut board);

    assert_eq!(
        board.mode(),
        GameMode::WordChain {
            last_letter: 'e',
            accepted: 0
        }
    );
    // Winning row plus the first chain row
    assert_eq!(board.rows().len(), 2);
    assert_eq!(board.cursor().row, 1);
}

#[test]
fn board_loads_lists_from_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("solutions.txt"), "crane\r\nslate\r\n").unwrap();
    std::fs::write(dir.path().join("guesses.txt"), "audio\rthink\r").unwrap();
    std::fs::write(dir.path().join("chain_words.txt"), "eleven\n").unwrap();

    let config = GameConfig {
        data_dir: Some(dir.path().to_path_buf()),
        ..GameConfig::default()
    };
    let board = Board::from_config(config, NullHost, Some(4)).unwrap();
    assert_eq!(board.dictionary().solutions().len(), 2);
    assert!(board.dictionary().is_accepted_guess("THINK"));
    assert!(board.dictionary().is_accepted_guess("slate"));
}

#[test]
fn missing_list_blocks_the_board() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("solutions.txt"), "crane\n").unwrap();

    let config = GameConfig {
        data_dir: Some(dir.path().to_path_buf()),
        ..GameConfig::default()
    };
    let err = Board::from_config(config, NullHost, None).err().unwrap();
    assert!(matches!(
        err,
        GameError::DataUnavailable {
            list: WordList::AcceptedGuesses,
            ..
        }
    ));
}

#[test]
fn embedded_lists_start_a_round() {
    let mut board = Board::from_config(GameConfig::default(), NullHost, Some(42)).unwrap();
    board.new_round();
    assert_eq!(board.phase(), Phase::Entering);
    assert_eq!(board.solution().unwrap().len(), 5);
}
