//! Input keys, board phases and game modes

use std::fmt;

/// A discrete key-down event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Backspace,
    Enter,
}

impl Key {
    /// Letter key for an ASCII letter, lowercased. Anything else is `None`.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Self::Letter(c.to_ascii_lowercase()))
    }
}

/// Where the board is in its submission pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No round started
    #[default]
    Idle,
    /// Accepting keystrokes on the active row
    Entering,
    /// A reveal is running; input is ignored
    Submitted,
    /// Other rows are fading out ahead of a continuation
    Fading,
    /// The round is over
    Complete(RoundOutcome),
}

impl Phase {
    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Won { build_offs: usize, chain_words: usize },
    Lost { build_offs: usize },
}

impl RoundOutcome {
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Won { .. })
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won {
                build_offs,
                chain_words,
            } => write!(
                f,
                "won after {build_offs} build-off(s) and {chain_words} chain word(s)"
            ),
            Self::Lost { build_offs } => write!(f, "lost after {build_offs} build-off(s)"),
        }
    }
}

/// Which rules the active row is played under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Guess the solution on a stack of horizontal rows
    #[default]
    Standard,
    /// Guess a new solution on a single row built off a carried tile
    BuildOff,
    /// Enter chain words, each starting with the last letter of the one before
    WordChain { last_letter: char, accepted: usize },
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::BuildOff => write!(f, "build-off"),
            Self::WordChain { .. } => write!(f, "word chain"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_keys_are_lowercased_ascii() {
        assert_eq!(Key::from_char('Q'), Some(Key::Letter('q')));
        assert_eq!(Key::from_char('z'), Some(Key::Letter('z')));
        assert_eq!(Key::from_char('1'), None);
        assert_eq!(Key::from_char('é'), None);
    }

    #[test]
    fn outcome_display() {
        let won = RoundOutcome::Won {
            build_offs: 1,
            chain_words: 3,
        };
        assert!(won.is_win());
        assert_eq!(won.to_string(), "won after 1 build-off(s) and 3 chain word(s)");
        assert!(!RoundOutcome::Lost { build_offs: 0 }.is_win());
    }
}
