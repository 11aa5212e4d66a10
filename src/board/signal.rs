//! One-shot completion signals
//!
//! A row raises at most one event per subscription. Firing clears the
//! subscription, and detaching a row clears all of them, so a destroyed row
//! can never notify the board again.

/// A subscription that resolves at most once
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OneShot {
    subscribed: bool,
}

impl OneShot {
    pub fn subscribe(&mut self) {
        self.subscribed = true;
    }

    /// Returns true exactly once per subscription
    pub fn fire(&mut self) -> bool {
        std::mem::take(&mut self.subscribed)
    }

    pub fn clear(&mut self) {
        self.subscribed = false;
    }

    #[must_use]
    pub const fn is_subscribed(&self) -> bool {
        self.subscribed
    }
}
