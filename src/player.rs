//! Seats, players and their action logs.
//!
//! A `Player` bundles whatever identity the presentation layer uses for a
//! user with the state the game keeps about them. The identity is reached
//! through the `identity` field, never by falling back on the player.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::config::LOG_WINDOW;

/// Which side of the table a player sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    /// The opposing seat.
    pub fn other(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }
}

impl fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerSlot::One => write!(f, "player 1"),
            PlayerSlot::Two => write!(f, "player 2"),
        }
    }
}

/// Whether a log line is good or bad news for the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Tone {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    pub tone: Tone,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.tone {
            Tone::Positive => '+',
            Tone::Negative => '-',
        };
        write!(f, "{} {}", sign, self.message)
    }
}

/// Everything that happened from one player's point of view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionLog {
    entries: Vec<LogEntry>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tone: Tone, message: impl Into<String>) {
        self.entries.push(LogEntry {
            tone,
            message: message.into(),
        });
    }

    /// Full history, oldest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// The last `LOG_WINDOW` entries.
    pub fn recent(&self) -> &[LogEntry] {
        let start = self.entries.len().saturating_sub(LOG_WINDOW);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recent entries separated by blank lines, led by `...` when older
    /// entries fell out of the window.
    pub fn render(&self) -> String {
        use core::fmt::Write;

        let mut out = String::new();
        if self.entries.len() > LOG_WINDOW {
            out.push_str("...\n\n");
        }
        for (i, entry) in self.recent().iter().enumerate() {
            if i > 0 {
                out.push_str("\n\n");
            }
            let _ = write!(out, "{}", entry);
        }
        out
    }
}

/// A seated player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Player<P> {
    /// The presentation layer's handle for this user.
    pub identity: P,
    pub log: ActionLog,
    /// Raised once the player asks to call the game off.
    pub approves_cancel: bool,
}

impl<P> Player<P> {
    pub fn new(identity: P) -> Self {
        Self {
            identity,
            log: ActionLog::new(),
            approves_cancel: false,
        }
    }
}
