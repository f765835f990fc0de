//! Output file content

use std::fmt;

/// Prefix written in front of the clock while paused
pub const PAUSE_PREFIX: &str = "[PAUSE] ";

/// What the running timer shows in the output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayContent {
    pub remaining: String,
    pub paused: bool,
}

impl DisplayContent {
    pub fn new(remaining: String, paused: bool) -> Self {
        Self { remaining, paused }
    }

    /// Parse output file content. Returns `None` for empty or malformed
    /// content, i.e. whenever no timer is showing a clock.
    pub fn parse(content: &str) -> Option<Self> {
        let content = content.trim();
        if content.is_empty() || !content.contains(':') {
            return None;
        }
        match content.strip_prefix(PAUSE_PREFIX) {
            Some(rest) => Some(Self::new(rest.trim().to_string(), true)),
            None => Some(Self::new(content.to_string(), false)),
        }
    }
}

impl fmt::Display for DisplayContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.paused {
            write!(f, "{}{}", PAUSE_PREFIX, self.remaining)
        } else {
            write!(f, "{}", self.remaining)
        }
    }
}
