//! User-facing results of a controller request

use std::fmt;

use crate::{store::DisplayContent, tasks::TimerOutcome};

/// Shown when the duration string has no usable tokens
pub const INVALID_DURATION_MESSAGE: &str =
    "Invalid time format. Use format like '1h30m20s', '45m10s' or '30s'";

/// Result of handling one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerResponse {
    Paused,
    Resumed,
    /// Current display of the running timer, if any
    Status(Option<DisplayContent>),
    /// No duration was entered
    Cancelled,
    InvalidDuration,
    Finished(TimerOutcome),
    Failed(String),
}

impl ControllerResponse {
    pub fn is_failure(&self) -> bool {
        matches!(self, ControllerResponse::Failed(_))
    }
}

impl fmt::Display for ControllerResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerResponse::Paused => write!(f, "Timer paused"),
            ControllerResponse::Resumed => write!(f, "Timer resumed"),
            ControllerResponse::Status(Some(display)) => write!(f, "{}", display),
            ControllerResponse::Status(None) => write!(f, "No timer running"),
            ControllerResponse::Cancelled => write!(f, "Timer cancelled"),
            ControllerResponse::InvalidDuration => write!(f, "{}", INVALID_DURATION_MESSAGE),
            ControllerResponse::Finished(TimerOutcome::Expired) => write!(f, "Time is up!"),
            ControllerResponse::Finished(TimerOutcome::Killed) => write!(f, "Timer replaced by a new timer"),
            ControllerResponse::Finished(TimerOutcome::Interrupted) => write!(f, "Timer interrupted"),
            ControllerResponse::Failed(message) => write!(f, "{}", message),
        }
    }
}
