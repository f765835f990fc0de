//! Wall-clock source for the timer

use chrono::{DateTime, Utc};

/// Source of the current point in time.
///
/// Pause marker payloads are wall-clock timestamps shared between processes,
/// so every clock must report wall time in UTC.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock anchored at a fixed wall time that advances with tokio's time source,
/// so it follows `tokio::time::pause` and auto-advance in tests.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct TokioClock {
    origin: DateTime<Utc>,
    started: tokio::time::Instant,
}

#[cfg(test)]
impl TokioClock {
    pub(crate) fn new(origin: DateTime<Utc>) -> Self {
        Self {
            origin,
            started: tokio::time::Instant::now(),
        }
    }
}

#[cfg(test)]
impl Clock for TokioClock {
    fn now(&self) -> DateTime<Utc> {
        let elapsed = chrono::Duration::from_std(self.started.elapsed())
            .unwrap_or_else(|_| chrono::Duration::zero());
        self.origin + elapsed
    }
}
