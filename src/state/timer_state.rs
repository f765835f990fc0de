//! Countdown state machine
//!
//! The engine is driven by one handler, [`TimerState::tick`], which takes the
//! current time and the observed marker files and returns what the poll loop
//! should do next. Time arithmetic follows
//! `remaining = end_time - current_time + total_paused`, where `current_time`
//! is pinned to the pause start while paused and `total_paused` accumulates
//! every completed pause interval.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use crate::{
    store::{DisplayContent, MarkerSnapshot},
    utils::format_remaining,
};

/// How long a countdown runs. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSpec {
    pub total_seconds: u64,
}

impl TimerSpec {
    pub fn new(total_seconds: u64) -> Self {
        Self { total_seconds }
    }

    pub fn duration(&self) -> Duration {
        // Anything past chrono's range is effectively forever.
        i64::try_from(self.total_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX)
    }
}

/// Lifecycle phase of a countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Running,
    /// Holding while the pause marker exists
    Paused,
    /// Terminal, the alarm fires
    Expired,
    /// Terminal, stopped by the kill marker without alarm
    Killed,
}

impl TimerPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TimerPhase::Expired | TimerPhase::Killed)
    }
}

/// Typed control events derived from marker file observations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    Pause { at: DateTime<Utc> },
    Resume,
    Kill,
}

/// Result of one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep counting and show this in the output file
    Display(DisplayContent),
    Expired,
    Killed,
}

/// State of a single countdown run
#[derive(Debug, Clone)]
pub struct TimerState {
    spec: TimerSpec,
    started_at: DateTime<Utc>,
    end_time: DateTime<Utc>,
    total_paused: Duration,
    paused_at: Option<DateTime<Utc>>,
    phase: TimerPhase,
}

impl TimerState {
    /// Begin a countdown at `now`
    pub fn start(spec: TimerSpec, now: DateTime<Utc>) -> Self {
        let end_time = now
            .checked_add_signed(spec.duration())
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self {
            spec,
            started_at: now,
            end_time,
            total_paused: Duration::zero(),
            paused_at: None,
            phase: TimerPhase::Running,
        }
    }

    pub fn spec(&self) -> TimerSpec {
        self.spec
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    pub fn paused_at(&self) -> Option<DateTime<Utc>> {
        self.paused_at
    }

    /// Sum of all completed pause intervals
    pub fn total_paused(&self) -> Duration {
        self.total_paused
    }

    /// Remaining time at `now`; does not advance while paused
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        let current = self.paused_at.unwrap_or(now);
        self.end_time - current + self.total_paused
    }

    /// Apply a control event. Events that do not change anything
    /// (pausing while paused, resuming while running, anything after a
    /// terminal phase) are ignored and return `false`.
    pub fn apply(&mut self, event: ControlEvent, now: DateTime<Utc>) -> bool {
        if self.phase.is_terminal() {
            return false;
        }

        match event {
            ControlEvent::Pause { at } => {
                if self.paused_at.is_some() {
                    return false;
                }
                let at = at.max(self.started_at).min(now);
                self.paused_at = Some(at);
                self.phase = TimerPhase::Paused;
                info!("Timer paused");
            }
            ControlEvent::Resume => {
                let Some(paused_at) = self.paused_at.take() else {
                    return false;
                };
                let pause_duration = (now - paused_at).max(Duration::zero());
                self.total_paused = self.total_paused + pause_duration;
                self.phase = TimerPhase::Running;
                info!("Timer resumed after {}s", pause_duration.num_seconds());
            }
            ControlEvent::Kill => {
                self.phase = TimerPhase::Killed;
                info!("Kill marker found, stopping timer");
            }
        }
        true
    }

    /// Advance the state machine by one poll.
    pub fn tick(&mut self, now: DateTime<Utc>, markers: &MarkerSnapshot) -> TickOutcome {
        match self.phase {
            TimerPhase::Expired => return TickOutcome::Expired,
            TimerPhase::Killed => return TickOutcome::Killed,
            TimerPhase::Running | TimerPhase::Paused => {}
        }

        match (markers.pause, self.is_paused()) {
            (Some(at), false) => {
                self.apply(ControlEvent::Pause { at }, now);
            }
            (None, true) => {
                self.apply(ControlEvent::Resume, now);
            }
            _ => {}
        }

        let remaining = self.remaining(now);
        if remaining <= Duration::zero() {
            self.phase = TimerPhase::Expired;
            info!("Timer expired after {}s", self.spec.total_seconds);
            return TickOutcome::Expired;
        }

        if markers.kill {
            self.apply(ControlEvent::Kill, now);
            return TickOutcome::Killed;
        }

        let shown = DisplayContent::new(format_remaining(remaining), self.is_paused());
        debug!("Tick: {}", shown);
        TickOutcome::Display(shown)
    }
}
