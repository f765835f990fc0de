//! Countdown poll loop
//!
//! Each tick reads the marker files, advances the state machine and writes
//! the display. The interval sleep is the only suspension point besides the
//! alarm itself.

use std::{future::Future, time::Duration};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info, warn};

use crate::{
    services::Alarm,
    state::{TickOutcome, TimerSpec, TimerState},
    store::CoordinationStore,
    utils::Clock,
};

/// Default poll interval
pub const DEFAULT_TICK: Duration = Duration::from_millis(250);

/// How a countdown run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    /// Ran out; the output file was cleared and the alarm rang
    Expired,
    /// Stopped by the kill marker; the output file keeps its last value
    Killed,
    /// Stopped by a signal; the output file was cleared
    Interrupted,
}

/// Run one countdown to completion.
///
/// Stale markers from an earlier run are removed first. I/O failures on the
/// output file are logged and the loop keeps counting.
pub async fn run_countdown<A, S>(
    store: &CoordinationStore,
    clock: &dyn Clock,
    alarm: &A,
    spec: TimerSpec,
    tick: Duration,
    shutdown: S,
) -> TimerOutcome
where
    A: Alarm,
    S: Future<Output = ()>,
{
    info!("Starting countdown for {}s", spec.total_seconds);

    if let Err(e) = store.ensure_dirs() {
        warn!("{}", e);
    }
    store.clear_stale_markers();

    let mut timer = TimerState::start(spec, clock.now());
    let mut ticker = interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut shutdown => {
                info!("Countdown interrupted");
                if let Err(e) = store.clear_display() {
                    error!("Failed to clear output file: {}", e);
                }
                return TimerOutcome::Interrupted;
            }
        }

        let now = clock.now();
        let markers = store.snapshot(now);

        match timer.tick(now, &markers) {
            TickOutcome::Display(display) => {
                if let Err(e) = store.write_display(&display) {
                    error!("{}", e);
                }
            }
            TickOutcome::Expired => {
                if let Err(e) = store.clear_display() {
                    error!("Failed to clear output file: {}", e);
                }
                alarm.ring().await;
                return TimerOutcome::Expired;
            }
            TickOutcome::Killed => return TimerOutcome::Killed,
        }
    }
}
