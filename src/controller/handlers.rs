//! Request handlers
//!
//! A running timer is never touched directly. Pause and kill requests only
//! change marker files; the running instance notices them on its next tick.

use std::future::Future;
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::{
    services::Alarm,
    state::TimerSpec,
    tasks::run_countdown,
    utils::parse_duration,
};
use super::{ControllerContext, ControllerResponse};

/// What this invocation was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    TogglePause,
    Status,
    /// Start a countdown; `None` means no duration was entered
    Start { duration: Option<String> },
}

/// Route a request to its handler
pub async fn dispatch<A, S>(
    ctx: &ControllerContext<A>,
    request: Request,
    shutdown: S,
) -> ControllerResponse
where
    A: Alarm,
    S: Future<Output = ()>,
{
    match request {
        Request::TogglePause => toggle_pause_handler(ctx),
        Request::Status => status_handler(ctx),
        Request::Start { duration } => start_handler(ctx, duration, shutdown).await,
    }
}

/// Create the pause marker if absent, otherwise remove it
pub fn toggle_pause_handler<A: Alarm>(ctx: &ControllerContext<A>) -> ControllerResponse {
    if !ctx.store.is_timer_running() {
        debug!("No running timer detected, toggling pause marker anyway");
    }

    if ctx.store.pause_marker_exists() {
        match ctx.store.remove_pause_marker() {
            Ok(_) => {
                info!("Pause marker removed");
                ControllerResponse::Resumed
            }
            Err(e) => {
                error!("Failed to resume timer: {}", e);
                ControllerResponse::Failed(format!("Failed to resume timer: {}", e))
            }
        }
    } else {
        match ctx.store.create_pause_marker(ctx.clock.now()) {
            Ok(()) => {
                info!("Pause marker created");
                ControllerResponse::Paused
            }
            Err(e) => {
                error!("Failed to pause timer: {}", e);
                ControllerResponse::Failed(format!("Failed to pause timer: {}", e))
            }
        }
    }
}

/// Report what the running timer currently displays
pub fn status_handler<A: Alarm>(ctx: &ControllerContext<A>) -> ControllerResponse {
    ControllerResponse::Status(ctx.store.read_display())
}

/// Parse the duration, replace any running timer and count down in this process.
///
/// Invalid input returns before any file is touched.
pub async fn start_handler<A, S>(
    ctx: &ControllerContext<A>,
    input: Option<String>,
    shutdown: S,
) -> ControllerResponse
where
    A: Alarm,
    S: Future<Output = ()>,
{
    let Some(input) = input else {
        info!("No duration entered");
        return ControllerResponse::Cancelled;
    };

    let seconds = parse_duration(Some(&input));
    if seconds == 0 {
        info!("Rejected duration {:?}", input);
        return ControllerResponse::InvalidDuration;
    }

    if ctx.store.is_timer_running() {
        info!("Timer already running, creating kill marker to stop it");
        if let Err(e) = ctx.store.request_kill() {
            error!("{}", e);
        }
        sleep(ctx.grace).await;
    }

    let outcome = run_countdown(
        &ctx.store,
        ctx.clock.as_ref(),
        &ctx.alarm,
        TimerSpec::new(seconds),
        ctx.tick,
        shutdown,
    )
    .await;

    ControllerResponse::Finished(outcome)
}
