//! Everything a controller request needs

use std::{sync::Arc, time::Duration};

use crate::{services::Alarm, store::CoordinationStore, utils::Clock};

/// Grace window granted to a running timer after asking it to stop
pub const DEFAULT_GRACE: Duration = Duration::from_secs(1);

/// Shared dependencies of the request handlers
pub struct ControllerContext<A> {
    pub store: CoordinationStore,
    pub clock: Arc<dyn Clock>,
    pub alarm: A,
    /// Poll interval of a countdown started by this invocation
    pub tick: Duration,
    /// Wait after creating the kill marker before starting a new countdown
    pub grace: Duration,
}

impl<A: Alarm> ControllerContext<A> {
    pub fn new(
        store: CoordinationStore,
        clock: Arc<dyn Clock>,
        alarm: A,
        tick: Duration,
        grace: Duration,
    ) -> Self {
        Self {
            store,
            clock,
            alarm,
            tick,
            grace,
        }
    }
}
