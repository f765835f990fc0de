//! Long-running tasks module
//!
//! This module contains the countdown poll loop.

pub mod countdown;

// Re-export main functions
pub use countdown::{run_countdown, TimerOutcome, DEFAULT_TICK};
