//! State management module
//!
//! The countdown state machine and its value types.

pub mod timer_state;

// Re-export main types
pub use timer_state::{ControlEvent, TickOutcome, TimerPhase, TimerSpec, TimerState};
