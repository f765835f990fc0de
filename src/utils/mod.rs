//! Utility functions module
//!
//! Duration parsing, clock formatting, the clock abstraction, signal
//! handling and interactive input.

pub mod clock;
pub mod duration;
pub mod format;
pub mod prompt;
pub mod signals;

// Re-export main functions
pub use clock::{Clock, SystemClock};
pub use duration::parse_duration;
pub use format::{format_clock, format_remaining};
pub use prompt::read_duration_string;
pub use signals::shutdown_signal;
