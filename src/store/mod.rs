//! Coordination store module
//!
//! The output file and marker files through which separate invocations of
//! the timer communicate.

pub mod coordination_store;
pub mod display;
pub mod paths;

// Re-export main types
pub use coordination_store::{CoordinationStore, MarkerSnapshot};
pub use display::DisplayContent;
pub use paths::StorePaths;
