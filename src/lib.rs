//! Bar Timer - A single-instance countdown timer for status bars
//!
//! A running countdown writes its remaining time to a file. Later invocations
//! pause, resume or replace it by creating and removing marker files next to
//! that output file.

pub mod config;
pub mod controller;
pub mod services;
pub mod state;
pub mod store;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use controller::{dispatch, ControllerContext, ControllerResponse, Request};
pub use store::{CoordinationStore, StorePaths};
pub use utils::signals::shutdown_signal;
