//! Controller module
//!
//! Decides per invocation whether to toggle pause, report status or start a
//! new countdown, replacing any timer that is already running.

pub mod context;
pub mod handlers;
pub mod responses;

pub use context::ControllerContext;
pub use handlers::{dispatch, start_handler, status_handler, toggle_pause_handler, Request};
pub use responses::ControllerResponse;
