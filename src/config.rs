//! Configuration and CLI argument handling

use std::{env, path::PathBuf, time::Duration};
use clap::Parser;

use crate::{controller::Request, store::StorePaths};

/// Directory name below the user data directory
const APP_DIR: &str = "bar-timer";

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "bar-timer")]
#[command(about = "A countdown timer that publishes its remaining time to a file")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Timer duration such as 1h30m20s, 45m10s or 30s; prompted for when omitted
    pub duration: Option<String>,

    /// Pause or resume the running timer
    #[arg(short, long, conflicts_with_all = ["status", "duration"])]
    pub pause: bool,

    /// Print what the running timer displays and exit
    #[arg(short, long, conflicts_with = "duration")]
    pub status: bool,

    /// Installation root holding tmp/ and alarm.wav
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Alarm sample to play instead of <root>/alarm.wav
    #[arg(long)]
    pub alarm: Option<PathBuf>,

    /// Alarm volume between 0.0 and 1.0
    #[arg(long, default_value = "0.2")]
    pub volume: f32,

    /// Poll interval of the countdown in milliseconds
    #[arg(long, default_value = "250")]
    pub tick_ms: u64,

    /// Wait after stopping a running timer, in milliseconds
    #[arg(long, default_value = "1000")]
    pub grace_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Reject settings the timer cannot honour.
    ///
    /// The poll interval must fit at least twice into the grace window so a
    /// running timer sees the kill marker before its replacement starts.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(format!("Volume must be between 0.0 and 1.0, got {}", self.volume));
        }
        if self.tick_ms == 0 {
            return Err("Tick interval must be positive".to_string());
        }
        if self.tick_ms.saturating_mul(2) > self.grace_ms {
            return Err(format!(
                "Tick interval ({}ms) must be at most half the grace window ({}ms)",
                self.tick_ms, self.grace_ms
            ));
        }
        Ok(())
    }

    /// The request selected by the flags
    pub fn request(&self) -> Request {
        if self.pause {
            Request::TogglePause
        } else if self.status {
            Request::Status
        } else {
            Request::Start { duration: self.duration.clone() }
        }
    }

    /// Installation root, defaulting to the user data directory
    pub fn root_dir(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(default_root)
    }

    /// File locations derived from the root and the alarm override
    pub fn store_paths(&self) -> StorePaths {
        let paths = StorePaths::from_root(&self.root_dir());
        match &self.alarm {
            Some(alarm) => paths.with_alarm_asset(alarm.clone()),
            None => paths,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn grace_period(&self) -> Duration {
        Duration::from_millis(self.grace_ms)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

/// `$XDG_DATA_HOME/bar-timer`, else `$HOME/.local/share/bar-timer`
fn default_root() -> PathBuf {
    env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}
