//! Well-known file locations under the installation root

use std::path::{Path, PathBuf};

/// Scratch directory below the installation root
pub const TMP_DIR: &str = "tmp";
/// Remaining-time display consumed by status bars
pub const OUTPUT_FILE: &str = "OUT.txt";
/// Present while the timer is paused; holds the pause start timestamp
pub const PAUSE_MARKER: &str = ".timer_pause";
/// Present when a newer invocation asks the running timer to stop
pub const KILL_MARKER: &str = ".timer_kill";
/// Alarm sample played on expiry
pub const ALARM_ASSET: &str = "alarm.wav";

/// Paths shared by every invocation. Injectable so tests get isolated instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub output_file: PathBuf,
    pub pause_marker: PathBuf,
    pub kill_marker: PathBuf,
    pub alarm_asset: PathBuf,
}

impl StorePaths {
    /// Lay out the standard files below `root`
    pub fn from_root(root: &Path) -> Self {
        let tmp = root.join(TMP_DIR);
        Self {
            output_file: tmp.join(OUTPUT_FILE),
            pause_marker: tmp.join(PAUSE_MARKER),
            kill_marker: tmp.join(KILL_MARKER),
            alarm_asset: root.join(ALARM_ASSET),
        }
    }

    /// Replace the alarm sample location
    pub fn with_alarm_asset(mut self, alarm_asset: PathBuf) -> Self {
        self.alarm_asset = alarm_asset;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_root_layout() {
        let paths = StorePaths::from_root(Path::new("/opt/bar-timer"));
        assert_eq!(paths.output_file, Path::new("/opt/bar-timer/tmp/OUT.txt"));
        assert_eq!(paths.pause_marker, Path::new("/opt/bar-timer/tmp/.timer_pause"));
        assert_eq!(paths.kill_marker, Path::new("/opt/bar-timer/tmp/.timer_kill"));
        assert_eq!(paths.alarm_asset, Path::new("/opt/bar-timer/alarm.wav"));
    }

    #[test]
    fn test_with_alarm_asset() {
        let paths = StorePaths::from_root(Path::new("/r")).with_alarm_asset(PathBuf::from("/s/beep.wav"));
        assert_eq!(paths.alarm_asset, Path::new("/s/beep.wav"));
        assert_eq!(paths.output_file, Path::new("/r/tmp/OUT.txt"));
    }
}
