//! Filesystem-backed state shared between timer processes
//!
//! Three files carry all cross-process state: the output file (what the
//! running timer displays), the pause marker (existence plus the pause start
//! timestamp) and the kill marker (existence only). Nothing is locked, so
//! every read tolerates a file vanishing between the check and the use: a
//! missing file always means "absent", never an error.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    process,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{DisplayContent, StorePaths};

/// Serialized payload of the pause marker
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PausePayload {
    paused_at: DateTime<Utc>,
}

/// Marker state observed at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkerSnapshot {
    /// Pause start when the pause marker exists
    pub pause: Option<DateTime<Utc>>,
    /// Whether the kill marker exists
    pub kill: bool,
}

/// Access to the output file and the marker files
#[derive(Debug, Clone)]
pub struct CoordinationStore {
    paths: StorePaths,
}

impl CoordinationStore {
    pub fn new(paths: StorePaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }

    /// Create the scratch directory holding the output and marker files
    pub fn ensure_dirs(&self) -> Result<(), String> {
        for path in [&self.paths.output_file, &self.paths.pause_marker, &self.paths.kill_marker] {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
            }
        }
        Ok(())
    }

    /// Current output file content, `None` when missing, empty or malformed
    pub fn read_display(&self) -> Option<DisplayContent> {
        match fs::read_to_string(&self.paths.output_file) {
            Ok(content) => DisplayContent::parse(&content),
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    debug!("Failed to read output file: {}", e);
                }
                None
            }
        }
    }

    /// A timer counts as running while the output file shows a clock
    pub fn is_timer_running(&self) -> bool {
        self.read_display().is_some()
    }

    /// Replace the output file content
    pub fn write_display(&self, display: &DisplayContent) -> Result<(), String> {
        self.write_output(&display.to_string())
    }

    /// Truncate the output file to an empty string
    pub fn clear_display(&self) -> Result<(), String> {
        self.write_output("")
    }

    /// Write through a sibling file and rename, so readers never see a torn clock.
    fn write_output(&self, content: &str) -> Result<(), String> {
        let target = &self.paths.output_file;
        let staging = staging_path(target);
        fs::write(&staging, content)
            .and_then(|_| fs::rename(&staging, target))
            .map_err(|e| {
                if let Err(cleanup) = remove_if_present(&staging) {
                    warn!("Failed to remove {}: {}", staging.display(), cleanup);
                }
                format!("Failed to write output file {}: {}", target.display(), e)
            })
    }

    pub fn pause_marker_exists(&self) -> bool {
        self.paths.pause_marker.exists()
    }

    /// Read the pause start timestamp. `Ok(None)` when the marker is absent.
    pub fn read_pause_marker(&self) -> Result<Option<DateTime<Utc>>, String> {
        let raw = match fs::read_to_string(&self.paths.pause_marker) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(format!("Failed to read pause marker: {}", e)),
        };
        serde_json::from_str::<PausePayload>(&raw)
            .map(|payload| Some(payload.paused_at))
            .map_err(|e| format!("Malformed pause marker: {}", e))
    }

    /// Create the pause marker holding `paused_at`
    pub fn create_pause_marker(&self, paused_at: DateTime<Utc>) -> Result<(), String> {
        self.ensure_dirs()?;
        let payload = serde_json::to_string(&PausePayload { paused_at })
            .map_err(|e| format!("Failed to serialize pause marker: {}", e))?;
        fs::write(&self.paths.pause_marker, payload)
            .map_err(|e| format!("Failed to write pause marker: {}", e))
    }

    /// Remove the pause marker. Returns whether a marker was removed.
    pub fn remove_pause_marker(&self) -> Result<bool, String> {
        remove_if_present(&self.paths.pause_marker)
            .map_err(|e| format!("Failed to remove pause marker: {}", e))
    }

    pub fn kill_requested(&self) -> bool {
        self.paths.kill_marker.exists()
    }

    /// Ask the running timer to stop
    pub fn request_kill(&self) -> Result<(), String> {
        self.ensure_dirs()?;
        fs::write(&self.paths.kill_marker, "")
            .map_err(|e| format!("Failed to create kill marker: {}", e))
    }

    /// Remove the kill marker. Returns whether a marker was removed.
    pub fn clear_kill_marker(&self) -> Result<bool, String> {
        remove_if_present(&self.paths.kill_marker)
            .map_err(|e| format!("Failed to remove kill marker: {}", e))
    }

    /// Drop markers left behind by a previous run. Failures are logged only.
    pub fn clear_stale_markers(&self) {
        match self.clear_kill_marker() {
            Ok(true) => info!("Removed stale kill marker"),
            Ok(false) => {}
            Err(e) => warn!("{}", e),
        }
        match self.remove_pause_marker() {
            Ok(true) => info!("Removed stale pause marker"),
            Ok(false) => {}
            Err(e) => warn!("{}", e),
        }
    }

    /// Observe both markers. A pause marker whose payload cannot be read
    /// still counts as present, with `now` standing in for the pause start.
    pub fn snapshot(&self, now: DateTime<Utc>) -> MarkerSnapshot {
        let pause = if self.pause_marker_exists() {
            match self.read_pause_marker() {
                Ok(paused_at) => paused_at,
                Err(e) => {
                    warn!("{}, using current time as pause start", e);
                    Some(now)
                }
            }
        } else {
            None
        };

        MarkerSnapshot {
            pause,
            kill: self.kill_requested(),
        }
    }
}

/// Per-process sibling of `target`, so concurrent writers never share a staging file
fn staging_path(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(".{}.{}.tmp", name, process::id()))
}

fn remove_if_present(path: &Path) -> std::io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn store_in(dir: &tempfile::TempDir) -> CoordinationStore {
        CoordinationStore::new(StorePaths::from_root(dir.path()))
    }

    #[test]
    fn test_missing_files_read_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.read_display().is_none());
        assert!(!store.is_timer_running());
        assert_eq!(store.read_pause_marker().unwrap(), None);
        assert!(!store.kill_requested());
        assert!(!store.remove_pause_marker().unwrap());
        assert!(!store.clear_kill_marker().unwrap());
        assert_eq!(store.snapshot(Utc::now()), MarkerSnapshot::default());
    }

    #[test]
    fn test_display_round_trip_and_running_detection() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.ensure_dirs().unwrap();

        store.write_display(&DisplayContent::new("00:10:00".into(), true)).unwrap();
        let raw = fs::read_to_string(&store.paths().output_file).unwrap();
        assert_eq!(raw, "[PAUSE] 00:10:00");
        assert!(store.is_timer_running());

        store.clear_display().unwrap();
        let raw = fs::read_to_string(&store.paths().output_file).unwrap();
        assert_eq!(raw, "");
        assert!(!store.is_timer_running());
    }

    #[test]
    fn test_failed_write_leaves_no_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.ensure_dirs().unwrap();
        // A directory in place of the output file makes the rename fail
        fs::create_dir(&store.paths().output_file).unwrap();

        let result = store.write_display(&DisplayContent::new("00:00:05".into(), false));
        assert!(result.unwrap_err().contains("Failed to write output file"));
        assert!(store.clear_display().is_err());

        let tmp = store.paths().output_file.parent().unwrap();
        let leftovers: Vec<_> = fs::read_dir(tmp)
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .filter(|name| name != "OUT.txt")
            .collect();
        assert!(leftovers.is_empty(), "{:?}", leftovers);
    }

    #[test]
    fn test_staging_path_is_per_process_sibling() {
        let staging = staging_path(Path::new("/r/tmp/OUT.txt"));
        assert_eq!(staging.parent(), Some(Path::new("/r/tmp")));
        assert_eq!(
            staging.file_name().unwrap().to_string_lossy(),
            format!(".OUT.txt.{}.tmp", process::id())
        );
    }

    #[test]
    fn test_running_detection_requires_clock_separator() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.ensure_dirs().unwrap();
        fs::write(&store.paths().output_file, "finished").unwrap();
        assert!(!store.is_timer_running());
    }

    #[test]
    fn test_pause_marker_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 15).unwrap();

        store.create_pause_marker(at).unwrap();
        assert!(store.pause_marker_exists());
        assert_eq!(store.read_pause_marker().unwrap(), Some(at));
        assert_eq!(store.snapshot(Utc::now()).pause, Some(at));

        assert!(store.remove_pause_marker().unwrap());
        assert!(!store.pause_marker_exists());
    }

    #[test]
    fn test_malformed_pause_marker_uses_observation_time() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.ensure_dirs().unwrap();
        fs::write(&store.paths().pause_marker, "not json").unwrap();

        assert!(store.read_pause_marker().is_err());
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        assert_eq!(store.snapshot(now).pause, Some(now));
    }

    #[test]
    fn test_kill_marker_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.request_kill().unwrap();
        assert!(store.kill_requested());
        assert!(store.snapshot(Utc::now()).kill);

        assert!(store.clear_kill_marker().unwrap());
        assert!(!store.kill_requested());
    }

    #[test]
    fn test_clear_stale_markers() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.request_kill().unwrap();
        store.create_pause_marker(Utc::now()).unwrap();

        store.clear_stale_markers();
        assert!(!store.kill_requested());
        assert!(!store.pause_marker_exists());
    }
}
