//! Alarm fired when a countdown expires

use std::{future::Future, path::{Path, PathBuf}, time::Duration};
use tokio::time::sleep;
use tracing::{info, warn};

use super::{play_audio_clip, send_notification};

/// Number of times the alarm sample is played
pub const ALARM_ATTEMPTS: u32 = 5;
/// Pause after each successful playback
pub const ALARM_GAP: Duration = Duration::from_millis(300);

/// Side effect invoked once when a countdown expires.
///
/// Implementations must never fail: errors are logged and swallowed.
pub trait Alarm: Send + Sync {
    fn ring(&self) -> impl Future<Output = ()> + Send;
}

/// The outputs an alarm drives
pub trait AlarmBackend: Send + Sync {
    fn notify(&self, title: &str, body: &str) -> impl Future<Output = Result<(), String>> + Send;
    fn play(&self, asset: &Path, volume: f32) -> impl Future<Output = Result<(), String>> + Send;
}

/// notify-send and paplay/aplay
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopBackend;

impl AlarmBackend for DesktopBackend {
    fn notify(&self, title: &str, body: &str) -> impl Future<Output = Result<(), String>> + Send {
        send_notification(title, body)
    }

    fn play(&self, asset: &Path, volume: f32) -> impl Future<Output = Result<(), String>> + Send {
        play_audio_clip(asset, volume)
    }
}

/// Desktop notification followed by repeated playback of the alarm sample
#[derive(Debug, Clone)]
pub struct SystemAlarm<B = DesktopBackend> {
    pub asset: PathBuf,
    pub volume: f32,
    pub attempts: u32,
    pub gap: Duration,
    backend: B,
}

impl SystemAlarm {
    pub fn new(asset: PathBuf, volume: f32) -> Self {
        Self::with_backend(asset, volume, DesktopBackend)
    }
}

impl<B: AlarmBackend> SystemAlarm<B> {
    pub fn with_backend(asset: PathBuf, volume: f32, backend: B) -> Self {
        Self {
            asset,
            volume,
            attempts: ALARM_ATTEMPTS,
            gap: ALARM_GAP,
            backend,
        }
    }
}

impl<B: AlarmBackend> Alarm for SystemAlarm<B> {
    fn ring(&self) -> impl Future<Output = ()> + Send {
        async move {
            info!("Time is up, ringing alarm");

            if let Err(e) = self.backend.notify("Timer", "Time is up!").await {
                warn!("Notification failed: {}", e);
            }

            for attempt in 1..=self.attempts {
                match self.backend.play(&self.asset, self.volume).await {
                    Ok(()) => sleep(self.gap).await,
                    Err(e) => warn!("Failed to play alarm sound (attempt {}/{}): {}", attempt, self.attempts, e),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    /// Records calls; playback succeeds only while `working` is set
    #[derive(Debug, Clone, Default)]
    struct RecordingBackend {
        notifications: Arc<AtomicUsize>,
        plays: Arc<AtomicUsize>,
        working: bool,
    }

    impl AlarmBackend for RecordingBackend {
        fn notify(&self, _title: &str, _body: &str) -> impl Future<Output = Result<(), String>> + Send {
            self.notifications.fetch_add(1, Ordering::SeqCst);
            async { Err("notify-send missing".to_string()) }
        }

        fn play(&self, asset: &Path, _volume: f32) -> impl Future<Output = Result<(), String>> + Send {
            self.plays.fetch_add(1, Ordering::SeqCst);
            let result = if self.working {
                Ok(())
            } else {
                Err(format!("Alarm asset not found: {}", asset.display()))
            };
            async move { result }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_total_failure_still_returns_after_all_attempts() {
        let backend = RecordingBackend::default();
        let alarm = SystemAlarm::with_backend(PathBuf::from("/nonexistent/alarm.wav"), 0.2, backend.clone());

        let started = tokio::time::Instant::now();
        alarm.ring().await;

        assert_eq!(backend.notifications.load(Ordering::SeqCst), 1);
        assert_eq!(backend.plays.load(Ordering::SeqCst), ALARM_ATTEMPTS as usize);
        // Failed attempts are not followed by the gap
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_plays_are_spaced_by_gap() {
        let backend = RecordingBackend { working: true, ..Default::default() };
        let alarm = SystemAlarm::with_backend(PathBuf::from("alarm.wav"), 0.2, backend.clone());

        let started = tokio::time::Instant::now();
        alarm.ring().await;

        assert_eq!(backend.plays.load(Ordering::SeqCst), ALARM_ATTEMPTS as usize);
        assert_eq!(started.elapsed(), ALARM_GAP * ALARM_ATTEMPTS);
    }

    #[tokio::test]
    async fn test_desktop_backend_reports_missing_asset() {
        let dir = tempfile::tempdir().unwrap();
        let result = DesktopBackend.play(&dir.path().join("missing.wav"), 0.2).await;
        assert!(result.unwrap_err().contains("not found"));
    }
}
