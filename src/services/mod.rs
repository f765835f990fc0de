//! External side effects module
//!
//! Desktop notifications and audio playback used when a countdown expires.

pub mod alarm;
pub mod audio;
pub mod notification;

// Re-export main functions
pub use alarm::{Alarm, AlarmBackend, DesktopBackend, SystemAlarm};
pub use audio::play_audio_clip;
pub use notification::send_notification;
