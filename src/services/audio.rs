//! Alarm sample playback

use std::{io::ErrorKind, path::Path};
use tokio::process::Command;
use tracing::debug;

/// PulseAudio volume that corresponds to 100%
const PA_VOLUME_NORM: f32 = 65536.0;

/// Convert a 0.0-1.0 volume to a paplay `--volume` value
pub fn pa_volume(volume: f32) -> u32 {
    (volume.clamp(0.0, 1.0) * PA_VOLUME_NORM).round() as u32
}

/// Play an audio clip once and wait for it to finish.
///
/// Uses paplay so the volume can be scaled; falls back to aplay at full
/// volume when paplay is not installed.
pub async fn play_audio_clip(asset: &Path, volume: f32) -> Result<(), String> {
    if !asset.is_file() {
        return Err(format!("Alarm asset not found: {}", asset.display()));
    }

    debug!("Playing {} at volume {}", asset.display(), volume);

    let output = match Command::new("paplay")
        .arg(format!("--volume={}", pa_volume(volume)))
        .arg(asset)
        .output()
        .await
    {
        Ok(output) => output,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("paplay not available, falling back to aplay");
            Command::new("aplay")
                .arg("-q")
                .arg(asset)
                .output()
                .await
                .map_err(|e| format!("Failed to execute aplay: {}", e))?
        }
        Err(e) => return Err(format!("Failed to execute paplay: {}", e)),
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("Audio playback failed: {}", stderr.trim()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pa_volume() {
        assert_eq!(pa_volume(1.0), 65536);
        assert_eq!(pa_volume(0.2), 13107);
        assert_eq!(pa_volume(0.0), 0);
        assert_eq!(pa_volume(3.0), 65536);
        assert_eq!(pa_volume(-1.0), 0);
    }

    #[tokio::test]
    async fn test_missing_asset_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = play_audio_clip(&dir.path().join("missing.wav"), 0.2).await;
        assert!(result.unwrap_err().contains("not found"));
    }
}
