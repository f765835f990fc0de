//! Desktop notification dispatch

use tokio::process::Command;
use tracing::{debug, info};

/// Send a desktop notification using notify-send
pub async fn send_notification(title: &str, body: &str) -> Result<(), String> {
    debug!("Sending notification: {} - {}", title, body);

    let output = Command::new("notify-send")
        .args([title, body])
        .output()
        .await
        .map_err(|e| format!("Failed to execute notify-send: {}", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("notify-send failed: {}", stderr));
    }

    info!("Notification sent");
    Ok(())
}
