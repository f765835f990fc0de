//! Interactive duration input

use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Prompt shown when no duration was given on the command line
pub const DURATION_PROMPT: &str = "Enter timer duration (e.g., '1h30m20s', '45m10s', '30s'): ";

/// Ask for a duration string on stdin.
///
/// Returns `Ok(None)` when input ends before a line is entered, which the
/// controller reports as a cancelled request.
pub async fn read_duration_string() -> Result<Option<String>, String> {
    let mut stdout = io::stdout();
    stdout
        .write_all(DURATION_PROMPT.as_bytes())
        .await
        .map_err(|e| format!("Failed to write prompt: {}", e))?;
    stdout
        .flush()
        .await
        .map_err(|e| format!("Failed to flush prompt: {}", e))?;

    let mut lines = BufReader::new(io::stdin()).lines();
    lines
        .next_line()
        .await
        .map(|line| line.map(|l| l.trim().to_string()))
        .map_err(|e| format!("Failed to read duration: {}", e))
}
