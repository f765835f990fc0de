//! Clock string formatting

use chrono::Duration;

/// Format a second count as zero-padded `HH:MM:SS`. Hours are not wrapped at 24.
pub fn format_clock(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let seconds = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format a remaining duration, truncating fractional seconds toward zero.
/// Negative durations render as `00:00:00`.
pub fn format_remaining(remaining: Duration) -> String {
    format_clock(remaining.num_seconds().max(0) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00:00");
        assert_eq!(format_clock(59), "00:00:59");
        assert_eq!(format_clock(5420), "01:30:20");
        assert_eq!(format_clock(2710), "00:45:10");
    }

    #[test]
    fn test_format_clock_hours_unbounded() {
        assert_eq!(format_clock(90000), "25:00:00");
        assert_eq!(format_clock(360000), "100:00:00");
    }

    #[test]
    fn test_format_remaining_truncates() {
        assert_eq!(format_remaining(Duration::milliseconds(7900)), "00:00:07");
        assert_eq!(format_remaining(Duration::milliseconds(999)), "00:00:00");
        assert_eq!(format_remaining(Duration::seconds(-3)), "00:00:00");
    }
}
