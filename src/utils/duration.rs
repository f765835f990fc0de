//! Duration string parsing

use std::sync::OnceLock;

use regex::Regex;

/// Matches one `<integer><unit>` token, units h/m/s in either case.
fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)(\d+)([hms])").expect("valid duration pattern"))
}

/// Parse a free-form duration string such as `1h30m20s` into total seconds.
///
/// Tokens may appear in any order and may repeat (`10s5s` is 15). Anything
/// that is not a token is ignored. Returns 0 for `None`, an empty string, or
/// a string without tokens; callers treat 0 as invalid input.
pub fn parse_duration(input: Option<&str>) -> u64 {
    let Some(input) = input else {
        return 0;
    };

    token_pattern()
        .captures_iter(input)
        .map(|caps| {
            // Digits only, so parsing can only fail on overflow.
            let value = caps[1].parse::<u64>().unwrap_or(u64::MAX);
            let unit = match caps[2].to_ascii_lowercase().as_str() {
                "h" => 3600,
                "m" => 60,
                _ => 1,
            };
            value.saturating_mul(unit)
        })
        .fold(0u64, u64::saturating_add)
}
