use jiff::Timestamp;
use jiff::civil::DateTime;
use jiff::tz::TimeZone;

/// Check if stdin is a TTY (interactive)
pub fn is_stdin_tty() -> bool {
    atty::is(atty::Stream::Stdin)
}

/// Truncate a string to a maximum length, handling multi-byte characters properly.
/// Appends "..." if truncated.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// First line of a block of text, truncated for single-line display
pub fn first_line(s: &str, max_len: usize) -> String {
    truncate_string(s.lines().next().unwrap_or(""), max_len)
}

/// Parse an ISO 8601 instant.
///
/// Strings without an offset are read as wall clock time in `tz`.
pub fn parse_instant_in(raw: &str, tz: &TimeZone) -> Option<Timestamp> {
    if let Ok(ts) = raw.parse::<Timestamp>() {
        return Some(ts);
    }
    let civil: DateTime = raw.parse().ok()?;
    civil.to_zoned(tz.clone()).ok().map(|zoned| zoned.timestamp())
}

pub fn format_instant_in(ts: Timestamp, tz: TimeZone) -> String {
    ts.to_zoned(tz).strftime("%Y-%m-%d %H:%M").to_string()
}

/// Format an instant in the local time zone
pub fn format_local_instant(ts: Timestamp) -> String {
    format_instant_in(ts, TimeZone::system())
}
