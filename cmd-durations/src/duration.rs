//! Compact human-readable rendering of command durations.

/// Render a duration in seconds as a compact `1h2m3s` style string.
///
/// The input is rounded to the nearest whole second first. Leading
/// zero-valued units are omitted, and minutes are always shown once hours
/// are. A zero duration renders as the empty string, not `"0s"`; callers
/// rely on that boundary.
///
/// ```
/// use cmd_durations::duration::secs_to_readable;
///
/// assert_eq!(secs_to_readable(100.0), "1m40s");
/// assert_eq!(secs_to_readable(3600.0), "1h0m");
/// ```
pub fn secs_to_readable(secs: f64) -> String {
    // Saturating cast; well-formed history never yields a negative duration.
    let secs = secs.round() as u64;

    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    let mut readable = String::new();
    if hours > 0 {
        readable.push_str(&format!("{hours}h"));
    }
    if hours > 0 || minutes > 0 {
        readable.push_str(&format!("{minutes}m"));
    }
    if seconds > 0 {
        readable.push_str(&format!("{seconds}s"));
    }
    readable
}
