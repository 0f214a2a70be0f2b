mod atomic;

pub use atomic::atomic_write;

use chrono::{DateTime, SecondsFormat, Utc};

/// Name of the per-user folder holding config and logs
pub const NODENEST_FOLDER: &str = ".nodenest";

/// Daemon version reported to clients
pub const DAEMON_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the per-user `~/.nodenest` directory, falling back to the working directory
#[must_use]
pub fn nodenest_home() -> std::path::PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(NODENEST_FOLDER)
}

/// Format a timestamp the way documents store it.
///
/// Fixed microsecond precision keeps stored timestamps the same width.
#[must_use]
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a stored RFC 3339 timestamp.
#[must_use]
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// True if `segment` is safe to use as a single path component
/// (collection names and document ids).
#[must_use]
pub fn is_safe_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
