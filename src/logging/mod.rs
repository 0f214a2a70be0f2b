//! Daemon logging: stdout plus a rotating file under `~/.nodenest/logs`.

mod init;

pub use init::{init_logging, parse_rotation};

use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::Level;
use tracing_appender::rolling::Rotation;

use crate::utils::nodenest_home;

/// Log filename used by the daemon.
pub const LOG_FILENAME: &str = "nodenest-daemon.log";

/// Global log file path, set once at startup.
static LOG_FILE_PATH: OnceLock<String> = OnceLock::new();

/// Store the log file path for structured error responses.
pub fn set_log_file_path(path: String) {
    let _ = LOG_FILE_PATH.set(path);
}

/// Log file path set at startup, or empty before logging is configured.
pub fn get_log_file_path() -> &'static str {
    LOG_FILE_PATH.get().map_or("", String::as_str)
}

/// Default log directory (`~/.nodenest/logs`).
#[must_use]
pub fn default_log_dir() -> PathBuf {
    nodenest_home().join("logs")
}

/// Configuration for the logging system.
pub struct LogConfig {
    /// Directory where log files will be written.
    pub log_dir: PathBuf,
    /// Default log level when `RUST_LOG` is not set.
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
}

impl LogConfig {
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILENAME)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            log_level: Level::INFO,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}
