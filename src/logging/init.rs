use color_eyre::eyre::Result;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use super::{set_log_file_path, LogConfig, LOG_FILENAME};

/// `RUST_LOG` if set, otherwise this crate at `level`.
fn default_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nodenest_daemon={level}")))
}

/// Initialize the logging system and record the log file path.
pub fn init_logging(config: LogConfig) -> Result<()> {
    std::fs::create_dir_all(&config.log_dir)?;
    set_log_file_path(config.log_file().to_string_lossy().to_string());

    let file_appender = RollingFileAppender::new(config.rotation, &config.log_dir, LOG_FILENAME);

    if config.json_format {
        let file_layer = fmt::layer()
            .json()
            .with_writer(file_appender)
            .with_span_events(FmtSpan::CLOSE)
            .with_current_span(true)
            .with_target(true)
            .with_filter(default_filter(config.log_level));
        let stdout_layer = fmt::layer()
            .json()
            .with_writer(std::io::stdout)
            .with_current_span(true)
            .with_target(true)
            .with_filter(default_filter(config.log_level));
        tracing_subscriber::registry()
            .with(file_layer)
            .with(stdout_layer)
            .with(ErrorLayer::default())
            .try_init()?;
    } else {
        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_ansi(false)
            .with_filter(default_filter(config.log_level));
        let stdout_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_filter(default_filter(config.log_level));
        tracing_subscriber::registry()
            .with(file_layer)
            .with(stdout_layer)
            .with(ErrorLayer::default())
            .try_init()?;
    }
    Ok(())
}

/// Parse rotation period from string; unknown values mean daily.
pub fn parse_rotation(s: &str) -> Rotation {
    match s.trim().to_lowercase().as_str() {
        "minutely" => Rotation::MINUTELY,
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn same(a: &Rotation, b: &Rotation) -> bool {
        format!("{a:?}") == format!("{b:?}")
    }

    #[test]
    fn test_parse_rotation_known_values() {
        assert!(same(&parse_rotation("hourly"), &Rotation::HOURLY));
        assert!(same(&parse_rotation(" Never "), &Rotation::NEVER));
        assert!(same(&parse_rotation("MINUTELY"), &Rotation::MINUTELY));
        assert!(same(&parse_rotation("daily"), &Rotation::DAILY));
    }

    #[test]
    fn test_parse_rotation_unknown_defaults_to_daily() {
        assert!(same(&parse_rotation("weekly"), &Rotation::DAILY));
    }
}
