//! Logger and HTTP client initialization.

use std::io::Write;
use std::time::Duration;

use colored::Colorize;
use log::LevelFilter;
use reqwest::ClientBuilder;

use crate::config::{Config, LogFormat};
use crate::error_handling::InitializationError;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors and emojis) and JSON formats for structured logging.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it. This allows developers to
/// use `RUST_LOG=debug` for quick debugging while still supporting explicit
/// CLI control via `--log-level`.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if logger initialization fails.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    // Read from RUST_LOG environment variable first, then override with CLI arg
    let mut builder = env_logger::Builder::from_default_env();

    // Override with CLI-provided level (takes precedence over RUST_LOG)
    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("header_status", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    // Use try_init() instead of init() to avoid panicking if the logger is
    // already initialized (tests may initialize it multiple times)
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Builds the HTTP client used for the single request of a run.
///
/// The client carries the configured timeout and User-Agent; everything else
/// (certificate validation, redirect policy) stays at reqwest defaults.
///
/// # Errors
///
/// Returns an error if the timeout is not a positive finite number of seconds
/// or if the client cannot be built.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let timeout = Duration::try_from_secs_f64(config.timeout_seconds).map_err(|_| {
        InitializationError::InvalidTimeoutError(format!("{} seconds", config.timeout_seconds))
    })?;

    let client = ClientBuilder::new()
        .timeout(timeout)
        .user_agent(&config.user_agent)
        .build()?;

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_plain_format() {
        // env_logger can only be initialized once per process; accept either
        // outcome, the important thing is that the function doesn't panic
        let result = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        assert!(result.is_ok() || result.is_err());
    }

    #[test]
    fn test_init_logger_json_format() {
        let result = init_logger_with(LevelFilter::Info, LogFormat::Json);
        assert!(result.is_ok() || result.is_err());
    }

    #[test]
    fn test_init_client_defaults() {
        let config = Config::default();
        assert!(init_client(&config).is_ok());
    }

    #[test]
    fn test_init_client_rejects_negative_timeout() {
        let config = Config {
            timeout_seconds: -1.0,
            ..Default::default()
        };
        let err = init_client(&config).unwrap_err();
        assert!(matches!(
            err,
            InitializationError::InvalidTimeoutError(_)
        ));
    }

    #[test]
    fn test_init_client_rejects_nan_timeout() {
        let config = Config {
            timeout_seconds: f64::NAN,
            ..Default::default()
        };
        assert!(init_client(&config).is_err());
    }
}
