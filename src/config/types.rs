//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::config::headers::{CORE_CHECKLIST, EXTENDED_CHECKLIST};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Which set of security headers to check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ChecklistVariant {
    /// The six modern security headers
    Core,
    /// Core plus legacy headers (x-xss-protection, expect-ct, public-key-pins)
    Extended,
}

impl ChecklistVariant {
    /// Returns the ordered header names this variant checks.
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            ChecklistVariant::Core => CORE_CHECKLIST,
            ChecklistVariant::Extended => EXTENDED_CHECKLIST,
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use header_status::Config;
///
/// let config = Config {
///     url: "https://example.com".to_string(),
///     timeout_seconds: 10.0,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Target URL (owned/authorized)
    pub url: String,

    /// Request timeout in seconds
    pub timeout_seconds: f64,

    /// Optional file path for the JSON report (stdout when `None`)
    pub json_out: Option<PathBuf>,

    /// Which checklist to evaluate
    pub checklist: ChecklistVariant,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            json_out: None,
            checklist: ChecklistVariant::Core,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
