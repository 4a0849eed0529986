//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `header_status` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - The authorized-use disclaimer banner
//! - Report output (stdout or file)
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use header_status::config::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, DISCLAIMER_BANNER};
use header_status::initialization::init_logger_with;
use header_status::{run_check, write_report, ChecklistVariant, Config, LogFormat, LogLevel};

/// HTTP security header checker (authorized targets).
#[derive(Debug, Parser)]
#[command(name = "header_status", version, about)]
struct Cli {
    /// Target URL (owned/authorized)
    url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: f64,

    /// Write the JSON report to this file instead of stdout
    #[arg(long)]
    json_out: Option<PathBuf>,

    /// Which set of security headers to check
    #[arg(long, value_enum, default_value_t = ChecklistVariant::Core)]
    checklist: ChecklistVariant,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        url: cli.url,
        timeout_seconds: cli.timeout,
        json_out: cli.json_out,
        checklist: cli.checklist,
        log_level: cli.log_level,
        log_format: cli.log_format,
        user_agent: cli.user_agent,
    };

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    println!("{DISCLAIMER_BANNER}");

    match run_check(config.clone()).await {
        Ok(report) => {
            write_report(&report, config.json_out.as_deref())?;
            Ok(())
        }
        Err(e) => {
            eprintln!("header_status error: {:#}", e);
            process::exit(1);
        }
    }
}
