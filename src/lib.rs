//! header_status library: single-URL security header checking
//!
//! This library performs one authorized HTTP(S) GET against a target URL,
//! classifies the response's security headers (HSTS, CSP, frame options,
//! content-type options, referrer policy, permissions policy, and legacy
//! headers), and returns a structured report.
//!
//! # Example
//!
//! ```no_run
//! use header_status::{run_check, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "https://example.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_check(config).await?;
//! for (header, status) in report.findings.iter() {
//!     println!("{header}: {status}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod analyzer;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod report;

// Re-export public API
pub use analyzer::{analyze_headers, Findings, HeaderStatus};
pub use config::{ChecklistVariant, Config, LogFormat, LogLevel};
pub use error_handling::InitializationError;
pub use report::{write_report, CheckReport};
pub use run::run_check;

// Internal run module (contains the main checking logic)
mod run {
    use anyhow::{bail, Context, Result};
    use log::{debug, info};
    use url::Url;

    use crate::analyzer::analyze_headers;
    use crate::config::Config;
    use crate::fetch::fetch_headers;
    use crate::initialization::init_client;
    use crate::report::CheckReport;

    /// Runs a security header check with the provided configuration.
    ///
    /// This is the main entry point for the library. It validates the target
    /// URL, performs a single GET request, analyzes the response headers
    /// against the configured checklist, and returns the assembled report.
    /// There is no retry: any transport failure fails the whole run and no
    /// report is produced.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The target URL is not a valid http(s) URL
    /// - The HTTP client cannot be initialized
    /// - The request fails (DNS, connect, TLS, timeout)
    pub async fn run_check(config: Config) -> Result<CheckReport> {
        let url = validate_target_url(&config.url)?;

        let client = init_client(&config).context("Failed to initialize HTTP client")?;

        info!("Checking {url}");
        let start = std::time::Instant::now();

        let response = fetch_headers(&client, url.as_str())
            .await
            .with_context(|| format!("Request to {url} failed"))?;

        debug!(
            "Got {} headers in {:.3}s",
            response.headers.len(),
            start.elapsed().as_secs_f64()
        );

        let findings = analyze_headers(&response.headers, config.checklist.headers());

        Ok(CheckReport {
            url: url.into(),
            status: response.status,
            headers: response.headers,
            findings,
        })
    }

    /// Parses the target and requires an http or https scheme.
    fn validate_target_url(raw: &str) -> Result<Url> {
        let url = Url::parse(raw).with_context(|| format!("Invalid target URL: {raw}"))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => bail!("Unsupported URL scheme '{other}' in {raw} (expected http or https)"),
        }
    }

}
