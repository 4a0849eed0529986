//! Report assembly and output.
//!
//! A run produces exactly one JSON document: the target URL, the HTTP status,
//! the full (lowercased) response headers, and one finding per checklist
//! header. The report is either pretty-printed to stdout or written to a file
//! verbatim.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::analyzer::Findings;

/// The complete report for one checked URL.
///
/// Headers serialize from a `BTreeMap`, and findings serialize in checklist
/// order, so identical responses always produce byte-identical reports.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// The URL that was checked
    pub url: String,
    /// HTTP status code of the response
    pub status: u16,
    /// All response headers, keys lowercased
    pub headers: BTreeMap<String, String>,
    /// Classification of every checklist header
    pub findings: Findings,
}

impl CheckReport {
    /// Renders the report as pretty-printed JSON (2-space indent).
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report")
    }
}

/// Writes the report to the given file path, or to stdout when `path` is `None`.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_report(report: &CheckReport, path: Option<&Path>) -> Result<()> {
    let json = report.to_json()?;

    match path {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            log::info!("Report written to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze_headers;
    use crate::config::CORE_CHECKLIST;

    fn sample_report() -> CheckReport {
        let mut headers = BTreeMap::new();
        headers.insert(
            "strict-transport-security".to_string(),
            "max-age=31536000".to_string(),
        );
        headers.insert("x-frame-options".to_string(), "SAMEORIGIN".to_string());
        headers.insert("content-type".to_string(), "text/html".to_string());

        let findings = analyze_headers(&headers, CORE_CHECKLIST);
        CheckReport {
            url: "https://example.com/".to_string(),
            status: 200,
            headers,
            findings,
        }
    }

    #[test]
    fn test_report_json_is_flat() {
        let report = sample_report();
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert!(object.contains_key("url"));
        assert!(object.contains_key("status"));
        assert!(object.contains_key("headers"));
        assert!(object.contains_key("findings"));
    }

    #[test]
    fn test_report_findings_content() {
        let report = sample_report();
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["status"], 200);
        assert_eq!(value["findings"]["strict-transport-security"], "present");
        assert_eq!(value["findings"]["x-frame-options"], "present");
        assert_eq!(value["findings"]["content-security-policy"], "missing");
        assert_eq!(value["findings"]["x-content-type-options"], "missing");
    }

    #[test]
    fn test_report_preserves_raw_headers() {
        let report = sample_report();
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        // Raw header values pass through untouched (no trimming or lowercasing)
        assert_eq!(value["headers"]["x-frame-options"], "SAMEORIGIN");
        assert_eq!(value["headers"]["content-type"], "text/html");
    }

    #[test]
    fn test_write_report_to_file() {
        let report = sample_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        write_report(&report, Some(&path)).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["url"], "https://example.com/");
    }

    #[test]
    fn test_write_report_unwritable_path_fails() {
        let report = sample_report();
        let path = Path::new("/nonexistent-dir/report.json");
        assert!(write_report(&report, Some(path)).is_err());
    }
}
