//! Security header analysis.
//!
//! This module classifies the security-relevant headers of a single HTTP
//! response against a fixed checklist:
//! - Presence checks for every checklist header
//! - Value validation for `x-content-type-options` and `x-frame-options`
//! - HSTS `max-age` inspection
//!
//! The analysis is a pure function over an already-lowercased header map; it
//! performs no I/O and never fails.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::config::{
    HEADER_STRICT_TRANSPORT_SECURITY, HEADER_X_CONTENT_TYPE_OPTIONS, HEADER_X_FRAME_OPTIONS,
};

/// Classification of a single security header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStatus {
    /// Header is present with an acceptable value
    Present,
    /// Header is absent (or present with an empty value)
    Missing,
    /// Header is present but its value fails validation
    Invalid,
    /// HSTS is present but carries no max-age directive
    PresentNoMaxAge,
    /// HSTS is present with max-age=0, i.e. explicitly disabled
    PresentDisabled,
}

impl HeaderStatus {
    /// Returns the report label for this classification.
    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderStatus::Present => "present",
            HeaderStatus::Missing => "missing",
            HeaderStatus::Invalid => "invalid",
            HeaderStatus::PresentNoMaxAge => "present (no max-age)",
            HeaderStatus::PresentDisabled => "present (disabled)",
        }
    }
}

impl std::fmt::Display for HeaderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HeaderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Findings for every header in a checklist, in checklist order.
///
/// Serializes as a JSON object whose key order follows the checklist
/// declaration order, one entry per checklist header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Findings(Vec<(&'static str, HeaderStatus)>);

impl Findings {
    /// Returns the classification for a header name, if it was checked.
    pub fn get(&self, name: &str) -> Option<HeaderStatus> {
        self.0
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, status)| *status)
    }

    /// Iterates over (header name, status) pairs in checklist order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, HeaderStatus)> + '_ {
        self.0.iter().copied()
    }

    /// Number of checked headers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no headers were checked (empty checklist).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Findings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, status) in &self.0 {
            map.serialize_entry(name, status)?;
        }
        map.end()
    }
}

/// Analyzes response headers against a checklist of security headers.
///
/// Every checklist name yields exactly one finding: `Present` when the header
/// exists with a non-empty value (subject to the per-header validation rules
/// below), `Missing` otherwise. Header keys in `headers` must already be
/// lowercase; values are trimmed and lowercased here for comparison only.
///
/// Validation rules:
/// - `x-content-type-options` must be exactly `nosniff`, else `Invalid`
/// - `x-frame-options` must be `deny` or `sameorigin`, else `Invalid`
/// - `strict-transport-security` without a `max-age` directive is
///   `PresentNoMaxAge`; with `max-age=0` it is `PresentDisabled`
///
/// # Arguments
///
/// * `headers` - Response headers with lowercase keys
/// * `checklist` - Ordered security header names to check
pub fn analyze_headers(headers: &BTreeMap<String, String>, checklist: &[&'static str]) -> Findings {
    let mut findings = Vec::with_capacity(checklist.len());

    for &name in checklist {
        let status = match headers.get(name) {
            Some(value) if !value.trim().is_empty() => classify_value(name, value),
            _ => HeaderStatus::Missing,
        };
        findings.push((name, status));
    }

    Findings(findings)
}

/// Classifies a non-empty header value against the header-specific rules.
fn classify_value(name: &str, value: &str) -> HeaderStatus {
    let normalized = value.trim().to_lowercase();

    match name {
        HEADER_X_CONTENT_TYPE_OPTIONS => {
            if normalized == "nosniff" {
                HeaderStatus::Present
            } else {
                HeaderStatus::Invalid
            }
        }
        HEADER_X_FRAME_OPTIONS => {
            if normalized == "deny" || normalized == "sameorigin" {
                HeaderStatus::Present
            } else {
                HeaderStatus::Invalid
            }
        }
        HEADER_STRICT_TRANSPORT_SECURITY => {
            if !normalized.contains("max-age") {
                HeaderStatus::PresentNoMaxAge
            } else if normalized.contains("max-age=0") {
                HeaderStatus::PresentDisabled
            } else {
                HeaderStatus::Present
            }
        }
        _ => HeaderStatus::Present,
    }
}
