//! Single-request header fetching.
//!
//! Performs the one GET request of a run and captures the response status and
//! headers. Header names are canonicalized to lowercase so the analyzer can
//! compare against its lowercase checklist without re-normalizing.

use std::collections::BTreeMap;

use log::debug;

/// Status code and headers captured from a response.
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers, keys lowercased
    pub headers: BTreeMap<String, String>,
}

/// Fetches a URL and returns its status code and lowercased headers.
///
/// The response body is not read; only the status line and header block
/// matter here. Duplicate header occurrences are joined with `", "` per the
/// HTTP list-value convention. Non-UTF-8 header bytes are replaced lossily.
///
/// # Errors
///
/// Returns the underlying `reqwest::Error` on any transport failure (DNS,
/// connect, TLS, timeout). Callers treat this as fatal; there is no retry.
pub async fn fetch_headers(
    client: &reqwest::Client,
    url: &str,
) -> Result<FetchedResponse, reqwest::Error> {
    debug!("Sending GET request to {url}");

    let response = client.get(url).send().await?;

    let status = response.status().as_u16();
    debug!("Received status {status} from {url}");

    let headers = collect_headers(response.headers());
    Ok(FetchedResponse { status, headers })
}

/// Flattens a `HeaderMap` into a lowercase-keyed string map.
fn collect_headers(header_map: &reqwest::header::HeaderMap) -> BTreeMap<String, String> {
    let mut headers: BTreeMap<String, String> = BTreeMap::new();

    for (name, value) in header_map.iter() {
        // reqwest keeps header names lowercase already; be explicit anyway
        let key = name.as_str().to_lowercase();
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();

        match headers.get_mut(&key) {
            Some(existing) => {
                existing.push_str(", ");
                existing.push_str(&value);
            }
            None => {
                headers.insert(key, value);
            }
        }
    }

    headers
}
