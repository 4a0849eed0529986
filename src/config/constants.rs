//! Configuration constants.

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: f64 = 5.0;

/// Default HTTP User-Agent header value.
pub const DEFAULT_USER_AGENT: &str = concat!("header_status/", env!("CARGO_PKG_VERSION"));

/// Disclaimer printed before any request is made.
pub const DISCLAIMER_BANNER: &str =
    "⚠️  Authorized use only. Test only sites you own/control.";
