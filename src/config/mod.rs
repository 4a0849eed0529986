//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, defaults)
//! - Security header name constants and checklists
//! - CLI option types

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{ChecklistVariant, Config, LogFormat, LogLevel};
