//! Error types for WellSync Core

use thiserror::Error;

/// Errors that can occur while parsing provider payloads.
///
/// The aggregation core itself is total: once input has been parsed into
/// typed buckets and sessions, no function in this crate can fail.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to parse provider payload: {0}")]
    ParseError(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
