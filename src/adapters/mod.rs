//! Provider payload adapters
//!
//! This module provides adapters that parse raw provider JSON payloads and
//! map them to the typed buckets and sessions the aggregation core consumes.

mod google_fit;

pub use google_fit::GoogleFitAdapter;

use crate::error::ReportError;
use crate::types::{Bucket, SleepSession};

/// Trait for provider payload adapters
pub trait ProviderAdapter {
    /// Parse an aggregate response into time buckets of raw samples
    fn parse_buckets(&self, raw_json: &str) -> Result<Vec<Bucket>, ReportError>;

    /// Parse a sessions-list response into sleep sessions
    fn parse_sessions(&self, raw_json: &str) -> Result<Vec<SleepSession>, ReportError>;
}
