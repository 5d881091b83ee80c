//! Report assembly
//!
//! This module provides the public API for WellSync Core. It runs the three
//! independent metric aggregations, the score calculation, and the insight
//! rules, and assembles the composite report the presentation layer consumes.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::adapters::{GoogleFitAdapter, ProviderAdapter};
use crate::error::ReportError;
use crate::heart_rate::aggregate_heart_rate;
use crate::insights::generate_insights;
use crate::score::compute_health_score;
use crate::sleep::aggregate_sleep;
use crate::steps::aggregate_steps;
use crate::types::{Bucket, HealthReport, ReportEnvelope, ReportProducer, SleepSession};
use crate::{CORE_VERSION, PRODUCER_NAME};

/// Build a health report from already-parsed provider input.
///
/// The three aggregations share no state and each reads only its own input
/// slice, so the whole assembly is a pure function: identical input always
/// yields an identical report.
pub fn build_report(
    step_buckets: &[Bucket],
    sleep_sessions: &[SleepSession],
    heart_rate_buckets: &[Bucket],
) -> HealthReport {
    let steps = aggregate_steps(step_buckets);
    let sleep = aggregate_sleep(sleep_sessions);
    let heart_rate = aggregate_heart_rate(heart_rate_buckets);

    let health_score = compute_health_score(&steps, &sleep);
    let insights = generate_insights(&steps, &sleep, &heart_rate);

    HealthReport {
        steps,
        sleep,
        heart_rate,
        health_score,
        insights,
    }
}

/// Build a health report straight from raw Google Fit API responses.
///
/// # Arguments
/// * `steps_json` - Aggregate response with day buckets of step deltas
/// * `sessions_json` - Sessions list response for sleep sessions
/// * `heart_rate_json` - Aggregate response with hour buckets of BPM readings
///
/// # Example
/// ```ignore
/// let report = google_fit_report(&steps_json, &sessions_json, &heart_rate_json)?;
/// ```
pub fn google_fit_report(
    steps_json: &str,
    sessions_json: &str,
    heart_rate_json: &str,
) -> Result<HealthReport, ReportError> {
    let adapter = GoogleFitAdapter;
    let step_buckets = adapter.parse_buckets(steps_json)?;
    let sleep_sessions = adapter.parse_sessions(sessions_json)?;
    let heart_rate_buckets = adapter.parse_buckets(heart_rate_json)?;

    Ok(build_report(
        &step_buckets,
        &sleep_sessions,
        &heart_rate_buckets,
    ))
}

impl ReportProducer {
    /// Producer metadata with a fresh instance id
    pub fn new() -> Self {
        Self {
            name: PRODUCER_NAME.to_string(),
            version: CORE_VERSION.to_string(),
            instance_id: Uuid::new_v4().to_string(),
        }
    }
}

impl Default for ReportProducer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportEnvelope {
    /// Successful `{success, data, message}` envelope.
    ///
    /// `generated_at` is supplied by the caller so the library itself stays
    /// deterministic.
    pub fn success(report: HealthReport, generated_at: DateTime<Utc>) -> Self {
        Self {
            success: true,
            data: Some(report),
            message: Some("Health data processed successfully".to_string()),
            error: None,
            details: None,
            producer: ReportProducer::new(),
            generated_at,
        }
    }

    /// Failed `{success: false, error, details}` envelope
    pub fn failure(error: impl Into<String>, details: impl Into<String>, generated_at: DateTime<Utc>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
            details: Some(details.into()),
            producer: ReportProducer::new(),
            generated_at,
        }
    }
}
