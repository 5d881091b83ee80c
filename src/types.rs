//! Core types for the WellSync aggregation pipeline
//!
//! This module defines the data structures that flow through each stage of the
//! pipeline: raw provider samples, time buckets, per-metric summaries, and the
//! composite health report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One raw provider data point.
///
/// A missing `value` is tolerated everywhere downstream and contributes zero;
/// it is never an error condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSample {
    /// Sample timestamp (epoch milliseconds)
    pub timestamp_millis: i64,
    /// Sample value (steps delta, BPM reading, ...)
    pub value: Option<f64>,
}

/// A fixed time-window container of raw samples for one metric.
///
/// The provider emits one bucket per window: one day for steps, one hour for
/// heart rate. Empty buckets are legal and aggregate to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub start_millis: i64,
    pub end_millis: i64,
    pub samples: Vec<RawSample>,
}

/// Per-bucket total for a metric, in chronological ascending order
/// (`day_index` 0 = oldest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMetric {
    pub day_index: usize,
    pub total: u64,
}

/// Direction of a short daily-steps series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
            Trend::Stable => "stable",
        }
    }
}

/// Aggregated step metrics over the requested window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepsSummary {
    /// Steps in the most recent bucket (0 when no buckets)
    pub today_steps: u64,
    /// Rounded mean of the daily totals (0 when no buckets)
    pub avg_steps: u64,
    /// Sum of all daily totals
    pub weekly_total: u64,
    /// One total per input bucket, oldest first
    pub daily_steps: Vec<u64>,
    pub trend: Trend,
}

/// One start/end timestamped sleep session.
///
/// A session is valid only when `end_millis > start_millis`; invalid sessions
/// are silently excluded from aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepSession {
    pub start_millis: i64,
    pub end_millis: i64,
}

impl SleepSession {
    /// Session validity invariant
    pub fn is_valid(&self) -> bool {
        self.end_millis > self.start_millis
    }

    /// Session duration in hours
    pub fn duration_hours(&self) -> f64 {
        (self.end_millis - self.start_millis) as f64 / 3_600_000.0
    }
}

/// Qualitative label for how stable a set of nightly durations is,
/// serialized with the display strings the backend API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SleepConsistency {
    #[serde(rename = "No Sleep Data")]
    NoData,
    #[serde(rename = "Insufficient Data")]
    InsufficientData,
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl SleepConsistency {
    pub fn as_str(&self) -> &'static str {
        match self {
            SleepConsistency::NoData => "No Sleep Data",
            SleepConsistency::InsufficientData => "Insufficient Data",
            SleepConsistency::Excellent => "Excellent",
            SleepConsistency::Good => "Good",
            SleepConsistency::Fair => "Fair",
            SleepConsistency::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Aggregated sleep metrics over the recent-session window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepSummary {
    /// Duration of the most recent session, hours rounded to 1 decimal
    pub last_night_hours: f64,
    /// Mean duration across the window, hours rounded to 1 decimal
    pub avg_sleep_hours: f64,
    pub consistency: SleepConsistency,
}

/// Aggregated heart-rate metrics; `None` means no readings were available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartRateSummary {
    pub average_bpm: Option<u32>,
    pub resting_bpm: Option<u32>,
}

/// Insight priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One human-readable recommendation record.
///
/// Insights are generated fresh on every call and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub priority: Priority,
    pub category: String,
    pub title: String,
    pub description: String,
    pub recommendation: String,
    pub impact: String,
}

/// Composite report handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub steps: StepsSummary,
    pub sleep: SleepSummary,
    pub heart_rate: HeartRateSummary,
    /// Weighted composite score in [0, 100], recomputed on every request
    pub health_score: u8,
    pub insights: Vec<Insight>,
}

/// Producer metadata embedded in report envelopes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// Transport envelope for a report request: `{success, data, message}` on
/// success, `{success: false, error, details}` on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<HealthReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub producer: ReportProducer,
    pub generated_at: DateTime<Utc>,
}
