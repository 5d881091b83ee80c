//! Google Fit adapter
//!
//! Parses Google Fit REST responses and maps them to typed buckets and
//! sessions. Two wire shapes are handled: `users.dataset.aggregate`
//! responses (time buckets of points) and `users.sessions.list` responses.
//! Google Fit carries epoch milliseconds as decimal strings.

use serde::Deserialize;

use crate::error::ReportError;
use crate::types::{Bucket, RawSample, SleepSession};

use super::ProviderAdapter;

/// Google Fit payload adapter
pub struct GoogleFitAdapter;

impl ProviderAdapter for GoogleFitAdapter {
    fn parse_buckets(&self, raw_json: &str) -> Result<Vec<Bucket>, ReportError> {
        let payload: AggregateResponse = serde_json::from_str(raw_json)?;
        let mut buckets = Vec::new();

        for fit_bucket in payload.bucket.unwrap_or_default() {
            let start_millis = parse_millis(&fit_bucket.start_time_millis)?;
            let end_millis = parse_millis(&fit_bucket.end_time_millis)?;

            // Only the first dataset carries the aggregated metric; a bucket
            // without one still emits, with no samples
            let samples = fit_bucket
                .dataset
                .unwrap_or_default()
                .into_iter()
                .next()
                .and_then(|ds| ds.point)
                .unwrap_or_default()
                .into_iter()
                .map(|point| point_to_sample(point, start_millis))
                .collect();

            buckets.push(Bucket {
                start_millis,
                end_millis,
                samples,
            });
        }

        Ok(buckets)
    }

    fn parse_sessions(&self, raw_json: &str) -> Result<Vec<SleepSession>, ReportError> {
        let payload: SessionListResponse = serde_json::from_str(raw_json)?;
        let mut sessions = Vec::new();

        for fit_session in payload.session.unwrap_or_default() {
            sessions.push(SleepSession {
                start_millis: parse_millis(&fit_session.start_time_millis)?,
                end_millis: parse_millis(&fit_session.end_time_millis)?,
            });
        }

        Ok(sessions)
    }
}

fn point_to_sample(point: FitPoint, bucket_start_millis: i64) -> RawSample {
    // First value entry holds the metric: intVal for step deltas, fpVal for
    // BPM readings
    let value = point
        .value
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|v| v.int_val.map(|i| i as f64).or(v.fp_val));

    let timestamp_millis = point
        .start_time_nanos
        .as_deref()
        .and_then(|nanos| nanos.parse::<i64>().ok())
        .map(|nanos| nanos / 1_000_000)
        .unwrap_or(bucket_start_millis);

    RawSample {
        timestamp_millis,
        value,
    }
}

fn parse_millis(raw: &str) -> Result<i64, ReportError> {
    raw.parse::<i64>()
        .map_err(|_| ReportError::InvalidTimestamp(raw.to_string()))
}

// Google Fit REST response structures

#[derive(Debug, Deserialize)]
struct AggregateResponse {
    bucket: Option<Vec<FitBucket>>,
}

#[derive(Debug, Deserialize)]
struct FitBucket {
    #[serde(rename = "startTimeMillis")]
    start_time_millis: String,
    #[serde(rename = "endTimeMillis")]
    end_time_millis: String,
    dataset: Option<Vec<FitDataset>>,
}

#[derive(Debug, Deserialize)]
struct FitDataset {
    point: Option<Vec<FitPoint>>,
}

#[derive(Debug, Deserialize)]
struct FitPoint {
    #[serde(rename = "startTimeNanos")]
    start_time_nanos: Option<String>,
    value: Option<Vec<FitValue>>,
}

#[derive(Debug, Deserialize)]
struct FitValue {
    #[serde(rename = "intVal")]
    int_val: Option<i64>,
    #[serde(rename = "fpVal")]
    fp_val: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct SessionListResponse {
    session: Option<Vec<FitSession>>,
}

#[derive(Debug, Deserialize)]
struct FitSession {
    #[serde(rename = "startTimeMillis")]
    start_time_millis: String,
    #[serde(rename = "endTimeMillis")]
    end_time_millis: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_step_buckets() {
        let json = r#"{
            "bucket": [{
                "startTimeMillis": "1700000000000",
                "endTimeMillis": "1700086400000",
                "dataset": [{
                    "point": [{
                        "startTimeNanos": "1700000000000000000",
                        "value": [{"intVal": 4200}]
                    }, {
                        "startTimeNanos": "1700040000000000000",
                        "value": [{"intVal": 3800}]
                    }]
                }]
            }]
        }"#;

        let adapter = GoogleFitAdapter;
        let buckets = adapter.parse_buckets(json).unwrap();

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].start_millis, 1_700_000_000_000);
        assert_eq!(buckets[0].samples.len(), 2);
        assert_eq!(buckets[0].samples[0].value, Some(4200.0));
        assert_eq!(buckets[0].samples[0].timestamp_millis, 1_700_000_000_000);
        assert_eq!(buckets[0].samples[1].value, Some(3800.0));
    }

    #[test]
    fn test_parse_heart_rate_fp_values() {
        let json = r#"{
            "bucket": [{
                "startTimeMillis": "1700000000000",
                "endTimeMillis": "1700003600000",
                "dataset": [{
                    "point": [{"value": [{"fpVal": 62.5}]}]
                }]
            }]
        }"#;

        let adapter = GoogleFitAdapter;
        let buckets = adapter.parse_buckets(json).unwrap();
        assert_eq!(buckets[0].samples[0].value, Some(62.5));
        // Point without startTimeNanos inherits the bucket start
        assert_eq!(buckets[0].samples[0].timestamp_millis, 1_700_000_000_000);
    }

    #[test]
    fn test_missing_dataset_degrades_to_empty_bucket() {
        let json = r#"{
            "bucket": [
                {"startTimeMillis": "0", "endTimeMillis": "86400000"},
                {"startTimeMillis": "86400000", "endTimeMillis": "172800000", "dataset": []},
                {"startTimeMillis": "172800000", "endTimeMillis": "259200000", "dataset": [{}]}
            ]
        }"#;

        let adapter = GoogleFitAdapter;
        let buckets = adapter.parse_buckets(json).unwrap();
        assert_eq!(buckets.len(), 3);
        assert!(buckets.iter().all(|b| b.samples.is_empty()));
    }

    #[test]
    fn test_point_with_empty_value_array() {
        let json = r#"{
            "bucket": [{
                "startTimeMillis": "0",
                "endTimeMillis": "86400000",
                "dataset": [{"point": [{"value": []}, {}]}]
            }]
        }"#;

        let adapter = GoogleFitAdapter;
        let buckets = adapter.parse_buckets(json).unwrap();
        assert_eq!(buckets[0].samples.len(), 2);
        assert!(buckets[0].samples.iter().all(|s| s.value.is_none()));
    }

    #[test]
    fn test_empty_response() {
        let adapter = GoogleFitAdapter;
        assert!(adapter.parse_buckets("{}").unwrap().is_empty());
        assert!(adapter.parse_sessions("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_sessions() {
        let json = r#"{
            "session": [
                {"startTimeMillis": "1700000000000", "endTimeMillis": "1700028800000"},
                {"startTimeMillis": "1700086400000", "endTimeMillis": "1700115200000"}
            ]
        }"#;

        let adapter = GoogleFitAdapter;
        let sessions = adapter.parse_sessions(json).unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].start_millis, 1_700_000_000_000);
        assert_eq!(sessions[0].end_millis, 1_700_028_800_000);
    }

    #[test]
    fn test_invalid_millis_string_is_an_error() {
        let json = r#"{
            "bucket": [{"startTimeMillis": "not-a-number", "endTimeMillis": "0"}]
        }"#;

        let adapter = GoogleFitAdapter;
        let result = adapter.parse_buckets(json);
        assert!(matches!(result, Err(ReportError::InvalidTimestamp(_))));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let adapter = GoogleFitAdapter;
        assert!(matches!(
            adapter.parse_buckets("nope"),
            Err(ReportError::JsonError(_))
        ));
    }
}
