//! Heart-rate aggregation
//!
//! Reduces provider hour-buckets of BPM readings into an average and an
//! estimated resting rate.

use crate::types::{Bucket, HeartRateSummary};

/// Fraction of the average BPM used as the resting-rate estimate
const RESTING_RATE_FACTOR: f64 = 0.8;

/// Aggregate heart-rate buckets into a `HeartRateSummary`.
///
/// Only samples carrying a value enter the mean; buckets and samples without
/// readings are skipped. With no readings at all both fields are `None`.
pub fn aggregate_heart_rate(buckets: &[Bucket]) -> HeartRateSummary {
    let mut total_bpm = 0.0;
    let mut count = 0usize;

    for bucket in buckets {
        for sample in &bucket.samples {
            if let Some(bpm) = sample.value {
                total_bpm += bpm;
                count += 1;
            }
        }
    }

    if count == 0 {
        return HeartRateSummary {
            average_bpm: None,
            resting_bpm: None,
        };
    }

    let average = total_bpm / count as f64;
    HeartRateSummary {
        average_bpm: Some(average.round() as u32),
        resting_bpm: Some((average * RESTING_RATE_FACTOR).round() as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawSample;

    fn bucket(values: &[Option<f64>]) -> Bucket {
        Bucket {
            start_millis: 0,
            end_millis: 3_600_000,
            samples: values
                .iter()
                .map(|v| RawSample {
                    timestamp_millis: 0,
                    value: *v,
                })
                .collect(),
        }
    }

    #[test]
    fn test_average_across_buckets() {
        let buckets = vec![bucket(&[Some(60.0), Some(70.0)]), bucket(&[Some(80.0)])];
        let summary = aggregate_heart_rate(&buckets);
        assert_eq!(summary.average_bpm, Some(70));
        assert_eq!(summary.resting_bpm, Some(56));
    }

    #[test]
    fn test_missing_values_do_not_dilute_mean() {
        let buckets = vec![bucket(&[Some(60.0), None, Some(80.0)])];
        let summary = aggregate_heart_rate(&buckets);
        assert_eq!(summary.average_bpm, Some(70));
    }

    #[test]
    fn test_no_readings_yields_not_available() {
        assert_eq!(
            aggregate_heart_rate(&[]),
            HeartRateSummary {
                average_bpm: None,
                resting_bpm: None,
            }
        );
        assert_eq!(
            aggregate_heart_rate(&[bucket(&[None, None])]).average_bpm,
            None
        );
    }
}
