//! Sleep session aggregation
//!
//! Reduces timestamped sleep sessions into a nightly-duration summary and
//! classifies the consistency of the recent window by standard deviation.

use crate::types::{SleepConsistency, SleepSession, SleepSummary};

/// Number of most-recent sessions considered by the summary
const RECENT_WINDOW: usize = 7;

/// Aggregate sleep sessions into a `SleepSummary`.
///
/// Sessions with `end <= start` are silently excluded. The remaining
/// sessions are ordered most-recent first and the newest 7 form the window.
/// With no valid sessions the summary degrades to zeros and `NoData`.
pub fn aggregate_sleep(sessions: &[SleepSession]) -> SleepSummary {
    let mut valid: Vec<&SleepSession> = sessions.iter().filter(|s| s.is_valid()).collect();
    valid.sort_by(|a, b| b.start_millis.cmp(&a.start_millis));

    let recent = &valid[..valid.len().min(RECENT_WINDOW)];
    if recent.is_empty() {
        return SleepSummary {
            last_night_hours: 0.0,
            avg_sleep_hours: 0.0,
            consistency: SleepConsistency::NoData,
        };
    }

    let durations: Vec<f64> = recent.iter().map(|s| s.duration_hours()).collect();
    let avg = durations.iter().sum::<f64>() / durations.len() as f64;

    SleepSummary {
        last_night_hours: round1(durations[0]),
        avg_sleep_hours: round1(avg),
        consistency: classify_consistency(&durations),
    }
}

/// Classify a set of nightly durations by their dispersion.
///
/// Uses the population standard deviation (divide by N). Fewer than 3
/// durations cannot be meaningfully classified.
pub fn classify_consistency(durations: &[f64]) -> SleepConsistency {
    if durations.len() < 3 {
        return SleepConsistency::InsufficientData;
    }

    let std_dev = population_std_dev(durations);

    if std_dev < 0.5 {
        SleepConsistency::Excellent
    } else if std_dev < 1.0 {
        SleepConsistency::Good
    } else if std_dev < 1.5 {
        SleepConsistency::Fair
    } else {
        SleepConsistency::NeedsImprovement
    }
}

fn population_std_dev(values: &[f64]) -> f64 {
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values
        .iter()
        .map(|v| (v - mean).powi(2))
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Round to exactly one fractional digit (numeric, not string truncation)
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR_MS: i64 = 3_600_000;

    fn session(start_hours: i64, duration_hours: f64) -> SleepSession {
        let start_millis = start_hours * HOUR_MS;
        SleepSession {
            start_millis,
            end_millis: start_millis + (duration_hours * HOUR_MS as f64) as i64,
        }
    }

    #[test]
    fn test_no_sessions_yields_no_data() {
        let summary = aggregate_sleep(&[]);
        assert_eq!(summary.last_night_hours, 0.0);
        assert_eq!(summary.avg_sleep_hours, 0.0);
        assert_eq!(summary.consistency, SleepConsistency::NoData);
    }

    #[test]
    fn test_invalid_sessions_excluded() {
        let invalid = vec![
            SleepSession {
                start_millis: 100,
                end_millis: 100,
            },
            SleepSession {
                start_millis: 200,
                end_millis: 50,
            },
        ];
        let summary = aggregate_sleep(&invalid);
        assert_eq!(summary.consistency, SleepConsistency::NoData);
    }

    #[test]
    fn test_last_night_is_most_recent_session() {
        // Supplied out of order; the latest start wins
        let sessions = vec![session(0, 8.0), session(48, 6.5), session(24, 7.0)];
        let summary = aggregate_sleep(&sessions);
        assert_eq!(summary.last_night_hours, 6.5);
    }

    #[test]
    fn test_average_over_window() {
        let sessions = vec![session(0, 6.0), session(24, 8.0), session(48, 7.0)];
        let summary = aggregate_sleep(&sessions);
        assert_eq!(summary.avg_sleep_hours, 7.0);
    }

    #[test]
    fn test_window_caps_at_seven_sessions() {
        // Ten nights; the three oldest (10h each) fall outside the window
        let mut sessions: Vec<SleepSession> = (0..3).map(|i| session(i * 24, 10.0)).collect();
        sessions.extend((3..10).map(|i| session(i * 24, 7.0)));

        let summary = aggregate_sleep(&sessions);
        assert_eq!(summary.avg_sleep_hours, 7.0);
        assert_eq!(summary.consistency, SleepConsistency::Excellent);
    }

    #[test]
    fn test_one_decimal_rounding() {
        // 7.25h rounds to 7.3, not truncates to 7.2
        let sessions = vec![session(0, 7.25)];
        let summary = aggregate_sleep(&sessions);
        assert_eq!(summary.last_night_hours, 7.3);
    }

    #[test]
    fn test_fewer_than_three_nights_is_insufficient() {
        let sessions = vec![session(0, 8.0), session(24, 8.0)];
        let summary = aggregate_sleep(&sessions);
        assert_eq!(summary.consistency, SleepConsistency::InsufficientData);
    }

    #[test]
    fn test_identical_durations_are_excellent() {
        assert_eq!(
            classify_consistency(&[8.0, 8.0, 8.0, 8.0]),
            SleepConsistency::Excellent
        );
    }

    #[test]
    fn test_two_hour_std_dev_needs_improvement() {
        // [6, 10, 6, 10]: population std dev = 2.0
        assert_eq!(
            classify_consistency(&[6.0, 10.0, 6.0, 10.0]),
            SleepConsistency::NeedsImprovement
        );
    }

    #[test]
    fn test_consistency_bands() {
        // std dev ~0.82 for [7, 8, 9]
        assert_eq!(classify_consistency(&[7.0, 8.0, 9.0]), SleepConsistency::Good);
        // std dev ~1.25 for [6.5, 8.0, 9.5]
        assert_eq!(
            classify_consistency(&[6.5, 8.0, 9.5]),
            SleepConsistency::Fair
        );
    }

    #[test]
    fn test_population_not_sample_std_dev() {
        // Population std dev of [6, 10, 8] is sqrt(8/3) ~ 1.633;
        // the sample (N-1) figure would be 2.0
        assert!((population_std_dev(&[6.0, 10.0, 8.0]) - 1.632993).abs() < 1e-5);
    }
}
