//! Step aggregation
//!
//! Reduces provider day-buckets into per-day totals and a `StepsSummary`,
//! including the trend classification over the daily series.

use crate::types::{Bucket, DailyMetric, StepsSummary, Trend};

/// Reduce day-buckets into per-day totals, one per bucket in input order.
///
/// Samples with a missing value contribute zero; an empty bucket yields a
/// zero total rather than being skipped, so the output length always equals
/// the input length.
pub fn bucket_totals(buckets: &[Bucket]) -> Vec<DailyMetric> {
    buckets
        .iter()
        .enumerate()
        .map(|(day_index, bucket)| {
            let sum: f64 = bucket
                .samples
                .iter()
                .map(|sample| sample.value.unwrap_or(0.0))
                .sum();
            DailyMetric {
                day_index,
                total: sum.round().max(0.0) as u64,
            }
        })
        .collect()
}

/// Aggregate day-buckets into a `StepsSummary`.
///
/// The weekly total is the running sum accumulated during the per-bucket
/// pass. Total over any input: no buckets yields an all-zero summary with a
/// `Stable` trend.
pub fn aggregate_steps(buckets: &[Bucket]) -> StepsSummary {
    let mut daily_steps = Vec::with_capacity(buckets.len());
    let mut weekly_total: u64 = 0;

    for metric in bucket_totals(buckets) {
        daily_steps.push(metric.total);
        weekly_total += metric.total;
    }

    let today_steps = daily_steps.last().copied().unwrap_or(0);
    let avg_steps = if daily_steps.is_empty() {
        0
    } else {
        (weekly_total as f64 / daily_steps.len() as f64).round() as u64
    };
    let trend = classify_trend(&daily_steps);

    StepsSummary {
        today_steps,
        avg_steps,
        weekly_total,
        daily_steps,
        trend,
    }
}

/// Classify a short daily-steps series as increasing, decreasing, or stable.
///
/// Compares the mean of the last 3 points against the mean of the first 3.
/// For series of 3-5 points the two windows overlap; this matches the
/// upstream classifier and is kept as-is so borderline series keep their
/// observed labels.
pub fn classify_trend(daily_steps: &[u64]) -> Trend {
    if daily_steps.len() < 3 {
        return Trend::Stable;
    }

    let recent = &daily_steps[daily_steps.len() - 3..];
    let older = &daily_steps[..3];

    let recent_mean = mean(recent);
    let older_mean = mean(older);

    if recent_mean > older_mean * 1.1 {
        Trend::Increasing
    } else if recent_mean < older_mean * 0.9 {
        Trend::Decreasing
    } else {
        Trend::Stable
    }
}

fn mean(values: &[u64]) -> f64 {
    values.iter().sum::<u64>() as f64 / values.len() as f64
}
