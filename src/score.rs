//! Health score calculation
//!
//! Combines the step and sleep summaries into a single bounded 0-100 score
//! via weighted linear contributions.

use crate::types::{SleepSummary, StepsSummary};

const BASE_SCORE: f64 = 50.0;
const MAX_STEP_POINTS: f64 = 30.0;
const MAX_SLEEP_POINTS: f64 = 20.0;
const STEP_TARGET: f64 = 10_000.0;
const IDEAL_SLEEP_HOURS: f64 = 8.0;

/// Compute the composite health score.
///
/// Base 50, up to 30 points for average steps (linear to 10,000/day, capped)
/// and up to 20 points for average sleep (full credit inside the 7-9h band,
/// 5 points lost per hour of distance from 8h outside it, floored at 0).
/// The result is always an integer in [0, 100].
pub fn compute_health_score(steps: &StepsSummary, sleep: &SleepSummary) -> u8 {
    let step_points = (steps.avg_steps as f64 / STEP_TARGET * MAX_STEP_POINTS).min(MAX_STEP_POINTS);

    let hours = sleep.avg_sleep_hours;
    let sleep_points = if (7.0..=9.0).contains(&hours) {
        MAX_SLEEP_POINTS
    } else {
        (MAX_SLEEP_POINTS - (hours - IDEAL_SLEEP_HOURS).abs() * 5.0).max(0.0)
    };

    (BASE_SCORE + step_points + sleep_points).min(100.0).round() as u8
}
