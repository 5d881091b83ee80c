//! Insight generation
//!
//! Applies a small fixed rule set over the per-metric summaries to produce
//! prioritized, human-readable recommendation records. Rules are evaluated
//! in a fixed order and each independently emits at most one insight, so
//! identical input always yields the identical ordered list.

use crate::types::{
    HeartRateSummary, Insight, Priority, SleepConsistency, SleepSummary, StepsSummary,
};

const STEP_GOAL_THRESHOLD: u64 = 8_000;
const SLEEP_HOURS_THRESHOLD: f64 = 7.0;

/// Generate the ordered insight list for one report.
///
/// The heart-rate summary is accepted for parity with the other aggregates
/// but no current rule reads it; it is the extension point for future
/// cardiovascular rules.
pub fn generate_insights(
    steps: &StepsSummary,
    sleep: &SleepSummary,
    _heart_rate: &HeartRateSummary,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    if steps.avg_steps < STEP_GOAL_THRESHOLD {
        insights.push(Insight {
            priority: Priority::High,
            category: "activity".to_string(),
            title: "Increase Daily Activity".to_string(),
            description: format!(
                "Your average {} steps is below optimal. Target 10,000+ steps daily.",
                format_thousands(steps.avg_steps)
            ),
            recommendation: "Add 15-minute walks after meals".to_string(),
            impact: "Reduces disease risk by 40%".to_string(),
        });
    }

    if sleep.avg_sleep_hours < SLEEP_HOURS_THRESHOLD {
        insights.push(Insight {
            priority: Priority::High,
            category: "sleep".to_string(),
            title: "Improve Sleep Duration".to_string(),
            description: format!(
                "Your average {:.1}h sleep is below recommended 7-9 hours.",
                sleep.avg_sleep_hours
            ),
            recommendation: "Establish consistent bedtime routine".to_string(),
            impact: "Improves recovery by 25%".to_string(),
        });
    }

    if sleep.consistency == SleepConsistency::NeedsImprovement {
        insights.push(Insight {
            priority: Priority::Medium,
            category: "sleep".to_string(),
            title: "Improve Sleep Consistency".to_string(),
            description: "Irregular sleep patterns affect metabolism and recovery.".to_string(),
            recommendation: "Set fixed bedtime and wake time".to_string(),
            impact: "Better hormone regulation".to_string(),
        });
    }

    insights
}

/// Format an integer with comma thousands separators ("7000" -> "7,000")
fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
