//! WellSync Core - health metrics aggregation and scoring engine
//!
//! WellSync Core transforms raw Google Fit time-series payloads into typed
//! daily/weekly summaries through a deterministic pipeline: payload
//! adaptation → per-metric aggregation → trend/consistency classification →
//! health scoring → insight generation.
//!
//! Every aggregation is a pure function of its input: no shared state, no
//! hidden randomness, safe for concurrent reuse without locking.

pub mod adapters;
pub mod error;
pub mod heart_rate;
pub mod insights;
pub mod report;
pub mod score;
pub mod sleep;
pub mod steps;
pub mod types;

pub use adapters::{GoogleFitAdapter, ProviderAdapter};
pub use error::ReportError;
pub use heart_rate::aggregate_heart_rate;
pub use insights::generate_insights;
pub use report::{build_report, google_fit_report};
pub use score::compute_health_score;
pub use sleep::aggregate_sleep;
pub use steps::aggregate_steps;
pub use types::{HealthReport, ReportEnvelope};

/// Core version embedded in report envelopes
pub const CORE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for report envelopes
pub const PRODUCER_NAME: &str = "wellsync-core";
