//! WellSync CLI - Command-line interface for WellSync Core
//!
//! Commands:
//! - report: Build a health report from Google Fit payload files
//! - validate: Validate a Google Fit payload file
//! - score: Compute the health score for given averages

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::Utc;
use wellsync_core::adapters::{GoogleFitAdapter, ProviderAdapter};
use wellsync_core::report::build_report;
use wellsync_core::score::compute_health_score;
use wellsync_core::sleep::aggregate_sleep;
use wellsync_core::steps::aggregate_steps;
use wellsync_core::types::{ReportEnvelope, SleepConsistency, SleepSummary, StepsSummary, Trend};
use wellsync_core::{ReportError, CORE_VERSION};

/// WellSync - health metrics aggregation and scoring for Google Fit data
#[derive(Parser)]
#[command(name = "wellsync")]
#[command(version = CORE_VERSION)]
#[command(about = "Aggregate Google Fit data into a health report", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a health report from Google Fit payload files
    Report {
        /// Steps aggregate response (use - for stdin)
        #[arg(long)]
        steps: PathBuf,

        /// Sleep sessions-list response (use - for stdin)
        #[arg(long)]
        sleep: PathBuf,

        /// Heart-rate aggregate response; omitted = no readings
        #[arg(long)]
        heart_rate: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "json-pretty")]
        output_format: OutputFormat,
    },

    /// Validate a Google Fit payload file
    Validate {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Payload kind to validate against
        #[arg(long, value_enum)]
        payload_kind: PayloadKind,

        /// Output validation report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute the health score for given averages
    Score {
        /// Average daily steps
        #[arg(long)]
        avg_steps: u64,

        /// Average nightly sleep in hours
        #[arg(long)]
        avg_sleep_hours: f64,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Bare report JSON
    Json,
    /// Pretty-printed report JSON
    JsonPretty,
    /// Report wrapped in the transport envelope
    Envelope,
}

#[derive(Clone, ValueEnum)]
enum PayloadKind {
    /// Aggregate response (time buckets of samples)
    Buckets,
    /// Sessions-list response (sleep sessions)
    Sessions,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), WellsyncCliError> {
    match cli.command {
        Commands::Report {
            steps,
            sleep,
            heart_rate,
            output_format,
        } => cmd_report(&steps, &sleep, heart_rate.as_deref(), output_format),

        Commands::Validate {
            input,
            payload_kind,
            json,
        } => cmd_validate(&input, payload_kind, json),

        Commands::Score {
            avg_steps,
            avg_sleep_hours,
        } => cmd_score(avg_steps, avg_sleep_hours),
    }
}

fn cmd_report(
    steps_path: &Path,
    sleep_path: &Path,
    heart_rate_path: Option<&Path>,
    output_format: OutputFormat,
) -> Result<(), WellsyncCliError> {
    let adapter = GoogleFitAdapter;

    let step_buckets = adapter.parse_buckets(&read_input(steps_path)?)?;
    let sleep_sessions = adapter.parse_sessions(&read_input(sleep_path)?)?;
    let heart_rate_buckets = match heart_rate_path {
        Some(path) => adapter.parse_buckets(&read_input(path)?)?,
        None => Vec::new(),
    };

    let report = build_report(&step_buckets, &sleep_sessions, &heart_rate_buckets);

    let output = match output_format {
        OutputFormat::Json => serde_json::to_string(&report)?,
        OutputFormat::JsonPretty => serde_json::to_string_pretty(&report)?,
        OutputFormat::Envelope => {
            serde_json::to_string_pretty(&ReportEnvelope::success(report, Utc::now()))?
        }
    };

    println!("{}", output);
    Ok(())
}

fn cmd_validate(
    input: &Path,
    payload_kind: PayloadKind,
    json: bool,
) -> Result<(), WellsyncCliError> {
    let adapter = GoogleFitAdapter;
    let raw = read_input(input)?;

    let report = match payload_kind {
        PayloadKind::Buckets => {
            let buckets = adapter.parse_buckets(&raw)?;
            let summary: StepsSummary = aggregate_steps(&buckets);
            ValidationReport {
                payload_kind: "buckets".to_string(),
                records: buckets.len(),
                excluded: 0,
                note: format!(
                    "{} buckets, {} total, trend {}",
                    buckets.len(),
                    summary.weekly_total,
                    summary.trend.as_str()
                ),
            }
        }
        PayloadKind::Sessions => {
            let sessions = adapter.parse_sessions(&raw)?;
            let excluded = sessions.iter().filter(|s| !s.is_valid()).count();
            let summary: SleepSummary = aggregate_sleep(&sessions);
            ValidationReport {
                payload_kind: "sessions".to_string(),
                records: sessions.len(),
                excluded,
                note: format!(
                    "{} sessions ({} excluded), consistency: {}",
                    sessions.len(),
                    excluded,
                    summary.consistency.as_str()
                ),
            }
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("WellSync Validation Report");
        println!("==========================");
        println!("Kind:     {}", report.payload_kind);
        println!("Records:  {}", report.records);
        println!("Excluded: {}", report.excluded);
        println!("Note:     {}", report.note);
    }

    Ok(())
}

fn cmd_score(avg_steps: u64, avg_sleep_hours: f64) -> Result<(), WellsyncCliError> {
    let steps = StepsSummary {
        today_steps: avg_steps,
        avg_steps,
        weekly_total: avg_steps * 7,
        daily_steps: vec![avg_steps; 7],
        trend: Trend::Stable,
    };
    let sleep = SleepSummary {
        last_night_hours: avg_sleep_hours,
        avg_sleep_hours,
        consistency: SleepConsistency::InsufficientData,
    };

    println!("{}", compute_health_score(&steps, &sleep));
    Ok(())
}

// Helper functions

fn read_input(path: &Path) -> Result<String, WellsyncCliError> {
    if path.to_string_lossy() == "-" {
        if atty::is(atty::Stream::Stdin) {
            return Err(WellsyncCliError::StdinIsTty);
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

#[derive(serde::Serialize)]
struct ValidationReport {
    payload_kind: String,
    records: usize,
    excluded: usize,
    note: String,
}

#[derive(Debug)]
enum WellsyncCliError {
    Io(io::Error),
    Parse(ReportError),
    Json(serde_json::Error),
    StdinIsTty,
}

impl From<io::Error> for WellsyncCliError {
    fn from(e: io::Error) -> Self {
        WellsyncCliError::Io(e)
    }
}

impl From<ReportError> for WellsyncCliError {
    fn from(e: ReportError) -> Self {
        WellsyncCliError::Parse(e)
    }
}

impl From<serde_json::Error> for WellsyncCliError {
    fn from(e: serde_json::Error) -> Self {
        WellsyncCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<WellsyncCliError> for CliError {
    fn from(e: WellsyncCliError) -> Self {
        match e {
            WellsyncCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            WellsyncCliError::Parse(e) => CliError {
                code: "PARSE_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Ensure input is a Google Fit aggregate or sessions response".to_string()),
            },
            WellsyncCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            WellsyncCliError::StdinIsTty => CliError {
                code: "STDIN_IS_TTY".to_string(),
                message: "Refusing to read payload from an interactive terminal".to_string(),
                hint: Some("Pipe a payload into stdin or pass a file path".to_string()),
            },
        }
    }
}
