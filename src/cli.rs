use std::path::PathBuf;

use clap::Parser;
use u_batch_schedule::config::RunConfig;
use u_batch_schedule::models::Policy;
use u_batch_schedule::report::OutputFormat;

/// Simulate FCFS, SPN and HRRN over a batch of jobs.
///
/// Reads `<id> <arrival> <service>` records (ids A, B, C, ... in order,
/// arrivals non-decreasing) and reports each job's start time under every
/// selected policy.
#[derive(Debug, Parser)]
#[command(name = "u-batch-schedule", version, about, long_about = None)]
pub struct Cli {
    /// Job file.
    pub input: PathBuf,

    /// Policy to simulate; repeat to select several (default: all).
    #[arg(short, long = "policy", value_enum)]
    pub policies: Vec<Policy>,

    /// Report layout.
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Write the report to this file instead of standard output.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Rewrite the job file with one start-time column per policy appended.
    #[arg(long)]
    pub in_place: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level for the given verbosity count.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        let policies = if cli.policies.is_empty() {
            Policy::ALL.to_vec()
        } else {
            cli.policies
        };
        RunConfig {
            input: cli.input,
            policies,
            format: cli.format,
            output: cli.output,
            in_place: cli.in_place,
        }
    }
}
