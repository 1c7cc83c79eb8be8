#![forbid(unsafe_code)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use tracing::info;

use u_batch_schedule::config::{Destination, RunConfig};
use u_batch_schedule::{io, report, scheduler};

fn main() {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli.into()) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(config: RunConfig) -> Result<()> {
    config.validate()?;

    // Loading validates the whole batch; nothing is simulated on failure.
    let file = io::load_jobs(&config.input)
        .with_context(|| format!("loading {}", config.input.display()))?;
    info!(jobs = file.batch.len(), policies = ?config.policies, "job batch loaded");

    let schedules = scheduler::run_policies(&file.batch, &config.policies);

    match config.destination() {
        Destination::Stdout => {
            let rendered = report::render(config.format, &file.batch, &schedules)?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
        Destination::File(path) => {
            let rendered = report::render(config.format, &file.batch, &schedules)?;
            report::write_atomic(path, &rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        Destination::InPlace(path) => {
            let rewritten = report::append_columns(&file.source, &schedules);
            report::write_atomic(path, &rewritten)
                .with_context(|| format!("rewriting {}", path.display()))?;
            info!(path = %path.display(), "job file updated");
        }
    }

    Ok(())
}
