//! Job file loading.
//!
//! # Format
//!
//! One job per line, whitespace separated:
//!
//! ```text
//! A 0 3
//! B 2 6
//! C 4 4
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Columns after the
//! third (start times appended by an earlier run) are ignored.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{Job, JobBatch, JobId, Ticks};

/// A loaded job file: its text as read and the batch parsed from it.
#[derive(Debug, Clone)]
pub struct JobFile {
    /// Where the jobs were read from.
    pub path: PathBuf,
    /// File contents, comments and blank lines included.
    pub source: String,
    /// Validated jobs.
    pub batch: JobBatch,
}

/// Whether `line` holds a job record (not blank, not a `#` comment).
pub fn is_record(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && !line.starts_with('#')
}

/// Parses job records without validating the sequence.
pub fn parse_jobs(text: &str) -> Result<Vec<Job>> {
    let mut jobs = Vec::new();

    for (n, raw) in text.lines().enumerate() {
        if is_record(raw) {
            jobs.push(parse_record(raw.trim(), n + 1)?);
        }
    }

    Ok(jobs)
}

/// Parses and validates a job batch.
pub fn parse_batch(text: &str) -> Result<JobBatch> {
    let jobs = parse_jobs(text)?;
    JobBatch::new(jobs).map_err(|errors| {
        warn!(count = errors.len(), "job batch rejected");
        Error::Validation(errors)
    })
}

/// Reads, parses and validates a job file.
pub fn load_jobs(path: &Path) -> Result<JobFile> {
    if !path.exists() {
        return Err(Error::MissingInput(path.to_path_buf()));
    }
    let source = fs::read_to_string(path)?;
    let batch = parse_batch(&source)?;
    debug!(path = %path.display(), jobs = batch.len(), "loaded job batch");
    Ok(JobFile {
        path: path.to_path_buf(),
        source,
        batch,
    })
}

fn parse_record(line: &str, line_no: usize) -> Result<Job> {
    let malformed = |message: String| Error::MalformedRecord {
        line: line_no,
        message,
    };

    let mut fields = line.split_whitespace();
    let (Some(name), Some(arrival), Some(service)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(malformed(format!("expected `<id> <arrival> <service>`, got `{line}`")));
    };

    let mut letters = name.chars();
    let id = match (letters.next(), letters.next()) {
        (Some(c), None) => JobId::new(c),
        _ => None,
    }
    .ok_or_else(|| malformed(format!("job id must be one uppercase letter A-Z, got `{name}`")))?;

    let arrival_time: Ticks = arrival
        .parse()
        .map_err(|_| malformed(format!("arrival time `{arrival}` is not a non-negative integer")))?;
    let service_time: Ticks = service
        .parse()
        .map_err(|_| malformed(format!("service time `{service}` is not a non-negative integer")))?;

    Ok(Job::new(id, arrival_time, service_time))
}
