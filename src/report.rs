//! Report rendering and writing.
//!
//! Turns one schedule per policy into a persisted or printed report:
//!
//! - **Table**: each job record with one start-time column per policy,
//!   tab separated (`A\t0\t3\t0\t0\t0`).
//! - **JSON**: jobs, schedules and KPIs.
//! - **Gantt**: a text timeline per policy.
//!
//! An in-place rewrite instead appends the start-time columns to the job
//! file's own text (see [`append_columns`]).

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::io::is_record;
use crate::models::{Job, JobBatch, Schedule};
use crate::scheduler::ScheduleKpi;

/// Report layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated job records with start-time columns appended.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
    /// Text Gantt chart.
    Gantt,
}

/// Renders `schedules` for `batch` in the requested format.
pub fn render(format: OutputFormat, batch: &JobBatch, schedules: &[Schedule]) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(batch, schedules)),
        OutputFormat::Json => render_json(batch, schedules),
        OutputFormat::Gantt => Ok(schedules.iter().map(render_gantt).collect::<Vec<_>>().join("\n")),
    }
}

/// One line per job: `id arrival service start...`, tab separated.
///
/// Start-time columns follow the order of `schedules`.
pub fn render_table(batch: &JobBatch, schedules: &[Schedule]) -> String {
    let mut out = String::new();
    for (i, job) in batch.iter().enumerate() {
        let _ = write!(out, "{}\t{}\t{}", job.id, job.arrival_time, job.service_time);
        for schedule in schedules {
            if let Some(entry) = schedule.entries.get(i) {
                let _ = write!(out, "\t{}", entry.start_time);
            }
        }
        out.push('\n');
    }
    out
}

/// Appends one start-time column per schedule to every job record in
/// `source`.
///
/// Comment lines, blank lines and columns left by earlier runs are kept
/// as written. The `n`-th record line gets the `n`-th schedule entry.
pub fn append_columns(source: &str, schedules: &[Schedule]) -> String {
    let mut out = String::with_capacity(source.len() + source.len() / 2);
    let mut record = 0;
    for line in source.lines() {
        if is_record(line) {
            out.push_str(line.trim_end());
            for schedule in schedules {
                if let Some(entry) = schedule.entries.get(record) {
                    let _ = write!(out, "\t{}", entry.start_time);
                }
            }
            record += 1;
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    jobs: &'a [Job],
    schedules: Vec<JsonSchedule<'a>>,
}

#[derive(Serialize)]
struct JsonSchedule<'a> {
    #[serde(flatten)]
    schedule: &'a Schedule,
    kpi: ScheduleKpi,
}

/// Jobs, schedules and per-schedule KPIs as pretty JSON.
pub fn render_json(batch: &JobBatch, schedules: &[Schedule]) -> Result<String> {
    let report = JsonReport {
        jobs: batch.jobs(),
        schedules: schedules
            .iter()
            .map(|schedule| JsonSchedule {
                schedule,
                kpi: ScheduleKpi::calculate(schedule),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Text timeline of one schedule.
///
/// One row per job over `[0, makespan)`: `.` while the job has arrived but
/// waits, `#` while it runs.
pub fn render_gantt(schedule: &Schedule) -> String {
    let horizon = schedule.makespan();
    let mut out = format!("{} ({})\n", schedule.policy, schedule.policy.description());

    for entry in &schedule.entries {
        let bar: String = (0..horizon)
            .map(|t| {
                if t >= entry.start_time && t < entry.completion_time() {
                    '#'
                } else if t >= entry.arrival_time && t < entry.start_time {
                    '.'
                } else {
                    ' '
                }
            })
            .collect();
        let _ = writeln!(out, "{} |{}| {}", entry.job_id, bar, entry.start_time);
    }

    let _ = writeln!(out, "makespan {horizon}");
    out
}

/// Writes `contents` to `path` through a sibling temp file and a rename,
/// so readers never observe a half-written report.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    let tmp = path.with_file_name(format!(".{file_name}.tmp"));

    fs::write(&tmp, contents)?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err.into());
    }
    debug!(path = %path.display(), bytes = contents.len(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{fixtures, Policy};
    use crate::scheduler::run_policies;

    #[test]
    fn test_table_appends_one_column_per_policy() {
        let batch = fixtures::textbook();
        let table = render_table(&batch, &run_policies(&batch, &Policy::ALL));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "A\t0\t3\t0\t0\t0");
        assert_eq!(lines[2], "C\t4\t4\t9\t11\t9");
        assert_eq!(lines[4], "E\t8\t2\t18\t9\t13");
    }

    #[test]
    fn test_table_without_schedules_echoes_jobs() {
        let batch = fixtures::batch(&[(0, 1)]);
        assert_eq!(render_table(&batch, &[]), "A\t0\t1\n");
    }

    #[test]
    fn test_append_columns_keeps_comments_and_blank_lines() {
        let batch = fixtures::batch(&[(0, 3), (2, 6)]);
        let schedules = run_policies(&batch, &Policy::ALL);
        let source = "# two jobs\nA\t0\t3\n\n  # B arrives while A runs\nB\t2\t6\n";

        assert_eq!(
            append_columns(source, &schedules),
            "# two jobs\nA\t0\t3\t0\t0\t0\n\n  # B arrives while A runs\nB\t2\t6\t3\t3\t3\n"
        );
    }

    #[test]
    fn test_append_columns_keeps_earlier_columns() {
        let batch = fixtures::batch(&[(0, 3), (2, 6)]);
        let schedules = run_policies(&batch, &[Policy::Spn]);
        let source = "A 0 3\t0\nB 2 6\t3";

        assert_eq!(append_columns(source, &schedules), "A 0 3\t0\t0\nB 2 6\t3\t3\n");
    }

    #[test]
    fn test_json_report_shape() {
        let batch = fixtures::textbook();
        let json = render_json(&batch, &run_policies(&batch, &[Policy::Spn])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["jobs"].as_array().unwrap().len(), 5);
        let spn = &value["schedules"][0];
        assert_eq!(spn["policy"], "spn");
        assert_eq!(spn["entries"][4]["start_time"], 9);
        assert_eq!(spn["dispatch_order"], serde_json::json!(["A", "B", "E", "C", "D"]));
        assert_eq!(spn["kpi"]["makespan"], 20);
    }

    #[test]
    fn test_gantt_rows() {
        let batch = fixtures::batch(&[(0, 2), (1, 1)]);
        let schedules = run_policies(&batch, &[Policy::Fcfs]);
        let chart = render_gantt(&schedules[0]);
        assert_eq!(
            chart,
            "FCFS (First-Come-First-Served)\nA |## | 0\nB | .#| 2\nmakespan 3\n"
        );
    }

    #[test]
    fn test_render_dispatches_on_format() {
        let batch = fixtures::batch(&[(0, 2)]);
        let schedules = run_policies(&batch, &Policy::ALL);
        assert_eq!(
            render(OutputFormat::Table, &batch, &schedules).unwrap(),
            "A\t0\t2\t0\t0\t0\n"
        );
        assert!(render(OutputFormat::Gantt, &batch, &schedules)
            .unwrap()
            .contains("HRRN (Highest-Response-Ratio-Next)"));
        assert!(render(OutputFormat::Json, &batch, &schedules)
            .unwrap()
            .starts_with('{'));
    }

    #[test]
    fn test_write_atomic_replaces_file() {
        let dir = std::env::temp_dir().join(format!("u-batch-schedule-report-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("jobs.txt");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, "new\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
        assert!(!dir.join(".jobs.txt.tmp").exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_atomic_cleans_up_after_failed_rename() {
        let dir = std::env::temp_dir().join(format!(
            "u-batch-schedule-report-rename-{}",
            std::process::id()
        ));
        let target = dir.join("jobs.txt");
        // A non-empty directory in the way makes the rename fail
        fs::create_dir_all(target.join("keep")).unwrap();

        assert!(write_atomic(&target, "new\n").is_err());
        assert!(!dir.join(".jobs.txt.tmp").exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
