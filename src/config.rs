//! Run configuration.
//!
//! A `RunConfig` is the resolved set of choices for one run: where the jobs
//! come from, which policies to simulate, and how and where to report.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::Policy;
use crate::report::OutputFormat;

/// Where a report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination<'a> {
    /// Standard output.
    Stdout,
    /// A file, replaced atomically.
    File(&'a Path),
    /// The job file itself, rewritten with start-time columns appended.
    InPlace(&'a Path),
}

/// Configuration for one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Job file to read.
    pub input: PathBuf,
    /// Policies to simulate, in report column order.
    pub policies: Vec<Policy>,
    /// Report layout.
    pub format: OutputFormat,
    /// Report file. `None` = standard output.
    pub output: Option<PathBuf>,
    /// Rewrite the input file with start-time columns appended.
    pub in_place: bool,
}

impl RunConfig {
    /// Creates a configuration reading `input` and running every policy.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            policies: Policy::ALL.to_vec(),
            format: OutputFormat::Table,
            output: None,
            in_place: false,
        }
    }

    /// Sets the policies to run.
    pub fn with_policies(mut self, policies: Vec<Policy>) -> Self {
        self.policies = policies;
        self
    }

    /// Sets the report format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the report file.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Rewrites the input file instead of printing.
    pub fn in_place(mut self) -> Self {
        self.in_place = true;
        self
    }

    /// Checks the combination of options.
    ///
    /// - at least one policy
    /// - no policy listed twice
    /// - `in_place` only with the table format and without `output`
    pub fn validate(&self) -> Result<()> {
        if self.policies.is_empty() {
            return Err(Error::Config("no scheduling policy selected".into()));
        }
        for (i, policy) in self.policies.iter().enumerate() {
            if self.policies[..i].contains(policy) {
                return Err(Error::Config(format!("policy {policy} listed more than once")));
            }
        }
        if self.in_place {
            if self.format != OutputFormat::Table {
                return Err(Error::Config(
                    "in-place rewrite only supports the table format".into(),
                ));
            }
            if self.output.is_some() {
                return Err(Error::Config(
                    "in-place rewrite cannot be combined with an output file".into(),
                ));
            }
        }
        Ok(())
    }

    /// Resolved report destination.
    pub fn destination(&self) -> Destination<'_> {
        if self.in_place {
            Destination::InPlace(&self.input)
        } else {
            match &self.output {
                Some(path) => Destination::File(path),
                None => Destination::Stdout,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::new("jobs.txt");
        assert_eq!(config.policies, Policy::ALL.to_vec());
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.destination(), Destination::Stdout);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_file_destination() {
        let config = RunConfig::new("jobs.txt").with_output("out.json");
        assert_eq!(config.destination(), Destination::File(Path::new("out.json")));
    }

    #[test]
    fn test_in_place_targets_input() {
        let config = RunConfig::new("jobs.txt").in_place();
        assert!(config.validate().is_ok());
        assert_eq!(config.destination(), Destination::InPlace(Path::new("jobs.txt")));
    }

    #[test]
    fn test_in_place_rejects_json() {
        let config = RunConfig::new("jobs.txt")
            .with_format(OutputFormat::Json)
            .in_place();
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_in_place_rejects_output_file() {
        let config = RunConfig::new("jobs.txt").with_output("x.txt").in_place();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_and_duplicate_policies() {
        assert!(RunConfig::new("j").with_policies(vec![]).validate().is_err());
        let dup = RunConfig::new("j").with_policies(vec![Policy::Spn, Policy::Hrrn, Policy::Spn]);
        let err = dup.validate().unwrap_err();
        assert!(err.to_string().contains("SPN listed more than once"));
    }

    #[test]
    fn test_serde_round_trip() {
        let config = RunConfig::new("data/jobs.txt")
            .with_policies(vec![Policy::Hrrn])
            .with_format(OutputFormat::Gantt);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""policies":["hrrn"]"#));
        assert_eq!(serde_json::from_str::<RunConfig>(&json).unwrap(), config);
    }
}
