//! Uniprocessor batch scheduling simulator.
//!
//! Simulates three classic non-preemptive CPU-scheduling disciplines over a
//! fixed batch of jobs and reports when each job starts under each one.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `JobId`, `JobBatch`, `Schedule`, `Policy`
//! - **`validation`**: Batch integrity checks (id run from `A`, arrival order)
//! - **`dispatching`**: Priority rules (response ratio) and ready-pool selection
//! - **`scheduler`**: `Fcfs`, `Spn`, `Hrrn`, the shared arrival feed and KPIs
//! - **`io`** / **`report`**: Job file parsing and report rendering
//! - **`config`**: Resolved run configuration
//!
//! # Example
//!
//! ```
//! use u_batch_schedule::io::parse_batch;
//! use u_batch_schedule::models::Policy;
//! use u_batch_schedule::scheduler::run_policies;
//!
//! let batch = parse_batch("A 0 3\nB 2 6\nC 4 4\nD 6 5\nE 8 2\n").unwrap();
//! let schedules = run_policies(&batch, &Policy::ALL);
//!
//! assert_eq!(schedules[0].start_times(), vec![0, 3, 9, 13, 18]); // FCFS
//! assert_eq!(schedules[1].start_times(), vec![0, 3, 11, 15, 9]); // SPN
//! assert_eq!(schedules[2].start_times(), vec![0, 3, 9, 15, 13]); // HRRN
//! ```
//!
//! # References
//!
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9
//! - Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod io;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;

pub use error::{Error, Result};
