//! Parameter structures for Tash operations
//!
//! Interface-agnostic request types. Front ends (the CLI today) define their
//! own argument structs with framework derives and convert into these, so the
//! core stays free of clap:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Planner      │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│  (via builder)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use std::path::PathBuf;

use jiff::civil::DateTime;

use crate::planner::BufferPolicy;

/// Parameters for planning one working day.
#[derive(Debug, Clone)]
pub struct PlanDay {
    /// Task file to read; `None` means the XDG default location
    pub tasks_file: Option<PathBuf>,
    /// Start of the working day
    pub day_start: DateTime,
    /// End of the working day (reported, not enforced)
    pub day_stop: DateTime,
    /// Buffer sizing factors
    pub policy: BufferPolicy,
}

/// Parameters for checking a task file without planning.
#[derive(Debug, Clone)]
pub struct CheckTasks {
    /// Task file to parse
    pub path: PathBuf,
}
