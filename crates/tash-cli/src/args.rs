//! Command-line argument definitions using clap.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types from [`tash_core::params`], keeping the core free of CLI
//! framework concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::{
    civil::{Date, Time},
    Zoned,
};
use tash_core::{params::CheckTasks, BufferPolicy, PlanDay};

/// Plan a single working day from a task file
///
/// Tasks are ordered from the simplest to the most complex and laid out back
/// to back from the start of the day, each followed by a short recovery
/// buffer sized from the task's length and stated inaccuracy.
#[derive(Parser)]
#[command(version, about, name = "tash")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Tash CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Plan the day and print the schedule
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Parse a task file and list its tasks without planning
    #[command(alias = "c")]
    Check(CheckArgs),
}

/// Plan a working day
///
/// Reads tasks from FILE, or from $XDG_DATA_HOME/tash/tasks.tashes when no
/// file is given, and prints the resulting schedule.
#[derive(ClapArgs)]
pub struct PlanArgs {
    /// Task file to plan
    #[arg(help = "Task file to plan (defaults to $XDG_DATA_HOME/tash/tasks.tashes)")]
    pub file: Option<PathBuf>,
    /// Day to plan, e.g. 2025-05-31 (defaults to today)
    #[arg(short, long, help = "Day to plan, e.g. 2025-05-31 (defaults to today)")]
    pub date: Option<Date>,
    /// Start of the working day
    #[arg(long, default_value = "09:00", help = "Start of the working day (HH:MM)")]
    pub from: Time,
    /// End of the working day
    #[arg(long, default_value = "18:00", help = "End of the working day (HH:MM)")]
    pub until: Time,
    /// Multiplier applied to each task's duration inaccuracy
    #[arg(
        long,
        default_value_t = BufferPolicy::DEFAULT_INACCURACY_FACTOR,
        help = "Buffer multiplier applied to each task's duration inaccuracy"
    )]
    pub inaccuracy_factor: f64,
    /// Multiplier applied to each task's duration
    #[arg(
        long,
        default_value_t = BufferPolicy::DEFAULT_DURATION_FACTOR,
        help = "Buffer multiplier applied to each task's duration"
    )]
    pub duration_factor: f64,
    /// Print the schedule as JSON
    #[arg(long, help = "Print the schedule as JSON instead of a table")]
    pub json: bool,
}

impl From<PlanArgs> for PlanDay {
    fn from(val: PlanArgs) -> Self {
        let date = val.date.unwrap_or_else(|| Zoned::now().date());
        PlanDay {
            tasks_file: val.file,
            day_start: date.to_datetime(val.from),
            day_stop: date.to_datetime(val.until),
            policy: BufferPolicy {
                inaccuracy_factor: val.inaccuracy_factor,
                duration_factor: val.duration_factor,
            },
        }
    }
}

/// Check a task file
///
/// Parses every record and validates ratings, reporting the first problem
/// found or listing the tasks.
#[derive(ClapArgs)]
pub struct CheckArgs {
    /// Task file to check
    #[arg(help = "Task file to check")]
    pub file: PathBuf,
}

impl From<CheckArgs> for CheckTasks {
    fn from(val: CheckArgs) -> Self {
        CheckTasks { path: val.file }
    }
}
