//! Core library for the Tash single-day task planner.
//!
//! Given tasks with durations and complexity ratings, the planner assigns
//! each a start and stop time within a working day, inserting a short
//! recovery buffer after every task, and produces a validated, time-ordered
//! [`Schedule`].
//!
//! - [`models`]: [`Task`], [`PinnedTask`], [`Schedule`] and their invariants
//! - [`planner`]: the planning algorithm, [`PlannerBuilder`] and [`BufferPolicy`]
//! - [`reader`]: parser for `.tashes` task files
//! - [`display`]: markdown formatting of tasks and schedules
//! - [`params`]: interface-agnostic request types for front ends
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::{civil::date, SignedDuration};
//! use tash_core::{reader, PlannerBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tasks = reader::parse_tasks(
//!     "name=\"Task 1\",duration=1:0:0,complexity=3<--->name=\"Task 2\",duration=0:45:0,complexity=1",
//! )?;
//!
//! let day = date(2025, 5, 31);
//! let mut planner = PlannerBuilder::new()
//!     .with_tasks(tasks)
//!     .with_window(day.at(9, 0, 0, 0), day.at(18, 0, 0, 0))
//!     .build()?;
//!
//! let schedule = planner.plan()?;
//! assert_eq!(schedule.tasks()[0].name(), "Task 2");
//! println!("{schedule}");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod reader;

// Re-export commonly used types
pub use display::{ClockTime, FriendlyDuration};
pub use error::{PlannerError, Result};
pub use models::{PinnedTask, Rating, Schedule, Task, TaskBuilder, TaskKind};
pub use params::{CheckTasks, PlanDay};
pub use planner::{plan_day, BufferPolicy, Planner, PlannerBuilder};
