//! Day planner: turns unpinned tasks and a day window into a schedule.
//!
//! # Algorithm
//!
//! 1. Tasks are stably sorted by ascending complexity, so simpler tasks come
//!    first and ties keep their input order.
//! 2. A cursor starts at the beginning of the day. Each task is pinned at the
//!    cursor, followed by a buffer sized by the [`BufferPolicy`]; the cursor
//!    advances past both.
//! 3. The schedule is completed, which sorts it and checks for collisions.
//!
//! The end of the day is recorded on the schedule but not enforced: a long
//! task list simply runs past it. [`Schedule::overrun`] reports by how much.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`policy`]: Buffer sizing
//!
//! # Usage Examples
//!
//! ```rust
//! use jiff::{civil::date, SignedDuration};
//! use tash_core::{models::Task, Planner};
//!
//! let day = date(2023, 1, 1);
//! let tasks = vec![
//!     Task::builder("Task 1").duration(SignedDuration::from_hours(1)).complexity(2).build()?,
//!     Task::builder("Task 2").duration(SignedDuration::from_hours(2)).complexity(1).build()?,
//! ];
//!
//! let mut planner = Planner::new(tasks, day.at(9, 0, 0, 0), day.at(18, 0, 0, 0));
//! let schedule = planner.plan()?;
//!
//! assert_eq!(schedule.len(), 4);
//! assert_eq!(schedule.tasks()[0].name(), "Task 2");
//! assert_eq!(schedule.tasks()[1].name(), "buffer");
//! # Ok::<(), tash_core::PlannerError>(())
//! ```

use jiff::civil::DateTime;
use log::debug;

use crate::{
    error::Result,
    models::{PinnedTask, Schedule, Task},
};

pub mod builder;
pub mod policy;


pub use builder::PlannerBuilder;
pub use policy::BufferPolicy;

/// Holds the tasks and day window to plan, and the last schedule produced.
#[derive(Debug, Clone)]
pub struct Planner {
    tasks: Vec<Task>,
    day_start: DateTime,
    day_stop: DateTime,
    pub(crate) policy: BufferPolicy,
    schedule: Option<Schedule>,
}

impl Planner {
    /// Creates a planner with the default buffer policy.
    pub fn new(tasks: Vec<Task>, day_start: DateTime, day_stop: DateTime) -> Self {
        Self {
            tasks,
            day_start,
            day_stop,
            policy: BufferPolicy::default(),
            schedule: None,
        }
    }

    /// Creates a builder for configuring a planner.
    pub fn builder() -> PlannerBuilder {
        PlannerBuilder::new()
    }

    /// Plan the day, replacing any previously produced schedule.
    ///
    /// On failure no schedule is retained.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if a task has no duration,
    /// `PlannerError::Time` if the day runs off the calendar, and
    /// `PlannerError::Collision` if the finished schedule overlaps.
    pub fn plan(&mut self) -> Result<&Schedule> {
        self.schedule = None;
        let schedule = plan_day(&self.tasks, self.day_start, self.day_stop, &self.policy)?;
        Ok(self.schedule.insert(schedule))
    }

    /// The schedule from the last successful [`Planner::plan`] call.
    pub fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    /// Consume the planner, returning its last schedule.
    pub fn into_schedule(self) -> Option<Schedule> {
        self.schedule
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn day_start(&self) -> DateTime {
        self.day_start
    }

    pub fn day_stop(&self) -> DateTime {
        self.day_stop
    }

    pub fn policy(&self) -> &BufferPolicy {
        &self.policy
    }
}

/// Plan `tasks` into a fresh schedule for the window `[day_start, day_stop)`.
///
/// # Errors
///
/// See [`Planner::plan`].
pub fn plan_day(
    tasks: &[Task],
    day_start: DateTime,
    day_stop: DateTime,
    policy: &BufferPolicy,
) -> Result<Schedule> {
    let mut ordered = tasks.to_vec();
    ordered.sort_by_key(|task| task.complexity());

    let mut schedule = Schedule::new(day_start, day_stop);
    let mut cursor = day_start;
    for task in ordered {
        let pinned = task.pin(cursor)?;
        cursor = pinned.stop();

        let length = policy.buffer_after(&pinned)?;
        debug!(
            "pinned '{}' at {} for {}, buffer {}",
            pinned.name(),
            pinned.start(),
            pinned.duration(),
            length
        );
        schedule.add(pinned);

        let buffer = PinnedTask::buffer(cursor, length)?;
        cursor = buffer.stop();
        schedule.add(buffer);
    }

    schedule.complete()?;
    debug!("planned {} entries ending at {}", schedule.len(), cursor);
    Ok(schedule)
}
