//! Data models for tasks and schedules.
//!
//! A [`Task`] starts out unpinned: it carries its duration and ratings but no
//! place in the day. Pinning consumes it and yields a [`PinnedTask`], whose
//! start and stop are fixed together. Pinned tasks are collected into a
//! [`Schedule`], which validates that none of them overlap.
//!
//! Buffers and rests are not separate types. They are ordinary tasks tagged
//! with a [`TaskKind`] and built through [`PinnedTask::buffer`] and
//! [`PinnedTask::rest`].
//!
//! Display implementations live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use jiff::{civil::date, SignedDuration};
//! use tash_core::models::{Schedule, Task};
//!
//! let start = date(2023, 1, 1).at(10, 0, 0, 0);
//! let task = Task::builder("Write report")
//!     .duration(SignedDuration::from_hours(1))
//!     .complexity(2)
//!     .build_pinned(start)
//!     .unwrap();
//! assert_eq!(task.stop(), date(2023, 1, 1).at(11, 0, 0, 0));
//!
//! let mut schedule = Schedule::new(date(2023, 1, 1).at(9, 0, 0, 0), date(2023, 1, 1).at(18, 0, 0, 0));
//! schedule.add(task);
//! schedule.complete().unwrap();
//! assert_eq!(schedule.len(), 1);
//! ```

pub mod kind;
pub mod rating;
pub mod schedule;
pub mod task;

#[cfg(test)]
mod tests;

pub use kind::TaskKind;
pub use rating::Rating;
pub use schedule::Schedule;
pub use task::{PinnedTask, Task, TaskBuilder};
