//! Display formatting for tasks and schedules.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! producing markdown. Small wrapper types in [`datetime`] keep time values
//! formatted the same way everywhere.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display impls & │    │   Markdown      │
//! │ (Task,Schedule) │───▶│ time wrappers   │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use jiff::{civil::date, SignedDuration};
//! use tash_core::models::{PinnedTask, Schedule};
//!
//! let day = date(2023, 1, 1);
//! let mut schedule = Schedule::new(day.at(9, 0, 0, 0), day.at(18, 0, 0, 0));
//! schedule.add(PinnedTask::rest(day.at(12, 0, 0, 0), SignedDuration::from_mins(30)).unwrap());
//! schedule.complete().unwrap();
//!
//! let output = schedule.to_string();
//! assert!(output.contains("| Task | Name | Description | Start | Stop |"));
//! assert!(output.contains("| 0 | rest | free time, take a rest | 2023-01-01 12:00 | 2023-01-01 12:30 |"));
//! ```

pub mod datetime;
pub mod models;

pub use datetime::{ClockTime, FriendlyDuration};
