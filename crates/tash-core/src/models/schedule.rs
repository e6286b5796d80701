//! Schedule model: a build-once, validated sequence of pinned tasks.

use jiff::{civil::DateTime, SignedDuration};
use serde::Serialize;

use super::PinnedTask;
use crate::error::{PlannerError, Result};

/// Pinned tasks bounded by a day window `[start, stop)`.
///
/// Tasks may be added in any order; [`Schedule::complete`] sorts them and
/// rejects the whole schedule if any two overlap.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Schedule {
    start: DateTime,
    stop: DateTime,
    tasks: Vec<PinnedTask>,
}

impl Schedule {
    /// Creates an empty schedule for the given window.
    pub fn new(start: DateTime, stop: DateTime) -> Self {
        Self {
            start,
            stop,
            tasks: Vec::new(),
        }
    }

    /// Append a pinned task. Ordering and overlaps are checked by
    /// [`Schedule::complete`].
    pub fn add(&mut self, task: PinnedTask) {
        self.tasks.push(task);
    }

    /// Sort tasks by start time and validate that none overlap.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Collision` for the first task that starts
    /// before the previous one has stopped, or before the window opens.
    pub fn complete(&mut self) -> Result<()> {
        self.tasks.sort_by_key(PinnedTask::start);
        self.check_collision()
    }

    /// Walk the tasks in their current order, checking each starts no
    /// earlier than the stop of the one before it.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Collision` naming the first offending task.
    pub fn check_collision(&self) -> Result<()> {
        let mut cursor = self.start;
        for task in &self.tasks {
            if task.start() < cursor {
                return Err(PlannerError::Collision {
                    task: task.name().to_string(),
                    start: task.start(),
                    cursor,
                });
            }
            cursor = task.stop();
        }
        Ok(())
    }

    pub fn start(&self) -> DateTime {
        self.start
    }

    pub fn stop(&self) -> DateTime {
        self.stop
    }

    pub fn tasks(&self) -> &[PinnedTask] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PinnedTask> {
        self.tasks.iter()
    }

    /// Latest stop time of any task, or `None` for an empty schedule.
    pub fn end(&self) -> Option<DateTime> {
        self.tasks.iter().map(PinnedTask::stop).max()
    }

    /// How far the schedule runs past the end of its window.
    ///
    /// The planner does not enforce the window's stop; this reports the
    /// excess so callers can decide what to do about it.
    pub fn overrun(&self) -> Option<SignedDuration> {
        self.end()
            .filter(|end| *end > self.stop)
            .map(|end| self.stop.duration_until(end))
    }

    /// Serialize the schedule as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Serialization` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a PinnedTask;
    type IntoIter = std::slice::Iter<'a, PinnedTask>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

impl IntoIterator for Schedule {
    type Item = PinnedTask;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.into_iter()
    }
}
