//! Task model definition: the unpinned [`Task`] and its pinned counterpart.

use jiff::{civil::DateTime, SignedDuration};
use serde::{Deserialize, Serialize};

use super::{Rating, TaskKind};
use crate::error::{PlannerError, Result};

/// A unit of work that has not been given a place in the day yet.
///
/// Fields are only set through [`TaskBuilder`], so a task always carries
/// in-range ratings and non-negative spans. Deserialization goes through the
/// same validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    name: String,
    kind: TaskKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<SignedDuration>,
    complexity: Rating,
    priority: Rating,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    deadline: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_start_time: Option<DateTime>,
    duration_inaccuracy: SignedDuration,
}

/// Unvalidated wire form of a [`Task`].
#[derive(Debug, Deserialize)]
struct TaskRecord {
    name: String,
    #[serde(default)]
    kind: TaskKind,
    #[serde(default)]
    duration: Option<SignedDuration>,
    #[serde(default = "medium_rating")]
    complexity: i64,
    #[serde(default = "medium_rating")]
    priority: i64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    deadline: Option<DateTime>,
    #[serde(default)]
    min_start_time: Option<DateTime>,
    #[serde(default)]
    duration_inaccuracy: SignedDuration,
}

fn medium_rating() -> i64 {
    i64::from(Rating::MEDIUM.get())
}

impl TryFrom<TaskRecord> for Task {
    type Error = PlannerError;

    fn try_from(record: TaskRecord) -> Result<Self> {
        let mut builder = TaskBuilder::new(record.name)
            .kind(record.kind)
            .complexity(record.complexity)
            .priority(record.priority)
            .description(record.description)
            .duration_inaccuracy(record.duration_inaccuracy);
        builder.duration = record.duration;
        builder.deadline = record.deadline;
        builder.min_start_time = record.min_start_time;
        builder.build()
    }
}

impl Task {
    /// Start building a task with the given name.
    pub fn builder(name: impl Into<String>) -> TaskBuilder {
        TaskBuilder::new(name)
    }

    /// Pin the task at `start`, fixing its stop time to `start + duration`.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` for field `duration` if the task
    /// has no duration, and `PlannerError::Time` if the stop time falls
    /// outside the supported calendar range.
    pub fn pin(self, start: DateTime) -> Result<PinnedTask> {
        let duration = self.duration.ok_or_else(|| {
            PlannerError::invalid_input("duration").with_reason(format!(
                "task '{}' needs a duration before it can be pinned",
                self.name
            ))
        })?;
        let stop = start.checked_add(duration)?;
        Ok(PinnedTask {
            task: self,
            start,
            stop,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    /// Expected length; required before the task can be pinned.
    pub fn duration(&self) -> Option<SignedDuration> {
        self.duration
    }

    /// Difficulty rating, used as the ordering key when planning.
    pub fn complexity(&self) -> Rating {
        self.complexity
    }

    pub fn priority(&self) -> Rating {
        self.priority
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Point in time the task should be finished by.
    pub fn deadline(&self) -> Option<DateTime> {
        self.deadline
    }

    /// Earliest point in time the task may start.
    pub fn min_start_time(&self) -> Option<DateTime> {
        self.min_start_time
    }

    /// How far off the duration estimate may be.
    pub fn duration_inaccuracy(&self) -> SignedDuration {
        self.duration_inaccuracy
    }
}

/// Builder validating task attributes on construction.
///
/// Ratings are kept raw until [`TaskBuilder::build`] so that the error can
/// name the offending field.
#[derive(Debug, Clone)]
pub struct TaskBuilder {
    name: String,
    kind: TaskKind,
    duration: Option<SignedDuration>,
    complexity: i64,
    priority: i64,
    description: String,
    deadline: Option<DateTime>,
    min_start_time: Option<DateTime>,
    duration_inaccuracy: SignedDuration,
}

impl TaskBuilder {
    /// Creates a builder with the default ratings (3) and no timing.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TaskKind::Regular,
            duration: None,
            complexity: i64::from(Rating::MEDIUM.get()),
            priority: i64::from(Rating::MEDIUM.get()),
            description: String::new(),
            deadline: None,
            min_start_time: None,
            duration_inaccuracy: SignedDuration::ZERO,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn duration(mut self, duration: SignedDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn complexity(mut self, complexity: i64) -> Self {
        self.complexity = complexity;
        self
    }

    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn deadline(mut self, deadline: DateTime) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn min_start_time(mut self, min_start_time: DateTime) -> Self {
        self.min_start_time = Some(min_start_time);
        self
    }

    pub fn duration_inaccuracy(mut self, inaccuracy: SignedDuration) -> Self {
        self.duration_inaccuracy = inaccuracy;
        self
    }

    pub(crate) fn kind(mut self, kind: TaskKind) -> Self {
        self.kind = kind;
        self
    }

    /// Validate the attributes and produce an unpinned task.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` naming `complexity` or `priority`
    /// when a rating is outside `1..=5`, or naming `duration` /
    /// `duration_inaccuracy` when a span is negative.
    pub fn build(self) -> Result<Task> {
        let complexity = Rating::new("complexity", self.complexity)?;
        let priority = Rating::new("priority", self.priority)?;

        if self.duration.is_some_and(|d| d.is_negative()) {
            return Err(PlannerError::invalid_input("duration")
                .with_reason("duration must not be negative"));
        }
        if self.duration_inaccuracy.is_negative() {
            return Err(PlannerError::invalid_input("duration_inaccuracy")
                .with_reason("duration inaccuracy must not be negative"));
        }

        Ok(Task {
            name: self.name,
            kind: self.kind,
            duration: self.duration,
            complexity,
            priority,
            description: self.description,
            deadline: self.deadline,
            min_start_time: self.min_start_time,
            duration_inaccuracy: self.duration_inaccuracy,
        })
    }

    /// Validate and construct the task directly in the pinned state.
    ///
    /// # Errors
    ///
    /// Everything [`TaskBuilder::build`] rejects, plus a missing duration
    /// (field `duration`).
    pub fn build_pinned(self, start: DateTime) -> Result<PinnedTask> {
        self.build()?.pin(start)
    }
}

/// A task with a concrete place in the day.
///
/// `stop` is always `start + duration`; both are private so they can only
/// change together.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PinnedTask {
    #[serde(flatten)]
    task: Task,
    start: DateTime,
    stop: DateTime,
}

impl PinnedTask {
    /// A generated recovery gap starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if `duration` is negative or overflows the calendar.
    pub fn buffer(start: DateTime, duration: SignedDuration) -> Result<Self> {
        Self::free_time(TaskKind::Buffer, start, duration)
    }

    /// A rest period starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if `duration` is negative or overflows the calendar.
    pub fn rest(start: DateTime, duration: SignedDuration) -> Result<Self> {
        Self::free_time(TaskKind::Rest, start, duration)
    }

    fn free_time(kind: TaskKind, start: DateTime, duration: SignedDuration) -> Result<Self> {
        TaskBuilder::new(kind.label().unwrap_or_default())
            .kind(kind)
            .description(kind.fixed_description().unwrap_or_default())
            .duration(duration)
            .build_pinned(start)
    }

    /// Move the task to a new start, recomputing the stop time.
    ///
    /// Repinning is permitted any number of times.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Time` if the new stop time is out of range.
    pub fn repin(&mut self, start: DateTime) -> Result<()> {
        let stop = start.checked_add(self.duration())?;
        self.start = start;
        self.stop = stop;
        Ok(())
    }

    pub fn start(&self) -> DateTime {
        self.start
    }

    pub fn stop(&self) -> DateTime {
        self.stop
    }

    /// Length of the pinned interval.
    pub fn duration(&self) -> SignedDuration {
        self.start.duration_until(self.stop)
    }

    pub fn name(&self) -> &str {
        &self.task.name
    }

    pub fn description(&self) -> &str {
        &self.task.description
    }

    pub fn kind(&self) -> TaskKind {
        self.task.kind
    }

    /// The underlying task attributes.
    pub fn task(&self) -> &Task {
        &self.task
    }
}
