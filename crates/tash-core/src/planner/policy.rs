//! Sizing of the recovery buffers inserted after each task.

use jiff::SignedDuration;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PlannerError, Result},
    models::PinnedTask,
};

/// Factors determining buffer length:
/// `duration_inaccuracy * inaccuracy_factor + duration * duration_factor`.
///
/// Each term is rounded to whole microseconds, ties to even, before the two
/// are added.
///
/// # Examples
///
/// ```rust
/// use jiff::{civil::date, SignedDuration};
/// use tash_core::{models::Task, planner::BufferPolicy};
///
/// let task = Task::builder("deep work")
///     .duration(SignedDuration::from_hours(2))
///     .build_pinned(date(2023, 1, 1).at(9, 0, 0, 0))
///     .unwrap();
///
/// let buffer = BufferPolicy::default().buffer_after(&task).unwrap();
/// assert_eq!(buffer, SignedDuration::from_mins(12));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferPolicy {
    /// Multiplier applied to the stated duration inaccuracy
    pub inaccuracy_factor: f64,
    /// Multiplier applied to the task's own duration
    pub duration_factor: f64,
}

impl BufferPolicy {
    pub const DEFAULT_INACCURACY_FACTOR: f64 = 1.5;
    pub const DEFAULT_DURATION_FACTOR: f64 = 0.1;

    /// Creates a validated policy.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` if either factor is negative or
    /// not finite.
    pub fn new(inaccuracy_factor: f64, duration_factor: f64) -> Result<Self> {
        let policy = Self {
            inaccuracy_factor,
            duration_factor,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Check both factors are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` naming the bad factor.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("inaccuracy factor", self.inaccuracy_factor),
            ("duration factor", self.duration_factor),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlannerError::configuration(format!(
                    "buffer {name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Length of the buffer to insert after `task`.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if the computed length does not
    /// fit in a duration.
    pub fn buffer_after(&self, task: &PinnedTask) -> Result<SignedDuration> {
        let too_long = || {
            PlannerError::invalid_input("buffer").with_reason(format!(
                "buffer after '{}' is too long to represent",
                task.name()
            ))
        };
        let inaccuracy = scale_micros(task.task().duration_inaccuracy(), self.inaccuracy_factor)
            .ok_or_else(too_long)?;
        let length = scale_micros(task.duration(), self.duration_factor).ok_or_else(too_long)?;
        inaccuracy
            .checked_add(length)
            .map(SignedDuration::from_micros)
            .ok_or_else(too_long)
    }
}

/// `span * factor` in whole microseconds, ties rounded to even.
fn scale_micros(span: SignedDuration, factor: f64) -> Option<i64> {
    let micros = (span.as_micros() as f64 * factor).round_ties_even();
    // `i64::MAX as f64` rounds up to 2^63, so the bound is exclusive.
    (micros.is_finite() && micros.abs() < i64::MAX as f64).then_some(micros as i64)
}

impl Default for BufferPolicy {
    fn default() -> Self {
        Self {
            inaccuracy_factor: Self::DEFAULT_INACCURACY_FACTOR,
            duration_factor: Self::DEFAULT_DURATION_FACTOR,
        }
    }
}
