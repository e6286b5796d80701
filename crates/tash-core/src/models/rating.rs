//! Bounded 1-5 rating used for task complexity and priority.

use serde::Serialize;

use crate::error::{PlannerError, Result};

/// An integer rating guaranteed to lie in `1..=5`.
///
/// Complexity and priority share this representation, so an out-of-range
/// value can never reach a [`Task`](super::Task).
///
/// # Examples
///
/// ```rust
/// use tash_core::models::Rating;
///
/// let rating = Rating::new("complexity", 4).unwrap();
/// assert_eq!(rating.get(), 4);
///
/// let err = Rating::new("priority", 6).unwrap_err();
/// assert_eq!(err.field(), Some("priority"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest accepted rating.
    pub const MIN: u8 = 1;
    /// Highest accepted rating.
    pub const MAX: u8 = 5;
    /// Rating assumed when a task does not state one.
    pub const MEDIUM: Rating = Rating(3);

    /// Validate `value` for the named field.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` naming `field` when `value` is
    /// outside `1..=5`.
    pub fn new(field: &str, value: i64) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
            .ok_or_else(|| {
                PlannerError::invalid_input(field).with_reason(format!(
                    "{field} must be between {} and {}, got {value}",
                    Self::MIN,
                    Self::MAX
                ))
            })
    }

    /// The numeric value.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::MEDIUM
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}
