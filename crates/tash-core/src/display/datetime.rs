//! DateTime display utilities.
//!
//! Wrapper types formatting wall-clock times and spans consistently in
//! schedules and task listings.

use std::fmt;

use jiff::{civil::DateTime, SignedDuration};

/// A wrapper around a civil `DateTime` formatting it as `YYYY-MM-DD HH:MM`.
///
/// Seconds are only shown when non-zero, so generated buffers with odd
/// lengths stay readable.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use tash_core::display::ClockTime;
///
/// let at = date(2025, 5, 31).at(8, 5, 0, 0);
/// assert_eq!(ClockTime(&at).to_string(), "2025-05-31 08:05");
/// ```
pub struct ClockTime<'a>(pub &'a DateTime);

impl fmt::Display for ClockTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = if self.0.second() == 0 && self.0.subsec_nanosecond() == 0 {
            "%Y-%m-%d %H:%M"
        } else {
            "%Y-%m-%d %H:%M:%S"
        };
        write!(f, "{}", self.0.strftime(format))
    }
}

/// A wrapper around `SignedDuration` using the compact `1h 30m` style.
pub struct FriendlyDuration<'a>(pub &'a SignedDuration);

impl fmt::Display for FriendlyDuration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}", self.0)
    }
}
