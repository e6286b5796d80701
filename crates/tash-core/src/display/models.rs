//! Display implementations for domain models.
//!
//! All output is markdown, so the CLI can hand it straight to the terminal
//! renderer.

use std::fmt;

use super::datetime::{ClockTime, FriendlyDuration};
use crate::models::{PinnedTask, Schedule, Task, TaskKind};

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.name())?;
        writeln!(f)?;

        match self.duration() {
            Some(duration) => writeln!(f, "- Duration: {}", FriendlyDuration(&duration))?,
            None => writeln!(f, "- Duration: unknown")?,
        }
        if !self.duration_inaccuracy().is_zero() {
            writeln!(f, "- Inaccuracy: {}", FriendlyDuration(&self.duration_inaccuracy()))?;
        }
        writeln!(f, "- Complexity: {}", self.complexity().get())?;
        writeln!(f, "- Priority: {}", self.priority().get())?;
        if let Some(deadline) = self.deadline() {
            writeln!(f, "- Deadline: {}", ClockTime(&deadline))?;
        }
        if let Some(earliest) = self.min_start_time() {
            writeln!(f, "- Not before: {}", ClockTime(&earliest))?;
        }

        if !self.description().is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description())?;
        }
        writeln!(f)
    }
}

impl fmt::Display for PinnedTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} {}",
            ClockTime(&self.start()),
            ClockTime(&self.stop()),
            self.name()
        )?;
        if !self.description().is_empty() {
            write!(f, " ({})", self.description())?;
        }
        Ok(())
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Schedule {} to {}",
            ClockTime(&self.start()),
            ClockTime(&self.stop())
        )?;
        writeln!(f)?;

        if self.is_empty() {
            return writeln!(f, "No tasks scheduled.");
        }

        writeln!(f, "| Task | Name | Description | Start | Stop |")?;
        writeln!(f, "|---|---|---|---|---|")?;
        for (index, task) in self.iter().enumerate() {
            writeln!(
                f,
                "| {} | {} | {} | {} | {} |",
                index,
                cell(task.name()),
                cell(task.description()),
                ClockTime(&task.start()),
                ClockTime(&task.stop())
            )?;
        }

        if let Some(overrun) = self.overrun() {
            writeln!(f)?;
            writeln!(
                f,
                "**Warning:** the schedule runs {} past the end of the day.",
                FriendlyDuration(&overrun)
            )?;
        }
        Ok(())
    }
}

/// Escape characters that would break a markdown table cell.
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
