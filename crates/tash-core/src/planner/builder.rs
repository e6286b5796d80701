//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use jiff::civil::DateTime;
use log::debug;

use super::{BufferPolicy, Planner};
use crate::{
    error::{PlannerError, Result},
    models::Task,
    params::PlanDay,
    reader,
};

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone, Default)]
pub struct PlannerBuilder {
    tasks: Vec<Task>,
    tasks_file: Option<TasksFile>,
    day_start: Option<DateTime>,
    day_stop: Option<DateTime>,
    policy: BufferPolicy,
}

#[derive(Debug, Clone)]
enum TasksFile {
    Default,
    Path(PathBuf),
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds tasks to plan.
    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = Task>) -> Self {
        self.tasks.extend(tasks);
        self
    }

    /// Adds a single task to plan.
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Also read tasks from a task file when building.
    ///
    /// If no path is given, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/tash/tasks.tashes` or `~/.local/share/tash/tasks.tashes`
    pub fn with_tasks_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        self.tasks_file = Some(match path {
            Some(path) => TasksFile::Path(path.as_ref().to_path_buf()),
            None => TasksFile::Default,
        });
        self
    }

    /// Sets the start of the working day.
    pub fn with_day_start(mut self, start: DateTime) -> Self {
        self.day_start = Some(start);
        self
    }

    /// Sets the end of the working day.
    pub fn with_day_stop(mut self, stop: DateTime) -> Self {
        self.day_stop = Some(stop);
        self
    }

    /// Sets both ends of the working day.
    pub fn with_window(self, start: DateTime, stop: DateTime) -> Self {
        self.with_day_start(start).with_day_stop(stop)
    }

    /// Sets how buffers between tasks are sized.
    pub fn with_buffer_policy(mut self, policy: BufferPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` if the day window is incomplete
    /// or the buffer policy is invalid, `PlannerError::XdgDirectory` if the
    /// default task file cannot be located, and any error raised while
    /// reading the task file.
    pub fn build(self) -> Result<Planner> {
        self.policy.validate()?;

        let day_start = self
            .day_start
            .ok_or_else(|| PlannerError::configuration("day start is required"))?;
        let day_stop = self
            .day_stop
            .ok_or_else(|| PlannerError::configuration("day stop is required"))?;

        let mut tasks = self.tasks;
        if let Some(source) = self.tasks_file {
            let path = match source {
                TasksFile::Path(path) => path,
                TasksFile::Default => Self::default_tasks_path()?,
            };
            debug!("reading tasks from {}", path.display());
            tasks.extend(reader::read_tasks(&path)?);
        }

        debug!(
            "planner configured with {} tasks for {} to {}",
            tasks.len(),
            day_start,
            day_stop
        );

        let mut planner = Planner::new(tasks, day_start, day_stop);
        planner.policy = self.policy;
        Ok(planner)
    }

    /// Returns the default task file path following XDG Base Directory
    /// specification.
    fn default_tasks_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("tash")
            .find_data_file("tasks.tashes")
            .ok_or_else(|| {
                PlannerError::XdgDirectory(
                    "no tash/tasks.tashes found in the XDG data directories".to_string(),
                )
            })
    }
}

impl From<PlanDay> for PlannerBuilder {
    fn from(params: PlanDay) -> Self {
        PlannerBuilder::new()
            .with_tasks_file(params.tasks_file)
            .with_window(params.day_start, params.day_stop)
            .with_buffer_policy(params.policy)
    }
}
