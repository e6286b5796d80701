//! Command handlers for the Tash CLI.

use anyhow::{Context, Result};
use log::{info, warn};
use tash_core::{reader, CheckTasks, FriendlyDuration, PlanDay, PlannerBuilder};

use crate::{
    args::{CheckArgs, PlanArgs},
    renderer::TerminalRenderer,
};

/// Runs commands and renders their output.
pub struct Cli {
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self { renderer }
    }

    /// Plan the day described by `args` and print the schedule.
    pub fn plan(&self, args: PlanArgs) -> Result<()> {
        let json = args.json;
        let mut planner = PlannerBuilder::from(PlanDay::from(args))
            .build()
            .context("Failed to load tasks")?;

        info!(
            "planning {} tasks from {} to {}",
            planner.tasks().len(),
            planner.day_start(),
            planner.day_stop()
        );
        let schedule = planner.plan().context("Failed to plan the day")?;

        if let Some(overrun) = schedule.overrun() {
            warn!(
                "schedule ends {} after the end of the day ({})",
                FriendlyDuration(&overrun),
                schedule.stop()
            );
        }

        if json {
            println!("{}", schedule.to_json()?);
            Ok(())
        } else {
            self.renderer.render(&schedule.to_string())
        }
    }

    /// Parse a task file and list its tasks.
    pub fn check(&self, args: CheckArgs) -> Result<()> {
        let params = CheckTasks::from(args);
        let tasks = reader::read_tasks(&params.path)
            .with_context(|| format!("Invalid task file {}", params.path.display()))?;

        let mut output = format!("# {} tasks in {}\n\n", tasks.len(), params.path.display());
        for task in &tasks {
            output.push_str(&task.to_string());
        }
        self.renderer.render(&output)
    }
}
