//! Tash CLI Application
//!
//! Command-line interface for the tash single-day planner.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, command } = Args::parse();

    let cli = Cli::new(TerminalRenderer::new(!no_color));

    info!("Tash started");

    match command {
        Plan(args) => cli.plan(args),
        Check(args) => cli.check(args),
    }
}
