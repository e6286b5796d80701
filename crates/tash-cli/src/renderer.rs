//! Terminal rendering module for rich markdown output
//!
//! Schedules and task listings are markdown; this renders them with termimad,
//! falling back to the raw text when color is disabled.

use anyhow::Result;
use termimad::{crossterm::style::Color, terminal_size, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        let (width, _) = terminal_size();
        print!("{}", self.format(markdown, usize::from(width)));
        Ok(())
    }

    /// Lay out markdown for a terminal `width` columns wide.
    fn format(&self, markdown: &str, width: usize) -> String {
        if self.rich_enabled {
            self.skin.text(markdown, Some(width)).to_string()
        } else {
            markdown.to_string()
        }
    }
}
