//! Terminal rendering module for rich markdown output
//!
//! Pages render as markdown in the core crate. This module prints them with
//! termimad styling, or verbatim when color is disabled.

use std::io::{self, Write};

use anyhow::{Context, Result};
use termimad::{crossterm::style::Color, MadSkin};

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
        skin.inline_code.set_bg(Color::AnsiValue(238));
        skin.bullet.set_fg(Color::Green);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        if self.rich_enabled {
            self.skin
                .write_text_on(&mut stdout, markdown)
                .context("Failed to render markdown")?;
        } else {
            stdout
                .write_all(markdown.as_bytes())
                .context("Failed to write output")?;
        }
        stdout.flush().context("Failed to flush output")
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
