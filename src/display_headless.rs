//! Headless display implementation for testing and CI environments
//!
//! This implementation records every frame as plain text without touching
//! the terminal, useful for automated testing and piped input.

use log::debug;
use std::io::{self, Write};

use crate::display_trait::{too_small_message, BingoDisplay, DisplayError};
use crate::grid::WinLine;
use crate::layout::GridView;

#[derive(Debug)]
pub struct HeadlessDisplay {
    frames: Vec<String>,
    terminal_width: u16,
    terminal_height: u16,
    echo: bool,
}

impl HeadlessDisplay {
    /// Large enough for the default 3x3 card; bigger cards need a `resize` command
    pub fn new() -> Result<Self, DisplayError> {
        Self::with_size(160, 48)
    }

    pub fn with_size(width: u16, height: u16) -> Result<Self, DisplayError> {
        Ok(Self {
            frames: Vec::new(),
            terminal_width: width,
            terminal_height: height,
            echo: false,
        })
    }

    /// Also write every frame to stdout
    pub fn echoing(mut self) -> Self {
        self.echo = true;
        self
    }

    /// All frames drawn so far (for testing)
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn push_frame(&mut self, frame: String) -> Result<(), DisplayError> {
        if self.echo {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{frame}")?;
            writeln!(stdout)?;
            stdout.flush()?;
        }
        self.frames.push(frame);
        Ok(())
    }
}

impl BingoDisplay for HeadlessDisplay {
    fn render_grid(&mut self, view: &GridView<'_>) -> Result<(), DisplayError> {
        view.footprint().check(self.get_terminal_size())?;
        let frame = view.text_lines(self.terminal_width).join("\n");
        self.push_frame(frame)
    }

    fn show_too_small(
        &mut self,
        required: (u16, u16),
        actual: (u16, u16),
    ) -> Result<(), DisplayError> {
        debug!("Headless: too small {:?} < {:?}", actual, required);
        self.push_frame(too_small_message(required))
    }

    fn show_win(&mut self, player_name: &str, line: WinLine) -> Result<(), DisplayError> {
        self.push_frame(format!("BINGO! {player_name} wins with {line}."))
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("Headless: resize to {}x{}", width, height);
        self.terminal_width = width;
        self.terminal_height = height;
    }

    fn get_terminal_size(&self) -> (u16, u16) {
        (self.terminal_width, self.terminal_height)
    }
}
