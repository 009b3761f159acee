//! Core display trait for bingo display implementations
//!
//! The session only talks to this trait, so the same game loop drives the
//! full-screen terminal display and the headless display used in tests.

use std::fmt;

use crate::grid::WinLine;
use crate::layout::GridView;

/// Core trait for bingo display operations
pub trait BingoDisplay {
    /// Redraw the whole grid from a snapshot.
    ///
    /// Must fail with [`DisplayErrorKind::TooSmall`] when the surface cannot
    /// hold the grid, without drawing a partial grid.
    fn render_grid(&mut self, view: &GridView<'_>) -> Result<(), DisplayError>;

    /// Replace the grid with a notice asking the player to enlarge the surface
    fn show_too_small(&mut self, required: (u16, u16), actual: (u16, u16))
        -> Result<(), DisplayError>;

    /// Announce the winner
    fn show_win(&mut self, player_name: &str, line: WinLine) -> Result<(), DisplayError>;

    /// Handle terminal resize
    fn handle_resize(&mut self, width: u16, height: u16);

    /// Get the current surface dimensions as (width, height)
    fn get_terminal_size(&self) -> (u16, u16);

    /// Force a display refresh (mainly for debugging)
    fn force_refresh(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }
}

impl<D: BingoDisplay + ?Sized> BingoDisplay for Box<D> {
    fn render_grid(&mut self, view: &GridView<'_>) -> Result<(), DisplayError> {
        (**self).render_grid(view)
    }

    fn show_too_small(
        &mut self,
        required: (u16, u16),
        actual: (u16, u16),
    ) -> Result<(), DisplayError> {
        (**self).show_too_small(required, actual)
    }

    fn show_win(&mut self, player_name: &str, line: WinLine) -> Result<(), DisplayError> {
        (**self).show_win(player_name, line)
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        (**self).handle_resize(width, height)
    }

    fn get_terminal_size(&self) -> (u16, u16) {
        (**self).get_terminal_size()
    }

    fn force_refresh(&mut self) -> Result<(), DisplayError> {
        (**self).force_refresh()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayErrorKind {
    /// Surface smaller than the grid footprint; recoverable by resizing
    TooSmall {
        required: (u16, u16),
        actual: (u16, u16),
    },
    /// Terminal setup, drawing or I/O failure
    Io,
}

/// Display error type
#[derive(Debug, Clone)]
pub struct DisplayError {
    pub kind: DisplayErrorKind,
    pub message: String,
}

impl DisplayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            kind: DisplayErrorKind::Io,
            message: message.into(),
        }
    }

    pub fn too_small(required: (u16, u16), actual: (u16, u16)) -> Self {
        Self {
            kind: DisplayErrorKind::TooSmall { required, actual },
            message: too_small_message(required),
        }
    }

    pub fn is_too_small(&self) -> bool {
        matches!(self.kind, DisplayErrorKind::TooSmall { .. })
    }
}

/// Notice shown in place of the grid when the surface is too small
pub fn too_small_message(required: (u16, u16)) -> String {
    format!(
        "Terminal window is too small. Please resize to at least {}x{}.",
        required.0, required.1
    )
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Display error: {}", self.message)
    }
}

impl std::error::Error for DisplayError {}

impl From<std::io::Error> for DisplayError {
    fn from(error: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_small_message() {
        let err = DisplayError::too_small((112, 21), (80, 24));
        assert!(err.is_too_small());
        assert_eq!(
            err.message,
            "Terminal window is too small. Please resize to at least 112x21."
        );
    }

    #[test]
    fn test_io_error_is_not_recoverable() {
        let err: DisplayError = std::io::Error::other("broken pipe").into();
        assert!(!err.is_too_small());
        assert!(err.to_string().contains("broken pipe"));
    }
}
