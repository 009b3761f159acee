//! Display manager that creates appropriate display implementations
//!
//! This module is responsible for:
//! - Picking ratatui or headless output depending on the environment
//! - Wrapping the display with operation logging when `BINGO_DISPLAY_LOG` is set

use log::debug;
use std::fmt;
use std::str::FromStr;

use crate::display_headless::HeadlessDisplay;
use crate::display_logging::LoggingDisplay;
use crate::display_ratatui::RatatuiDisplay;
use crate::display_trait::{BingoDisplay, DisplayError};

/// Environment variable that forces a display mode
pub const DISPLAY_MODE_ENV: &str = "BINGO_DISPLAY_MODE";
/// Environment variable that enables display operation logging
pub const DISPLAY_LOG_ENV: &str = "BINGO_DISPLAY_LOG";

/// Display mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Ratatui when attached to a terminal, headless otherwise
    #[default]
    Auto,
    /// Force ratatui (fail if not available)
    Ratatui,
    /// Plain text frames on stdout, commands from stdin
    Headless,
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(DisplayMode::Auto),
            "ratatui" | "tui" | "terminal" => Ok(DisplayMode::Ratatui),
            "headless" | "plain" => Ok(DisplayMode::Headless),
            other => Err(format!("unknown display mode '{other}'")),
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DisplayMode::Auto => "auto",
            DisplayMode::Ratatui => "ratatui",
            DisplayMode::Headless => "headless",
        };
        f.write_str(name)
    }
}

impl DisplayMode {
    /// Mode named by `BINGO_DISPLAY_MODE`, if set and valid
    pub fn from_env() -> Option<Self> {
        let value = std::env::var(DISPLAY_MODE_ENV).ok()?;
        match value.parse() {
            Ok(mode) => Some(mode),
            Err(e) => {
                debug!("Ignoring {}: {}", DISPLAY_MODE_ENV, e);
                None
            }
        }
    }
}

/// Display environment capabilities
#[derive(Debug)]
pub struct DisplayCapabilities {
    pub has_terminal: bool,
    pub is_interactive: bool,
}

impl DisplayCapabilities {
    /// Detect current environment capabilities
    pub fn detect() -> Self {
        Self {
            has_terminal: atty::is(atty::Stream::Stdout),
            is_interactive: atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout),
        }
    }

    /// Check if ratatui is likely to work
    pub fn supports_ratatui(&self) -> bool {
        self.has_terminal && self.is_interactive
    }
}

/// Turn `Auto` into a concrete mode for the detected environment
pub fn resolve_mode(mode: DisplayMode, caps: &DisplayCapabilities) -> DisplayMode {
    match mode {
        DisplayMode::Auto if caps.supports_ratatui() => DisplayMode::Ratatui,
        DisplayMode::Auto => DisplayMode::Headless,
        forced => forced,
    }
}

/// Create a display implementation for a resolved mode
pub fn create_display(mode: DisplayMode) -> Result<Box<dyn BingoDisplay>, DisplayError> {
    let caps = DisplayCapabilities::detect();
    debug!("Display capabilities: {:?}", caps);
    let mode = resolve_mode(mode, &caps);
    debug!("Creating display with mode {}", mode);

    let mut display: Box<dyn BingoDisplay> = match mode {
        DisplayMode::Ratatui | DisplayMode::Auto => {
            let display = RatatuiDisplay::new().map_err(|e| {
                DisplayError::new(format!("Failed to create RatatuiDisplay: {}", e.message))
            })?;
            Box::new(display)
        }
        DisplayMode::Headless => Box::new(HeadlessDisplay::new()?.echoing()),
    };

    // Check if we should wrap with logging
    if std::env::var(DISPLAY_LOG_ENV).is_ok() {
        debug!("Wrapping display with logging");
        display = Box::new(LoggingDisplay::new(display));
    }

    Ok(display)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modes() {
        assert_eq!("auto".parse::<DisplayMode>(), Ok(DisplayMode::Auto));
        assert_eq!("Ratatui".parse::<DisplayMode>(), Ok(DisplayMode::Ratatui));
        assert_eq!(" headless ".parse::<DisplayMode>(), Ok(DisplayMode::Headless));
        assert!("curses".parse::<DisplayMode>().is_err());
        assert_eq!(DisplayMode::Headless.to_string(), "headless");
    }

    #[test]
    fn test_resolve_auto() {
        let tty = DisplayCapabilities {
            has_terminal: true,
            is_interactive: true,
        };
        let piped = DisplayCapabilities {
            has_terminal: true,
            is_interactive: false,
        };
        assert_eq!(resolve_mode(DisplayMode::Auto, &tty), DisplayMode::Ratatui);
        assert_eq!(resolve_mode(DisplayMode::Auto, &piped), DisplayMode::Headless);
        assert_eq!(resolve_mode(DisplayMode::Headless, &tty), DisplayMode::Headless);
        assert_eq!(resolve_mode(DisplayMode::Ratatui, &piped), DisplayMode::Ratatui);
    }
}
