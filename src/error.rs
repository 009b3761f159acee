//! Error types for setting up and running a bingo session
//!
//! Display failures have their own type in `display_trait`; this module covers
//! everything else and wraps display failures that cannot be recovered from.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::display_trait::DisplayError;

#[derive(Debug)]
pub enum GameError {
    /// The word list cannot fill every cell of the grid
    InsufficientWords { available: usize, required: usize },
    /// The word list file could not be read
    WordList { path: PathBuf, source: io::Error },
    /// Invalid or unreadable configuration
    Config(String),
    /// Reading from the input device failed
    Input(io::Error),
    /// A display failure that is not a recoverable "too small" condition
    Display(DisplayError),
}

impl GameError {
    pub fn config(message: impl Into<String>) -> Self {
        GameError::Config(message.into())
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InsufficientWords {
                available,
                required,
            } => write!(
                f,
                "Not enough words in word list ({available}) to fill the grid ({required} cells)"
            ),
            GameError::WordList { path, source } => {
                write!(f, "Cannot read word list '{}': {}", path.display(), source)
            }
            GameError::Config(message) => write!(f, "Configuration error: {message}"),
            GameError::Input(e) => write!(f, "Input error: {e}"),
            GameError::Display(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::WordList { source, .. } => Some(source),
            GameError::Input(e) => Some(e),
            GameError::Display(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DisplayError> for GameError {
    fn from(error: DisplayError) -> Self {
        GameError::Display(error)
    }
}

impl From<toml::de::Error> for GameError {
    fn from(error: toml::de::Error) -> Self {
        GameError::Config(error.to_string())
    }
}
