//! Game configuration
//!
//! Built-in defaults, optionally overridden by a TOML file, then by
//! command-line flags (see `cli`). Example `bingo.toml`:
//!
//! ```toml
//! rows = 5
//! columns = 5
//! word_file = "buzzwords.txt"
//! cell_width = 20
//! cell_height = 2
//! ```

use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GameError;
use crate::grid::{self, DEFAULT_SENTINEL_LABEL};
use crate::layout::Footprint;

/// Looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "bingo.toml";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub word_file: PathBuf,
    pub cell_width: u16,
    pub cell_height: u16,
    pub sentinel_label: String,
    /// Fixed seed for a reproducible card
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            columns: 3,
            word_file: PathBuf::from("buzzwords.txt"),
            cell_width: 35,
            cell_height: 5,
            sentinel_label: DEFAULT_SENTINEL_LABEL.to_string(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, GameError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, GameError> {
        debug!("Reading config: {}", path.display());
        let text = fs::read_to_string(path).map_err(|e| {
            GameError::config(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Explicit path if given (must exist), else `bingo.toml` if present, else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self, GameError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)
                } else {
                    debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(GameError::config(format!(
                "rows and columns must be at least 1 (got {}x{})",
                self.rows, self.columns
            )));
        }
        grid::card_size(self.rows, self.columns)?;
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(GameError::config("cell_width and cell_height must be at least 1"));
        }
        if self.sentinel_label.trim().is_empty() {
            return Err(GameError::config("sentinel_label must not be empty"));
        }
        Ok(())
    }

    /// Word cells on the card; saturates for dimensions `validate` would reject
    pub fn cell_count(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    pub fn footprint(&self) -> Footprint {
        Footprint::for_grid(self.rows, self.columns, self.cell_width, self.cell_height)
            .with_sentinel(self.sentinel_label.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!((config.rows, config.columns), (3, 3));
        assert_eq!(config.cell_count(), 9);
        assert_eq!(config.sentinel_label, "confirm win");
        assert_eq!(config.footprint(), Footprint { width: 112, height: 21 });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str("rows = 5\ncolumns = 4\nseed = 11\n").unwrap();
        assert_eq!(config.rows, 5);
        assert_eq!(config.columns, 4);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.cell_width, 35);
        assert_eq!(config.word_file, PathBuf::from("buzzwords.txt"));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            GameConfig::from_toml_str("rows = \"many\""),
            Err(GameError::Config(_))
        ));
        assert!(matches!(
            GameConfig::from_toml_str("colour = \"blue\""),
            Err(GameError::Config(_))
        ));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let err = GameConfig::from_toml_str("rows = 0").unwrap_err();
        assert!(err.to_string().contains("at least 1"));
        assert!(GameConfig::from_toml_str("cell_height = 0").is_err());
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let config = GameConfig {
            rows: usize::MAX / 2,
            columns: 3,
            ..GameConfig::default()
        };
        assert_eq!(config.cell_count(), usize::MAX);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("too large"));

        assert!(GameConfig::from_toml_str("rows = 200\ncolumns = 200").is_err());
        assert!(GameConfig::from_toml_str("rows = 100\ncolumns = 100").is_ok());
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "word_file = \"office.txt\"\ncell_width = 12").unwrap();
        let config = GameConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.word_file, PathBuf::from("office.txt"));
        assert_eq!(config.cell_width, 12);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = GameConfig::load(Some(Path::new("/nonexistent/bingo.toml"))).unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }
}
