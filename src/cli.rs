//! Command-line arguments
//!
//! ```text
//! bingo <player_name> [--words FILE] [--rows N] [--columns N]
//!       [--config FILE] [--seed N] [--headless]
//! ```

use std::path::PathBuf;

use crate::config::GameConfig;
use crate::display_manager::DisplayMode;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliArgs {
    pub player_name: String,
    pub config_path: Option<PathBuf>,
    pub word_file: Option<PathBuf>,
    pub rows: Option<usize>,
    pub columns: Option<usize>,
    pub seed: Option<u64>,
    pub display_mode: Option<DisplayMode>,
}

pub fn usage(program: &str) -> String {
    format!(
        "bingo - buzzword bingo in the terminal\n\
         \n\
         Usage: {program} <player_name> [options]\n\
         \n\
         Options:\n  \
           --words <file>     word list, one buzzword per line\n  \
           --rows <n>         number of rows on the card\n  \
           --columns <n>      number of columns on the card\n  \
           --config <file>    TOML config (default: ./bingo.toml if present)\n  \
           --seed <n>         deal a reproducible card\n  \
           --headless         plain text frames, commands read from stdin\n\
         \n\
         Keys: arrows move, Enter/Space marks a word or claims the win, q/Esc quits."
    )
}

fn value<'a>(
    flag: &str,
    args: &mut impl Iterator<Item = &'a String>,
) -> Result<&'a String, String> {
    args.next().ok_or_else(|| format!("{flag} needs a value"))
}

fn number<T: std::str::FromStr>(flag: &str, raw: &str) -> Result<T, String> {
    raw.parse().map_err(|_| format!("Invalid value for {flag}: {raw}"))
}

impl CliArgs {
    /// Parse arguments, excluding the program name
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut parsed = CliArgs::default();
        let mut player_name = None;
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--words" => parsed.word_file = Some(PathBuf::from(value(arg, &mut iter)?)),
                "--config" => parsed.config_path = Some(PathBuf::from(value(arg, &mut iter)?)),
                "--rows" => parsed.rows = Some(number(arg, value(arg, &mut iter)?)?),
                "--columns" => parsed.columns = Some(number(arg, value(arg, &mut iter)?)?),
                "--seed" => parsed.seed = Some(number(arg, value(arg, &mut iter)?)?),
                "--headless" => parsed.display_mode = Some(DisplayMode::Headless),
                flag if flag.starts_with("--") => return Err(format!("Unknown option: {flag}")),
                name => {
                    if player_name.is_some() {
                        return Err(format!("Unexpected argument: {name}"));
                    }
                    player_name = Some(name.to_string());
                }
            }
        }

        match player_name {
            Some(name) if !name.trim().is_empty() => {
                parsed.player_name = name;
                Ok(parsed)
            }
            _ => Err("Missing player name".to_string()),
        }
    }

    /// Command-line values win over the config file
    pub fn apply_to(&self, config: &mut GameConfig) {
        if let Some(path) = &self.word_file {
            config.word_file = path.clone();
        }
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}
