//! Buzzword list loaded once at startup
//!
//! The file format is plain text with one candidate label per line. Lines are
//! trimmed, blank lines are skipped and repeated words are kept only once so
//! that every drawn label is distinct.

use log::{debug, warn};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::bingo_rand::BingoRand;
use crate::error::GameError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn from_file(path: &Path) -> Result<Self, GameError> {
        debug!("Loading word list: {}", path.display());
        let contents = fs::read_to_string(path).map_err(|source| GameError::WordList {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::from_lines(contents.lines());
        debug!("Loaded {} words from {}", list.len(), path.display());
        Ok(list)
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut words = Vec::new();
        for line in lines {
            let word = line.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            if seen.insert(word.to_string()) {
                words.push(word.to_string());
            } else {
                warn!("Duplicate word '{}' ignored", word);
            }
        }
        WordList { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Draw `amount` distinct words uniformly at random without replacement
    pub fn sample(&self, amount: usize, rng: &mut BingoRand) -> Result<Vec<String>, GameError> {
        if self.words.len() < amount {
            return Err(GameError::InsufficientWords {
                available: self.words.len(),
                required: amount,
            });
        }
        Ok(rng
            .sample_indices(self.words.len(), amount)
            .into_iter()
            .map(|i| self.words[i].clone())
            .collect())
    }
}
