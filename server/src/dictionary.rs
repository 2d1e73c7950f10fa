//! Word list the server picks secret words from
//!
//! The file is read once at startup into memory. Picking a word is then a
//! uniform random index into that list.

use log::{info, warn};
use rand::Rng;
use shared::MAX_WORD_LEN;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dictionary contains no usable words")]
    Empty,
}

#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Loads a newline-delimited word list
    ///
    /// Blank lines are skipped, as are entries longer than [`MAX_WORD_LEN`]
    /// and entries with anything other than lower-case ASCII letters, since
    /// no guess could ever reveal those.
    /// Both `\n` and `\r\n` line endings are accepted.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = Self::parse(&contents);
        if dictionary.is_empty() {
            return Err(DictionaryError::Empty);
        }

        info!(
            "Loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Builds a dictionary from text already in memory.
    pub fn parse(contents: &str) -> Self {
        let mut words = Vec::new();
        for (number, line) in contents.lines().enumerate() {
            let word = line.trim_end_matches('\r');
            if word.is_empty() {
                continue;
            }
            if word.chars().count() > MAX_WORD_LEN {
                warn!("Skipping dictionary line {}: word too long", number + 1);
                continue;
            }
            if !word.bytes().all(|b| b.is_ascii_lowercase()) {
                warn!(
                    "Skipping dictionary line {}: not all lower-case letters",
                    number + 1
                );
                continue;
            }
            words.push(word.to_string());
        }
        Self { words }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Entry at a 0-based index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Picks an entry uniformly at random. Returns `None` only when empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if self.words.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.words.len());
        info!("Picked word at index {}", index);
        self.get(index)
    }
}
