use std::fs::File;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use read_write::{words_from_bytes, VecIO};
use thiserror::Error;

/// Node address of a fresh hand
pub const ROOT_NODE: u32 = 53;

/// Words per node
/// slot 0 closes out a 5 or 6 card hand, slots 1-52 add a card
pub const NODE_WIDTH: usize = 53;

/// Word count of the standard generated HandRanks.dat
pub const STANDARD_TABLE_WORDS: usize = 32_487_834;

// smallest table that still holds the root node
#[cfg(test)]
const MIN_TABLE_WORDS: usize = ROOT_NODE as usize + NODE_WIDTH;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("unable to read rank table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("rank table is corrupt: {0}")]
    Corrupt(#[source] io::Error),
    #[error("rank table has {found} words, at least {expected} are required")]
    Truncated { found: usize, expected: usize },
}

/// Immutable state transition table used by the evaluator
///
/// Each word is the node reached by adding a card code to the
/// current node address, or a hand value once the hand is closed.
/// Shared read only between threads once loaded.
#[derive(Debug)]
pub struct RankTable {
    words: Vec<u32>,
}

impl RankTable {
    /// Builds the standard table from a little endian byte blob
    ///
    /// Anything shorter than the generated table is rejected here so a
    /// truncated artifact never reaches the walk.
    pub fn from_bytes(bytes: &[u8]) -> Result<RankTable, TableError> {
        let words = words_from_bytes(bytes).map_err(TableError::Corrupt)?;
        RankTable::from_standard_words(words)
    }

    /// Reads the standard generated table, rejecting anything shorter
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::sync::Arc;
    /// use poker_odds::hand_evaluator::{RankTable, TableEvaluator};
    /// let table = Arc::new(RankTable::open("data/HandRanks.dat").unwrap());
    /// let evaluator = TableEvaluator::new(table);
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<RankTable, TableError> {
        let path = path.as_ref();
        // file is closed when it falls out of scope, on error or not
        let words = {
            let mut file = File::open(path).map_err(|source| TableError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            file.read_words_from_file()
        }
        .map_err(|source| match source.kind() {
            ErrorKind::UnexpectedEof => TableError::Corrupt(source),
            _ => TableError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let table = RankTable::from_standard_words(words)?;
        log::info!(
            "loaded rank table {} ({} words)",
            path.display(),
            table.len()
        );
        Ok(table)
    }

    fn from_standard_words(words: Vec<u32>) -> Result<RankTable, TableError> {
        if words.len() < STANDARD_TABLE_WORDS {
            return Err(TableError::Truncated {
                found: words.len(),
                expected: STANDARD_TABLE_WORDS,
            });
        }
        Ok(RankTable { words })
    }

    /// Small hand built tables, only complete for the hands they were built from
    #[cfg(test)]
    pub(crate) fn from_words(words: Vec<u32>) -> Result<RankTable, TableError> {
        if words.len() < MIN_TABLE_WORDS {
            return Err(TableError::Truncated {
                found: words.len(),
                expected: MIN_TABLE_WORDS,
            });
        }
        Ok(RankTable { words })
    }

    /// Word stored at `address`
    ///
    /// # Panics
    ///
    /// Addresses are only produced by walking the table, so an
    /// out of range address means the table is broken and panics.
    #[inline]
    pub fn read(&self, address: u32) -> u32 {
        self.words[address as usize]
    }

    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }
}
