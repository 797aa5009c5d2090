use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hand_evaluator::{RankTable, TableError, TableEvaluator};

const DEFAULT_TABLE_PATH: &str = "data/HandRanks.dat";
const DEFAULT_TRIALS: u64 = 1000;
const DEFAULT_THREADS: usize = 1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Where the rank table lives and how hard to simulate
///
/// Missing fields fall back to the defaults
///
/// ```
/// use poker_odds::config::Config;
/// let config = Config::from_json(r#"{ "trials": 5000 }"#).unwrap();
/// assert_eq!(config.trials, 5000);
/// assert_eq!(config.threads, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path of the generated HandRanks.dat
    pub table_path: PathBuf,
    /// Trials per equity estimate
    pub trials: u64,
    /// Worker threads per equity estimate
    pub threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            table_path: PathBuf::from(DEFAULT_TABLE_PATH),
            trials: DEFAULT_TRIALS,
            threads: DEFAULT_THREADS,
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> Result<Config, ConfigError> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Config::from_json(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::Invalid("trials must be positive"));
        }
        if self.threads == 0 {
            return Err(ConfigError::Invalid("threads must be positive"));
        }
        Ok(())
    }

    /// Loads the standard rank table from `table_path`
    pub fn load_table(&self) -> Result<Arc<RankTable>, ConfigError> {
        Ok(Arc::new(RankTable::open(&self.table_path)?))
    }

    pub fn evaluator(&self) -> Result<TableEvaluator, ConfigError> {
        Ok(TableEvaluator::new(self.load_table()?))
    }
}
