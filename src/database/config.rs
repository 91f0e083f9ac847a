use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};

pub const DEFAULT_DATA_DIR: &str = "data";
pub const PLAYERS_FILE: &str = "players.json";
pub const MATCHES_FILE: &str = "matches.json";

/// Location of the file-backed record store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding both collections
    pub data_dir: PathBuf,
    /// File name of the player collection inside `data_dir`
    pub players_file: String,
    /// File name of the match collection inside `data_dir`
    pub matches_file: String
}

impl StoreConfig {
    /// Reads `LEAGUE_DATA_DIR`, falling back to `./data`.
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("LEAGUE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
            ..Default::default()
        }
    }

    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    pub fn players_path(&self) -> PathBuf {
        self.data_dir.join(&self.players_file)
    }

    pub fn matches_path(&self) -> PathBuf {
        self.data_dir.join(&self.matches_file)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            players_file: PLAYERS_FILE.to_string(),
            matches_file: MATCHES_FILE.to_string()
        }
    }
}
