use std::{
    fs,
    io::{BufWriter, ErrorKind, Write},
    path::Path
};

use serde::{de::DeserializeOwned, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::{
    database::{config::StoreConfig, db_structs::MatchRow, RecordStore, StoreError},
    model::structures::records::{Match, Player}
};

/// Record store backed by two JSON documents in one directory. Match events
/// are kept as embedded JSON text per row, the same layout the league sheet
/// uses, and decoded here before anything reaches the model.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    config: StoreConfig
}

impl JsonFileStore {
    pub fn new(config: StoreConfig) -> Self {
        JsonFileStore { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// A missing file is an empty collection.
    fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist yet, treating as empty", path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into())
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&contents)?)
    }

    /// Serialises into a temp file in the data directory and renames it over
    /// `path`, so a failed write leaves the previous file in place.
    fn write_rows<T: Serialize>(&self, path: &Path, rows: &[T]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.config.data_dir)?;

        let mut tmp = NamedTempFile::new_in(&self.config.data_dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, rows)?;
            writer.flush()?;
        }
        tmp.persist(path).map_err(|e| e.error)?;

        info!("Wrote {} rows to {}", rows.len(), path.display());
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn load_players(&self) -> Result<Vec<Player>, StoreError> {
        Self::read_rows(&self.config.players_path())
    }

    fn load_matches(&self) -> Result<Vec<Match>, StoreError> {
        Self::read_rows::<MatchRow>(&self.config.matches_path())?
            .into_iter()
            .map(MatchRow::decode)
            .collect()
    }

    fn save_players(&mut self, players: &[Player]) -> Result<(), StoreError> {
        self.write_rows(&self.config.players_path(), players)
    }

    fn save_matches(&mut self, matches: &[Match]) -> Result<(), StoreError> {
        let rows = matches.iter().map(MatchRow::encode).collect::<Result<Vec<_>, _>>()?;
        self.write_rows(&self.config.matches_path(), &rows)
    }
}
