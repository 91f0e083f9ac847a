use thiserror::Error;

use crate::model::structures::records::{LeagueSnapshot, Match, Player};

pub mod config;
pub mod db_structs;
pub mod json_store;
pub mod memory;

pub use config::StoreConfig;
pub use json_store::JsonFileStore;
pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access the record store: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to (de)serialize records: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Match {match_id} has an undecodable events column: {source}")]
    EventDecode {
        match_id: String,
        #[source]
        source: serde_json::Error
    }
}

/// Persistence boundary. Saves replace the whole collection.
pub trait RecordStore {
    fn load_players(&self) -> Result<Vec<Player>, StoreError>;

    fn load_matches(&self) -> Result<Vec<Match>, StoreError>;

    fn save_players(&mut self, players: &[Player]) -> Result<(), StoreError>;

    fn save_matches(&mut self, matches: &[Match]) -> Result<(), StoreError>;

    /// One consistent view of the league for a computation pass.
    fn load_snapshot(&self) -> Result<LeagueSnapshot, StoreError> {
        Ok(LeagueSnapshot::new(self.load_players()?, self.load_matches()?))
    }
}
