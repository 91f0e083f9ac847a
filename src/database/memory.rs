use crate::{
    database::{RecordStore, StoreError},
    model::structures::records::{LeagueSnapshot, Match, Player}
};

/// In-process store. Holds the collections exactly as last saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    players: Vec<Player>,
    matches: Vec<Match>
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: LeagueSnapshot) -> Self {
        MemoryStore {
            players: snapshot.players,
            matches: snapshot.matches
        }
    }
}

impl RecordStore for MemoryStore {
    fn load_players(&self) -> Result<Vec<Player>, StoreError> {
        Ok(self.players.clone())
    }

    fn load_matches(&self) -> Result<Vec<Match>, StoreError> {
        Ok(self.matches.clone())
    }

    fn save_players(&mut self, players: &[Player]) -> Result<(), StoreError> {
        self.players = players.to_vec();
        Ok(())
    }

    fn save_matches(&mut self, matches: &[Match]) -> Result<(), StoreError> {
        self.matches = matches.to_vec();
        Ok(())
    }
}
