use crate::model::structures::position::Position;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(alias = "num", default)]
    pub number: u32,
    #[serde(default)]
    pub position: Position,
    /// Base64 JPEG thumbnail
    #[serde(default)]
    pub photo: Option<String>
}

/// One player's contribution to one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceEvent {
    pub player_id: String,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    /// Position-dependent "other contribution" (tackles, saves, ...)
    #[serde(default)]
    pub bonus: u32
}

impl PerformanceEvent {
    /// Saturates at `u32::MAX`.
    pub fn contribution(&self) -> u32 {
        self.goals.saturating_add(self.assists).saturating_add(self.bonus)
    }

    pub fn has_contribution(&self) -> bool {
        self.contribution() > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub note: String,
    /// Storage order matters: it decides MVP ties.
    pub events: Vec<PerformanceEvent>
}

/// Everything a computation pass reads. Built by the record store, never
/// mutated by the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueSnapshot {
    pub players: Vec<Player>,
    pub matches: Vec<Match>
}

impl LeagueSnapshot {
    pub fn new(players: Vec<Player>, matches: Vec<Match>) -> Self {
        LeagueSnapshot { players, matches }
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// The most recently stored match.
    pub fn latest_match(&self) -> Option<&Match> {
        self.matches.last()
    }
}
