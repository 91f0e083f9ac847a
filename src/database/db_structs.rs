use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    database::StoreError,
    model::structures::records::{Match, PerformanceEvent}
};

/// A match as it is laid out in storage: one row per match, with the event
/// list embedded as JSON text in a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRow {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub note: String,
    pub events: String
}

impl MatchRow {
    pub fn encode(match_: &Match) -> Result<MatchRow, StoreError> {
        Ok(MatchRow {
            id: match_.id.clone(),
            date: match_.date,
            note: match_.note.clone(),
            events: serde_json::to_string(&match_.events)?
        })
    }

    pub fn decode(self) -> Result<Match, StoreError> {
        let events: Vec<PerformanceEvent> =
            serde_json::from_str(&self.events).map_err(|source| StoreError::EventDecode {
                match_id: self.id.clone(),
                source
            })?;

        Ok(Match {
            id: self.id,
            date: self.date,
            note: self.note,
            events
        })
    }
}
