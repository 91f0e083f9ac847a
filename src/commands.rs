use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    database::{RecordStore, StoreError},
    media::encode_thumbnail,
    model::{
        aggregation::calculate_aggregates,
        comparison::head_to_head,
        structures::{
            position::Position,
            processing::HeadToHead,
            records::{LeagueSnapshot, Match, PerformanceEvent, Player}
        }
    }
};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Player name must not be empty")]
    EmptyName,

    #[error("No player matches '{0}'")]
    UnknownPlayer(String),

    #[error("Player {0} appears more than once in the match")]
    DuplicateEvent(String),

    #[error("Match has no contributions to record")]
    NoContributions,

    #[error("There are no matches to undo")]
    NoMatches,

    #[error("Comparison needs at least two players on the roster")]
    NotEnoughPlayers,

    #[error("Cannot compare {0} with themselves")]
    SamePlayer(String),

    #[error("Refusing to wipe the league without --yes")]
    NotConfirmed
}

#[derive(Debug, Clone, Default)]
pub struct NewPlayer {
    pub name: String,
    pub number: u32,
    pub position: Position,
    /// Raw uploaded image; stored as a thumbnail
    pub photo: Option<Vec<u8>>
}

pub fn add_player<S: RecordStore>(store: &mut S, new_player: NewPlayer) -> Result<Player, CommandError> {
    let name = new_player.name.trim();
    if name.is_empty() {
        return Err(CommandError::EmptyName);
    }

    let mut players = store.load_players()?;
    let player = Player {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        number: new_player.number,
        position: new_player.position,
        photo: new_player.photo.as_deref().and_then(encode_thumbnail)
    };

    players.push(player.clone());
    store.save_players(&players)?;

    info!("Added player {} ({})", player.name, player.id);
    Ok(player)
}

/// Removes a player from the roster. Their past events stay in the match
/// history and are skipped by aggregation from now on.
pub fn remove_player<S: RecordStore>(store: &mut S, player_id: &str) -> Result<Player, CommandError> {
    let mut players = store.load_players()?;
    let idx = players
        .iter()
        .position(|p| p.id == player_id)
        .ok_or_else(|| CommandError::UnknownPlayer(player_id.to_string()))?;

    let removed = players.remove(idx);
    store.save_players(&players)?;

    info!("Removed player {} ({})", removed.name, removed.id);
    Ok(removed)
}

/// Stores a match. Bonus is only kept for positions that record it (see
/// [`Position::records_bonus`]). Events left without any contribution are
/// dropped; a match left with no events is not recorded.
pub fn record_match<S: RecordStore>(
    store: &mut S,
    date: NaiveDate,
    note: &str,
    events: Vec<PerformanceEvent>
) -> Result<Match, CommandError> {
    let players = store.load_players()?;
    let roster: HashMap<&str, Position> = players.iter().map(|p| (p.id.as_str(), p.position)).collect();

    let mut seen = HashSet::new();
    for event in &events {
        if !roster.contains_key(event.player_id.as_str()) {
            return Err(CommandError::UnknownPlayer(event.player_id.clone()));
        }
        if !seen.insert(event.player_id.as_str()) {
            return Err(CommandError::DuplicateEvent(event.player_id.clone()));
        }
    }

    let events: Vec<PerformanceEvent> = events
        .into_iter()
        .map(|mut e| {
            if e.bonus > 0 && !roster[e.player_id.as_str()].records_bonus() {
                debug!("Ignoring bonus {} for {}: position does not record it", e.bonus, e.player_id);
                e.bonus = 0;
            }
            e
        })
        .filter(|e| e.has_contribution())
        .collect();
    if events.is_empty() {
        return Err(CommandError::NoContributions);
    }

    let mut matches = store.load_matches()?;
    let match_ = Match {
        id: Uuid::new_v4().to_string(),
        date,
        note: note.trim().to_string(),
        events
    };

    matches.push(match_.clone());
    store.save_matches(&matches)?;

    info!(
        "Recorded match {} on {} with {} events",
        match_.id,
        match_.date,
        match_.events.len()
    );
    Ok(match_)
}

/// Drops the most recently stored match.
pub fn undo_last_match<S: RecordStore>(store: &mut S) -> Result<Match, CommandError> {
    let mut matches = store.load_matches()?;
    let removed = matches.pop().ok_or(CommandError::NoMatches)?;
    store.save_matches(&matches)?;

    info!("Removed match {} from {}", removed.id, removed.date);
    Ok(removed)
}

pub fn wipe<S: RecordStore>(store: &mut S) -> Result<(), CommandError> {
    store.save_players(&[])?;
    store.save_matches(&[])?;

    info!("Wiped all players and matches");
    Ok(())
}

/// Finds a player by id, or failing that by case-insensitive name.
pub fn find_player<'a>(snapshot: &'a LeagueSnapshot, key: &str) -> Result<&'a Player, CommandError> {
    snapshot
        .player(key)
        .or_else(|| snapshot.players.iter().find(|p| p.name.eq_ignore_ascii_case(key)))
        .ok_or_else(|| CommandError::UnknownPlayer(key.to_string()))
}

pub fn compare_players(snapshot: &LeagueSnapshot, left: &str, right: &str) -> Result<HeadToHead, CommandError> {
    if snapshot.players.len() < 2 {
        return Err(CommandError::NotEnoughPlayers);
    }

    let left_id = find_player(snapshot, left)?.id.as_str();
    let right_id = find_player(snapshot, right)?.id.as_str();
    if left_id == right_id {
        return Err(CommandError::SamePlayer(right.to_string()));
    }

    let aggregates = calculate_aggregates(&snapshot.players, &snapshot.matches);

    Ok(head_to_head(&aggregates[left_id], &aggregates[right_id]))
}
