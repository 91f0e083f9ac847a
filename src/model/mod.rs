use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::model::{
    aggregation::calculate_aggregates,
    constants::LEADERBOARD_LIMIT,
    leaderboard::leaderboard,
    mvp::select_mvp,
    structures::{
        aggregate::Aggregate,
        processing::{LeaderboardEntry, MvpSelection},
        records::{LeagueSnapshot, Match, PerformanceEvent, Player},
        stat_column::StatColumn
    }
};

pub mod aggregation;
pub mod comparison;
pub mod constants;
pub mod history;
pub mod leaderboard;
pub mod mvp;
pub mod rating;
pub mod structures;

/// Player of the week: the MVP of the most recently stored match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerOfTheWeek {
    pub match_id: String,
    pub date: chrono::NaiveDate,
    pub player: Option<Player>,
    pub event: PerformanceEvent
}

/// The arena view: everything the front page shows, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub aggregates: IndexMap<String, Aggregate>,
    pub player_of_the_week: Option<PlayerOfTheWeek>,
    pub top_scorers: Vec<LeaderboardEntry>,
    pub top_assisters: Vec<LeaderboardEntry>
}

impl Dashboard {
    /// Recomputes every aggregate from scratch. Nothing is cached between calls.
    pub fn build(snapshot: &LeagueSnapshot) -> Dashboard {
        debug!(
            "Building dashboard for {} players and {} matches",
            snapshot.players.len(),
            snapshot.matches.len()
        );

        let aggregates = calculate_aggregates(&snapshot.players, &snapshot.matches);
        let top_scorers = leaderboard(&aggregates, StatColumn::Goals, LEADERBOARD_LIMIT);
        let top_assisters = leaderboard(&aggregates, StatColumn::Assists, LEADERBOARD_LIMIT);

        Dashboard {
            player_of_the_week: player_of_the_week(snapshot),
            aggregates,
            top_scorers,
            top_assisters
        }
    }
}

pub fn player_of_the_week(snapshot: &LeagueSnapshot) -> Option<PlayerOfTheWeek> {
    let latest: &Match = snapshot.latest_match()?;
    let MvpSelection { event, player } = select_mvp(latest, &snapshot.players);

    event.map(|e| PlayerOfTheWeek {
        match_id: latest.id.clone(),
        date: latest.date,
        player: player.cloned(),
        event: e.clone()
    })
}
