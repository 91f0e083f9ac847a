use crate::model::{
    rating::rate,
    structures::{
        aggregate::{Aggregate, PlayerTotals},
        position::Position,
        records::{LeagueSnapshot, Match, PerformanceEvent, Player}
    }
};
use chrono::{Days, NaiveDate};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use strum::IntoEnumIterator;

pub fn generate_player(id: &str, position: Position) -> Player {
    Player {
        id: id.to_string(),
        name: format!("Player {}", id),
        number: 0,
        position,
        photo: None
    }
}

pub fn generate_event(player_id: &str, goals: u32, assists: u32, bonus: u32) -> PerformanceEvent {
    PerformanceEvent {
        player_id: player_id.to_string(),
        goals,
        assists,
        bonus
    }
}

pub fn generate_match(id: &str, events: Vec<PerformanceEvent>) -> Match {
    Match {
        id: id.to_string(),
        date: default_date(),
        note: String::new(),
        events
    }
}

pub fn snapshot_of(players: Vec<Player>, matches: Vec<Match>) -> LeagueSnapshot {
    LeagueSnapshot::new(players, matches)
}

pub fn generate_aggregate(player_id: &str, position: Position, totals: PlayerTotals) -> Aggregate {
    Aggregate {
        player_id: player_id.to_string(),
        name: format!("Player {}", player_id),
        position,
        totals,
        rating: rate(&totals, position)
    }
}

/// A random stat line in the range a recreational league produces.
pub fn generate_totals(rng: &mut ChaCha8Rng) -> PlayerTotals {
    PlayerTotals {
        goals: rng.random_range(0..=60),
        assists: rng.random_range(0..=60),
        bonus: rng.random_range(0..=80),
        raw_matches: rng.random_range(0..=30)
    }
}

/// Seeded roster and match history. Roughly one event in ten references a
/// player that is not on the roster.
pub fn generate_snapshot(rng: &mut ChaCha8Rng, n_players: usize, n_matches: usize) -> LeagueSnapshot {
    let positions = Position::iter().collect::<Vec<_>>();

    let players = (0..n_players)
        .map(|i| generate_player(&format!("p{}", i), positions[i % positions.len()]))
        .collect::<Vec<_>>();

    let mut matches = Vec::with_capacity(n_matches);
    for m in 0..n_matches {
        let mut events = Vec::new();
        for player in &players {
            if rng.random_bool(0.6) {
                let player_id = if rng.random_bool(0.1) {
                    format!("ghost{}", m)
                } else {
                    player.id.clone()
                };

                events.push(generate_event(
                    &player_id,
                    rng.random_range(0..=3),
                    rng.random_range(0..=3),
                    rng.random_range(0..=4)
                ));
            }
        }

        let mut match_ = generate_match(&format!("m{}", m), events);
        match_.date = default_date() + Days::new(7 * m as u64);
        matches.push(match_);
    }

    LeagueSnapshot::new(players, matches)
}

fn default_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()
}
