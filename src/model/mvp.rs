use crate::model::{
    constants::{MVP_ASSIST_POINTS, MVP_BONUS_POINTS, MVP_GOAL_POINTS},
    structures::{
        processing::MvpSelection,
        records::{Match, PerformanceEvent, Player}
    }
};

pub fn mvp_score(event: &PerformanceEvent) -> u64 {
    event.goals as u64 * MVP_GOAL_POINTS as u64
        + event.assists as u64 * MVP_ASSIST_POINTS as u64
        + event.bonus as u64 * MVP_BONUS_POINTS as u64
}

/// Picks the highest scoring event of a match and resolves its player.
///
/// Only a strictly greater score replaces the current best, so on a tie the
/// event stored first keeps the title.
pub fn select_mvp<'a>(match_: &'a Match, roster: &'a [Player]) -> MvpSelection<'a> {
    let mut best: Option<(&PerformanceEvent, u64)> = None;

    for event in &match_.events {
        let score = mvp_score(event);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((event, score));
        }
    }

    match best {
        Some((event, _)) => MvpSelection {
            event: Some(event),
            player: roster.iter().find(|p| p.id == event.player_id)
        },
        None => MvpSelection::default()
    }
}
