use indexmap::IndexMap;
use itertools::Itertools;

use crate::model::structures::{aggregate::Aggregate, processing::LeaderboardEntry, stat_column::StatColumn};

/// Top `limit` players by `column`, highest first.
///
/// Players with a zero value are left out entirely. The sort is stable, so
/// equal values keep the order of the aggregate map.
pub fn leaderboard(
    aggregates: &IndexMap<String, Aggregate>,
    column: StatColumn,
    limit: usize
) -> Vec<LeaderboardEntry> {
    aggregates
        .values()
        .map(|a| (a, column.value(a)))
        .filter(|(_, value)| *value > 0)
        .sorted_by(|(_, v1), (_, v2)| v2.cmp(v1))
        .take(limit)
        .enumerate()
        .map(|(idx, (a, value))| LeaderboardEntry {
            rank: idx + 1,
            player_id: a.player_id.clone(),
            name: a.name.clone(),
            value
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::{
        model::{
            aggregation::calculate_aggregates,
            constants::LEADERBOARD_LIMIT,
            leaderboard::leaderboard,
            structures::{position::Position::Forward, stat_column::StatColumn}
        },
        utils::test_utils::{generate_event, generate_match, generate_player}
    };

    #[test]
    fn test_orders_descending_and_excludes_zero() {
        let players = vec![
            generate_player("p1", Forward),
            generate_player("p2", Forward),
            generate_player("p3", Forward),
        ];
        let matches = vec![generate_match(
            "m1",
            vec![generate_event("p1", 1, 2, 0), generate_event("p2", 3, 0, 0), generate_event("p3", 0, 0, 4)]
        )];
        let aggregates = calculate_aggregates(&players, &matches);

        let scorers = leaderboard(&aggregates, StatColumn::Goals, LEADERBOARD_LIMIT);
        assert_eq!(scorers.iter().map(|e| e.player_id.as_str()).collect::<Vec<_>>(), vec!["p2", "p1"]);
        assert_eq!(scorers[0].rank, 1);
        assert_eq!(scorers[0].value, 3);

        let assisters = leaderboard(&aggregates, StatColumn::Assists, LEADERBOARD_LIMIT);
        assert_eq!(assisters.len(), 1);
        assert_eq!(assisters[0].player_id, "p1");
    }

    #[test]
    fn test_ties_keep_roster_order() {
        let players = vec![
            generate_player("p1", Forward),
            generate_player("p2", Forward),
            generate_player("p3", Forward),
        ];
        let matches = vec![generate_match(
            "m1",
            vec![generate_event("p3", 2, 0, 0), generate_event("p2", 2, 0, 0), generate_event("p1", 2, 0, 0)]
        )];
        let aggregates = calculate_aggregates(&players, &matches);

        let scorers = leaderboard(&aggregates, StatColumn::Goals, LEADERBOARD_LIMIT);

        assert_eq!(scorers.iter().map(|e| e.player_id.as_str()).collect::<Vec<_>>(), vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_truncates_to_limit() {
        let players = (0..12).map(|i| generate_player(&format!("p{}", i), Forward)).collect::<Vec<_>>();
        let events = (0..12).map(|i| generate_event(&format!("p{}", i), i + 1, 0, 0)).collect();
        let aggregates = calculate_aggregates(&players, &[generate_match("m1", events)]);

        let scorers = leaderboard(&aggregates, StatColumn::Goals, LEADERBOARD_LIMIT);

        assert_eq!(scorers.len(), 8);
        assert_eq!(scorers[0].player_id, "p11");
        assert_eq!(scorers[7].player_id, "p4");
        assert_eq!(scorers[7].rank, 8);
    }

    #[test]
    fn test_empty() {
        let aggregates = calculate_aggregates(&[], &[]);
        assert!(leaderboard(&aggregates, StatColumn::Goals, LEADERBOARD_LIMIT).is_empty());

        let players = vec![generate_player("p1", Forward)];
        let aggregates = calculate_aggregates(&players, &[]);
        assert!(leaderboard(&aggregates, StatColumn::Assists, LEADERBOARD_LIMIT).is_empty());
    }
}
