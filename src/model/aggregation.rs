use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::debug;

use crate::model::{
    rating::rate,
    structures::{
        aggregate::{Aggregate, PlayerTotals},
        records::{Match, Player}
    }
};

/// Folds every event of every match into one [`PlayerTotals`] per roster
/// player. The map is seeded in roster order, so players without events are
/// present with zeroed totals.
///
/// Counters saturate at `u32::MAX`. Events for ids missing from the roster
/// are skipped. A player counts at most
/// one match played per match, and only if one of their events in it
/// contributed something.
pub fn accumulate_totals(players: &[Player], matches: &[Match]) -> IndexMap<String, PlayerTotals> {
    let mut totals: IndexMap<String, PlayerTotals> = players
        .iter()
        .map(|p| (p.id.clone(), PlayerTotals::default()))
        .collect();

    for match_ in matches {
        let mut counted: HashSet<&str> = HashSet::new();

        for event in &match_.events {
            let Some(player_totals) = totals.get_mut(&event.player_id) else {
                debug!(
                    "Dropping event for unknown player {} in match {}",
                    event.player_id, match_.id
                );
                continue;
            };

            player_totals.goals = player_totals.goals.saturating_add(event.goals);
            player_totals.assists = player_totals.assists.saturating_add(event.assists);
            player_totals.bonus = player_totals.bonus.saturating_add(event.bonus);

            if event.has_contribution() && counted.insert(event.player_id.as_str()) {
                player_totals.raw_matches += 1;
            }
        }
    }

    totals
}

/// Computes the full [`Aggregate`] (totals plus rating) for every roster
/// player, in roster order.
pub fn calculate_aggregates(players: &[Player], matches: &[Match]) -> IndexMap<String, Aggregate> {
    let totals = accumulate_totals(players, matches);

    let aggregates: IndexMap<String, Aggregate> = players
        .iter()
        .filter_map(|player| {
            totals.get(&player.id).map(|t| {
                (
                    player.id.clone(),
                    Aggregate {
                        player_id: player.id.clone(),
                        name: player.name.clone(),
                        position: player.position,
                        totals: *t,
                        rating: rate(t, player.position)
                    }
                )
            })
        })
        .collect();

    debug!(
        "Aggregated {} players over {} matches",
        aggregates.len(),
        matches.len()
    );

    aggregates
}

#[cfg(test)]
mod tests {
    use crate::{
        model::{
            aggregation::{accumulate_totals, calculate_aggregates},
            structures::position::Position::{Defender, Forward}
        },
        utils::test_utils::{generate_event, generate_match, generate_player, generate_snapshot}
    };
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_seeded_with_every_player() {
        let players = vec![generate_player("p1", Forward), generate_player("p2", Defender)];

        let totals = accumulate_totals(&players, &[]);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals.keys().collect::<Vec<_>>(), vec!["p1", "p2"]);
        assert!(totals.values().all(|t| t.raw_matches == 0 && t.goals == 0));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(accumulate_totals(&[], &[]).is_empty());
        assert!(calculate_aggregates(&[], &[]).is_empty());
    }

    #[test]
    fn test_sums_across_matches() {
        let players = vec![generate_player("p1", Forward)];
        let matches = vec![
            generate_match("m1", vec![generate_event("p1", 2, 1, 0)]),
            generate_match("m2", vec![generate_event("p1", 1, 0, 3)]),
        ];

        let t = accumulate_totals(&players, &matches)["p1"];

        assert_eq!(t.goals, 3);
        assert_eq!(t.assists, 1);
        assert_eq!(t.bonus, 3);
        assert_eq!(t.raw_matches, 2);
    }

    #[test]
    fn test_zero_event_not_counted_as_played() {
        let players = vec![generate_player("p1", Forward)];
        let matches = vec![
            generate_match("m1", vec![generate_event("p1", 0, 0, 0)]),
            generate_match("m2", vec![generate_event("p1", 0, 1, 0)]),
        ];

        let t = accumulate_totals(&players, &matches)["p1"];

        assert_eq!(t.raw_matches, 1);
        assert_eq!(t.effective_matches(), 1);
    }

    #[test]
    fn test_one_match_counted_once() {
        let players = vec![generate_player("p1", Forward)];
        let matches = vec![generate_match(
            "m1",
            vec![generate_event("p1", 1, 0, 0), generate_event("p1", 0, 2, 0)]
        )];

        let t = accumulate_totals(&players, &matches)["p1"];

        assert_eq!(t.goals, 1);
        assert_eq!(t.assists, 2);
        assert_eq!(t.raw_matches, 1);
    }

    #[test]
    fn test_unknown_player_is_ignored() {
        let players = vec![generate_player("p1", Forward)];
        let baseline = vec![generate_match("m1", vec![generate_event("p1", 1, 0, 0)])];
        let mut with_ghost = baseline.clone();
        with_ghost.push(generate_match("m2", vec![generate_event("ghost", 5, 5, 5)]));

        let before = calculate_aggregates(&players, &baseline);
        let after = calculate_aggregates(&players, &with_ghost);

        assert_eq!(before, after);
        assert!(!after.contains_key("ghost"));
    }

    #[test]
    fn test_aggregate_carries_rating() {
        let players = vec![generate_player("p1", Forward)];
        let matches = vec![generate_match("m1", vec![generate_event("p1", 1, 0, 0)])];

        let aggregates = calculate_aggregates(&players, &matches);

        assert_eq!(aggregates["p1"].rating, 5.6);
        assert_eq!(aggregates["p1"].position, Forward);
    }

    #[test]
    fn test_huge_counts_saturate() {
        let players = vec![generate_player("p1", Forward), generate_player("p2", Defender)];
        let half = u32::MAX / 2 + 1;
        let matches = vec![
            generate_match("m1", vec![generate_event("p1", u32::MAX, 1, 0), generate_event("p2", 0, 0, half)]),
            generate_match("m2", vec![generate_event("p1", 1, 0, 0), generate_event("p2", 0, 0, half)]),
        ];

        let aggregates = calculate_aggregates(&players, &matches);

        assert_eq!(aggregates["p1"].totals.goals, u32::MAX);
        assert_eq!(aggregates["p1"].totals.assists, 1);
        assert_eq!(aggregates["p1"].totals.raw_matches, 2);
        assert_eq!(aggregates["p2"].totals.bonus, u32::MAX);
        for aggregate in aggregates.values() {
            assert!((4.0..=10.0).contains(&aggregate.rating));
        }
    }

    #[test]
    fn test_deterministic() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let snapshot = generate_snapshot(&mut rng, 12, 20);

        let first = calculate_aggregates(&snapshot.players, &snapshot.matches);
        let second = calculate_aggregates(&snapshot.players, &snapshot.matches);

        assert_eq!(first, second);
        for (a, b) in first.values().zip(second.values()) {
            assert_eq!(a.rating.to_bits(), b.rating.to_bits());
        }
    }
}
