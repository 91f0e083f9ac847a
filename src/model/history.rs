use crate::model::structures::{
    processing::{MatchSummary, ScorerLine},
    records::LeagueSnapshot
};

const UNKNOWN_PLAYER: &str = "?";

/// Matches newest first, each with its goal scorers in event order.
pub fn match_history(snapshot: &LeagueSnapshot) -> Vec<MatchSummary> {
    snapshot
        .matches
        .iter()
        .rev()
        .map(|m| MatchSummary {
            match_id: m.id.clone(),
            date: m.date,
            note: m.note.clone(),
            scorers: m
                .events
                .iter()
                .filter(|e| e.goals > 0)
                .map(|e| ScorerLine {
                    name: snapshot
                        .player(&e.player_id)
                        .map_or_else(|| UNKNOWN_PLAYER.to_string(), |p| p.name.clone()),
                    goals: e.goals
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::{
        model::{history::match_history, structures::position::Position::Forward},
        utils::test_utils::{generate_event, generate_match, generate_player, snapshot_of}
    };

    #[test]
    fn test_newest_first_with_scorers() {
        let snapshot = snapshot_of(
            vec![generate_player("p1", Forward), generate_player("p2", Forward)],
            vec![
                generate_match("m1", vec![generate_event("p1", 2, 0, 0), generate_event("p2", 0, 1, 0)]),
                generate_match("m2", vec![generate_event("p2", 1, 0, 0), generate_event("gone", 1, 0, 0)]),
            ]
        );

        let history = match_history(&snapshot);

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].match_id, "m2");
        assert_eq!(history[0].scorers.len(), 2);
        assert_eq!(history[0].scorers[0].name, "Player p2");
        assert_eq!(history[0].scorers[1].name, "?");
        assert_eq!(history[1].scorers.len(), 1);
        assert_eq!(history[1].scorers[0].goals, 2);
    }
}
