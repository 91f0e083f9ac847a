use crate::model::structures::position::Position;
use serde::Serialize;

/// Running totals for one player across every match in a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlayerTotals {
    pub goals: u32,
    pub assists: u32,
    pub bonus: u32,
    /// Matches in which the player's event had a positive contribution.
    /// This is the value to display as "matches played".
    pub raw_matches: u32
}

impl PlayerTotals {
    /// Denominator for per-match rates, floored at 1 so a player without a
    /// counted match never divides by zero. Not a display value.
    pub fn effective_matches(&self) -> u32 {
        self.raw_matches.max(1)
    }

    pub fn goals_per_match(&self) -> f64 {
        self.goals as f64 / self.effective_matches() as f64
    }

    pub fn assists_per_match(&self) -> f64 {
        self.assists as f64 / self.effective_matches() as f64
    }

    pub fn bonus_per_match(&self) -> f64 {
        self.bonus as f64 / self.effective_matches() as f64
    }
}

/// Derived per-player statistics. Scoped to a single computation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregate {
    pub player_id: String,
    pub name: String,
    pub position: Position,
    #[serde(flatten)]
    pub totals: PlayerTotals,
    /// In [4.0, 10.0], one decimal place
    pub rating: f64
}

impl Aggregate {
    pub fn effective_matches(&self) -> u32 {
        self.totals.effective_matches()
    }
}

#[cfg(test)]
mod tests {
    use crate::model::structures::aggregate::PlayerTotals;

    #[test]
    fn test_effective_matches_floor() {
        for raw_matches in 0..20 {
            let totals = PlayerTotals {
                raw_matches,
                ..Default::default()
            };

            assert_eq!(totals.effective_matches(), raw_matches.max(1));
        }
    }

    #[test]
    fn test_rates_without_matches() {
        let totals = PlayerTotals {
            goals: 3,
            assists: 2,
            bonus: 1,
            raw_matches: 0
        };

        assert_eq!(totals.goals_per_match(), 3.0);
        assert_eq!(totals.assists_per_match(), 2.0);
        assert_eq!(totals.bonus_per_match(), 1.0);
    }
}
