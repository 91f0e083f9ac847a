use serde::Serialize;

/// Share of the rating attributed to each statistic. Every profile sums to 1.0.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct WeightProfile {
    pub goals: f64,
    pub assists: f64,
    pub bonus: f64
}

impl WeightProfile {
    pub const FORWARD: WeightProfile = WeightProfile {
        goals: 0.60,
        assists: 0.30,
        bonus: 0.10
    };
    pub const MIDFIELDER: WeightProfile = WeightProfile {
        goals: 0.35,
        assists: 0.45,
        bonus: 0.20
    };
    pub const DEFENDER: WeightProfile = WeightProfile {
        goals: 0.15,
        assists: 0.15,
        bonus: 0.70
    };
    pub const GOALKEEPER: WeightProfile = WeightProfile {
        goals: 0.05,
        assists: 0.05,
        bonus: 0.90
    };

    pub fn total(&self) -> f64 {
        self.goals + self.assists + self.bonus
    }
}
