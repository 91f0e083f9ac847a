use crate::model::structures::aggregate::Aggregate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Statistic a leaderboard is ranked by.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StatColumn {
    Goals,
    Assists
}

impl StatColumn {
    pub fn value(&self, aggregate: &Aggregate) -> u32 {
        match self {
            StatColumn::Goals => aggregate.totals.goals,
            StatColumn::Assists => aggregate.totals.assists
        }
    }
}
