use chrono::NaiveDate;
use serde::Serialize;

use crate::model::structures::{
    aggregate::Aggregate,
    records::{PerformanceEvent, Player}
};

/// Standout performer of a single match. Both fields are `None` when the
/// match has no events; `player` alone is `None` when the winning event
/// points at someone no longer on the roster.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MvpSelection<'a> {
    pub event: Option<&'a PerformanceEvent>,
    pub player: Option<&'a Player>
}

impl MvpSelection<'_> {
    pub fn is_empty(&self) -> bool {
        self.event.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    /// 1-based
    pub rank: usize,
    pub player_id: String,
    pub name: String,
    pub value: u32
}

/// Independent 0-100 scales for the comparison radar chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonProjection {
    pub finishing: f64,
    pub playmaking: f64,
    pub defense: f64,
    pub experience: f64
}

impl ComparisonProjection {
    pub fn values(&self) -> [f64; 4] {
        [self.finishing, self.playmaking, self.defense, self.experience]
    }
}

/// One side of a head-to-head comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSide {
    pub aggregate: Aggregate,
    pub projection: ComparisonProjection
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadToHead {
    pub left: ComparisonSide,
    pub right: ComparisonSide
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScorerLine {
    /// `?` when the player is missing from the roster
    pub name: String,
    pub goals: u32
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub match_id: String,
    pub date: NaiveDate,
    pub note: String,
    pub scorers: Vec<ScorerLine>
}
