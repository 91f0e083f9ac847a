use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

use crate::model::structures::weight_profile::WeightProfile;

/// Playing position. Free text from the record store is parsed into one of the
/// four known positions; anything else lands in `Unknown`.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter,
)]
#[serde(from = "String", into = "String")]
#[strum(ascii_case_insensitive)]
pub enum Position {
    #[strum(to_string = "Forward", serialize = "Forvet")]
    Forward,
    #[strum(to_string = "Midfielder", serialize = "Orta Saha")]
    Midfielder,
    #[strum(to_string = "Defender", serialize = "Defans")]
    Defender,
    #[strum(to_string = "Goalkeeper", serialize = "Kaleci")]
    Goalkeeper,
    #[default]
    Unknown
}

impl Position {
    /// The (goals, assists, bonus) weighting used by the rating model.
    /// `Unknown` shares the Forward profile.
    pub fn weights(&self) -> WeightProfile {
        match self {
            Position::Forward | Position::Unknown => WeightProfile::FORWARD,
            Position::Midfielder => WeightProfile::MIDFIELDER,
            Position::Defender => WeightProfile::DEFENDER,
            Position::Goalkeeper => WeightProfile::GOALKEEPER
        }
    }

    /// Whether the match entry form asks for a bonus score for this position.
    pub fn records_bonus(&self) -> bool {
        matches!(self, Position::Midfielder | Position::Defender | Position::Goalkeeper)
    }
}

impl From<String> for Position {
    fn from(value: String) -> Self {
        Position::from_str(value.trim()).unwrap_or(Position::Unknown)
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.to_string()
    }
}
