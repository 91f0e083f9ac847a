use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::model::{
    constants::LEADERBOARD_LIMIT,
    structures::{position::Position, records::PerformanceEvent, stat_column::StatColumn}
};

#[derive(Parser, Clone, Debug)]
#[command(
    display_name = "League Stats",
    about = "Leaderboards, player of the week and head-to-head comparisons for a recreational league",
    long_about = "Reads the league roster and match history from the data directory, \
    recomputes every player's totals and rating, and prints the requested view."
)]
pub struct Args {
    /// Directory holding players.json and matches.json
    #[arg(short, long, env = "LEAGUE_DATA_DIR", global = true, help = "Record store directory")]
    pub data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        global = true,
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true, action = clap::ArgAction::SetTrue)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Player of the week plus the goal and assist leaderboards
    Arena,
    /// Top players by a single statistic
    Leaderboard {
        #[arg(value_enum)]
        column: StatColumn,
        #[arg(short = 'n', long, default_value_t = LEADERBOARD_LIMIT)]
        limit: usize
    },
    /// MVP of the most recent match
    Mvp,
    /// Head-to-head comparison of two players (id or name)
    Compare { first: String, second: String },
    /// Every player with totals and rating
    Roster,
    /// Match history, newest first
    History,
    AddPlayer {
        #[arg(long)]
        name: String,
        #[arg(long, default_value_t = 0)]
        number: u32,
        #[arg(long, value_parser = parse_position, default_value = "Forward")]
        position: Position,
        /// Path to a JPEG or PNG photo
        #[arg(long)]
        photo: Option<PathBuf>
    },
    RemovePlayer { id: String },
    /// Record a match; repeat --event for each player
    AddMatch {
        #[arg(long)]
        date: NaiveDate,
        #[arg(long, default_value = "")]
        note: String,
        /// PLAYER_ID:GOALS:ASSISTS:BONUS
        #[arg(long = "event", value_parser = parse_event, required = true)]
        events: Vec<PerformanceEvent>
    },
    /// Remove the most recently recorded match
    UndoMatch,
    /// Delete every player and match
    Wipe {
        #[arg(long, action = clap::ArgAction::SetTrue)]
        yes: bool
    }
}

fn parse_position(value: &str) -> Result<Position, String> {
    match Position::from(value.to_string()) {
        Position::Unknown => Err(format!("unknown position '{}'", value)),
        position => Ok(position)
    }
}

/// Parses `PLAYER_ID:GOALS:ASSISTS:BONUS`. Missing trailing counts are 0.
pub fn parse_event(value: &str) -> Result<PerformanceEvent, String> {
    let mut parts = value.split(':');
    let player_id = parts
        .next()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| format!("missing player id in '{}'", value))?
        .to_string();

    let mut counts = [0u32; 3];
    for count in counts.iter_mut() {
        if let Some(part) = parts.next() {
            *count = part
                .trim()
                .parse()
                .map_err(|_| format!("'{}' is not a non-negative number in '{}'", part, value))?;
        }
    }

    if parts.next().is_some() {
        return Err(format!("too many fields in '{}'", value));
    }

    Ok(PerformanceEvent {
        player_id,
        goals: counts[0],
        assists: counts[1],
        bonus: counts[2]
    })
}
