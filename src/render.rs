use std::fmt::Write;

use itertools::Itertools;

use crate::model::{
    structures::{
        aggregate::Aggregate,
        processing::{HeadToHead, LeaderboardEntry, MatchSummary}
    },
    PlayerOfTheWeek
};

pub fn player_of_the_week(potw: Option<&PlayerOfTheWeek>) -> String {
    let Some(potw) = potw else {
        return "No MVP yet.".to_string();
    };

    let name = potw
        .player
        .as_ref()
        .map_or_else(|| "?".to_string(), |p| format!("{} ({})", p.name, p.position));

    format!(
        "MVP {} | {} | G {} A {} B {}",
        potw.date, name, potw.event.goals, potw.event.assists, potw.event.bonus
    )
}

pub fn leaderboard(title: &str, entries: &[LeaderboardEntry]) -> String {
    let mut out = format!("{}\n", title);
    if entries.is_empty() {
        out.push_str("  No data\n");
        return out;
    }

    for e in entries {
        let _ = writeln!(out, "  {:>2}. {:<24} {:>3}", e.rank, e.name, e.value);
    }
    out
}

pub fn roster<'a>(aggregates: impl IntoIterator<Item = &'a Aggregate>) -> String {
    let mut out = format!(
        "{:<24} {:<11} {:>3} {:>3} {:>3} {:>3} {:>6}\n",
        "Player", "Position", "MP", "G", "A", "B", "Rating"
    );

    for a in aggregates {
        let _ = writeln!(
            out,
            "{:<24} {:<11} {:>3} {:>3} {:>3} {:>3} {:>6.1}",
            a.name, a.position, a.totals.raw_matches, a.totals.goals, a.totals.assists, a.totals.bonus, a.rating
        );
    }
    out
}

pub fn head_to_head(h2h: &HeadToHead) -> String {
    let (l, r) = (&h2h.left, &h2h.right);
    let mut out = format!(
        "{:<16} {:>12} {:>12}\n",
        "", l.aggregate.name, r.aggregate.name
    );

    let rows: [(&str, String, String); 9] = [
        ("Rating", format!("{:.1}", l.aggregate.rating), format!("{:.1}", r.aggregate.rating)),
        ("Finishing", format!("{:.1}", l.projection.finishing), format!("{:.1}", r.projection.finishing)),
        ("Playmaking", format!("{:.1}", l.projection.playmaking), format!("{:.1}", r.projection.playmaking)),
        ("Defense", format!("{:.1}", l.projection.defense), format!("{:.1}", r.projection.defense)),
        ("Experience", format!("{:.1}", l.projection.experience), format!("{:.1}", r.projection.experience)),
        ("Matches played", l.aggregate.totals.raw_matches.to_string(), r.aggregate.totals.raw_matches.to_string()),
        ("Goals", l.aggregate.totals.goals.to_string(), r.aggregate.totals.goals.to_string()),
        ("Assists", l.aggregate.totals.assists.to_string(), r.aggregate.totals.assists.to_string()),
        ("Defense points", l.aggregate.totals.bonus.to_string(), r.aggregate.totals.bonus.to_string())
    ];

    for (label, left, right) in rows {
        let _ = writeln!(out, "{:<16} {:>12} {:>12}", label, left, right);
    }
    out
}

pub fn history(summaries: &[MatchSummary]) -> String {
    if summaries.is_empty() {
        return "No matches recorded.\n".to_string();
    }

    summaries
        .iter()
        .map(|m| {
            let scorers = if m.scorers.is_empty() {
                "no goals".to_string()
            } else {
                m.scorers.iter().map(|s| format!("{} ({})", s.name, s.goals)).join(", ")
            };
            let note = if m.note.is_empty() { "-" } else { m.note.as_str() };

            format!("{} | {} | {}\n", m.date, note, scorers)
        })
        .collect()
}
