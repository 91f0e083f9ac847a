use crate::model::{
    constants::{
        ASSIST_SATURATION, BONUS_SATURATION, CONFIDENCE_BASE, CONFIDENCE_FULL_MATCHES, GOAL_SATURATION,
        RATING_CEILING, RATING_FLOOR, RATING_SPAN
    },
    structures::{aggregate::PlayerTotals, position::Position, weight_profile::WeightProfile}
};

/// # Performance rating
///
/// Maps a player's totals onto [4.0, 10.0]:
/// 1. Per-match rates are taken over `effective_matches`.
/// 2. Each rate passes through a saturating curve `1 - e^(-rate * k)` and is
///     weighted by the position profile. The weighted sum is below 1.0.
/// 3. The sum is discounted by the confidence factor for small samples.
/// 4. The result is scaled onto the rating range, clamped, and rounded to
///     one decimal place (half away from zero).
pub fn rate(totals: &PlayerTotals, position: Position) -> f64 {
    let raw = raw_score(totals, &position.weights());
    let conf = confidence(totals.raw_matches);

    let rating = RATING_FLOOR + RATING_SPAN * raw * conf;

    round_to_tenth(rating.clamp(RATING_FLOOR, RATING_CEILING))
}

/// Weighted sum of saturated per-match rates, in [0, 1).
pub fn raw_score(totals: &PlayerTotals, weights: &WeightProfile) -> f64 {
    weights.goals * saturation(totals.goals_per_match(), GOAL_SATURATION)
        + weights.assists * saturation(totals.assists_per_match(), ASSIST_SATURATION)
        + weights.bonus * saturation(totals.bonus_per_match(), BONUS_SATURATION)
}

/// Diminishing-returns curve approaching (never reaching) 1.0.
pub fn saturation(rate: f64, k: f64) -> f64 {
    1.0 - (-rate * k).exp()
}

/// 0.5 with no matches played, rising linearly to 1.0 at four matches.
pub fn confidence(raw_matches: u32) -> f64 {
    let sample = (raw_matches as f64 / CONFIDENCE_FULL_MATCHES as f64).min(1.0);
    CONFIDENCE_BASE + (1.0 - CONFIDENCE_BASE) * sample
}

/// Rounds half away from zero, so 5.25 becomes 5.3.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
