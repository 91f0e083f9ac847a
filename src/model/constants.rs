// Rating model
pub const RATING_FLOOR: f64 = 4.0;
pub const RATING_CEILING: f64 = 10.0;
pub const RATING_SPAN: f64 = 6.0;
pub const GOAL_SATURATION: f64 = 1.2;
pub const ASSIST_SATURATION: f64 = 1.2;
pub const BONUS_SATURATION: f64 = 1.5;
pub const CONFIDENCE_BASE: f64 = 0.5;
/// Matches played after which the confidence factor stops growing
pub const CONFIDENCE_FULL_MATCHES: u32 = 4;
// MVP score weights
pub const MVP_GOAL_POINTS: u32 = 4;
pub const MVP_ASSIST_POINTS: u32 = 3;
pub const MVP_BONUS_POINTS: u32 = 5;
// Leaderboards
pub const LEADERBOARD_LIMIT: usize = 8;
// Comparison projection
pub const PROJECTION_CAP: f64 = 100.0;
pub const FINISHING_SCALE: f64 = 45.0;
pub const PLAYMAKING_SCALE: f64 = 45.0;
pub const DEFENSE_SCALE: f64 = 60.0;
pub const EXPERIENCE_SCALE: f64 = 10.0;
