// src/config/consts.rs

// Net config
pub const HOST: &str = "fantasy.premierleague.com";
pub const EVENT_HISTORY_SEGMENT: &str = "event-history";
pub const SEASON_HISTORY_SEGMENT: &str = "history";

// Season history table: the overall-points column is cumulative;
// per-week scores are deltas between consecutive rows.
pub const OVERALL_POINTS_COL: usize = 6;

// Averaging
pub const DEFAULT_THRESHOLD: f64 = 10.0;

// Tally
pub const DEFAULT_TALLY_FILE: &str = "pointsTracker.json";
