// src/config/options.rs

use std::path::PathBuf;
use super::consts::*;

/// How member scores are pulled from the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchMode {
    /// One request per member for the given game week; single-shot
    /// match against the page's self-referencing history link.
    EventHistory,
    /// One request per member for the whole season; read every history
    /// row and pick the one for the requested week.
    SeasonHistory,
}

/// Everything one run needs, passed in explicitly. Nothing here is a
/// compile-time constant requiring source edits between game weeks.
#[derive(Clone, Debug)]
pub struct RunOptions {
    pub game_week: u32,
    pub threshold: f64,
    pub mode: FetchMode,
    pub host: String,
    /// URL path segment between the entry id and the week number
    /// (site routing convention; overridable if the site moves it).
    pub segment: String,
    pub tally_path: PathBuf,
    pub roster_file: Option<PathBuf>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            game_week: 1,
            threshold: DEFAULT_THRESHOLD,
            mode: FetchMode::EventHistory,
            host: s!(HOST),
            segment: s!(EVENT_HISTORY_SEGMENT),
            tally_path: PathBuf::from(DEFAULT_TALLY_FILE),
            roster_file: None,
        }
    }
}
