// src/scrape/mod.rs

mod event_history;
mod season_history;

pub use event_history::{extract_score, EventHistoryPage};
pub use season_history::{weekly_points, SeasonHistoryPage};

use crate::{error::ScrapeError, progress::Progress, roster::{Member, Team}};

/// Narrow seam around the brittle page parsing. Real sources issue one
/// HTTP GET per call against an uncontrolled third-party page; tests
/// substitute a table of canned scores.
pub trait ScoreSource {
    fn fetch_score(&self, member: &Member, week: u32) -> Result<i64, ScrapeError>;
}

/// Per-member scores for one team, in roster order, plus their sum.
#[derive(Debug)]
pub struct ScoreSet {
    pub scores: Vec<(String, i64)>,
    pub total: i64,
}

/// Fetch exactly one score per roster member, in roster order. Any
/// failure aborts the batch; there are no partial score sets.
pub fn collect_scores(
    team: &Team,
    week: u32,
    source: &dyn ScoreSource,
    progress: &mut dyn Progress,
) -> Result<ScoreSet, ScrapeError> {
    let mut scores = Vec::with_capacity(team.members.len());
    let mut total = 0i64;

    for member in &team.members {
        progress.member_start(&member.name);
        let points = source.fetch_score(member, week)?;
        progress.member_score(points);
        logd!("{}: GW{} -> {}", member.name, week, points);
        scores.push((member.name.clone(), points));
        total += points;
    }

    Ok(ScoreSet { scores, total })
}
