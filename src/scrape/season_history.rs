// src/scrape/season_history.rs

use crate::{
    config::consts::{OVERALL_POINTS_COL, SEASON_HISTORY_SEGMENT},
    core::{html, net::Client},
    error::ScrapeError,
    roster::Member,
};

use super::ScoreSource;

/// Exhaustive mode: one page per member for the whole season. The
/// history table carries a cumulative overall-points column; per-week
/// scores are the deltas between consecutive rows, and the requested
/// week selects the `(week − 1)`-th delta.
pub struct SeasonHistoryPage {
    client: Client,
}

impl SeasonHistoryPage {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ScoreSource for SeasonHistoryPage {
    fn fetch_score(&self, member: &Member, week: u32) -> Result<i64, ScrapeError> {
        let path = format!("/entry/{}/{}", member.id, SEASON_HISTORY_SEGMENT);
        let doc = self.client.get(&path)?;

        let weekly = weekly_points(&doc).ok_or_else(|| ScrapeError::ScoreExtraction {
            member: member.name.clone(),
            week,
        })?;

        let out_of_range = || ScrapeError::WeekOutOfRange {
            member: member.name.clone(),
            week,
            rows: weekly.len(),
        };
        if week == 0 {
            return Err(out_of_range());
        }
        weekly.get(week as usize - 1).copied().ok_or_else(out_of_range)
    }
}

/// All per-week points from a season page, oldest week first.
/// Split out for unit tests.
///
/// Table shape (per the site): a container with id
/// `ismr-event-history`, an `ism-table` inside it, one row per game
/// week, cumulative overall points in column 6. A row without a
/// numeric overall column means the format changed; fail rather than
/// guess.
pub fn weekly_points(doc: &str) -> Option<Vec<i64>> {
    let lc = html::to_lower(doc);
    let at = lc.find("ismr-event-history")?;

    let table = html::slice_between_ci(&doc[at..], "<table class=\"ism-table", "</table>")?;
    let body = html::slice_between_ci(table, "<tbody", "</tbody>").unwrap_or(table);

    let mut weekly = Vec::new();
    let mut prev_overall = 0i64;
    let mut pos = 0usize;

    while let Some((tr_s, tr_e)) = html::next_tag_block_ci(body, "<tr", "</tr>", pos) {
        let tr = &body[tr_s..tr_e];
        pos = tr_e;

        let cells = html::row_cells(tr);
        let Some(cell) = cells.get(OVERALL_POINTS_COL) else { continue };
        let overall: i64 = cell.parse().ok()?;
        weekly.push(overall - prev_overall);
        prev_overall = overall;
    }

    if weekly.is_empty() { None } else { Some(weekly) }
}
