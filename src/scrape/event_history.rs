// src/scrape/event_history.rs

use crate::{core::{html, net::Client}, error::ScrapeError, roster::Member};

use super::ScoreSource;

/// Single-shot mode: one page per member per week. The score is the
/// text of the page's self-referencing history link:
///
///   <a href="/entry/{id}/event-history/{week}/">57</a></dd>
///
/// The trailing `</dd>` is part of the match — the same href shows up
/// again in page navigation without a score in it.
pub struct EventHistoryPage {
    client: Client,
    segment: String,
}

impl EventHistoryPage {
    pub fn new(client: Client, segment: &str) -> Self {
        Self { client, segment: s!(segment) }
    }

    fn path(&self, member: &Member, week: u32) -> String {
        format!("/entry/{}/{}/{}/", member.id, self.segment, week)
    }
}

impl ScoreSource for EventHistoryPage {
    fn fetch_score(&self, member: &Member, week: u32) -> Result<i64, ScrapeError> {
        let path = self.path(member, week);
        let doc = self.client.get(&path)?;
        extract_score(&doc, &path).ok_or_else(|| ScrapeError::ScoreExtraction {
            member: member.name.clone(),
            week,
        })
    }
}

/// Split out for unit tests and the bench.
///
/// The same href can occur several times in a page (navigation, the
/// score link). Only an anchor whose own `</a>` is immediately
/// followed by `</dd>` carries the score.
pub fn extract_score(doc: &str, path: &str) -> Option<i64> {
    let lc = html::to_lower(doc);
    let open = html::to_lower(&join!("<a href=\"", path, "\">"));

    let mut from = 0usize;
    while let Some(rel) = lc[from..].find(&open) {
        let start = from + rel + open.len();
        let Some(end_rel) = lc[start..].find("</a>") else { break };
        let end = start + end_rel;
        if lc[end..].starts_with("</a></dd>") {
            return html::strip_tags(&doc[start..end]).parse().ok();
        }
        from = end + "</a>".len();
    }
    None
}
