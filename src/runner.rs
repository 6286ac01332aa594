// src/runner.rs

use crate::{
    average::{self, WeeklyAverage},
    config::options::{FetchMode, RunOptions},
    core::net::Client,
    error::ScrapeError,
    progress::Progress,
    roster::Team,
    scrape::{self, EventHistoryPage, ScoreSet, ScoreSource, SeasonHistoryPage},
    tally::Tally,
};

/// What one run produced, for callers and tests.
#[derive(Debug)]
pub struct RunSummary {
    /// (team label, weekly pruned average), in team order.
    pub averages: Vec<(String, f64)>,
    /// (team label, championship total after this run), in team order.
    pub totals: Vec<(String, f64)>,
}

/// One full batch: fetch every roster, average, accumulate, persist.
pub fn run(
    opts: &RunOptions,
    teams: &[Team],
    progress: &mut dyn Progress,
) -> Result<RunSummary, ScrapeError> {
    run_with(opts, teams, || live_source(opts), progress)
}

/// Like `run`, with the page source injected. `make_source` is called
/// once per team, so the network handle stays scoped to one team's
/// batch of requests.
pub fn run_with<F>(
    opts: &RunOptions,
    teams: &[Team],
    mut make_source: F,
    progress: &mut dyn Progress,
) -> Result<RunSummary, ScrapeError>
where
    F: FnMut() -> Box<dyn ScoreSource>,
{
    // Fetch everything first. The tally file is only touched once
    // every request has succeeded, so a failed run never half-updates.
    let mut sets = Vec::with_capacity(teams.len());
    for team in teams {
        progress.team_start(&team.label);
        let source = make_source();
        let set = scrape::collect_scores(team, opts.game_week, source.as_ref(), progress)?;
        logf!("{}: {} scores, total {}", team.label, set.scores.len(), set.total);
        sets.push(set);
    }

    let mut averages = Vec::with_capacity(teams.len());
    for (team, set) in teams.iter().zip(&sets) {
        let value = weekly_average(&team.label, set, opts.threshold, progress);
        averages.push((team.label.clone(), value));
    }

    let totals = accumulate(opts, &averages)?;
    progress.totals(&totals);

    Ok(RunSummary { averages, totals })
}

fn live_source(opts: &RunOptions) -> Box<dyn ScoreSource> {
    let client = Client::new(&opts.host);
    match opts.mode {
        FetchMode::EventHistory => Box::new(EventHistoryPage::new(client, &opts.segment)),
        FetchMode::SeasonHistory => Box::new(SeasonHistoryPage::new(client)),
    }
}

fn weekly_average(
    label: &str,
    set: &ScoreSet,
    threshold: f64,
    progress: &mut dyn Progress,
) -> f64 {
    progress.averaging_start(label);
    if set.scores.is_empty() {
        progress.note("No members in team!");
        loge!("{}: empty roster, average 0", label);
    }

    let WeeklyAverage { value, raw, pruned } =
        average::pruned_average(&set.scores, set.total, threshold);

    if let Some(p) = pruned {
        progress.note(&format!(
            "{}'s points were pruned out. Points: {} Average: {} Threshold: {}",
            p.name, p.points, raw, threshold
        ));
        logf!("{}: pruned {} ({} pts, raw avg {})", label, p.name, p.points, raw);
    }

    progress.team_average(label, value);
    value
}

fn accumulate(opts: &RunOptions, averages: &[(String, f64)]) -> Result<Vec<(String, f64)>, ScrapeError> {
    let mut tally = Tally::load(&opts.tally_path)?;

    let mut totals = Vec::with_capacity(averages.len());
    for (label, average) in averages {
        let total = tally.add(label, *average);
        totals.push((label.clone(), total));
    }

    tally.store(&opts.tally_path)?;
    logf!("Tally updated: {}", opts.tally_path.display());
    Ok(totals)
}
