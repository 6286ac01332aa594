// tests/run_e2e.rs
//
// Full pipeline over a canned score source: fetch → prune → average →
// accumulate → persist, with the network swapped out at the
// ScoreSource seam.

use std::fs;
use std::path::PathBuf;

use fpl_tally::config::options::RunOptions;
use fpl_tally::error::ScrapeError;
use fpl_tally::progress::{NullProgress, Progress};
use fpl_tally::roster::{Member, Team};
use fpl_tally::runner;
use fpl_tally::scrape::ScoreSource;
use fpl_tally::tally::Tally;

fn tmp_tally(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("fpl_e2e_{}.json", name));
    let _ = fs::remove_file(&p);
    p
}

fn opts(tally: PathBuf) -> RunOptions {
    RunOptions {
        game_week: 20,
        threshold: 5.0,
        tally_path: tally,
        ..RunOptions::default()
    }
}

fn team(label: &str, members: &[(&str, i64)]) -> Team {
    Team {
        label: label.to_string(),
        members: members
            .iter()
            .enumerate()
            .map(|(i, (n, _))| Member::new(n, &format!("{}", 1000 + i)))
            .collect(),
    }
}

/// Scores by member name; names absent from the table error the same
/// way a changed page would.
struct Canned(Vec<(String, i64)>);

impl Canned {
    fn of(members: &[(&str, i64)]) -> Self {
        Canned(members.iter().map(|(n, p)| (n.to_string(), *p)).collect())
    }
}

impl ScoreSource for Canned {
    fn fetch_score(&self, member: &Member, week: u32) -> Result<i64, ScrapeError> {
        self.0
            .iter()
            .find(|(n, _)| *n == member.name)
            .map(|(_, p)| *p)
            .ok_or(ScrapeError::ScoreExtraction { member: member.name.clone(), week })
    }
}

#[test]
fn run_prunes_averages_and_persists() {
    let tally_path = tmp_tally("basic");
    let opts = opts(tally_path.clone());

    // raw 15.5, D pruned → 20; raw 15, nobody near the margin → 15.
    let abs = [("A", 10), ("B", 20), ("C", 30), ("D", 2)];
    let sam = [("P", 15), ("Q", 14), ("R", 16), ("S", 15)];
    let teams = vec![team("#teamABS", &abs), team("#teamSam", &sam)];
    let all: Vec<(&str, i64)> = abs.iter().chain(&sam).copied().collect();

    let summary = runner::run_with(
        &opts,
        &teams,
        || Box::new(Canned::of(&all)),
        &mut NullProgress,
    )
    .unwrap();

    assert_eq!(summary.averages, vec![
        ("#teamABS".to_string(), 20.0),
        ("#teamSam".to_string(), 15.0),
    ]);
    assert_eq!(summary.totals[0], ("#teamABS".to_string(), 20.0));

    let stored = Tally::load(&tally_path).unwrap();
    assert_eq!(stored.get("#teamABS"), 20.0);
    assert_eq!(stored.get("#teamSam"), 15.0);
    let _ = fs::remove_file(&tally_path);
}

#[test]
fn each_run_accumulates_exactly_once() {
    let tally_path = tmp_tally("idempotence");
    let opts = opts(tally_path.clone());

    let members = [("A", 10), ("B", 20)];
    let teams = vec![team("#teamABS", &members)];

    for expected_total in [15.0, 30.0, 45.0] {
        let summary = runner::run_with(
            &opts,
            &teams,
            || Box::new(Canned::of(&members)),
            &mut NullProgress,
        )
        .unwrap();
        assert_eq!(summary.totals, vec![("#teamABS".to_string(), expected_total)]);
    }

    let stored = Tally::load(&tally_path).unwrap();
    assert_eq!(stored.get("#teamABS"), 45.0);
    let _ = fs::remove_file(&tally_path);
}

#[test]
fn failed_fetch_leaves_tally_untouched() {
    let tally_path = tmp_tally("no_partial");
    fs::write(&tally_path, r##"{"#teamABS":100.0,"#teamSam":90.0}"##).unwrap();
    let opts = opts(tally_path.clone());

    // Second team has a member the source doesn't know.
    let teams = vec![
        team("#teamABS", &[("A", 10), ("B", 20)]),
        team("#teamSam", &[("Ghost", 0)]),
    ];

    let err = runner::run_with(
        &opts,
        &teams,
        || Box::new(Canned::of(&[("A", 10), ("B", 20)])),
        &mut NullProgress,
    )
    .unwrap_err();
    assert!(err.to_string().contains("Ghost"));

    let stored = fs::read_to_string(&tally_path).unwrap();
    assert_eq!(stored, r##"{"#teamABS":100.0,"#teamSam":90.0}"##);
    let _ = fs::remove_file(&tally_path);
}

#[test]
fn empty_team_scores_zero_without_error() {
    let tally_path = tmp_tally("empty_team");
    let opts = opts(tally_path.clone());

    let teams = vec![Team { label: "#teamABS".to_string(), members: Vec::new() }];
    let summary = runner::run_with(
        &opts,
        &teams,
        || Box::new(Canned::of(&[])),
        &mut NullProgress,
    )
    .unwrap();

    assert_eq!(summary.averages, vec![("#teamABS".to_string(), 0.0)]);
    let _ = fs::remove_file(&tally_path);
}

/// Records the progress callbacks in order.
#[derive(Default)]
struct Transcript(Vec<String>);

impl Progress for Transcript {
    fn team_start(&mut self, label: &str) {
        self.0.push(format!("team {label}"));
    }
    fn member_start(&mut self, name: &str) {
        self.0.push(format!("fetch {name}"));
    }
    fn member_score(&mut self, points: i64) {
        self.0.push(format!("score {points}"));
    }
    fn averaging_start(&mut self, label: &str) {
        self.0.push(format!("avg {label}"));
    }
    fn note(&mut self, msg: &str) {
        self.0.push(format!("note {msg}"));
    }
    fn team_average(&mut self, label: &str, average: f64) {
        self.0.push(format!("avg {label} = {average}"));
    }
    fn totals(&mut self, totals: &[(String, f64)]) {
        self.0.push(format!("totals {}", totals.len()));
    }
}

#[test]
fn progress_follows_the_original_transcript_order() {
    let tally_path = tmp_tally("transcript");
    let opts = opts(tally_path.clone());

    let members = [("A", 10), ("B", 20), ("C", 30), ("D", 2)];
    let teams = vec![team("#teamABS", &members)];

    let mut transcript = Transcript::default();
    runner::run_with(
        &opts,
        &teams,
        || Box::new(Canned::of(&members)),
        &mut transcript,
    )
    .unwrap();

    assert_eq!(transcript.0, vec![
        "team #teamABS",
        "fetch A", "score 10",
        "fetch B", "score 20",
        "fetch C", "score 30",
        "fetch D", "score 2",
        "avg #teamABS",
        "note D's points were pruned out. Points: 2 Average: 15.5 Threshold: 5",
        "avg #teamABS = 20",
        "totals 1",
    ]);
    let _ = fs::remove_file(&tally_path);
}
