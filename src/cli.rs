// src/cli.rs

use std::{
    env,
    io::{self, Write},
    path::PathBuf,
};

use color_eyre::eyre::{bail, eyre, Result};

use crate::{
    config::options::{FetchMode, RunOptions},
    progress::Progress,
    roster, runner,
};

pub fn run() -> Result<()> {
    let Some(opts) = parse_args(env::args().skip(1))? else {
        return Ok(()); // help printed
    };
    let teams = roster::load(opts.roster_file.as_deref())?;
    logf!("GW{} run: {} teams, threshold {}", opts.game_week, teams.len(), opts.threshold);

    runner::run(&opts, &teams, &mut Console)?;
    Ok(())
}

/// Parse the arg list; `None` means help was requested and printed.
fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Option<RunOptions>> {
    let mut opts = RunOptions::default();
    let mut week: Option<u32> = None;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-w" | "--week" => {
                let v: u32 = args.next().ok_or_else(|| eyre!("Missing game week"))?.parse()?;
                if v == 0 { bail!("Game weeks start at 1"); }
                week = Some(v); }
            "--threshold" => {
                let v: f64 = args.next().ok_or_else(|| eyre!("Missing threshold"))?.parse()?;
                if v.is_nan() || v < 0.0 { bail!("Threshold must be >= 0"); }
                opts.threshold = v; }
            "--mode" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --mode"))?;
                opts.mode = match v.to_ascii_lowercase().as_str() {
                    "event" => FetchMode::EventHistory,
                    "season" => FetchMode::SeasonHistory,
                    other => bail!("Unknown mode: {}", other),
                };}
            "-f" | "--tally" => {
                opts.tally_path = PathBuf::from(args.next().ok_or_else(|| eyre!("Missing tally path"))?); }
            "--rosters" => {
                opts.roster_file = Some(PathBuf::from(args.next().ok_or_else(|| eyre!("Missing roster path"))?)); }
            "--host" => {
                opts.host = args.next().ok_or_else(|| eyre!("Missing host"))?; }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                return Ok(None);
            }
            _ => bail!("Unknown arg: {}", a),
        }
    }

    let Some(w) = week else { bail!("Specify the game week: -w <n>") };
    opts.game_week = w;
    Ok(Some(opts))
}

/// Stdout transcript, line for line what the old tracker printed.
struct Console;

impl Progress for Console {
    fn team_start(&mut self, label: &str) {
        println!("\nRetrieving data for {label}:");
    }
    fn member_start(&mut self, name: &str) {
        print!("Extracting points for {name}... ");
        let _ = io::stdout().flush();
    }
    fn member_score(&mut self, points: i64) {
        println!("{points}");
    }
    fn averaging_start(&mut self, label: &str) {
        println!("\nCalculating average for {label}:");
    }
    fn note(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn team_average(&mut self, label: &str, average: f64) {
        println!("{label} average this week: {average}");
    }
    fn totals(&mut self, totals: &[(String, f64)]) {
        println!("\nChampionship Details:");
        for (label, total) in totals {
            println!("{label} championship total: {total}");
        }
    }
}
