// src/error.rs

use std::{io, path::PathBuf};
use thiserror::Error;

/// Everything that can abort a run. Network and extraction failures are
/// fatal before the tally file is ever touched; the tally itself only
/// fails on a present-but-unreadable file.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request to {url} failed: {source}")]
    Net {
        url: String,
        #[source]
        source: io::Error,
    },

    #[error("HTTP error: {status} for {url}")]
    Http { status: String, url: String },

    #[error("malformed HTTP response from {url}")]
    MalformedResponse { url: String },

    /// The page came back but held no score where one was expected.
    /// Page format changed, or the entry id is wrong.
    #[error("no score found for {member} (GW {week})")]
    ScoreExtraction { member: String, week: u32 },

    #[error("{member} has no history row for GW {week} (season has {rows})")]
    WeekOutOfRange {
        member: String,
        week: u32,
        rows: usize,
    },

    #[error("could not read roster file {path}: {source}")]
    RosterRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("bad roster line {line}: {reason}")]
    RosterParse { line: usize, reason: String },

    #[error("could not read {path}: {source}")]
    TallyRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("tally file {path}: {source}")]
    TallyParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not write {path}: {source}")]
    TallyWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
