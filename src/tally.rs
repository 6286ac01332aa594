// src/tally.rs

use std::{collections::BTreeMap, fs, io, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::ScrapeError;

/// Running championship totals, keyed by team label. Lives on disk as
/// a flat JSON object (`{"#teamABS":1234.5,…}`), read at run start and
/// overwritten whole at run end.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tally {
    totals: BTreeMap<String, f64>,
}

impl Tally {
    /// A missing file is the uninitialized case: empty tally, all
    /// totals zero. A file that exists but doesn't parse is fatal.
    pub fn load(path: &Path) -> Result<Self, ScrapeError> {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ScrapeError::TallyRead { path: path.to_path_buf(), source });
            }
        };
        serde_json::from_str(&text)
            .map_err(|source| ScrapeError::TallyParse { path: path.to_path_buf(), source })
    }

    /// Add one week's average to a team's total; an absent key counts
    /// from 0.0. Returns the new total.
    pub fn add(&mut self, label: &str, average: f64) -> f64 {
        let total = self.totals.entry(s!(label)).or_insert(0.0);
        *total += average;
        *total
    }

    pub fn get(&self, label: &str) -> f64 {
        self.totals.get(label).copied().unwrap_or(0.0)
    }

    /// Full overwrite, compact JSON — the same shape the tracker file
    /// has always had.
    pub fn store(&self, path: &Path) -> Result<(), ScrapeError> {
        let text = serde_json::to_string(&self.totals)
            .map_err(|source| ScrapeError::TallyParse { path: path.to_path_buf(), source })?;
        fs::write(path, text)
            .map_err(|source| ScrapeError::TallyWrite { path: path.to_path_buf(), source })
    }
}
