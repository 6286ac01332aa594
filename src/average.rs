// src/average.rs

/// Outcome of one weekly averaging pass.
#[derive(Clone, Debug, PartialEq)]
pub struct WeeklyAverage {
    /// The team average, with the prune applied if one happened.
    pub value: f64,
    /// The mean over all members, before any pruning.
    pub raw: f64,
    pub pruned: Option<PrunedMember>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PrunedMember {
    pub name: String,
    pub points: i64,
}

/// Team average for the week, single-outlier prune applied.
///
/// One pass only: the lowest scorer is dropped iff their score is at
/// least `threshold` below the raw mean. Ties on the low score resolve
/// to the lexicographically smallest name. A second low outlier is
/// never considered; do not generalize this to iterative pruning.
pub fn pruned_average(scores: &[(String, i64)], total: i64, threshold: f64) -> WeeklyAverage {
    let count = scores.len();
    if count == 0 {
        return WeeklyAverage { value: 0.0, raw: 0.0, pruned: None };
    }
    let raw = total as f64 / count as f64;

    let (mut min_name, mut min_points) = (&scores[0].0, scores[0].1);
    for (name, points) in &scores[1..] {
        if *points < min_points || (*points == min_points && name < min_name) {
            min_name = name;
            min_points = *points;
        }
    }

    // Pruning the only member would leave nothing to average.
    if count > 1 && min_points as f64 <= raw - threshold {
        let value = (total - min_points) as f64 / (count - 1) as f64;
        let pruned = Some(PrunedMember { name: min_name.clone(), points: min_points });
        return WeeklyAverage { value, raw, pruned };
    }

    WeeklyAverage { value: raw, raw, pruned: None }
}
