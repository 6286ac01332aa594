// src/progress.rs

/// Observable run output. The CLI feeds the original tool's stdout
/// transcript through this; library callers can pass NullProgress.
pub trait Progress {
    /// A team's fetch batch is starting.
    fn team_start(&mut self, _label: &str) {}

    /// About to request one member's page.
    fn member_start(&mut self, _name: &str) {}

    /// That member's score came back.
    fn member_score(&mut self, _points: i64) {}

    /// Averaging is starting for a team.
    fn averaging_start(&mut self, _label: &str) {}

    /// Warnings and pruning notices, free-form.
    fn note(&mut self, _msg: &str) {}

    /// Final (possibly pruned) weekly average for a team.
    fn team_average(&mut self, _label: &str, _average: f64) {}

    /// Championship totals after the tally update.
    fn totals(&mut self, _totals: &[(String, f64)]) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
