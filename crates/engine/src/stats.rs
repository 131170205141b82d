//! Hit/miss statistics aggregation.

use crate::cache::AccessKind;

/// Running hit/miss counts for one simulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessStats {
    /// Accesses satisfied by a resident line.
    pub hits: u64,
    /// Accesses that populated or replaced a line.
    pub misses: u64,
}

impl AccessStats {
    /// Records one access outcome.
    pub fn record(&mut self, outcome: AccessKind) {
        match outcome {
            AccessKind::Hit => self.hits += 1,
            AccessKind::Miss => self.misses += 1,
        }
    }

    /// Total number of recorded accesses.
    pub fn total(&self) -> u64 {
        self.hits + self.misses
    }

    /// Hit ratio as a percentage; `0.0` for an empty run.
    pub fn hit_ratio_percent(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            100.0 * self.hits as f64 / self.total() as f64
        }
    }
}
