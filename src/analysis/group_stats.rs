use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroupStats {
    pub games: usize,
    pub wins: usize,
}

impl GroupStats {
    pub fn record(&mut self, won: bool) {
        self.games += 1;
        if won {
            self.wins += 1;
        }
    }

    /// Empty groups report 0 so they draw as a zero-height bar.
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

/// Accumulates results per integer key, iterated in ascending key order.
#[derive(Debug, Default)]
pub struct GroupStatsTracker {
    stats: BTreeMap<i64, GroupStats>,
}

impl GroupStatsTracker {
    pub fn new() -> Self {
        GroupStatsTracker {
            stats: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, key: i64, won: bool) {
        self.stats.entry(key).or_default().record(won);
    }

    pub fn into_sorted(self) -> impl Iterator<Item = (i64, GroupStats)> {
        self.stats.into_iter()
    }
}
