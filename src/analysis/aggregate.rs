use super::group_stats::{GroupStats, GroupStatsTracker};
use crate::data::Record;
use serde::Serialize;
use tracing::debug;

/// Half-open interval `[min, max)` with a display label. A missing bound
/// is unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bin {
    pub label: &'static str,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl Bin {
    pub fn contains(&self, value: i64) -> bool {
        self.min.map_or(true, |min| min <= value) && self.max.map_or(true, |max| value < max)
    }
}

/// 10-minute gold difference bins, covering every `i64`.
pub const GOLD_BINS: [Bin; 8] = [
    Bin { label: "< -3000", min: None, max: Some(-3000) },
    Bin { label: "-3000 ~ -2000", min: Some(-3000), max: Some(-2000) },
    Bin { label: "-2000 ~ -1000", min: Some(-2000), max: Some(-1000) },
    Bin { label: "-1000 ~ 0", min: Some(-1000), max: Some(0) },
    Bin { label: "0 ~ 1000", min: Some(0), max: Some(1000) },
    Bin { label: "1000 ~ 2000", min: Some(1000), max: Some(2000) },
    Bin { label: "2000 ~ 3000", min: Some(2000), max: Some(3000) },
    Bin { label: "> 3000", min: Some(3000), max: None },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub label: String,
    pub winrate: f64,
    pub count: usize,
}

impl SummaryRow {
    fn from_stats(label: String, stats: GroupStats) -> Self {
        SummaryRow {
            label,
            winrate: stats.win_rate(),
            count: stats.games,
        }
    }
}

pub type IntKey = fn(&Record) -> Option<i64>;
pub type FloatKey = fn(&Record) -> Option<f64>;

/// How records are grouped into summary rows.
#[derive(Clone, Copy)]
pub enum Strategy {
    /// One row per bin in declared order, empty bins included.
    Binned { bins: &'static [Bin], key: IntKey },
    /// One row per distinct value, ascending.
    Exact { key: IntKey },
    /// Values snapped to the nearest multiple of `step`, ascending.
    Rounded { key: FloatKey, step: f64 },
}

pub fn aggregate(records: &[Record], strategy: &Strategy) -> Vec<SummaryRow> {
    let rows = match *strategy {
        Strategy::Binned { bins, key } => aggregate_binned(records, bins, key),
        Strategy::Exact { key } => group_by(records, key),
        Strategy::Rounded { key, step } => {
            group_by(records, |r| key(r).and_then(|v| snap_to_step(v, step)))
        }
    };

    debug!(records = records.len(), groups = rows.len(), "aggregated");
    rows
}

/// Unconditional mean win rate; 0 for an empty dataset.
pub fn overall_winrate(records: &[Record]) -> f64 {
    let mut stats = GroupStats::default();
    for record in records {
        stats.record(record.won);
    }
    stats.win_rate()
}

fn aggregate_binned(records: &[Record], bins: &[Bin], key: IntKey) -> Vec<SummaryRow> {
    let mut stats = vec![GroupStats::default(); bins.len()];

    for record in records {
        let Some(value) = key(record) else {
            continue;
        };
        if let Some(idx) = bins.iter().position(|bin| bin.contains(value)) {
            stats[idx].record(record.won);
        }
    }

    bins.iter()
        .zip(stats)
        .map(|(bin, s)| SummaryRow::from_stats(bin.label.to_string(), s))
        .collect()
}

fn group_by(records: &[Record], key: impl Fn(&Record) -> Option<i64>) -> Vec<SummaryRow> {
    let mut tracker = GroupStatsTracker::new();
    for record in records {
        if let Some(k) = key(record) {
            tracker.add(k, record.won);
        }
    }

    tracker
        .into_sorted()
        .map(|(k, s)| SummaryRow::from_stats(k.to_string(), s))
        .collect()
}

/// Rounds half up, so 25 snaps to 50 with a step of 50. Results outside
/// the `i64` range have no key.
fn snap_to_step(value: f64, step: f64) -> Option<i64> {
    let snapped = (value / step + 0.5).floor() * step;
    (snapped >= i64::MIN as f64 && snapped < i64::MAX as f64).then_some(snapped as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(gold: Option<i64>, won: bool) -> Record {
        Record {
            gold_diff_10: gold,
            kills_diff_10: None,
            dragons: None,
            barons: None,
            towers: None,
            vision_score: None,
            won,
        }
    }

    fn gold_strategy() -> Strategy {
        Strategy::Binned {
            bins: &GOLD_BINS,
            key: |r| r.gold_diff_10,
        }
    }

    #[test]
    fn binned_example_from_three_records() {
        let records = vec![
            record(Some(-3500), false),
            record(Some(500), true),
            record(Some(500), true),
        ];
        let rows = aggregate(&records, &gold_strategy());

        assert_eq!(rows.len(), 8);
        for row in &rows {
            match row.label.as_str() {
                "< -3000" => {
                    assert_eq!(row.count, 1);
                    assert_eq!(row.winrate, 0.0);
                }
                "0 ~ 1000" => {
                    assert_eq!(row.count, 2);
                    assert_eq!(row.winrate, 1.0);
                }
                _ => {
                    assert_eq!(row.count, 0);
                    assert_eq!(row.winrate, 0.0);
                }
            }
        }
    }

    #[test]
    fn binned_on_empty_input_keeps_all_bins_in_order() {
        let rows = aggregate(&[], &gold_strategy());
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        let expected: Vec<&str> = GOLD_BINS.iter().map(|b| b.label).collect();
        assert_eq!(labels, expected);
        assert!(rows.iter().all(|r| r.count == 0 && r.winrate == 0.0));
    }

    #[test]
    fn bin_edges_are_half_open() {
        let records = vec![
            record(Some(-3000), true),
            record(Some(0), true),
            record(Some(3000), true),
            record(Some(-1), false),
        ];
        let rows = aggregate(&records, &gold_strategy());
        assert_eq!(rows[1].count, 1); // -3000 ~ -2000
        assert_eq!(rows[3].count, 1); // -1000 ~ 0
        assert_eq!(rows[4].count, 1); // 0 ~ 1000
        assert_eq!(rows[7].count, 1); // > 3000
    }

    #[test]
    fn extreme_gold_values_land_in_outer_bins() {
        let records = vec![record(Some(-25_000), false), record(Some(40_000), true)];
        let rows = aggregate(&records, &gold_strategy());
        assert_eq!(rows[0].count, 1);
        assert_eq!(rows[7].count, 1);
    }

    #[test]
    fn integer_extremes_land_in_outer_bins() {
        let records = vec![record(Some(i64::MIN), false), record(Some(i64::MAX), true)];
        let rows = aggregate(&records, &gold_strategy());
        assert_eq!(rows[0].count, 1);
        assert_eq!(rows[7].count, 1);
        assert_eq!(rows[7].winrate, 1.0);
    }

    #[test]
    fn every_gold_value_falls_in_exactly_one_bin() {
        for value in [i64::MIN, -3001, -3000, -1, 0, 999, 1000, 2999, 3000, i64::MAX] {
            let hits = GOLD_BINS.iter().filter(|bin| bin.contains(value)).count();
            assert_eq!(hits, 1, "gold {value}");
        }
    }

    #[test]
    fn binned_skips_absent_values() {
        let records = vec![record(None, true), record(Some(100), false)];
        let rows = aggregate(&records, &gold_strategy());
        let total: usize = rows.iter().map(|r| r.count).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn exact_grouping_sorts_numerically_and_skips_absent() {
        let mut records = Vec::new();
        for (dragons, won) in [(Some(10), true), (Some(2), false), (None, true), (Some(2), true)] {
            let mut r = record(None, won);
            r.dragons = dragons;
            records.push(r);
        }
        let rows = aggregate(
            &records,
            &Strategy::Exact {
                key: |r| r.dragons.map(i64::from),
            },
        );

        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["2", "10"]);
        assert_eq!(rows[0].count, 2);
        assert!((rows[0].winrate - 0.5).abs() < 1e-12);
        assert_eq!(rows[1].winrate, 1.0);
    }

    #[test]
    fn exact_grouping_handles_negative_keys() {
        let mut records = Vec::new();
        for kills in [-3, 2, -10, 0] {
            let mut r = record(None, kills > 0);
            r.kills_diff_10 = Some(kills);
            records.push(r);
        }
        let rows = aggregate(&records, &Strategy::Exact { key: |r| r.kills_diff_10 });
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["-10", "-3", "0", "2"]);
    }

    #[test]
    fn rounded_grouping_snaps_to_nearest_fifty() {
        let mut records = Vec::new();
        for vision in [Some(24.9), Some(25.0), Some(74.0), Some(126.0), None] {
            let mut r = record(None, true);
            r.vision_score = vision;
            records.push(r);
        }
        let rows = aggregate(
            &records,
            &Strategy::Rounded {
                key: |r| r.vision_score,
                step: 50.0,
            },
        );

        let summary: Vec<(&str, usize)> = rows.iter().map(|r| (r.label.as_str(), r.count)).collect();
        assert_eq!(summary, vec![("0", 1), ("50", 2), ("150", 1)]);
    }

    #[test]
    fn rounded_grouping_skips_values_beyond_integer_range() {
        let mut records = Vec::new();
        for vision in [1e300, 2e300, 60.0] {
            let mut r = record(None, true);
            r.vision_score = Some(vision);
            records.push(r);
        }
        let rows = aggregate(
            &records,
            &Strategy::Rounded {
                key: |r| r.vision_score,
                step: 50.0,
            },
        );

        let summary: Vec<(&str, usize)> = rows.iter().map(|r| (r.label.as_str(), r.count)).collect();
        assert_eq!(summary, vec![("50", 1)]);
    }

    #[test]
    fn winrate_matches_win_fraction_for_every_group() {
        let mut records = Vec::new();
        for (i, towers) in [1u32, 1, 1, 4, 4, 7].into_iter().enumerate() {
            let mut r = record(None, i % 2 == 0);
            r.towers = Some(towers);
            records.push(r);
        }
        let rows = aggregate(
            &records,
            &Strategy::Exact {
                key: |r| r.towers.map(i64::from),
            },
        );

        for row in rows {
            let key: u32 = row.label.parse().unwrap();
            let group: Vec<&Record> = records.iter().filter(|r| r.towers == Some(key)).collect();
            let wins = group.iter().filter(|r| r.won).count();
            assert_eq!(row.count, group.len());
            assert!((row.winrate - wins as f64 / group.len() as f64).abs() < 1e-12);
            assert!((0.0..=1.0).contains(&row.winrate));
        }
    }

    #[test]
    fn overall_winrate_is_plain_mean() {
        assert_eq!(overall_winrate(&[]), 0.0);
        let records = vec![
            record(None, true),
            record(Some(1), false),
            record(Some(2), true),
            record(None, true),
        ];
        assert!((overall_winrate(&records) - 0.75).abs() < 1e-12);
    }
}
