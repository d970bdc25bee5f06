//! Per-opponent, per-strategy shot outcome ledger.
//!
//! The table lives as long as the controller does: it is never reset by a
//! tick or a round boundary, so what was learned about a named opponent
//! carries over when it respawns.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use skirmish_core::enums::Strategy;

/// Shot counts for one (opponent, strategy) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyRecord {
    pub fired: u32,
    pub hit: u32,
}

impl StrategyRecord {
    pub fn new(fired: u32, hit: u32) -> Self {
        Self { fired, hit }
    }

    /// Hit percentage; 0 when nothing has been fired.
    pub fn accuracy(&self) -> f64 {
        if self.fired == 0 {
            0.0
        } else {
            self.hit as f64 / self.fired as f64 * 100.0
        }
    }
}

/// Records for every strategy used against one opponent.
pub type OpponentRecords = BTreeMap<Strategy, StrategyRecord>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrategyStatistics {
    records: BTreeMap<String, OpponentRecords>,
}

impl StrategyStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records for an opponent, or `None` on first encounter.
    pub fn opponent(&self, identity: &str) -> Option<&OpponentRecords> {
        self.records.get(identity)
    }

    /// Record for one pair; zero when absent.
    pub fn record(&self, identity: &str, strategy: Strategy) -> StrategyRecord {
        self.records
            .get(identity)
            .and_then(|r| r.get(&strategy))
            .copied()
            .unwrap_or_default()
    }

    /// Overwrite one record. Used to seed a table, e.g. from a previous match.
    pub fn insert(&mut self, identity: &str, strategy: Strategy, record: StrategyRecord) {
        self.records
            .entry(identity.to_owned())
            .or_default()
            .insert(strategy, record);
    }

    /// Count an attempt. The first shot at an opponent opens a record for every strategy.
    pub fn record_fired(&mut self, identity: &str, strategy: Strategy) {
        let records = self.records.entry(identity.to_owned()).or_insert_with(|| {
            Strategy::ALL
                .iter()
                .map(|s| (*s, StrategyRecord::default()))
                .collect()
        });
        records.entry(strategy).or_default().fired += 1;
    }

    pub fn record_hit(&mut self, identity: &str, strategy: Strategy) {
        self.records
            .entry(identity.to_owned())
            .or_default()
            .entry(strategy)
            .or_default()
            .hit += 1;
    }

    /// Accuracy of the best strategy against an opponent; 0 with no record.
    pub fn best_accuracy(&self, identity: &str) -> f64 {
        self.opponent(identity)
            .map(|records| {
                records
                    .values()
                    .map(StrategyRecord::accuracy)
                    .fold(0.0, f64::max)
            })
            .unwrap_or(0.0)
    }

    /// True while every strategy has fewer than `min_shots` shots against the opponent.
    pub fn is_undiscovered(&self, identity: &str, min_shots: u32) -> bool {
        Strategy::ALL
            .iter()
            .all(|s| self.record(identity, *s).fired < min_shots)
    }

    pub fn total_fired(&self) -> u32 {
        self.records
            .values()
            .flat_map(|r| r.values())
            .map(|r| r.fired)
            .sum()
    }

    pub fn total_hit(&self) -> u32 {
        self.records
            .values()
            .flat_map(|r| r.values())
            .map(|r| r.hit)
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &OpponentRecords)> {
        self.records.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_zero_when_nothing_fired() {
        assert_eq!(StrategyRecord::default().accuracy(), 0.0);
        assert_eq!(StrategyRecord::new(0, 0).accuracy(), 0.0);
    }

    #[test]
    fn test_accuracy_percentage() {
        assert!((StrategyRecord::new(4, 1).accuracy() - 25.0).abs() < 1e-9);
        assert!((StrategyRecord::new(15, 5).accuracy() - 100.0 / 3.0).abs() < 1e-9);
        assert!((StrategyRecord::new(11, 2).accuracy() - 18.181818).abs() < 1e-4);
    }

    #[test]
    fn test_first_fire_opens_every_strategy() {
        let mut stats = StrategyStatistics::new();
        stats.record_fired("a", Strategy::LeadPrediction);
        let records = stats.opponent("a").unwrap();
        assert_eq!(records.len(), Strategy::ALL.len());
        assert_eq!(records[&Strategy::HeadOn], StrategyRecord::new(0, 0));
        assert_eq!(records[&Strategy::LeadPrediction], StrategyRecord::new(1, 0));
    }

    #[test]
    fn test_best_accuracy_and_discovery() {
        let mut stats = StrategyStatistics::new();
        assert_eq!(stats.best_accuracy("a"), 0.0);
        assert!(stats.is_undiscovered("a", 10));

        stats.insert("a", Strategy::HeadOn, StrategyRecord::new(12, 3));
        stats.insert("a", Strategy::LeadPrediction, StrategyRecord::new(4, 2));
        assert!((stats.best_accuracy("a") - 50.0).abs() < 1e-9);
        assert!(!stats.is_undiscovered("a", 10));
        assert_eq!(stats.total_fired(), 16);
        assert_eq!(stats.total_hit(), 5);
    }

    #[test]
    fn test_serializes_as_nested_table() {
        let mut stats = StrategyStatistics::new();
        stats.insert("a", Strategy::HeadOn, StrategyRecord::new(3, 1));
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"a":{"HeadOn":{"fired":3,"hit":1}}}"#);
    }
}
