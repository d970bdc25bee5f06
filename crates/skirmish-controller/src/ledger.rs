//! Correlates projectiles in flight with the (opponent, strategy) that fired them.

use std::collections::BTreeMap;

use log::trace;

use skirmish_ai::stats::StrategyStatistics;
use skirmish_core::enums::Strategy;
use skirmish_core::events::ProjectileId;

/// Who a projectile was aimed at, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingShot {
    pub target: String,
    pub strategy: Strategy,
}

/// Projectiles awaiting an outcome. Each id resolves at most once.
#[derive(Debug, Clone, Default)]
pub struct ShotLedger {
    pending: BTreeMap<ProjectileId, PendingShot>,
}

impl ShotLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a projectile and count the attempt against its strategy.
    pub fn register(
        &mut self,
        id: ProjectileId,
        target: &str,
        strategy: Strategy,
        stats: &mut StrategyStatistics,
    ) {
        stats.record_fired(target, strategy);
        self.pending.insert(
            id,
            PendingShot {
                target: target.to_owned(),
                strategy,
            },
        );
    }

    /// Resolve a hit. Credits the strategy only when the victim is the
    /// opponent the shot was aimed at. Returns whether a hit was credited.
    pub fn on_hit(&mut self, id: ProjectileId, victim: &str, stats: &mut StrategyStatistics) -> bool {
        let Some(shot) = self.pending.remove(&id) else {
            trace!("hit by unknown projectile {id:?}");
            return false;
        };
        if shot.target != victim {
            trace!("projectile {id:?} aimed at {} struck {victim}", shot.target);
            return false;
        }
        stats.record_hit(&shot.target, shot.strategy);
        true
    }

    pub fn on_miss(&mut self, id: ProjectileId) -> Option<PendingShot> {
        self.pending.remove(&id)
    }

    pub fn on_collision(&mut self, id: ProjectileId) -> Option<PendingShot> {
        self.pending.remove(&id)
    }

    pub fn pending(&self) -> &BTreeMap<ProjectileId, PendingShot> {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop unresolved shots. Their fired counts stand.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire(ledger: &mut ShotLedger, stats: &mut StrategyStatistics, id: u64, target: &str) {
        ledger.register(ProjectileId(id), target, Strategy::HeadOn, stats);
    }

    #[test]
    fn test_register_counts_fired_immediately() {
        let mut ledger = ShotLedger::new();
        let mut stats = StrategyStatistics::new();
        fire(&mut ledger, &mut stats, 1, "a");
        assert_eq!(stats.record("a", Strategy::HeadOn).fired, 1);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_hit_on_intended_victim_credits_once() {
        let mut ledger = ShotLedger::new();
        let mut stats = StrategyStatistics::new();
        fire(&mut ledger, &mut stats, 1, "a");
        assert!(ledger.on_hit(ProjectileId(1), "a", &mut stats));
        assert!(!ledger.on_hit(ProjectileId(1), "a", &mut stats));
        assert_eq!(stats.record("a", Strategy::HeadOn).hit, 1);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_hit_on_bystander_is_discarded() {
        let mut ledger = ShotLedger::new();
        let mut stats = StrategyStatistics::new();
        fire(&mut ledger, &mut stats, 1, "a");
        assert!(!ledger.on_hit(ProjectileId(1), "b", &mut stats));
        assert_eq!(stats.record("a", Strategy::HeadOn).hit, 0);
        assert_eq!(stats.record("b", Strategy::HeadOn).hit, 0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_outcomes_are_terminal_and_exclusive() {
        let mut ledger = ShotLedger::new();
        let mut stats = StrategyStatistics::new();
        fire(&mut ledger, &mut stats, 1, "a");
        fire(&mut ledger, &mut stats, 2, "a");
        assert!(ledger.on_miss(ProjectileId(1)).is_some());
        assert!(ledger.on_collision(ProjectileId(1)).is_none());
        assert!(!ledger.on_hit(ProjectileId(1), "a", &mut stats));
        assert!(ledger.on_collision(ProjectileId(2)).is_some());
        assert!(ledger.on_miss(ProjectileId(2)).is_none());
        assert_eq!(stats.record("a", Strategy::HeadOn), skirmish_ai::stats::StrategyRecord::new(2, 0));
    }

    #[test]
    fn test_pending_equals_fired_minus_resolved() {
        let mut ledger = ShotLedger::new();
        let mut stats = StrategyStatistics::new();
        for id in 0..12 {
            fire(&mut ledger, &mut stats, id, "a");
        }
        let mut resolved = 0;
        let mut hits = 0;
        for id in 0..12 {
            match id % 4 {
                0 => {
                    if ledger.on_hit(ProjectileId(id), "a", &mut stats) {
                        hits += 1;
                    }
                }
                1 => {
                    ledger.on_miss(ProjectileId(id));
                }
                2 => {
                    ledger.on_collision(ProjectileId(id));
                }
                _ => continue,
            }
            resolved += 1;
            assert_eq!(ledger.len(), 12 - resolved);
        }
        assert_eq!(hits, 3);
        assert_eq!(stats.record("a", Strategy::HeadOn), skirmish_ai::stats::StrategyRecord::new(12, 3));
    }

    #[test]
    fn test_clear_keeps_fired_counts() {
        let mut ledger = ShotLedger::new();
        let mut stats = StrategyStatistics::new();
        fire(&mut ledger, &mut stats, 1, "a");
        ledger.clear();
        assert!(ledger.is_empty());
        assert!(!ledger.on_hit(ProjectileId(1), "a", &mut stats));
        assert_eq!(stats.record("a", Strategy::HeadOn).fired, 1);
    }
}
