//! Target selection among the opponents currently tracked.

use std::cmp::Ordering;

use skirmish_core::constants::{POINT_BLANK_RANGE, UNDISCOVERED_SHOT_COUNT};

use crate::stats::StrategyStatistics;
use crate::tracker::{EnemyTracker, OpponentSnapshot};

/// How one candidate ranks this tick.
struct Candidate<'a> {
    snapshot: &'a OpponentSnapshot,
    point_blank: bool,
    undiscovered: bool,
    best_accuracy: f64,
}

impl<'a> Candidate<'a> {
    fn assess(snapshot: &'a OpponentSnapshot, stats: &StrategyStatistics) -> Self {
        Self {
            snapshot,
            point_blank: snapshot.distance < POINT_BLANK_RANGE,
            undiscovered: stats.is_undiscovered(&snapshot.identity, UNDISCOVERED_SHOT_COUNT),
            best_accuracy: stats.best_accuracy(&snapshot.identity),
        }
    }

    /// `Less` means `self` is the better target.
    fn rank(&self, other: &Self) -> Ordering {
        let nearest = || {
            self.snapshot
                .distance
                .total_cmp(&other.snapshot.distance)
                .then_with(|| self.snapshot.identity.cmp(&other.snapshot.identity))
        };

        // Point-blank threats first, nearest of them.
        match (self.point_blank, other.point_blank) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (true, true) => return nearest(),
            (false, false) => {}
        }

        // Then opponents still being explored, nearest of them.
        match (self.undiscovered, other.undiscovered) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (true, true) => return nearest(),
            (false, false) => {}
        }

        // Then the easiest to hit.
        other
            .best_accuracy
            .total_cmp(&self.best_accuracy)
            .then_with(nearest)
    }
}

/// Pick the opponent to engage. Only tracked opponents are considered, so an
/// identity that has been removed can never come back from its statistics.
pub fn select(tracker: &EnemyTracker, stats: &StrategyStatistics) -> Option<String> {
    tracker
        .all()
        .map(|snapshot| Candidate::assess(snapshot, stats))
        .min_by(|a, b| a.rank(b))
        .map(|c| c.snapshot.identity.clone())
}
