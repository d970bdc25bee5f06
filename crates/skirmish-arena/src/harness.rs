//! Match harness: several rounds against the same opponents with one controller.

use log::info;
use serde::{Deserialize, Serialize};

use skirmish_ai::stats::StrategyStatistics;
use skirmish_controller::{drive, EngagementController};

use crate::brains::Brain;
use crate::engine::{Arena, ArenaConfig, RoundOutcome};
use crate::host::ArenaHost;

/// What to play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleSpec {
    pub rounds: u32,
    /// Round `n` is seeded with `arena.seed + n`.
    pub arena: ArenaConfig,
    pub opponents: Vec<Brain>,
}

impl Default for BattleSpec {
    fn default() -> Self {
        Self {
            rounds: 10,
            arena: ArenaConfig::default(),
            opponents: vec![Brain::SittingDuck],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattleReport {
    pub rounds: u32,
    pub rounds_won: u32,
    pub rounds_lost: u32,
    pub ticks: u64,
    pub shots_fired: u32,
    pub shots_hit: u32,
    pub wall_hits: u32,
    /// The controller's statistics after the last round.
    pub statistics: StrategyStatistics,
}

impl BattleReport {
    /// Hit percentage over the whole battle; 0 when nothing was fired.
    pub fn accuracy(&self) -> f64 {
        if self.shots_fired == 0 {
            0.0
        } else {
            self.shots_hit as f64 / self.shots_fired as f64 * 100.0
        }
    }
}

/// Play `spec.rounds` rounds. The controller's statistics carry from round
/// to round; everything else is reset at each round start.
pub fn run_battle(controller: &mut EngagementController, spec: &BattleSpec) -> BattleReport {
    let mut report = BattleReport {
        rounds: spec.rounds,
        rounds_won: 0,
        rounds_lost: 0,
        ticks: 0,
        shots_fired: 0,
        shots_hit: 0,
        wall_hits: 0,
        statistics: StrategyStatistics::new(),
    };

    for round in 0..spec.rounds {
        let config = ArenaConfig {
            seed: spec.arena.seed.wrapping_add(round as u64),
            ..spec.arena
        };
        let mut host = ArenaHost::new(Arena::new(config, &spec.opponents));
        report.ticks += drive(controller, &mut host);

        let arena = host.into_arena();
        let stats = arena.stats();
        report.shots_fired += stats.shots_fired;
        report.shots_hit += stats.shots_hit;
        report.wall_hits += stats.wall_hits;
        let outcome = arena.outcome();
        match outcome {
            Some(RoundOutcome::Won) => report.rounds_won += 1,
            Some(RoundOutcome::Lost) => report.rounds_lost += 1,
            _ => {}
        }
        info!(
            "round {}/{}: {:?} after {} ticks, {}/{} hits",
            round + 1,
            spec.rounds,
            outcome,
            arena.tick(),
            stats.shots_hit,
            stats.shots_fired
        );
    }

    report.statistics = controller.statistics().clone();
    report
}
