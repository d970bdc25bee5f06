//! The engagement controller: one decision pass per host tick.
//!
//! Order within a tick: apply sensor events, select a target, aim and maybe
//! fire, plan movement, steer the radar. Statistics outlive rounds; all
//! other state is per round.

use std::collections::BTreeMap;

use log::{debug, info, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skirmish_ai::aim;
use skirmish_ai::movement::MovementPlanner;
use skirmish_ai::radar::{knows_everyone, radar_turn};
use skirmish_ai::stats::StrategyStatistics;
use skirmish_ai::strategy;
use skirmish_ai::targeting;
use skirmish_ai::tracker::EnemyTracker;
use skirmish_core::commands::{CommandBatch, FireOrder};
use skirmish_core::events::{ProjectileId, SensorEvent};
use skirmish_core::state::{OwnState, TickInput};
use skirmish_core::types::Position;

use crate::config::ControllerConfig;
use crate::ledger::{PendingShot, ShotLedger};

pub struct EngagementController {
    config: ControllerConfig,
    tracker: EnemyTracker,
    stats: StrategyStatistics,
    ledger: ShotLedger,
    planner: MovementPlanner,
    target: Option<String>,
    rng: ChaCha8Rng,
    next_projectile: u64,
}

impl EngagementController {
    pub fn new(config: ControllerConfig) -> Self {
        Self::with_statistics(config, StrategyStatistics::new())
    }

    /// Start from statistics learned elsewhere, e.g. an earlier match in the same process.
    pub fn with_statistics(config: ControllerConfig, stats: StrategyStatistics) -> Self {
        Self {
            tracker: EnemyTracker::new(),
            stats,
            ledger: ShotLedger::new(),
            planner: MovementPlanner::new(config.search_params(), config.min_movement_distance),
            target: None,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_projectile: 0,
            config,
        }
    }

    /// Reset per-round state. Statistics are kept.
    pub fn begin_round(&mut self) {
        info!(
            "new round: {} opponents on record, {} shots fired so far",
            self.stats.iter().count(),
            self.stats.total_fired()
        );
        self.tracker.clear();
        self.ledger.clear();
        self.planner.reset();
        self.target = None;
    }

    /// Apply one sensor event received at `tick` while in state `own`.
    pub fn apply_event(&mut self, event: &SensorEvent, tick: u64, own: &OwnState) {
        match event {
            SensorEvent::OpponentSighted(sighting) => {
                self.tracker.observe(sighting, tick, own.position, own.heading);
            }
            SensorEvent::OpponentDestroyed { identity } => {
                self.tracker.remove(identity);
                if self.target.as_deref() == Some(identity.as_str()) {
                    debug!("target {identity} destroyed");
                    self.target = None;
                }
            }
            SensorEvent::ProjectileHit { projectile, victim } => {
                if self.ledger.on_hit(*projectile, victim, &mut self.stats) {
                    trace!("projectile {} hit {victim}", projectile.0);
                }
            }
            SensorEvent::ProjectileMissed { projectile } => {
                self.ledger.on_miss(*projectile);
            }
            SensorEvent::ProjectileCollided { projectile } => {
                self.ledger.on_collision(*projectile);
            }
        }
    }

    /// Apply the events of a round's closing tick. No decision pass runs, so
    /// nothing is fired or registered that the host would never carry out.
    pub fn finish_round(&mut self, input: &TickInput) {
        for event in &input.events {
            self.apply_event(event, input.tick, &input.own);
        }
        debug!(
            "round closed at tick {}, {} shots unresolved",
            input.tick,
            self.ledger.len()
        );
    }

    /// Apply the tick's events and produce its commands.
    pub fn step(&mut self, input: &TickInput) -> CommandBatch {
        let own = &input.own;
        for event in &input.events {
            self.apply_event(event, input.tick, own);
        }

        let mut batch = CommandBatch::default();
        self.retarget();

        if self.config.require_full_picture && !knows_everyone(own, &self.tracker) {
            trace!(
                "tick {}: {} of {} opponents known, holding fire",
                input.tick,
                self.tracker.count(),
                own.others
            );
        } else if let Some(identity) = self.target.clone() {
            self.engage(&identity, own, input.tick, &mut batch);
        }

        let anchor = self.anchor(own);
        batch.drive = self.planner.plan(&mut self.rng, own, &self.tracker, anchor);

        let target = self.target.as_deref().and_then(|id| self.tracker.get(id));
        batch.turn_radar = radar_turn(own, &self.tracker, target, input.tick);

        batch
    }

    fn retarget(&mut self) {
        let selected = targeting::select(&self.tracker, &self.stats);
        if selected != self.target {
            debug!(
                "target {} -> {}",
                self.target.as_deref().unwrap_or("none"),
                selected.as_deref().unwrap_or("none")
            );
            self.target = selected;
        }
    }

    fn engage(&mut self, identity: &str, own: &OwnState, tick: u64, batch: &mut CommandBatch) {
        let snapshot = self
            .tracker
            .get(identity)
            .unwrap_or_else(|| panic!("engaged target {identity} has no snapshot"));

        let chosen = strategy::choose(identity, &self.stats);
        let solution = aim::solve(chosen, snapshot, own, tick);
        batch.turn_turret = aim::gun_offset(&solution, own.gun_heading);

        if aim::can_fire(&solution, own) {
            let id = ProjectileId(self.next_projectile);
            self.next_projectile += 1;
            self.ledger.register(id, identity, chosen, &mut self.stats);
            batch.fire = Some(FireOrder {
                projectile: id,
                power: solution.power,
            });
            trace!(
                "tick {tick}: fire {} at {identity} ({chosen}, power {:.2})",
                id.0,
                solution.power
            );
        }
    }

    /// What candidate destinations should move away from.
    fn anchor(&self, own: &OwnState) -> Position {
        self.target
            .as_deref()
            .and_then(|id| self.tracker.get(id))
            .or_else(|| self.tracker.nearest())
            .map(|s| s.position)
            .unwrap_or_else(|| own.arena.center())
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn statistics(&self) -> &StrategyStatistics {
        &self.stats
    }

    /// Hand the statistics over, e.g. to seed the next match.
    pub fn into_statistics(self) -> StrategyStatistics {
        self.stats
    }

    pub fn pending_shots(&self) -> &BTreeMap<ProjectileId, PendingShot> {
        self.ledger.pending()
    }

    pub fn tracker(&self) -> &EnemyTracker {
        &self.tracker
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn destination(&self) -> Option<Position> {
        self.planner.destination()
    }
}
