//! Arena engine: one round of one controlled bot against scripted opponents.
//!
//! `Arena` owns the hecs world and runs every system in a fixed order per
//! tick. It has no notion of the controller beyond the command batch it is
//! handed and the events and own state it hands back, so rounds are fully
//! deterministic for a given seed and command stream.

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use skirmish_core::commands::CommandBatch;
use skirmish_core::events::SensorEvent;
use skirmish_core::state::OwnState;
use skirmish_core::types::{ArenaSize, Position};

use crate::brains::{Brain, BrainContext};
use crate::components::{Chassis, Orders, Pilot, Shot};
use crate::systems;
use crate::world_setup;

/// Configuration for one round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// RNG seed for spawn points and headings. Same seed = same round.
    pub seed: u64,
    pub size: ArenaSize,
    /// The round is abandoned, undecided, at this tick.
    pub tick_limit: u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            size: ArenaSize::default(),
            tick_limit: 4000,
        }
    }
}

/// Counters for the controlled bot over one round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    pub shots_fired: u32,
    pub shots_hit: u32,
    pub wall_hits: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Every opponent destroyed, controlled bot alive.
    Won,
    /// Controlled bot destroyed.
    Lost,
    TimedOut,
}

pub struct Arena {
    world: World,
    config: ArenaConfig,
    tick: u64,
    controlled: Entity,
    events: Vec<SensorEvent>,
    stats: RoundStats,
    despawn_buffer: Vec<Entity>,
}

impl Arena {
    /// Set up a round: the controlled bot plus one bot per brain.
    pub fn new(config: ArenaConfig, opponents: &[Brain]) -> Self {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let controlled = world_setup::setup_round(&mut world, &mut rng, config.size, opponents);
        Self {
            world,
            config,
            tick: 0,
            controlled,
            events: Vec::new(),
            stats: RoundStats::default(),
            despawn_buffer: Vec::new(),
        }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn stats(&self) -> &RoundStats {
        &self.stats
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that stage a situation by hand.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn controlled(&self) -> Entity {
        self.controlled
    }

    /// Number of scripted bots still alive.
    pub fn others(&self) -> usize {
        self.world
            .query::<&Pilot>()
            .iter()
            .filter(|(_, pilot)| **pilot != Pilot::Controlled)
            .count()
    }

    /// `None` while the round is still being played.
    pub fn outcome(&self) -> Option<RoundOutcome> {
        if !self.world.contains(self.controlled) {
            Some(RoundOutcome::Lost)
        } else if self.others() == 0 {
            Some(RoundOutcome::Won)
        } else if self.tick >= self.config.tick_limit {
            Some(RoundOutcome::TimedOut)
        } else {
            None
        }
    }

    /// The controlled bot as the host reports it; `None` once destroyed.
    pub fn own_state(&self) -> Option<OwnState> {
        let position = *self.world.get::<&Position>(self.controlled).ok()?;
        let chassis = self.world.get::<&Chassis>(self.controlled).ok()?;
        Some(OwnState {
            position,
            heading: chassis.heading,
            gun_heading: chassis.gun_heading,
            radar_heading: chassis.radar_heading,
            velocity: chassis.velocity,
            energy: chassis.energy,
            gun_heat: chassis.gun_heat,
            others: self.others(),
            arena: self.config.size,
        })
    }

    /// Events gathered since the last call.
    pub fn take_events(&mut self) -> Vec<SensorEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply the controlled bot's commands and advance one tick.
    pub fn step(&mut self, commands: &CommandBatch) {
        self.accept_commands(commands);
        self.script_opponents();
        self.run_systems();
        self.tick += 1;
    }

    fn accept_commands(&mut self, commands: &CommandBatch) {
        if let Ok(mut orders) = self.world.get::<&mut Orders>(self.controlled) {
            *orders = Orders {
                ahead: commands.drive.ahead,
                turn: commands.drive.turn,
                turn_turret: commands.turn_turret,
                turn_radar: commands.turn_radar,
                fire: commands.fire.map(|f| Shot {
                    power: f.power,
                    projectile: Some(f.projectile),
                }),
            };
        }
    }

    fn script_opponents(&mut self) {
        let prey = self
            .world
            .get::<&Position>(self.controlled)
            .ok()
            .map(|p| *p);
        let arena = self.config.size;

        for (_entity, (pos, chassis, orders, pilot)) in self
            .world
            .query_mut::<(&Position, &Chassis, &mut Orders, &Pilot)>()
        {
            let Pilot::Scripted(brain) = pilot else {
                continue;
            };
            *orders = brain.orders(&BrainContext {
                position: *pos,
                chassis,
                arena,
                prey,
            });
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Fire along the gun heading the orders were based on
        systems::gunnery::fire(&mut self.world, &mut self.stats);
        // 2. Body, gun, radar
        systems::rotation::run(&mut self.world);
        // 3. Movement and walls
        systems::movement::run(&mut self.world, self.config.size, &mut self.stats);
        // 4. Bullets: flight, hits, collisions, misses
        systems::bullets::run(
            &mut self.world,
            self.config.size,
            &mut self.events,
            &mut self.stats,
            &mut self.despawn_buffer,
        );
        // 5. Deaths
        systems::cleanup::run(&mut self.world, &mut self.events, &mut self.despawn_buffer);
        // 6. Radar over the swept arc
        systems::radar::scan(&self.world, self.controlled, &mut self.events);
        // 7. Gun cooling
        systems::gunnery::cool(&mut self.world);
    }
}
