//! Entity spawn factories for a round.

use std::f64::consts::TAU;

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::constants::{HALF_BOT_SIZE, INITIAL_GUN_HEAT, START_ENERGY};
use skirmish_core::types::{ArenaSize, Position};

use crate::brains::Brain;
use crate::components::*;

/// Bots start at least this far apart.
const MIN_SPAWN_SEPARATION: f64 = 120.0;

/// Attempts at a well separated spawn point before accepting any interior point.
const SPAWN_ATTEMPTS: usize = 100;

/// Name of the controlled bot.
pub const CONTROLLED_NAME: &str = "skirmisher";

/// Spawn the controlled bot and one scripted bot per brain.
/// Returns the controlled bot's entity.
pub fn setup_round(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    arena: ArenaSize,
    opponents: &[Brain],
) -> Entity {
    let mut taken = Vec::with_capacity(opponents.len() + 1);

    let position = spawn_point(rng, arena, &taken);
    taken.push(position);
    let controlled = spawn_bot(world, rng, CONTROLLED_NAME.to_owned(), position, Pilot::Controlled);

    for (i, brain) in opponents.iter().enumerate() {
        let position = spawn_point(rng, arena, &taken);
        taken.push(position);
        spawn_bot(
            world,
            rng,
            opponent_name(*brain, i),
            position,
            Pilot::Scripted(*brain),
        );
    }
    controlled
}

/// Opponent names are unique within a round and stable across rounds.
pub fn opponent_name(brain: Brain, index: usize) -> String {
    format!("{}#{}", brain.name(), index + 1)
}

pub fn spawn_bot(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    name: String,
    position: Position,
    pilot: Pilot,
) -> Entity {
    let heading = rng.gen_range(0.0..TAU);
    world.spawn((
        Identity(name),
        position,
        Chassis {
            heading,
            gun_heading: heading,
            radar_heading: heading,
            radar_sweep: 0.0,
            velocity: 0.0,
            energy: START_ENERGY,
            gun_heat: INITIAL_GUN_HEAT,
        },
        Orders::default(),
        pilot,
    ))
}

fn spawn_point(rng: &mut ChaCha8Rng, arena: ArenaSize, taken: &[Position]) -> Position {
    let margin = HALF_BOT_SIZE * 2.0;
    let mut candidate = arena.center();
    for _ in 0..SPAWN_ATTEMPTS {
        candidate = Position::new(
            rng.gen_range(margin..arena.width - margin),
            rng.gen_range(margin..arena.height - margin),
        );
        if taken
            .iter()
            .all(|p| p.distance_to(&candidate) >= MIN_SPAWN_SEPARATION)
        {
            break;
        }
    }
    candidate
}
