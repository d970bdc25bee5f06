//! Velocity integration and wall collisions.

use hecs::World;

use skirmish_core::ballistics::wall_damage;
use skirmish_core::constants::{ACCELERATION, DECELERATION, HALF_BOT_SIZE, MAX_VELOCITY};
use skirmish_core::types::{ArenaSize, Position};

use crate::components::{Chassis, Orders, Pilot};
use crate::engine::RoundStats;

/// Move every bot along its heading. Bots pressed into a wall stop there,
/// take wall damage, and (for the controlled bot) count a wall hit.
pub fn run(world: &mut World, arena: ArenaSize, stats: &mut RoundStats) {
    let interior = arena.interior(HALF_BOT_SIZE);

    for (_entity, (pos, chassis, orders, pilot)) in
        world.query_mut::<(&mut Position, &mut Chassis, &Orders, &Pilot)>()
    {
        chassis.velocity = next_velocity(chassis.velocity, orders.ahead);
        let moved = pos.project(chassis.velocity, chassis.heading);
        let clamped = interior.clamp(&moved);

        if clamped != moved {
            chassis.energy -= wall_damage(chassis.velocity);
            chassis.velocity = 0.0;
            if *pilot == Pilot::Controlled {
                stats.wall_hits += 1;
            }
        }
        *pos = clamped;
    }
}

/// Velocity after one tick of driving toward a point `remaining` away
/// (negative = behind). Accelerates by 1, brakes by 2, never exceeds the
/// top speed, and never carries the bot past the commanded distance.
pub fn next_velocity(velocity: f64, remaining: f64) -> f64 {
    if remaining == 0.0 {
        return brake(velocity, velocity.abs());
    }

    let direction = remaining.signum();
    let speed = velocity * direction;
    if speed < 0.0 {
        // Still rolling the wrong way.
        return brake(velocity, -speed);
    }

    let distance = remaining.abs();
    let cap = MAX_VELOCITY.min((2.0 * DECELERATION * distance).sqrt());
    let speed = if speed < cap {
        (speed + ACCELERATION).min(cap)
    } else {
        (speed - DECELERATION).max(cap)
    };
    speed.min(distance) * direction
}

/// Slow toward zero by at most `DECELERATION`, never past `limit` of change.
fn brake(velocity: f64, limit: f64) -> f64 {
    velocity - velocity.signum() * DECELERATION.min(limit)
}
