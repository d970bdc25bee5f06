//! Aim point prediction and fire power.
//!
//! Both strategies share the power formula. Lead prediction needs the power
//! first, since projectile speed (and so travel time) depends on it.

use skirmish_core::ballistics::projectile_speed;
use skirmish_core::constants::*;
use skirmish_core::enums::Strategy;
use skirmish_core::state::OwnState;
use skirmish_core::types::{normal_relative_angle, Position};

use crate::tracker::OpponentSnapshot;

/// Where to point the gun and how hard to shoot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimSolution {
    pub strategy: Strategy,
    pub aim_point: Position,
    /// Absolute bearing from us to the aim point.
    pub bearing: f64,
    pub power: f64,
}

/// Power bounded by our own sustainability, by effective range, and by not
/// overkilling a weak target; then clamped to what the host accepts.
pub fn fire_power(own_energy: f64, target_distance: f64, target_energy: f64) -> f64 {
    (own_energy / OWN_ENERGY_DIVISOR)
        .min(FIRE_POWER_RANGE_CONSTANT / target_distance)
        .min(target_energy / TARGET_ENERGY_DIVISOR)
        .clamp(MIN_FIRE_POWER, MAX_FIRE_POWER)
}

/// Whole ticks a projectile of `power` needs to cover `distance`.
pub fn travel_ticks(distance: f64, power: f64) -> u64 {
    (distance / projectile_speed(power)).max(0.0).floor() as u64
}

/// Extrapolate the target along its last heading and speed to tick `at`,
/// never past the arena interior.
pub fn predict_position(target: &OpponentSnapshot, at: u64, own: &OwnState) -> Position {
    let elapsed = at.saturating_sub(target.observed_at) as f64;
    let travelled = target.velocity * elapsed;
    let predicted = target.position.project(travelled, target.heading);
    own.arena.interior(HALF_BOT_SIZE).clamp(&predicted)
}

/// Compute the aim for a strategy at tick `now`.
pub fn solve(strategy: Strategy, target: &OpponentSnapshot, own: &OwnState, now: u64) -> AimSolution {
    let power = fire_power(own.energy, target.distance, target.energy);
    let aim_point = match strategy {
        Strategy::HeadOn => target.position,
        Strategy::LeadPrediction => {
            let arrival = now + travel_ticks(target.distance, power);
            predict_position(target, arrival, own)
        }
    };
    AimSolution {
        strategy,
        aim_point,
        bearing: own.position.bearing_to(&aim_point),
        power,
    }
}

/// Relative turn that brings the gun onto the solution.
pub fn gun_offset(solution: &AimSolution, gun_heading: f64) -> f64 {
    normal_relative_angle(solution.bearing - gun_heading)
}

/// The gun may fire: it is aligned with the solution, cool, and we can afford it.
pub fn can_fire(solution: &AimSolution, own: &OwnState) -> bool {
    gun_offset(solution, own.gun_heading).abs() <= GUN_TOLERANCE
        && own.gun_heat <= 0.0
        && own.energy > MIN_ENERGY_TO_FIRE
}
