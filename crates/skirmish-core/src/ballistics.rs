//! Projectile and gun formulas of the host simulator.

use crate::constants::*;

/// Projectile speed (pixels/tick) for a given power.
pub fn projectile_speed(power: f64) -> f64 {
    PROJECTILE_BASE_SPEED - PROJECTILE_POWER_FACTOR * power
}

/// Damage dealt by a projectile of the given power.
pub fn projectile_damage(power: f64) -> f64 {
    let bonus = if power > 1.0 { 2.0 * (power - 1.0) } else { 0.0 };
    4.0 * power + bonus
}

/// Energy returned to the shooter on a hit.
pub fn hit_energy_bonus(power: f64) -> f64 {
    3.0 * power
}

/// Gun heat generated by firing.
pub fn gun_heat_for(power: f64) -> f64 {
    1.0 + power / 5.0
}

/// Maximum body turn (radians/tick) at the given speed.
pub fn max_body_turn(velocity: f64) -> f64 {
    (MAX_BODY_TURN_DEG - BODY_TURN_SPEED_PENALTY_DEG * velocity.abs()).to_radians()
}

/// Damage taken from hitting a wall at the given speed.
pub fn wall_damage(velocity: f64) -> f64 {
    (velocity.abs() / 2.0 - 1.0).max(0.0)
}
