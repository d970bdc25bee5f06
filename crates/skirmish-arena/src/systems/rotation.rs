//! Body, gun and radar rotation with per-tick rate limits.
//!
//! The three rotate independently: turning the body does not carry the gun,
//! and turning the gun does not carry the radar.

use hecs::World;

use skirmish_core::ballistics::max_body_turn;
use skirmish_core::constants::{MAX_GUN_TURN_DEG, MAX_RADAR_TURN_DEG};
use skirmish_core::types::normal_absolute_angle;

use crate::components::{Chassis, Orders};

pub fn run(world: &mut World) {
    for (_entity, (chassis, orders)) in world.query_mut::<(&mut Chassis, &Orders)>() {
        let body = limit(orders.turn, max_body_turn(chassis.velocity));
        chassis.heading = normal_absolute_angle(chassis.heading + body);

        let gun = limit(orders.turn_turret, MAX_GUN_TURN_DEG.to_radians());
        chassis.gun_heading = normal_absolute_angle(chassis.gun_heading + gun);

        let radar = limit(orders.turn_radar, MAX_RADAR_TURN_DEG.to_radians());
        chassis.radar_heading = normal_absolute_angle(chassis.radar_heading + radar);
        chassis.radar_sweep = radar;
    }
}

fn limit(turn: f64, max: f64) -> f64 {
    turn.clamp(-max, max)
}
