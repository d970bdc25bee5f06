//! Firing and gun cooling.

use hecs::World;

use skirmish_core::ballistics::gun_heat_for;
use skirmish_core::constants::{GUN_COOLING_RATE, MAX_FIRE_POWER, MIN_FIRE_POWER};
use skirmish_core::types::Position;

use crate::components::{Bullet, Chassis, Orders, Pilot};
use crate::engine::RoundStats;

/// Launch requested shots along the gun heading as it was when the orders
/// were given, i.e. before this tick's rotation. Hot or drained guns ignore
/// the request.
pub fn fire(world: &mut World, stats: &mut RoundStats) {
    let mut launched: Vec<(Position, Bullet)> = Vec::new();

    for (entity, (pos, chassis, orders, pilot)) in
        world.query_mut::<(&Position, &mut Chassis, &mut Orders, &Pilot)>()
    {
        let Some(shot) = orders.fire.take() else {
            continue;
        };
        if chassis.gun_heat > 0.0 || chassis.energy <= 0.0 {
            continue;
        }
        let power = shot
            .power
            .clamp(MIN_FIRE_POWER, MAX_FIRE_POWER)
            .min(chassis.energy);
        chassis.energy -= power;
        chassis.gun_heat = gun_heat_for(power);
        if *pilot == Pilot::Controlled {
            stats.shots_fired += 1;
        }
        launched.push((
            *pos,
            Bullet {
                owner: entity,
                projectile: shot.projectile,
                heading: chassis.gun_heading,
                power,
            },
        ));
    }

    for (pos, bullet) in launched {
        world.spawn((pos, bullet));
    }
}

pub fn cool(world: &mut World) {
    for (_entity, chassis) in world.query_mut::<&mut Chassis>() {
        chassis.gun_heat = (chassis.gun_heat - GUN_COOLING_RATE).max(0.0);
    }
}
