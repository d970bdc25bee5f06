//! Projectile flight, hits, mid-air collisions and misses.

use hecs::{Entity, World};

use skirmish_core::ballistics::{hit_energy_bonus, projectile_damage, projectile_speed};
use skirmish_core::constants::{HALF_BOT_SIZE, PROJECTILE_COLLISION_RADIUS};
use skirmish_core::events::SensorEvent;
use skirmish_core::types::{ArenaSize, Position};

use crate::components::{Bullet, Chassis, Identity};
use crate::engine::RoundStats;

/// Advance every bullet one tick and resolve what it ran into. Outcome
/// events are emitted only for bullets carrying a projectile id.
pub fn run(
    world: &mut World,
    arena: ArenaSize,
    events: &mut Vec<SensorEvent>,
    stats: &mut RoundStats,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    for (_entity, (pos, bullet)) in world.query_mut::<(&mut Position, &Bullet)>() {
        *pos = pos.project(projectile_speed(bullet.power), bullet.heading);
    }

    let bots: Vec<(Entity, Position, String)> = world
        .query::<(&Position, &Identity, &Chassis)>()
        .iter()
        .map(|(e, (pos, id, _))| (e, *pos, id.0.clone()))
        .collect();
    let flying: Vec<(Entity, Position, Bullet)> = world
        .query::<(&Position, &Bullet)>()
        .iter()
        .map(|(e, (pos, bullet))| (e, *pos, bullet.clone()))
        .collect();

    let mut hits: Vec<(Entity, Entity, f64)> = Vec::new();

    for (entity, pos, bullet) in &flying {
        if pos.x < 0.0 || pos.y < 0.0 || pos.x > arena.width || pos.y > arena.height {
            despawn_buffer.push(*entity);
            if let Some(projectile) = bullet.projectile {
                events.push(SensorEvent::ProjectileMissed { projectile });
            }
            continue;
        }

        let struck = bots.iter().find(|(bot, bot_pos, _)| {
            *bot != bullet.owner
                && (pos.as_vec() - bot_pos.as_vec()).abs().max_element() <= HALF_BOT_SIZE
        });
        if let Some((victim, _, name)) = struck {
            despawn_buffer.push(*entity);
            hits.push((*victim, bullet.owner, bullet.power));
            if let Some(projectile) = bullet.projectile {
                stats.shots_hit += 1;
                events.push(SensorEvent::ProjectileHit {
                    projectile,
                    victim: name.clone(),
                });
            }
        }
    }

    for (i, (a, a_pos, a_bullet)) in flying.iter().enumerate() {
        for (b, b_pos, b_bullet) in flying.iter().skip(i + 1) {
            if a_bullet.owner == b_bullet.owner
                || despawn_buffer.contains(a)
                || despawn_buffer.contains(b)
                || a_pos.as_vec().distance(b_pos.as_vec()) >= PROJECTILE_COLLISION_RADIUS
            {
                continue;
            }
            despawn_buffer.push(*a);
            despawn_buffer.push(*b);
            for projectile in [a_bullet.projectile, b_bullet.projectile].into_iter().flatten() {
                events.push(SensorEvent::ProjectileCollided { projectile });
            }
        }
    }

    for (victim, owner, power) in hits {
        if let Ok(mut chassis) = world.get::<&mut Chassis>(victim) {
            chassis.energy -= projectile_damage(power);
        }
        if let Ok(mut chassis) = world.get::<&mut Chassis>(owner) {
            chassis.energy += hit_energy_bonus(power);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
