//! Removes destroyed bots and broadcasts their deaths.

use hecs::{Entity, World};
use log::debug;

use skirmish_core::events::SensorEvent;

use crate::components::{Chassis, Identity, Pilot};

/// Despawn every bot out of energy. Scripted deaths are reported to the
/// controlled bot.
pub fn run(world: &mut World, events: &mut Vec<SensorEvent>, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (chassis, identity, pilot)) in
        world.query_mut::<(&Chassis, &Identity, &Pilot)>()
    {
        if chassis.energy > 0.0 {
            continue;
        }
        debug!("{} destroyed", identity.0);
        despawn_buffer.push(entity);
        if *pilot != Pilot::Controlled {
            events.push(SensorEvent::OpponentDestroyed {
                identity: identity.0.clone(),
            });
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
