//! Radar scan for the controlled bot.
//!
//! The beam covers the arc swept by this tick's radar rotation. A bot is
//! seen when any part of its body lies inside that arc and within range.

use hecs::{Entity, World};

use skirmish_core::constants::{HALF_BOT_SIZE, RADAR_SCAN_RANGE};
use skirmish_core::events::{SensorEvent, Sighting};
use skirmish_core::types::{normal_relative_angle, Position};

use crate::components::{Chassis, Identity};

pub fn scan(world: &World, observer: Entity, events: &mut Vec<SensorEvent>) {
    let Ok(origin) = world.get::<&Position>(observer).map(|p| *p) else {
        return;
    };
    let Ok(own) = world.get::<&Chassis>(observer).map(|c| (*c).clone()) else {
        return;
    };
    if own.radar_sweep == 0.0 {
        return;
    }
    let start = own.radar_heading - own.radar_sweep;

    let mut query = world.query::<(&Position, &Identity, &Chassis)>();
    for (entity, (pos, identity, chassis)) in query.iter() {
        if entity == observer {
            continue;
        }
        let distance = origin.distance_to(pos);
        if distance > RADAR_SCAN_RANGE {
            continue;
        }
        let bearing = origin.bearing_to(pos);
        let half_width = (HALF_BOT_SIZE / distance.max(HALF_BOT_SIZE)).atan();
        if !in_arc(start, own.radar_sweep, bearing, half_width) {
            continue;
        }
        events.push(SensorEvent::OpponentSighted(Sighting {
            identity: identity.0.clone(),
            bearing: normal_relative_angle(bearing - own.heading),
            distance,
            heading: chassis.heading,
            velocity: chassis.velocity,
            energy: chassis.energy,
        }));
    }
}

/// Whether `bearing`, widened by `half_width` each side, meets the arc that
/// starts at `start` and turns by `sweep` (negative = anticlockwise).
pub fn in_arc(start: f64, sweep: f64, bearing: f64, half_width: f64) -> bool {
    let offset = normal_relative_angle(bearing - start);
    if sweep >= 0.0 {
        offset >= -half_width && offset <= sweep + half_width
    } else {
        offset <= half_width && offset >= sweep - half_width
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_4, PI};

    use super::*;

    #[test]
    fn test_clockwise_arc() {
        assert!(in_arc(0.0, FRAC_PI_4, 0.3, 0.0));
        assert!(!in_arc(0.0, FRAC_PI_4, 1.0, 0.0));
        assert!(!in_arc(0.0, FRAC_PI_4, -0.1, 0.0));
        assert!(in_arc(0.0, FRAC_PI_4, -0.1, 0.2));
    }

    #[test]
    fn test_anticlockwise_arc_across_north() {
        // From 10 degrees anticlockwise through North to -35 degrees.
        let start = 10f64.to_radians();
        assert!(in_arc(start, -FRAC_PI_4, 2.0 * PI - 0.2, 0.0));
        assert!(!in_arc(start, -FRAC_PI_4, 0.5, 0.0));
    }
}
