//! Destination management and the per-tick drive command.

use std::f64::consts::PI;

use log::debug;
use rand::Rng;

use skirmish_core::commands::Drive;
use skirmish_core::constants::MIN_MOVEMENT_DISTANCE;
use skirmish_core::state::OwnState;
use skirmish_core::types::{normal_relative_angle, Position};

use crate::risk::{search_destination, RiskField, SearchParams, Threat};
use crate::tracker::EnemyTracker;

/// Holds the current destination and decides when to look for a new one.
#[derive(Debug, Clone)]
pub struct MovementPlanner {
    destination: Option<Position>,
    params: SearchParams,
    min_distance: f64,
}

impl MovementPlanner {
    pub fn new(params: SearchParams, min_distance: f64) -> Self {
        Self {
            destination: None,
            params,
            min_distance,
        }
    }

    pub fn destination(&self) -> Option<Position> {
        self.destination
    }

    /// Forget the destination; the next plan starts from wherever we stand.
    pub fn reset(&mut self) {
        self.destination = None;
    }

    /// Update the destination if we have reached it, then drive toward it.
    ///
    /// `anchor` is what candidates should move away from: the engaged
    /// target, else the nearest opponent, else the arena centre.
    pub fn plan<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        own: &OwnState,
        tracker: &EnemyTracker,
        anchor: Position,
    ) -> Drive {
        let current = *self.destination.get_or_insert(own.position);

        if own.position.distance_to(&current) < self.min_distance {
            let field = RiskField::new(own.position, own.energy, threats(tracker));
            let interior = own.arena.interior(self.params.wall_margin);
            if let Some(next) = search_destination(
                rng,
                &field,
                own.position,
                anchor,
                current,
                &interior,
                &self.params,
            ) {
                debug!(
                    "new destination ({:.0},{:.0}) from ({:.0},{:.0})",
                    next.x, next.y, own.position.x, own.position.y
                );
                self.destination = Some(next);
            }
        }

        let destination = self.destination.unwrap_or(own.position);
        drive_toward(own.position, own.heading, destination)
    }
}

fn threats(tracker: &EnemyTracker) -> Vec<Threat> {
    tracker
        .all()
        .map(|s| Threat {
            position: s.position,
            energy: s.energy,
        })
        .collect()
}

/// Turn toward `destination` by the smaller rotation, reversing when the
/// destination lies behind us. Travel covers the whole remaining distance.
pub fn drive_toward(position: Position, heading: f64, destination: Position) -> Drive {
    let distance = position.distance_to(&destination);
    let mut angle = position.bearing_to(&destination) - heading;
    let mut direction = 1.0;
    if angle.cos() < 0.0 {
        angle += PI;
        direction = -1.0;
    }
    Drive {
        ahead: distance * direction,
        turn: normal_relative_angle(angle),
    }
}

impl Default for MovementPlanner {
    fn default() -> Self {
        Self::new(SearchParams::default(), MIN_MOVEMENT_DISTANCE)
    }
}
