//! Latest known snapshot of every opponent.

use std::collections::BTreeMap;

use skirmish_core::events::Sighting;
use skirmish_core::types::{normal_absolute_angle, Position};

/// What we last knew about one opponent.
#[derive(Debug, Clone, PartialEq)]
pub struct OpponentSnapshot {
    pub identity: String,
    /// Absolute position derived from the polar reading.
    pub position: Position,
    /// Bearing relative to our body heading at the time of the sighting.
    pub bearing: f64,
    pub heading: f64,
    pub velocity: f64,
    pub energy: f64,
    pub distance: f64,
    /// Tick of the sighting.
    pub observed_at: u64,
}

/// One snapshot per identity, replaced wholesale on every sighting.
///
/// Iteration is in identity order so that every consumer sees opponents in
/// a stable order from tick to tick.
#[derive(Debug, Clone, Default)]
pub struct EnemyTracker {
    snapshots: BTreeMap<String, OpponentSnapshot>,
}

impl EnemyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sighting taken from `own_position` while facing `own_heading`.
    pub fn observe(
        &mut self,
        sighting: &Sighting,
        tick: u64,
        own_position: Position,
        own_heading: f64,
    ) -> &OpponentSnapshot {
        let absolute_bearing = normal_absolute_angle(own_heading + sighting.bearing);
        let snapshot = OpponentSnapshot {
            identity: sighting.identity.clone(),
            position: own_position.project(sighting.distance, absolute_bearing),
            bearing: sighting.bearing,
            heading: sighting.heading,
            velocity: sighting.velocity,
            energy: sighting.energy,
            distance: sighting.distance,
            observed_at: tick,
        };
        self.snapshots.insert(sighting.identity.clone(), snapshot);
        &self.snapshots[&sighting.identity]
    }

    /// Forget an opponent. Returns the last snapshot if it was known.
    pub fn remove(&mut self, identity: &str) -> Option<OpponentSnapshot> {
        self.snapshots.remove(identity)
    }

    pub fn get(&self, identity: &str) -> Option<&OpponentSnapshot> {
        self.snapshots.get(identity)
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.snapshots.contains_key(identity)
    }

    pub fn count(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn all(&self) -> impl Iterator<Item = &OpponentSnapshot> {
        self.snapshots.values()
    }

    /// The known opponent closest to us at its last sighting.
    pub fn nearest(&self) -> Option<&OpponentSnapshot> {
        self.all().min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
