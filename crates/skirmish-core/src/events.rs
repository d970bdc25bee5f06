//! Sensor events delivered by the host before each decision pass.

use serde::{Deserialize, Serialize};

/// Identifier of a fired projectile. Allocated by the controller and echoed
/// back by the host in outcome events.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ProjectileId(pub u64);

/// One radar reading of an opponent, relative to the observer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sighting {
    pub identity: String,
    /// Bearing relative to the observer's body heading (radians).
    pub bearing: f64,
    pub distance: f64,
    /// Absolute heading of the opponent (radians, 0 = North).
    pub heading: f64,
    /// Signed speed along the heading (pixels/tick).
    pub velocity: f64,
    pub energy: f64,
}

/// Everything the host can tell the controller about the last tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SensorEvent {
    /// The radar swept over an opponent.
    OpponentSighted(Sighting),
    /// An opponent was destroyed.
    OpponentDestroyed { identity: String },
    /// One of our projectiles struck a bot.
    ProjectileHit {
        projectile: ProjectileId,
        victim: String,
    },
    /// One of our projectiles left the arena.
    ProjectileMissed { projectile: ProjectileId },
    /// One of our projectiles was destroyed by another projectile.
    ProjectileCollided { projectile: ProjectileId },
}
