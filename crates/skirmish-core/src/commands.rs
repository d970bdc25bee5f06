//! The command batch the controller hands to the host each tick.
//!
//! Turns are relative and in radians; positive turns are clockwise.

use serde::{Deserialize, Serialize};

use crate::events::ProjectileId;

/// A request to fire one projectile this tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireOrder {
    pub projectile: ProjectileId,
    pub power: f64,
}

/// Body movement: signed travel distance and body turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Drive {
    /// Distance to travel; negative drives in reverse.
    pub ahead: f64,
    pub turn: f64,
}

/// All commands for one tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandBatch {
    pub turn_radar: f64,
    pub turn_turret: f64,
    pub fire: Option<FireOrder>,
    pub drive: Drive,
}
