//! ECS components for arena entities.
//!
//! Components are plain data. Behaviour lives in systems and brains.

use hecs::Entity;

use skirmish_core::events::ProjectileId;

use crate::brains::Brain;

/// Name reported in sightings and outcome events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity(pub String);

/// Body, gun and radar state of a bot.
#[derive(Debug, Clone, PartialEq)]
pub struct Chassis {
    pub heading: f64,
    pub gun_heading: f64,
    pub radar_heading: f64,
    /// Radar rotation applied this tick; the scan covers the swept arc.
    pub radar_sweep: f64,
    pub velocity: f64,
    pub energy: f64,
    pub gun_heat: f64,
}

/// A request to fire. Only the controlled bot's shots carry a projectile id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    pub power: f64,
    pub projectile: Option<ProjectileId>,
}

/// What a bot asked for this tick. Remaining distance and turns are
/// re-issued every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Orders {
    pub ahead: f64,
    pub turn: f64,
    pub turn_turret: f64,
    pub turn_radar: f64,
    pub fire: Option<Shot>,
}

/// Who decides a bot's orders.
#[derive(Debug, Clone, PartialEq)]
pub enum Pilot {
    /// Orders come from the host adapter.
    Controlled,
    Scripted(Brain),
}

/// A projectile in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub owner: Entity,
    pub projectile: Option<ProjectileId>,
    pub heading: f64,
    pub power: f64,
}
