//! Per-tick input: own state plus the events gathered since the last commit.

use serde::{Deserialize, Serialize};

use crate::events::SensorEvent;
use crate::types::{ArenaSize, Position};

/// The controlled bot as the host sees it at the start of a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnState {
    pub position: Position,
    /// Body heading (radians, 0 = North, clockwise).
    pub heading: f64,
    pub gun_heading: f64,
    pub radar_heading: f64,
    pub velocity: f64,
    pub energy: f64,
    pub gun_heat: f64,
    /// Number of opponents still alive.
    pub others: usize,
    pub arena: ArenaSize,
}

/// Everything delivered for one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    pub tick: u64,
    pub own: OwnState,
    pub events: Vec<SensorEvent>,
}
