//! Fundamental geometric types shared by the controller and the arena.

use std::f64::consts::{PI, TAU};

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in arena space (pixels, Cartesian).
/// x = East, y = North.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Arena dimensions as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaSize {
    pub width: f64,
    pub height: f64,
}

/// Axis-aligned rectangle, used for the arena interior margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_vec().distance(other.as_vec())
    }

    /// Squared distance, cheaper when only ordering or inverse-square terms matter.
    pub fn distance_sq_to(&self, other: &Position) -> f64 {
        self.as_vec().distance_squared(other.as_vec())
    }

    /// Absolute bearing to another position in radians (0 = North, clockwise).
    pub fn bearing_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx.atan2(dy).rem_euclid(TAU)
    }

    /// The point `distance` away along absolute angle `angle`.
    pub fn project(&self, distance: f64, angle: f64) -> Position {
        Position::new(
            self.x + distance * angle.sin(),
            self.y + distance * angle.cos(),
        )
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Position::new(v.x, v.y)
    }
}

impl ArenaSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }

    /// The region a bot's centre may occupy, `margin` away from every wall.
    pub fn interior(&self, margin: f64) -> Bounds {
        Bounds {
            min_x: margin,
            min_y: margin,
            max_x: self.width - margin,
            max_y: self.height - margin,
        }
    }
}

impl Default for ArenaSize {
    fn default() -> Self {
        Self::new(
            crate::constants::DEFAULT_ARENA_WIDTH,
            crate::constants::DEFAULT_ARENA_HEIGHT,
        )
    }
}

impl Bounds {
    /// Strict containment: points on the edge are outside.
    pub fn contains(&self, p: &Position) -> bool {
        p.x > self.min_x && p.x < self.max_x && p.y > self.min_y && p.y < self.max_y
    }

    pub fn clamp(&self, p: &Position) -> Position {
        Position::new(
            p.x.clamp(self.min_x, self.max_x),
            p.y.clamp(self.min_y, self.max_y),
        )
    }
}

/// Normalize an angle into (-PI, PI].
pub fn normal_relative_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a > PI {
        a - TAU
    } else {
        a
    }
}

/// Normalize an angle into [0, TAU).
pub fn normal_absolute_angle(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}
