//! Scripted opponents.
//!
//! Pure functions of the bot's own state and, for the chaser, the controlled
//! bot's position. No ECS dependency.

use std::f64::consts::FRAC_PI_2;
use std::fmt;

use serde::{Deserialize, Serialize};

use skirmish_core::constants::HALF_BOT_SIZE;
use skirmish_core::types::{normal_relative_angle, ArenaSize, Position};

use crate::components::{Chassis, Orders, Shot};

/// Body turn per tick for the circler (radians).
const CIRCLER_TURN: f64 = 4.0 * std::f64::consts::PI / 180.0;

/// How far ahead the wall walker looks for a wall.
const WALKER_LOOKAHEAD: f64 = 60.0;

/// Range the chaser tries to hold.
const CHASER_RANGE: f64 = 150.0;

/// Gun error under which the chaser fires.
const CHASER_AIM_TOLERANCE: f64 = 0.05;

const CHASER_FIRE_POWER: f64 = 1.0;

/// Travel requested by bots that just keep moving.
const CRUISE_DISTANCE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Brain {
    /// Never moves, never fires.
    SittingDuck,
    /// Drives in a constant circle.
    Circler,
    /// Drives straight, turning right at every wall.
    WallWalker,
    /// Closes on the controlled bot and shoots at it head-on.
    Chaser,
}

/// What a brain can see.
pub struct BrainContext<'a> {
    pub position: Position,
    pub chassis: &'a Chassis,
    pub arena: ArenaSize,
    /// The controlled bot, if alive.
    pub prey: Option<Position>,
}

impl Brain {
    pub const ALL: [Brain; 4] = [
        Brain::SittingDuck,
        Brain::Circler,
        Brain::WallWalker,
        Brain::Chaser,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Brain::SittingDuck => "sitting_duck",
            Brain::Circler => "circler",
            Brain::WallWalker => "wall_walker",
            Brain::Chaser => "chaser",
        }
    }

    pub fn from_name(name: &str) -> Option<Brain> {
        Brain::ALL.iter().copied().find(|b| b.name() == name)
    }

    pub fn orders(&self, ctx: &BrainContext) -> Orders {
        match self {
            Brain::SittingDuck => Orders::default(),
            Brain::Circler => Orders {
                ahead: CRUISE_DISTANCE,
                turn: CIRCLER_TURN,
                ..Default::default()
            },
            Brain::WallWalker => wall_walk(ctx),
            Brain::Chaser => chase(ctx),
        }
    }
}

impl fmt::Display for Brain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn wall_walk(ctx: &BrainContext) -> Orders {
    let lookahead = ctx.position.project(WALKER_LOOKAHEAD, ctx.chassis.heading);
    if ctx.arena.interior(HALF_BOT_SIZE).contains(&lookahead) {
        Orders {
            ahead: CRUISE_DISTANCE,
            ..Default::default()
        }
    } else {
        // Stop and keep turning right until the way ahead is clear.
        Orders {
            turn: FRAC_PI_2,
            ..Default::default()
        }
    }
}

fn chase(ctx: &BrainContext) -> Orders {
    let Some(prey) = ctx.prey else {
        return Orders::default();
    };
    let bearing = ctx.position.bearing_to(&prey);
    let gun_offset = normal_relative_angle(bearing - ctx.chassis.gun_heading);
    let fire = (gun_offset.abs() < CHASER_AIM_TOLERANCE
        && ctx.chassis.gun_heat <= 0.0
        && ctx.chassis.energy > CHASER_FIRE_POWER)
        .then_some(Shot {
            power: CHASER_FIRE_POWER,
            projectile: None,
        });

    Orders {
        ahead: ctx.position.distance_to(&prey) - CHASER_RANGE,
        turn: normal_relative_angle(bearing - ctx.chassis.heading),
        turn_turret: gun_offset,
        turn_radar: 0.0,
        fire,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chassis(heading: f64) -> Chassis {
        Chassis {
            heading,
            gun_heading: heading,
            radar_heading: heading,
            radar_sweep: 0.0,
            velocity: 0.0,
            energy: 100.0,
            gun_heat: 0.0,
        }
    }

    #[test]
    fn test_names_round_trip() {
        for brain in Brain::ALL {
            assert_eq!(Brain::from_name(brain.name()), Some(brain));
        }
        assert_eq!(Brain::from_name("nobody"), None);
    }

    #[test]
    fn test_walker_turns_at_wall() {
        let c = chassis(0.0);
        let open = BrainContext {
            position: Position::new(400.0, 300.0),
            chassis: &c,
            arena: ArenaSize::new(800.0, 600.0),
            prey: None,
        };
        assert_eq!(Brain::WallWalker.orders(&open).ahead, CRUISE_DISTANCE);

        let blocked = BrainContext {
            position: Position::new(400.0, 560.0),
            ..open
        };
        let orders = Brain::WallWalker.orders(&blocked);
        assert_eq!(orders.ahead, 0.0);
        assert!(orders.turn > 0.0);
    }

    #[test]
    fn test_chaser_closes_and_fires_when_aligned() {
        let c = chassis(0.0);
        let ctx = BrainContext {
            position: Position::new(400.0, 100.0),
            chassis: &c,
            arena: ArenaSize::new(800.0, 600.0),
            prey: Some(Position::new(400.0, 500.0)),
        };
        let orders = Brain::Chaser.orders(&ctx);
        assert!((orders.ahead - 250.0).abs() < 1e-9);
        assert!(orders.turn.abs() < 1e-9);
        assert!(orders.fire.is_some());
    }
}
