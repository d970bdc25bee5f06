//! Deterministic stand-in host for SKIRMISH.
//!
//! Owns a hecs ECS world of bots and bullets, applies one controlled bot's
//! command batches, scripts the other bots, and produces the sensor events
//! the controller consumes. `harness::run_battle` plays whole matches.

pub mod brains;
pub mod components;
pub mod engine;
pub mod harness;
pub mod host;
pub mod systems;
pub mod world_setup;

pub use engine::{Arena, ArenaConfig};
pub use harness::{run_battle, BattleReport, BattleSpec};
pub use host::ArenaHost;
