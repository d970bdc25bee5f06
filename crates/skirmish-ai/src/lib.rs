//! Engagement policies for SKIRMISH.
//!
//! Pure functions and small owned tables: opponent tracking, per-opponent
//! strategy statistics, target and strategy selection, aim prediction, the
//! risk field used for positioning, and radar steering. Nothing here talks
//! to a host; the controller crate wires these together each tick.

pub mod aim;
pub mod movement;
pub mod radar;
pub mod risk;
pub mod stats;
pub mod strategy;
pub mod targeting;
pub mod tracker;

pub use skirmish_core as core;

#[cfg(test)]
mod tests;
