//! Core types and definitions for SKIRMISH.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, sensor events, command batches, per-tick input and constants.
//! It has no dependency on any host simulator.

pub mod ballistics;
pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
