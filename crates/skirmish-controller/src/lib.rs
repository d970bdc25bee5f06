//! The stateful engagement controller for SKIRMISH.
//!
//! `EngagementController` owns the tracker, the strategy statistics, the
//! shot ledger and the movement planner, and turns one `TickInput` into one
//! `CommandBatch`. The `host` module adapts it to any simulator that offers
//! a next-tick/commit protocol.

pub mod config;
pub mod controller;
pub mod host;
pub mod ledger;

pub use config::ControllerConfig;
pub use controller::EngagementController;
pub use host::{drive, Host};
pub use ledger::{PendingShot, ShotLedger};
