//! ECS systems run by the arena each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only
//! passes). State that outlives a tick lives in components or in `Arena`.

pub mod bullets;
pub mod cleanup;
pub mod gunnery;
pub mod movement;
pub mod radar;
pub mod rotation;
