//! Arena simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Elapsed time comes in from the caller, nothing reads a wall clock
//! - Seeded RNG only
//! - Stable iteration order within a frame (store order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod store;
pub mod tick;

pub use collision::{CollisionOutcome, Hit, detect_and_resolve, exchange_velocities};
pub use entity::{Entity, EntityView, Kind};
pub use motion::{clamp_speed, govern_speed, integrate, wrap_position};
pub use spawn::{spawn_asteroids, spawn_projectile, spawn_ship, split_asteroid};
pub use state::{SessionStats, Simulation};
pub use store::EntityStore;
pub use tick::{TickInput, apply_input, compact_removed, maybe_fire, tick};
