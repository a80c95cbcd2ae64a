//! Asteroid Arena - wrapping-space asteroid simulation core
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (entities, motion, collisions, spawning)
//! - `config`: Data-driven arena and balance configuration
//! - `error`: Configuration and spawn errors
//!
//! Rendering and input polling live outside this crate: a caller feeds a
//! [`sim::TickInput`] plus the measured frame time into [`sim::tick`] and
//! reads back [`sim::EntityView`]s for drawing.

pub mod config;
pub mod error;
pub mod sim;

pub use config::ArenaConfig;
pub use error::{ConfigError, SimError, SpawnError};

use glam::Vec2;

/// Default balance constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 1024.0;
    pub const ARENA_HEIGHT: f32 = 768.0;
    /// How far past an edge an entity may drift before it wraps
    pub const WRAP_MARGIN: f32 = 50.0;

    /// Initial asteroid count
    pub const ASTEROID_COUNT: u32 = 20;

    /// Ship defaults
    pub const SHIP_RADIUS: f32 = 30.0;
    pub const SHIP_SCALE: f32 = 0.2;
    pub const SHIP_MAX_SPEED: f32 = 256.0;
    /// Damping rate (1.0 = lose all speed over one second of coasting)
    pub const SHIP_DAMPING: f32 = 1.0;
    /// Thrust acceleration (units/s², 25 units per frame at 60 fps)
    pub const SHIP_THRUST: f32 = 1500.0;
    /// Turn rate (radians per second)
    pub const SHIP_TURN_RATE: f32 = 2.0;

    /// Asteroid defaults
    pub const ASTEROID_RADIUS: f32 = 45.0;
    pub const ASTEROID_SCALE: f32 = 0.1;
    pub const ASTEROID_MAX_SPEED: f32 = 128.0;
    /// Initial velocity per axis is sampled from [-range, range]
    pub const ASTEROID_VELOCITY_RANGE: f32 = 50.0;
    /// Radius and scale multiplier applied to both split children
    pub const SPLIT_SHRINK_FACTOR: f32 = 0.75;
    /// Asteroids smaller than this are destroyed instead of split
    pub const MIN_SPLIT_RADIUS: f32 = 20.0;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: f32 = 10.0;
    pub const PROJECTILE_SCALE: f32 = 0.05;
    pub const PROJECTILE_SPEED: f32 = 500.0;
    /// Minimum seconds between shots
    pub const FIRE_COOLDOWN: f32 = 0.2;

    /// Resample budget per asteroid during initial placement
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;
    /// Largest frame delta the step will integrate (stall guard)
    pub const MAX_FRAME_DELTA: f32 = 0.25;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Unit facing vector for an angle (angle 0 faces +y)
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(-angle.sin(), angle.cos())
}

/// Unit strafe vector for an angle (points to the ship's right)
#[inline]
pub fn strafe_axis(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
