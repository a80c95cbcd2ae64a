//! Arena configuration
//!
//! Every tunable the simulation reads lives here. Loaded from JSON; any field
//! missing from the document keeps its default.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Arena and balance configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,
    /// Distance past an edge before an entity wraps to the opposite side
    pub wrap_margin: f32,
    /// Asteroids placed at session start
    pub asteroid_count: u32,

    // === Ship ===
    pub ship_radius: f32,
    pub ship_scale: f32,
    pub max_ship_speed: f32,
    /// Fraction of velocity shed per second while under the speed cap
    pub ship_damping: f32,
    /// Thrust/strafe acceleration (units/s²)
    pub ship_thrust: f32,
    /// Rotation speed (radians/s)
    pub ship_turn_rate: f32,

    // === Asteroids ===
    pub asteroid_radius: f32,
    pub asteroid_scale: f32,
    pub max_asteroid_speed: f32,
    /// Initial velocity per axis is uniform in [-range, range]
    pub asteroid_velocity_range: f32,
    pub split_shrink_factor: f32,
    pub min_split_radius: f32,

    // === Projectiles ===
    pub projectile_radius: f32,
    pub projectile_scale: f32,
    pub projectile_speed: f32,
    pub fire_cooldown: f32,
    /// Seconds a projectile lives without hitting anything (None = forever)
    pub projectile_lifetime: Option<f32>,

    // === Safety limits ===
    /// Position resamples allowed per asteroid during placement
    pub max_placement_attempts: u32,
    /// Frame deltas above this are clamped before integration
    pub max_frame_delta: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            wrap_margin: WRAP_MARGIN,
            asteroid_count: ASTEROID_COUNT,

            ship_radius: SHIP_RADIUS,
            ship_scale: SHIP_SCALE,
            max_ship_speed: SHIP_MAX_SPEED,
            ship_damping: SHIP_DAMPING,
            ship_thrust: SHIP_THRUST,
            ship_turn_rate: SHIP_TURN_RATE,

            asteroid_radius: ASTEROID_RADIUS,
            asteroid_scale: ASTEROID_SCALE,
            max_asteroid_speed: ASTEROID_MAX_SPEED,
            asteroid_velocity_range: ASTEROID_VELOCITY_RANGE,
            split_shrink_factor: SPLIT_SHRINK_FACTOR,
            min_split_radius: MIN_SPLIT_RADIUS,

            projectile_radius: PROJECTILE_RADIUS,
            projectile_scale: PROJECTILE_SCALE,
            projectile_speed: PROJECTILE_SPEED,
            fire_cooldown: FIRE_COOLDOWN,
            projectile_lifetime: None,

            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            max_frame_delta: MAX_FRAME_DELTA,
        }
    }
}

impl ArenaConfig {
    /// Arena size as a vector (width, height)
    pub fn arena_size(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height)
    }

    /// Center of the arena
    pub fn arena_center(&self) -> Vec2 {
        self.arena_size() / 2.0
    }

    /// Check every option the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("ship_radius", self.ship_radius),
            ("ship_scale", self.ship_scale),
            ("max_ship_speed", self.max_ship_speed),
            ("asteroid_radius", self.asteroid_radius),
            ("asteroid_scale", self.asteroid_scale),
            ("max_asteroid_speed", self.max_asteroid_speed),
            ("min_split_radius", self.min_split_radius),
            ("projectile_radius", self.projectile_radius),
            ("projectile_scale", self.projectile_scale),
            ("projectile_speed", self.projectile_speed),
            ("fire_cooldown", self.fire_cooldown),
            ("max_frame_delta", self.max_frame_delta),
        ];
        for (field, value) in positive {
            // Also rejects NaN
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        let non_negative = [
            ("wrap_margin", self.wrap_margin),
            ("ship_damping", self.ship_damping),
            ("ship_thrust", self.ship_thrust),
            ("ship_turn_rate", self.ship_turn_rate),
            ("asteroid_velocity_range", self.asteroid_velocity_range),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        // Initial velocities are sampled from [-range, range]
        if !(2.0 * self.asteroid_velocity_range).is_finite() {
            return Err(ConfigError::NotFinite {
                field: "asteroid_velocity_range",
                value: self.asteroid_velocity_range,
            });
        }

        if let Some(lifetime) = self.projectile_lifetime {
            if !(lifetime > 0.0) {
                return Err(ConfigError::NotPositive {
                    field: "projectile_lifetime",
                    value: lifetime,
                });
            }
            if !lifetime.is_finite() {
                return Err(ConfigError::NotFinite {
                    field: "projectile_lifetime",
                    value: lifetime,
                });
            }
        }

        if !(self.split_shrink_factor > 0.0 && self.split_shrink_factor < 1.0) {
            return Err(ConfigError::ShrinkFactorOutOfRange(
                self.split_shrink_factor,
            ));
        }

        if self.max_placement_attempts == 0 {
            return Err(ConfigError::NoPlacementAttempts);
        }

        Ok(())
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded arena config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
