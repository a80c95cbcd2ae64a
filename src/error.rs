//! Error types
//!
//! The simulation itself cannot fail mid-step; errors only surface while
//! loading configuration or placing the initial asteroid field.

use thiserror::Error;

/// Invalid or unreadable arena configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A numeric option that must be strictly positive was not
    #[error("`{field}` must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    /// Infinite, or large enough that a derived range overflows
    #[error("`{field}` must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    /// The split shrink factor must leave children strictly smaller
    #[error("`split_shrink_factor` must be in (0, 1), got {0}")]
    ShrinkFactorOutOfRange(f32),

    #[error("`max_placement_attempts` must be at least 1")]
    NoPlacementAttempts,
}

/// Initial placement could not be completed
#[derive(Debug, Error, PartialEq)]
pub enum SpawnError {
    /// Resampling ran out of attempts; the arena is too small for the
    /// requested asteroid field
    #[error(
        "arena too crowded: placed {placed} of {requested} asteroids before \
         exhausting {attempts} attempts"
    )]
    ArenaTooCrowded {
        placed: u32,
        requested: u32,
        attempts: u32,
    },
}

/// Any error raised while building a simulation
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Spawn(#[from] SpawnError),
}
