//! Simulation context
//!
//! Everything a session mutates lives in one [`Simulation`]: the entity
//! store, the clock, the last fire time and the seeded RNG. Nothing is
//! process-global, so several sessions can run side by side.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityView, Kind};
use super::spawn::{spawn_asteroids, spawn_ship};
use super::store::EntityStore;
use crate::config::ArenaConfig;
use crate::error::{ConfigError, SimError};

/// Running totals for a session (read-only for callers)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Completed simulation steps
    pub frames: u64,
    pub projectiles_fired: u32,
    /// Asteroids broken into two
    pub asteroids_split: u32,
    /// Asteroids removed outright (too small to split)
    pub asteroids_destroyed: u32,
    /// Projectiles removed by the lifetime limit
    pub projectiles_expired: u32,
    /// Asteroid pairs that bounced
    pub bounces: u32,
}

/// One running arena session
#[derive(Debug, Clone)]
pub struct Simulation {
    pub config: ArenaConfig,
    /// Session seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Live entities, ship at index 0
    pub store: EntityStore,
    /// Simulated seconds since the session began
    pub clock: f64,
    /// Clock value of the last accepted fire command
    pub last_fire: Option<f64>,
    pub stats: SessionStats,
    pub(crate) next_id: u32,
}

impl Simulation {
    /// Start a session: ship at the center plus the configured asteroid field
    pub fn new(config: ArenaConfig, seed: u64) -> Result<Self, SimError> {
        let mut sim = Self::empty(config, seed)?;

        let count = sim.config.asteroid_count;
        let asteroids = spawn_asteroids(
            &mut sim.rng,
            &sim.config,
            count,
            sim.store.as_slice(),
            &mut sim.next_id,
        )?;
        sim.store.extend(asteroids);

        log::info!(
            "Arena {}x{} ready: seed {}, {} asteroids",
            sim.config.arena_width,
            sim.config.arena_height,
            seed,
            count
        );
        Ok(sim)
    }

    /// Start a session with only the ship; asteroids are added by the caller
    pub fn empty(config: ArenaConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut sim = Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            store: EntityStore::new(),
            clock: 0.0,
            last_fire: None,
            stats: SessionStats::default(),
            next_id: 1,
        };

        let id = sim.next_entity_id();
        let ship = spawn_ship(id, &sim.config);
        sim.store.push(ship);
        Ok(sim)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Place an asteroid explicitly. Scale follows radius relative to the
    /// configured full-size asteroid. Returns the new entity's id.
    pub fn add_asteroid(&mut self, pos: Vec2, vel: Vec2, radius: f32) -> u32 {
        let id = self.next_entity_id();
        let scale = self.config.asteroid_scale * radius / self.config.asteroid_radius;
        let mut asteroid = Entity::new(id, Kind::Asteroid, pos, radius, scale);
        asteroid.vel = vel;
        self.store.push(asteroid);
        id
    }

    pub fn ship(&self) -> Option<&Entity> {
        self.store.ship()
    }

    pub fn ship_mut(&mut self) -> Option<&mut Entity> {
        self.store.ship_mut()
    }

    /// Render snapshot for this frame, in store order
    pub fn snapshot(&self) -> Vec<EntityView> {
        self.store.views()
    }

    pub fn asteroid_count(&self) -> usize {
        self.store.count(Kind::Asteroid)
    }

    pub fn projectile_count(&self) -> usize {
        self.store.count(Kind::Projectile)
    }
}
