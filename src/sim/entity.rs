//! Entity record shared by the ship, asteroids and projectiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// What an entity is. Fixed for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Ship,
    Asteroid,
    Projectile,
}

/// A simulated body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub kind: Kind,
    pub pos: Vec2,
    /// Velocity (units/second)
    pub vel: Vec2,
    /// Collision radius
    pub radius: f32,
    /// Facing (radians, 0 = +y)
    pub angle: f32,
    /// Visual size multiplier
    pub scale: f32,
    /// Seconds since spawn
    #[serde(default)]
    pub age: f32,
}

impl Entity {
    pub fn new(id: u32, kind: Kind, pos: Vec2, radius: f32, scale: f32) -> Self {
        Self {
            id,
            kind,
            pos,
            vel: Vec2::ZERO,
            radius,
            angle: 0.0,
            scale,
            age: 0.0,
        }
    }

    /// Distance between centers
    #[inline]
    pub fn separation(&self, other: &Entity) -> f32 {
        self.pos.distance(other.pos)
    }

    /// Circles overlap (touching exactly is not a collision)
    #[inline]
    pub fn collides_with(&self, other: &Entity) -> bool {
        self.separation(other) < self.radius + other.radius
    }

    /// Speed (velocity magnitude)
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Read-only copy of what a renderer needs
    pub fn view(&self) -> EntityView {
        EntityView {
            id: self.id,
            kind: self.kind,
            pos: self.pos,
            angle: self.angle,
            scale: self.scale,
        }
    }
}

/// Per-frame render snapshot of one entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: u32,
    pub kind: Kind,
    pub pos: Vec2,
    pub angle: f32,
    pub scale: f32,
}
