//! Motion integration: movement, toroidal wraparound and speed governance

use glam::Vec2;

use super::entity::{Entity, Kind};
use crate::config::ArenaConfig;

/// Advance every entity by `dt` seconds
pub fn integrate(entities: &mut [Entity], config: &ArenaConfig, dt: f32) {
    let size = config.arena_size();
    for entity in entities {
        entity.pos += entity.vel * dt;
        entity.pos = wrap_position(entity.pos, size, config.wrap_margin);
        govern_speed(entity, config, dt);
        entity.age += dt;
    }
}

/// Wrap a position that drifted more than `margin` past an edge.
///
/// Each axis is handled on its own and wraps at most once, so a body that
/// crosses an edge reappears `size + 2 * margin` away, just inside the
/// opposite margin.
pub fn wrap_position(pos: Vec2, size: Vec2, margin: f32) -> Vec2 {
    Vec2::new(
        wrap_axis(pos.x, size.x, margin),
        wrap_axis(pos.y, size.y, margin),
    )
}

#[inline]
fn wrap_axis(value: f32, extent: f32, margin: f32) -> f32 {
    let span = extent + 2.0 * margin;
    if value < -margin {
        value + span
    } else if value > extent + margin {
        value - span
    } else {
        value
    }
}

/// Apply the per-kind speed rule
///
/// Ships are capped and otherwise coast down under drag, asteroids are only
/// capped, projectiles keep their muzzle velocity.
pub fn govern_speed(entity: &mut Entity, config: &ArenaConfig, dt: f32) {
    match entity.kind {
        Kind::Ship => {
            if !clamp_speed(&mut entity.vel, config.max_ship_speed) {
                let damping = (1.0 - config.ship_damping * dt).max(0.0);
                entity.vel *= damping;
            }
        }
        Kind::Asteroid => {
            clamp_speed(&mut entity.vel, config.max_asteroid_speed);
        }
        Kind::Projectile => {}
    }
}

/// Rescale `vel` down to `max` if it is faster. Returns true if it clamped.
#[inline]
pub fn clamp_speed(vel: &mut Vec2, max: f32) -> bool {
    let speed = vel.length();
    if speed > max {
        *vel *= max / speed;
        true
    } else {
        false
    }
}
