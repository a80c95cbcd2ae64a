//! Variable timestep simulation tick
//!
//! One call advances the session by one rendered frame:
//! input → fire → collisions → compaction → motion.

use super::collision::{CollisionOutcome, detect_and_resolve};
use super::entity::Kind;
use super::motion::integrate;
use super::spawn::{spawn_projectile, split_asteroid};
use super::state::Simulation;
use crate::{heading, normalize_angle, strafe_axis};

/// Slack on the fire cooldown so a shot landing exactly on the edge counts
const FIRE_EPSILON: f64 = 1e-6;

/// Input intents for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Turn counter-clockwise
    pub rotate_left: bool,
    /// Turn clockwise
    pub rotate_right: bool,
    pub thrust_forward: bool,
    pub thrust_backward: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    /// Fire (rate limited by the cooldown)
    pub fire: bool,
}

/// Advance the simulation by one frame of `dt` seconds
///
/// `dt` is the measured duration of the previous frame. Deltas above the
/// configured maximum are clamped; non-positive or non-finite deltas leave
/// the session untouched.
pub fn tick(sim: &mut Simulation, input: &TickInput, dt: f32) {
    if !(dt > 0.0) || !dt.is_finite() {
        log::debug!("Ignoring frame with dt = {dt}");
        return;
    }
    let dt = if dt > sim.config.max_frame_delta {
        log::warn!(
            "Frame delta {:.3}s clamped to {:.3}s",
            dt,
            sim.config.max_frame_delta
        );
        sim.config.max_frame_delta
    } else {
        dt
    };

    apply_input(sim, input, dt);
    maybe_fire(sim, input);

    let outcome = detect_and_resolve(sim.store.as_mut_slice());
    compact_removed(sim, &outcome);

    integrate(sim.store.as_mut_slice(), &sim.config, dt);

    sim.clock += f64::from(dt);
    sim.stats.frames += 1;
}

/// Steer the ship
pub fn apply_input(sim: &mut Simulation, input: &TickInput, dt: f32) {
    let turn = sim.config.ship_turn_rate * dt;
    let accel = sim.config.ship_thrust * dt;
    let Some(ship) = sim.store.ship_mut() else {
        return;
    };

    if input.rotate_left {
        ship.angle += turn;
    }
    if input.rotate_right {
        ship.angle -= turn;
    }
    ship.angle = normalize_angle(ship.angle);

    let forward = heading(ship.angle);
    let right = strafe_axis(ship.angle);
    if input.thrust_forward {
        ship.vel += forward * accel;
    }
    if input.thrust_backward {
        ship.vel -= forward * accel;
    }
    if input.strafe_left {
        ship.vel -= right * accel;
    }
    if input.strafe_right {
        ship.vel += right * accel;
    }
}

/// Spawn a projectile if fire is held and the cooldown has elapsed.
/// Returns true if a shot was fired.
pub fn maybe_fire(sim: &mut Simulation, input: &TickInput) -> bool {
    if !input.fire {
        return false;
    }

    let cooldown = f64::from(sim.config.fire_cooldown);
    let ready = match sim.last_fire {
        None => true,
        Some(last) => sim.clock - last + FIRE_EPSILON >= cooldown,
    };
    if !ready || sim.store.ship().is_none() {
        return false;
    }

    let id = sim.next_entity_id();
    let Some(ship) = sim.store.ship() else {
        return false;
    };
    let projectile = spawn_projectile(id, ship, &sim.config);
    log::trace!(
        "Fired projectile {} at t={:.3}s heading {:.2}",
        id,
        sim.clock,
        projectile.angle
    );

    sim.store.push(projectile);
    sim.last_fire = Some(sim.clock);
    sim.stats.projectiles_fired += 1;
    true
}

/// Apply the structural half of collision resolution in one pass:
/// split or destroy struck asteroids, drop spent and expired projectiles,
/// then append split children behind the survivors.
pub fn compact_removed(sim: &mut Simulation, outcome: &CollisionOutcome) {
    let mut removed = vec![false; sim.store.len()];
    let mut children = Vec::new();

    for hit in &outcome.hits {
        removed[hit.projectile] = true;

        let child_id = sim.next_id;
        let Some(asteroid) = sim.store.as_mut_slice().get_mut(hit.asteroid) else {
            continue;
        };
        match split_asteroid(asteroid, hit.incoming, child_id, &sim.config) {
            Some(child) => {
                log::debug!(
                    "Asteroid {} split (radius {:.2}), child {}",
                    asteroid.id,
                    asteroid.radius,
                    child.id
                );
                sim.next_id += 1;
                sim.stats.asteroids_split += 1;
                children.push(child);
            }
            None => {
                log::debug!("Asteroid {} destroyed", asteroid.id);
                sim.stats.asteroids_destroyed += 1;
                removed[hit.asteroid] = true;
            }
        }
    }

    if let Some(lifetime) = sim.config.projectile_lifetime {
        for (i, entity) in sim.store.iter().enumerate() {
            if entity.kind == Kind::Projectile && !removed[i] && entity.age >= lifetime {
                removed[i] = true;
                sim.stats.projectiles_expired += 1;
            }
        }
    }

    sim.stats.bounces += outcome.bounces as u32;
    sim.store.compact(&removed);
    sim.store.extend(children);
}
