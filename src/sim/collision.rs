//! Collision detection and response for circular bodies
//!
//! Every unordered pair is tested once. Velocity-only responses (asteroid
//! bounces) are applied immediately; anything that changes the store's shape
//! (a projectile hitting an asteroid) is recorded in a [`CollisionOutcome`]
//! and applied after the pass, so indices stay valid throughout.

use glam::Vec2;

use super::entity::{Entity, Kind};

/// Distances below this are treated as coincident centers
const MIN_SEPARATION: f32 = 1e-4;

/// A projectile striking an asteroid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index of the struck asteroid
    pub asteroid: usize,
    /// Index of the spent projectile
    pub projectile: usize,
    /// Projectile velocity at impact
    pub incoming: Vec2,
}

/// Structural changes collected during one detection pass
#[derive(Debug, Clone, Default)]
pub struct CollisionOutcome {
    pub hits: Vec<Hit>,
    /// Asteroid pairs that exchanged velocity this frame
    pub bounces: usize,
}

impl CollisionOutcome {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty() && self.bounces == 0
    }
}

/// Test all pairs, bounce overlapping asteroids and collect projectile hits.
///
/// An asteroid or projectile involved in a hit is spent for the rest of the
/// pass, so one projectile destroys at most one asteroid and an asteroid is
/// split at most once per frame. Ship overlaps are ignored.
pub fn detect_and_resolve(entities: &mut [Entity]) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();
    let mut spent = vec![false; entities.len()];

    for i in 0..entities.len() {
        for j in (i + 1)..entities.len() {
            if spent[i] || spent[j] {
                continue;
            }
            if !entities[i].collides_with(&entities[j]) {
                continue;
            }

            match (entities[i].kind, entities[j].kind) {
                (Kind::Projectile, Kind::Asteroid) => {
                    spent[i] = true;
                    spent[j] = true;
                    outcome.hits.push(Hit {
                        asteroid: j,
                        projectile: i,
                        incoming: entities[i].vel,
                    });
                }
                (Kind::Asteroid, Kind::Projectile) => {
                    spent[i] = true;
                    spent[j] = true;
                    outcome.hits.push(Hit {
                        asteroid: i,
                        projectile: j,
                        incoming: entities[j].vel,
                    });
                }
                (Kind::Asteroid, Kind::Asteroid) => {
                    let (head, tail) = entities.split_at_mut(j);
                    if exchange_velocities(&mut head[i], &mut tail[0]) {
                        outcome.bounces += 1;
                    }
                }
                // Ship vs asteroid: the ship is invulnerable.
                // Everything else never interacts.
                _ => {}
            }
        }
    }

    outcome
}

/// Redirect two overlapping asteroids along their separation axis.
///
/// With `n` the unit vector from `b` to `a`, `a` leaves along `n` at `b`'s
/// speed and `b` leaves along `-n` at `a`'s speed. This is a stylized bounce,
/// not a momentum-conserving one.
///
/// Coincident centers have no separation axis; the pair is left untouched
/// and `false` is returned.
pub fn exchange_velocities(a: &mut Entity, b: &mut Entity) -> bool {
    let delta = a.pos - b.pos;
    let d = delta.length();
    if !(d > MIN_SEPARATION) {
        return false;
    }

    let v1 = a.speed();
    let v2 = b.speed();
    let n = delta / d;

    a.vel = v2 * n;
    b.vel = -v1 * n;
    true
}
