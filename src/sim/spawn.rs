//! Entity spawning: ship, initial asteroid field, projectiles and split children

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::entity::{Entity, Kind};
use crate::config::ArenaConfig;
use crate::error::SpawnError;
use crate::heading;

/// The player ship, parked at the arena center facing +y
pub fn spawn_ship(id: u32, config: &ArenaConfig) -> Entity {
    Entity::new(
        id,
        Kind::Ship,
        config.arena_center(),
        config.ship_radius,
        config.ship_scale,
    )
}

/// Place `count` asteroids at random positions that overlap neither
/// `existing` nor each other.
///
/// Ids are taken from `next_id`, which is advanced once per asteroid.
/// Each asteroid gets at most `config.max_placement_attempts` position
/// samples; running out means the arena cannot fit the field.
pub fn spawn_asteroids<R: Rng>(
    rng: &mut R,
    config: &ArenaConfig,
    count: u32,
    existing: &[Entity],
    next_id: &mut u32,
) -> Result<Vec<Entity>, SpawnError> {
    let mut placed: Vec<Entity> = Vec::with_capacity(count as usize);
    let range = config.asteroid_velocity_range;
    let mut total_attempts: u64 = 0;

    for n in 0..count {
        let mut asteroid = Entity::new(
            *next_id,
            Kind::Asteroid,
            Vec2::ZERO,
            config.asteroid_radius,
            config.asteroid_scale,
        );
        asteroid.vel = Vec2::new(
            rng.random_range(-range..=range),
            rng.random_range(-range..=range),
        );
        asteroid.angle = rng.random_range(0.0..TAU);

        let mut attempts = 0;
        loop {
            if attempts == config.max_placement_attempts {
                log::warn!(
                    "Gave up placing asteroid {} of {} after {} attempts",
                    n + 1,
                    count,
                    attempts
                );
                return Err(SpawnError::ArenaTooCrowded {
                    placed: n,
                    requested: count,
                    attempts,
                });
            }
            attempts += 1;

            asteroid.pos = Vec2::new(
                rng.random_range(0.0..config.arena_width),
                rng.random_range(0.0..config.arena_height),
            );

            let blocked = existing
                .iter()
                .chain(placed.iter())
                .any(|other| asteroid.collides_with(other));
            if !blocked {
                break;
            }
        }

        total_attempts += u64::from(attempts);
        *next_id += 1;
        placed.push(asteroid);
    }

    log::debug!(
        "Placed {} asteroids using {} position samples",
        placed.len(),
        total_attempts
    );
    Ok(placed)
}

/// A projectile leaving the ship's nose
pub fn spawn_projectile(id: u32, ship: &Entity, config: &ArenaConfig) -> Entity {
    let dir = heading(ship.angle);
    let mut projectile = Entity::new(
        id,
        Kind::Projectile,
        ship.pos + ship.radius * dir,
        config.projectile_radius,
        config.projectile_scale,
    );
    projectile.vel = dir * config.projectile_speed;
    projectile.angle = ship.angle;
    projectile
}

/// Break a hit asteroid in two.
///
/// `incoming` is the velocity of whatever hit it. The parent is rewritten in
/// place as the first child: shrunk, and sent perpendicular to the incoming
/// direction at twice its previous speed. The returned second child shares
/// the position and travels the opposite way with a mirrored angle.
///
/// Returns `None` when the parent is too small to split; the caller should
/// remove it.
pub fn split_asteroid(
    parent: &mut Entity,
    incoming: Vec2,
    child_id: u32,
    config: &ArenaConfig,
) -> Option<Entity> {
    if parent.radius < config.min_split_radius {
        return None;
    }

    let dir = incoming
        .try_normalize()
        .or_else(|| parent.vel.try_normalize())
        .unwrap_or_else(|| heading(parent.angle));
    let speed = parent.speed() * 2.0;

    parent.vel = dir.perp() * speed;
    parent.scale *= config.split_shrink_factor;
    parent.radius *= config.split_shrink_factor;

    let mut child = Entity::new(
        child_id,
        Kind::Asteroid,
        parent.pos,
        parent.radius,
        parent.scale,
    );
    child.vel = -parent.vel;
    child.angle = -parent.angle;

    Some(child)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_ship_at_center() {
        let config = ArenaConfig::default();
        let ship = spawn_ship(1, &config);
        assert_eq!(ship.kind, Kind::Ship);
        assert_eq!(ship.pos, Vec2::new(512.0, 384.0));
        assert_eq!(ship.vel, Vec2::ZERO);
        assert_eq!(ship.angle, 0.0);
        assert_eq!(ship.radius, 30.0);
    }

    #[test]
    fn test_spawn_asteroids_do_not_overlap() {
        let config = ArenaConfig::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let ship = spawn_ship(1, &config);
        let mut next_id = 2;

        let asteroids =
            spawn_asteroids(&mut rng, &config, 20, std::slice::from_ref(&ship), &mut next_id)
                .unwrap();
        assert_eq!(asteroids.len(), 20);
        assert_eq!(next_id, 22);

        let mut all = vec![ship];
        all.extend(asteroids);
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert!(a.separation(b) >= a.radius + b.radius);
            }
        }
        for a in &all[1..] {
            assert!(a.vel.x.abs() <= 50.0 && a.vel.y.abs() <= 50.0);
            assert!((0.0..TAU).contains(&a.angle));
            assert!(a.pos.x >= 0.0 && a.pos.x < 1024.0);
            assert!(a.pos.y >= 0.0 && a.pos.y < 768.0);
        }
    }

    #[test]
    fn test_spawn_asteroids_bounded_when_crowded() {
        let config = ArenaConfig {
            arena_width: 100.0,
            arena_height: 100.0,
            max_placement_attempts: 200,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(7);
        let mut next_id = 1;

        // Radius 45 circles cannot fit 50 times in a 100x100 box
        let err = spawn_asteroids(&mut rng, &config, 50, &[], &mut next_id).unwrap_err();
        let SpawnError::ArenaTooCrowded {
            placed,
            requested,
            attempts,
        } = err;
        assert!(placed < 50);
        assert_eq!(requested, 50);
        assert_eq!(attempts, 200);
    }

    #[test]
    fn test_spawn_projectile_from_nose() {
        let config = ArenaConfig::default();
        let mut ship = spawn_ship(1, &config);
        ship.angle = std::f32::consts::FRAC_PI_2; // facing -x

        let p = spawn_projectile(9, &ship, &config);
        assert_eq!(p.kind, Kind::Projectile);
        assert!((p.pos - Vec2::new(482.0, 384.0)).length() < 1e-3);
        assert!((p.vel - Vec2::new(-500.0, 0.0)).length() < 1e-3);
        assert_eq!(p.angle, ship.angle);
        assert_eq!(p.radius, 10.0);
    }

    #[test]
    fn test_split_asteroid_children() {
        let config = ArenaConfig::default();
        let mut parent = Entity::new(3, Kind::Asteroid, Vec2::new(100.0, 100.0), 45.0, 0.1);
        parent.vel = Vec2::new(50.0, 0.0);
        parent.angle = 0.7;

        let child = split_asteroid(&mut parent, Vec2::new(-500.0, 0.0), 4, &config).unwrap();

        assert_eq!(parent.radius, 33.75);
        assert!((parent.scale - 0.075).abs() < 1e-6);
        assert!((parent.vel - Vec2::new(0.0, -100.0)).length() < 1e-3);

        assert_eq!(child.id, 4);
        assert_eq!(child.pos, parent.pos);
        assert_eq!(child.vel, -parent.vel);
        assert_eq!(child.angle, -0.7);
        assert_eq!(child.radius, parent.radius);
        assert_eq!(child.scale, parent.scale);
    }

    #[test]
    fn test_split_below_threshold_destroys() {
        let config = ArenaConfig::default();
        let mut parent = Entity::new(3, Kind::Asteroid, Vec2::ZERO, 18.98, 0.04);
        parent.vel = Vec2::new(10.0, 10.0);
        let before = parent.clone();

        assert!(split_asteroid(&mut parent, Vec2::X, 4, &config).is_none());
        assert_eq!(parent, before);
    }

    #[test]
    fn test_split_with_stationary_projectile_uses_parent_heading() {
        let config = ArenaConfig::default();
        let mut parent = Entity::new(3, Kind::Asteroid, Vec2::ZERO, 45.0, 0.1);
        parent.vel = Vec2::new(0.0, 20.0);

        let child = split_asteroid(&mut parent, Vec2::ZERO, 4, &config).unwrap();
        assert!(parent.vel.is_finite());
        assert!((parent.vel - Vec2::new(-40.0, 0.0)).length() < 1e-3);
        assert!((child.vel - Vec2::new(40.0, 0.0)).length() < 1e-3);
    }
}
