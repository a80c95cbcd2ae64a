//! End-to-end arena scenarios driven through `tick`

use asteroid_arena::ArenaConfig;
use asteroid_arena::sim::{Entity, Kind, Simulation, TickInput, tick};
use glam::Vec2;

const DT: f32 = 1.0 / 120.0;

fn empty_arena() -> Simulation {
    let config = ArenaConfig {
        asteroid_count: 0,
        ..Default::default()
    };
    Simulation::empty(config, 2024).unwrap()
}

/// Angle whose heading points along `dir`
fn angle_toward(dir: Vec2) -> f32 {
    (-dir.x).atan2(dir.y)
}

#[test]
fn test_projectile_splits_asteroid_end_to_end() {
    let mut sim = empty_arena();
    let ship_pos = sim.ship().unwrap().pos;
    assert_eq!(ship_pos, Vec2::new(512.0, 384.0));

    let asteroid_id = sim.add_asteroid(Vec2::new(100.0, 100.0), Vec2::new(50.0, 0.0), 45.0);

    // Lead the moving asteroid: solve |A(t) - S| = muzzle + speed * t
    let mut t = 0.0_f32;
    for _ in 0..20 {
        let target = Vec2::new(100.0 + 50.0 * t, 100.0);
        t = ((target - ship_pos).length() - 30.0) / 500.0;
    }
    let aim = (Vec2::new(100.0 + 50.0 * t, 100.0) - ship_pos).normalize();
    sim.ship_mut().unwrap().angle = angle_toward(aim);

    let fire = TickInput {
        fire: true,
        ..Default::default()
    };
    tick(&mut sim, &fire, DT);
    assert_eq!(sim.projectile_count(), 1);
    let shot = sim
        .store
        .iter()
        .find(|e| e.kind == Kind::Projectile)
        .cloned()
        .unwrap();
    assert!((shot.vel.normalize() - aim).length() < 1e-4);

    let mut frames = 1;
    while sim.projectile_count() > 0 && frames < 480 {
        tick(&mut sim, &TickInput::default(), DT);
        frames += 1;
    }

    assert_eq!(sim.projectile_count(), 0, "projectile never hit");
    assert_eq!(sim.asteroid_count(), 2);
    assert_eq!(sim.stats.asteroids_split, 1);

    let children: Vec<&Entity> = sim
        .store
        .iter()
        .filter(|e| e.kind == Kind::Asteroid)
        .collect();
    // Parent slot survives as the first child
    assert!(children.iter().any(|e| e.id == asteroid_id));

    for child in &children {
        assert!((child.radius - 33.75).abs() < 1e-4);
        assert!((child.scale - 0.075).abs() < 1e-6);
        assert!((child.speed() - 100.0).abs() < 1e-2);
        // Perpendicular to the incoming shot
        assert!(child.vel.normalize().dot(aim).abs() < 1e-3);
    }
    assert!((children[0].vel + children[1].vel).length() < 1e-2);
}

#[test]
fn test_split_chain_until_destroyed() {
    let mut sim = empty_arena();
    let id = sim.add_asteroid(Vec2::new(200.0, 600.0), Vec2::new(0.0, 10.0), 45.0);

    // Feed a projectile into the same asteroid (or its first child) until
    // nothing is left of that lineage's slot.
    let mut radius = 45.0_f32;
    let mut hits = 0;
    while let Some(target) = sim.store.find(id).cloned() {
        let pid = sim.next_entity_id();
        let mut shot = Entity::new(pid, Kind::Projectile, target.pos + Vec2::X, 10.0, 0.05);
        shot.vel = Vec2::new(-500.0, 0.0);
        sim.store.push(shot);

        let asteroids_before = sim.asteroid_count();
        tick(&mut sim, &TickInput::default(), 0.001);
        hits += 1;

        assert_eq!(sim.projectile_count(), 0);
        if radius >= 20.0 {
            radius *= 0.75;
            assert_eq!(sim.asteroid_count(), asteroids_before + 1);
            assert!((sim.store.find(id).unwrap().radius - radius).abs() < 1e-3);
        } else {
            assert_eq!(sim.asteroid_count(), asteroids_before - 1);
        }
        assert!(hits < 10);
    }

    // 45 -> 33.75 -> 25.31 -> 18.98 -> destroyed
    assert_eq!(hits, 4);
    assert_eq!(sim.stats.asteroids_split, 3);
    assert_eq!(sim.stats.asteroids_destroyed, 1);
}

#[test]
fn test_ship_survives_full_session() {
    let mut sim = Simulation::new(ArenaConfig::default(), 77).unwrap();
    let ship_id = sim.ship().unwrap().id;

    for frame in 0..1200u32 {
        let input = TickInput {
            rotate_left: frame % 200 < 100,
            thrust_forward: frame % 90 < 30,
            fire: true,
            ..Default::default()
        };
        tick(&mut sim, &input, 1.0 / 60.0);

        let first = &sim.store.as_slice()[0];
        assert_eq!(first.kind, Kind::Ship);
        assert_eq!(first.id, ship_id);
        assert_eq!(sim.store.count(Kind::Ship), 1);
    }

    for e in sim.store.iter() {
        assert!(e.radius > 0.0);
        assert!(e.pos.is_finite() && e.vel.is_finite());
        assert!(e.pos.x >= -50.0 && e.pos.x <= 1074.0);
        assert!(e.pos.y >= -50.0 && e.pos.y <= 818.0);
        if e.kind == Kind::Asteroid {
            assert!(e.speed() <= 128.0 + 1e-3);
        }
    }
    assert_eq!(sim.stats.projectiles_fired, 100);
}

#[test]
fn test_replay_is_deterministic() {
    let run = || {
        let mut sim = Simulation::new(ArenaConfig::default(), 4242).unwrap();
        for frame in 0..600u32 {
            let input = TickInput {
                rotate_right: frame % 50 < 20,
                thrust_forward: frame % 40 < 10,
                fire: frame % 7 == 0,
                ..Default::default()
            };
            // Jittery variable frame times
            let dt = if frame % 3 == 0 { 0.02 } else { 0.015 };
            tick(&mut sim, &input, dt);
        }
        (sim.snapshot(), sim.stats)
    };

    assert_eq!(run(), run());
}
