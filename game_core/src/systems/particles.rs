use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::components::Particle;
use crate::config::Config;
use crate::render::Color;
use crate::resources::GameRng;

/// Emit a burst of `count` particles at `pos`, each with its own random velocity and size
pub fn spawn_particles(
    world: &mut World,
    rng: &mut GameRng,
    config: &Config,
    pos: Vec2,
    color: Color,
    count: usize,
) {
    let speed = config.particle_speed;
    let (radius_min, radius_max) = config.particle_radius;
    for _ in 0..count {
        let vel = Vec2::new(rng.0.gen_range(-speed..speed), rng.0.gen_range(-speed..speed));
        let radius = rng.0.gen_range(radius_min..radius_max);
        world.spawn((Particle {
            pos,
            vel,
            radius,
            color,
            life: 1.0,
        },));
    }
}

/// Move every particle, age it by `decay`, and despawn the spent ones
pub fn advance_particles(world: &mut World, decay: f32) {
    let mut to_remove = Vec::new();

    for (entity, particle) in world.query_mut::<&mut Particle>() {
        particle.pos += particle.vel;
        particle.life -= decay;

        if particle.life <= 0.0 {
            to_remove.push(entity);
        }
    }

    for entity in to_remove {
        let _ = world.despawn(entity);
    }
}

pub fn particle_count(world: &World) -> usize {
    world.query::<&Particle>().iter().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Params;

    #[test]
    fn test_spawn_yields_exact_count() {
        let mut world = World::new();
        let mut rng = GameRng::new(1);

        spawn_particles(&mut world, &mut rng, &Config::new(), Vec2::new(50.0, 60.0), Color::CYAN, 10);

        assert_eq!(particle_count(&world), 10);
        for (_e, p) in world.query::<&Particle>().iter() {
            assert_eq!(p.pos, Vec2::new(50.0, 60.0));
            assert_eq!(p.life, 1.0);
            assert_eq!(p.color, Color::CYAN);
            assert!(p.vel.x >= -Params::PARTICLE_SPEED && p.vel.x < Params::PARTICLE_SPEED);
            assert!(p.vel.y >= -Params::PARTICLE_SPEED && p.vel.y < Params::PARTICLE_SPEED);
            assert!(p.radius >= Params::PARTICLE_RADIUS_MIN && p.radius < Params::PARTICLE_RADIUS_MAX);
        }
    }

    #[test]
    fn test_spawn_uses_configured_ranges() {
        let mut world = World::new();
        let mut rng = GameRng::new(9);
        let config = Config {
            particle_speed: 0.5,
            particle_radius: (6.0, 7.0),
            ..Config::new()
        };

        spawn_particles(&mut world, &mut rng, &config, Vec2::ZERO, Color::WHITE, 30);

        for (_e, p) in world.query::<&Particle>().iter() {
            assert!(p.vel.x.abs() <= 0.5 && p.vel.y.abs() <= 0.5);
            assert!(p.radius >= 6.0 && p.radius < 7.0);
        }
    }

    #[test]
    fn test_particles_move_and_fade() {
        let mut world = World::new();
        let mut rng = GameRng::new(2);
        spawn_particles(&mut world, &mut rng, &Config::new(), Vec2::ZERO, Color::CYAN, 1);
        let vel = world.query::<&Particle>().iter().next().map(|(_e, p)| p.vel).unwrap();

        advance_particles(&mut world, Params::PARTICLE_DECAY);

        let (pos, life) = world
            .query::<&Particle>()
            .iter()
            .next()
            .map(|(_e, p)| (p.pos, p.life))
            .unwrap();
        assert_eq!(pos, vel);
        assert!((life - 0.98).abs() < 1e-6);
    }

    #[test]
    fn test_particles_expire_within_fifty_one_steps() {
        let mut world = World::new();
        let mut rng = GameRng::new(3);
        spawn_particles(&mut world, &mut rng, &Config::new(), Vec2::ZERO, Color::CYAN, 20);

        let mut steps = 0;
        while particle_count(&world) > 0 {
            advance_particles(&mut world, Params::PARTICLE_DECAY);
            steps += 1;
            assert!(steps <= 51, "Particles outlived their burst");
        }
        assert!(steps >= 49, "Particles expired too early, after {} steps", steps);
    }

    #[test]
    fn test_advance_leaves_other_entities_alone() {
        let mut world = World::new();
        let mut rng = GameRng::new(4);
        let other = world.spawn((42u32,));
        spawn_particles(&mut world, &mut rng, &Config::new(), Vec2::ZERO, Color::CYAN, 3);

        for _ in 0..60 {
            advance_particles(&mut world, Params::PARTICLE_DECAY);
        }

        assert_eq!(particle_count(&world), 0);
        assert!(world.contains(other));
    }
}
