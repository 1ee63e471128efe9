use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::components::Star;
use crate::config::Config;
use crate::map::GameMap;
use crate::resources::GameRng;

/// Scatter `config.star_count` stars uniformly over the surface
pub fn populate_starfield(world: &mut World, map: &GameMap, rng: &mut GameRng, config: &Config) {
    let (radius_min, radius_max) = config.star_radius;
    let (speed_min, speed_max) = config.star_speed;
    for _ in 0..config.star_count {
        let star = Star {
            pos: Vec2::new(rng.0.gen_range(0.0..map.width), rng.0.gen_range(0.0..map.height)),
            radius: rng.0.gen_range(radius_min..radius_max),
            speed: rng.0.gen_range(speed_min..speed_max),
        };
        world.spawn((star,));
    }
}

/// Scroll stars left, wrapping to the right edge at a fresh height
pub fn scroll_stars(world: &mut World, map: &GameMap, rng: &mut GameRng) {
    for (_entity, star) in world.query_mut::<&mut Star>() {
        star.pos.x -= star.speed;
        if star.pos.x < 0.0 {
            star.pos.x = map.width;
            star.pos.y = rng.0.gen_range(0.0..map.height);
        }
    }
}
