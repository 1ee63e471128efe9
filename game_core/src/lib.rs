pub mod audio;
pub mod clock;
pub mod components;
pub mod config;
pub mod game;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use audio::*;
pub use clock::*;
pub use components::*;
pub use config::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one fixed step of the deterministic Pong simulation
///
/// Collision and scoring results are pushed onto `events` in the order they happened.
pub fn step(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    input: &InputState,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // 1. Held keys become paddle velocities
    assign_paddle_velocity(world, input, config);

    // 2-3. Integrate, then clamp paddles to the surface
    move_paddles(world, map);
    move_ball(world);

    // 4-5. Walls, then paddles
    check_collisions(world, map, config, events);

    // 6. Ball left the surface
    check_scoring(world, map, score, events, rng, config);

    // 7. Signalled every step once reached, the caller decides what to do with it
    check_winner(score, config, events);
}

/// Helper to create a paddle entity at its resting position
pub fn create_paddle(world: &mut World, side: Side, map: &GameMap, config: &Config) -> hecs::Entity {
    let pos = map.paddle_spawn(side, config.paddle_inset);
    world.spawn((
        Paddle::new(side, pos, config.paddle_width, config.paddle_height),
        PaddleIntent::new(),
    ))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2, radius: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, radius),))
}
