use crate::{Ball, GameMap, Paddle};
use hecs::World;

/// Integrate paddle velocity, then clamp to the surface
pub fn move_paddles(world: &mut World, map: &GameMap) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y += paddle.vel;
        paddle.y = map.clamp_y(paddle.y, paddle.height / 2.0);
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
