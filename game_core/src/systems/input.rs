use hecs::World;

use crate::{Config, InputState, Paddle, PaddleIntent};

/// Resolve held controls into each paddle's intent and vertical velocity
pub fn assign_paddle_velocity(world: &mut World, input: &InputState, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &mut PaddleIntent)>() {
        *intent = input.intent(paddle.side);
        paddle.vel = intent.dir as f32 * config.paddle_speed;
    }
}
