use crate::{Aabb, Ball, Config, Events, GameEvent, GameMap, Paddle, Side};
use hecs::World;

/// Reflect the ball off the top and bottom walls
pub fn check_wall_collisions(world: &mut World, map: &GameMap, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let r = ball.radius;
        if ball.pos.y - r <= 0.0 || ball.pos.y + r >= map.height {
            ball.vel.y = -ball.vel.y;
            // Clamp position to prevent stuck
            ball.pos.y = map.clamp_y(ball.pos.y, r);
            events.push(GameEvent::WallBounce { pos: ball.pos });
        }
    }
}

/// Bounce the ball off whichever paddle it overlaps while travelling toward it
pub fn check_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle boxes without holding borrows
    let paddles: Vec<(Side, Aabb)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| {
            (
                p.side,
                Aabb::from_center_half_extents(p.center(), p.half_extents()),
            )
        })
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let ball_box = Aabb::from_center_half_extents(ball.pos, glam::Vec2::splat(ball.radius));

        for (side, paddle_box) in &paddles {
            let approaching = match side {
                Side::Left => ball.vel.x < 0.0,
                Side::Right => ball.vel.x > 0.0,
            };
            if approaching && ball_box.overlaps(paddle_box) {
                ball.vel.x = config.paddle_return_speed(ball.vel.x);
                events.push(GameEvent::PaddleHit {
                    side: *side,
                    pos: ball.pos,
                });
                break;
            }
        }
    }
}

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, map: &GameMap, config: &Config, events: &mut Events) {
    check_wall_collisions(world, map, events);
    check_paddle_collisions(world, config, events);
}
