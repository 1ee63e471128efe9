use glam::Vec2;
use rand::Rng;

use crate::config::Config;
use crate::render::Color;
use crate::resources::GameRng;

/// Which side of the court, Left is player 1 and Right is player 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32, // Center Y (clamped to the surface)
    pub width: f32,
    pub height: f32,
    pub vel: f32, // Vertical velocity per step
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            side,
            x: pos.x,
            y: pos.y,
            width,
            height,
            vel: 0.0,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve held keys, up wins when both are held
    pub fn from_keys(up: bool, down: bool) -> Self {
        let dir = if up {
            -1
        } else if down {
            1
        } else {
            0
        };
        Self { dir }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Reset ball to `center`, serving left or right with a random vertical speed
    pub fn serve(&mut self, center: Vec2, config: &Config, rng: &mut GameRng) {
        self.pos = center;

        let vx = if rng.0.gen_bool(0.5) {
            config.ball_serve_speed
        } else {
            -config.ball_serve_speed
        };
        let spread = config.ball_serve_spread;
        let vy = if spread > 0.0 {
            rng.0.gen_range(-spread..spread)
        } else {
            0.0
        };

        self.vel = Vec2::new(vx, vy);
    }
}

/// Short-lived spark from a collision burst
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
    pub life: f32, // 1.0 fresh, removed at <= 0.0
}

impl Particle {
    /// Opacity tracks remaining life linearly
    pub fn alpha(&self) -> f32 {
        self.life.clamp(0.0, 1.0)
    }
}

/// Background star, scrolls left and wraps
#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
}
