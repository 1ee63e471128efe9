//! Draw pass
//!
//! The simulation never touches a canvas directly: it describes each frame
//! through [`RenderSurface`], which the host implements for its drawing target.

use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Paddle, Particle, Star};
use crate::map::GameMap;

/// RGB color with an alpha channel in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba()` string
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// 2D drawing target
pub trait RenderSurface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);
    /// Straight line, `dash` alternates drawn and skipped lengths, empty for solid
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, dash: &[f32]);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: Color, align: TextAlign);
    /// Soft glow around subsequent fills, a blur of 0 turns it off
    fn set_glow(&mut self, blur: f32, color: Color);
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        pos: Vec2,
        size: Vec2,
        color: Color,
    },
    StrokeLine {
        from: Vec2,
        to: Vec2,
        color: Color,
        dash: Vec<f32>,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    FillText {
        text: String,
        pos: Vec2,
        font: String,
        color: Color,
        align: TextAlign,
    },
    SetGlow {
        blur: f32,
        color: Color,
    },
}

/// Surface that records draw commands instead of rasterizing them
#[derive(Debug, Clone)]
pub struct DrawList {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl RenderSurface for DrawList {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::FillRect { pos, size, color });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, dash: &[f32]) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            color,
            dash: dash.to_vec(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: Color, align: TextAlign) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            pos,
            font: font.to_string(),
            color,
            align,
        });
    }

    fn set_glow(&mut self, blur: f32, color: Color) {
        self.commands.push(DrawCommand::SetGlow { blur, color });
    }
}

const CENTER_LINE_DASH: [f32; 2] = [5.0, 15.0];
const GLOW_BLUR: f32 = 10.0;

/// Draw one frame: background, stars, court, paddles, ball, particles, then the pause overlay
pub fn draw_frame<S: RenderSurface + ?Sized>(surface: &mut S, world: &World, map: &GameMap, paused: bool) {
    let size = Vec2::new(map.width, map.height);
    surface.fill_rect(Vec2::ZERO, size, Color::BLACK);

    for (_e, star) in world.query::<&Star>().iter() {
        surface.fill_circle(star.pos, star.radius, Color::WHITE);
    }

    let mid = map.width / 2.0;
    surface.stroke_line(
        Vec2::new(mid, 0.0),
        Vec2::new(mid, map.height),
        Color::CYAN.with_alpha(0.2),
        &CENTER_LINE_DASH,
    );

    surface.set_glow(GLOW_BLUR, Color::CYAN);

    for (_e, paddle) in world.query::<&Paddle>().iter() {
        let half = paddle.half_extents();
        surface.fill_rect(paddle.center() - half, half * 2.0, Color::CYAN);
    }

    for (_e, ball) in world.query::<&Ball>().iter() {
        surface.fill_circle(ball.pos, ball.radius, Color::CYAN);
    }

    for (_e, particle) in world.query::<&Particle>().iter() {
        surface.fill_circle(
            particle.pos,
            particle.radius,
            particle.color.with_alpha(particle.alpha()),
        );
    }

    if paused {
        let center = size / 2.0;
        surface.fill_rect(Vec2::ZERO, size, Color::BLACK.with_alpha(0.5));
        surface.fill_text("PAUSED", center, "48px Orbitron", Color::CYAN, TextAlign::Center);
        surface.fill_text(
            "Press P to resume",
            center + Vec2::new(0.0, 40.0),
            "24px Orbitron",
            Color::CYAN,
            TextAlign::Center,
        );
    }

    surface.set_glow(0.0, Color::CYAN);
}
