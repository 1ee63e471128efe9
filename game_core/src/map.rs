use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center_half_extents(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap, boxes that only touch don't count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Playing surface, sized by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl GameMap {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Largest surface that fits a viewport of the given width
    ///
    /// Whole units, never smaller than 1x1 however narrow the viewport.
    pub fn fit_viewport(viewport_width: f32) -> Self {
        let width = Params::SURFACE_MAX_WIDTH
            .min(viewport_width - Params::VIEWPORT_MARGIN)
            .floor()
            .max(1.0);
        let height = (width * Params::SURFACE_ASPECT).floor().max(1.0);
        Self::new(width, height)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Ball serves from the center of the surface
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Resting X of a paddle, `inset` from its own side edge
    pub fn paddle_x(&self, side: Side, inset: f32) -> f32 {
        match side {
            Side::Left => inset,
            Side::Right => self.width - inset,
        }
    }

    pub fn paddle_spawn(&self, side: Side, inset: f32) -> Vec2 {
        Vec2::new(self.paddle_x(side, inset), self.height / 2.0)
    }

    /// Clamp a center Y so an object of the given half height stays on the surface
    ///
    /// On a surface shorter than the object the top edge wins, it never panics.
    pub fn clamp_y(&self, y: f32, half_extent: f32) -> f32 {
        y.min(self.height - half_extent).max(half_extent)
    }
}
