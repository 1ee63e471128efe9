//! Canvas 2D render surface

use game_core::{Color, RenderSurface, TextAlign};
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Resize the backing store, the next frame redraws everything
    pub fn resize(&mut self, width: f32, height: f32) {
        self.canvas.set_width(width.max(1.0) as u32);
        self.canvas.set_height(height.max(1.0) as u32);
    }

    fn try_stroke_line(&self, from: Vec2, to: Vec2, color: Color, dash: &[f32]) -> Result<(), JsValue> {
        let pattern = js_sys::Array::new();
        for len in dash {
            pattern.push(&JsValue::from_f64(*len as f64));
        }
        self.ctx.set_line_dash(&pattern)?;
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.stroke();
        self.ctx.set_line_dash(&js_sys::Array::new())
    }

    fn try_fill_circle(&self, center: Vec2, radius: f32, color: Color) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        )?;
        self.ctx.fill();
        Ok(())
    }
}

impl RenderSurface for CanvasSurface {
    fn width(&self) -> f32 {
        self.canvas.width() as f32
    }

    fn height(&self) -> f32 {
        self.canvas.height() as f32
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, dash: &[f32]) {
        if let Err(e) = self.try_stroke_line(from, to, color, dash) {
            log::warn!("stroke_line failed: {:?}", e);
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if let Err(e) = self.try_fill_circle(center, radius, color) {
            log::warn!("fill_circle failed: {:?}", e);
        }
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: Color, align: TextAlign) {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_text_align(match align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        });
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }

    fn set_glow(&mut self, blur: f32, color: Color) {
        self.ctx.set_shadow_blur(blur as f64);
        self.ctx.set_shadow_color(&color.to_css());
    }
}
