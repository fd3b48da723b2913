//! Rendering module
//!
//! The game draws through the `Surface` trait: a handful of Canvas 2D style
//! primitives, each taking a fill/stroke color and an optional glow.

pub mod draw;
pub mod recording;

pub use draw::{draw_message, draw_scene};
pub use recording::{DrawCommand, DrawList};

use glam::Vec2;

use crate::style::Color;

/// Axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }
}

/// Uniform shadow around a shape
#[derive(Debug, Clone, PartialEq)]
pub struct Glow {
    pub color: Color,
    pub blur: f32,
}

/// Color plus optional glow for a single draw call
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub glow: Option<Glow>,
}

impl Paint {
    pub fn solid(color: Color) -> Self {
        Self { color, glow: None }
    }

    pub fn glowing(color: Color, glow: Glow) -> Self {
        Self {
            color,
            glow: Some(glow),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// CSS font shorthand, e.g. `"20px Arial"`
    pub font: String,
    pub align: TextAlign,
}

/// A fixed-size 2D drawing target
pub trait Surface {
    /// Pixel dimensions, read once at startup
    fn size(&self) -> (f32, f32);
    fn clear_rect(&mut self, rect: Rect);
    fn fill_rect(&mut self, rect: Rect, paint: &Paint);
    fn stroke_rect(&mut self, rect: Rect, paint: &Paint);
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);
    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle, paint: &Paint);
}
