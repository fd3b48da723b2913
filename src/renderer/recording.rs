//! Surface that records draw calls instead of rasterizing them
//!
//! Used by the headless native host and by tests.

use glam::Vec2;

use super::{Paint, Rect, Surface, TextStyle};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect { rect: Rect },
    FillRect { rect: Rect, paint: Paint },
    StrokeRect { rect: Rect, paint: Paint },
    FillCircle { center: Vec2, radius: f32, paint: Paint },
    FillText { text: String, pos: Vec2, style: TextStyle, paint: Paint },
}

/// Draw calls recorded since the last clear
#[derive(Debug, Clone, Default)]
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

    /// Text drawn so far, in order
    pub fn texts(&self) -> Vec<String> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillText { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for DrawList {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// A full-surface clear starts a new frame and drops the old commands
    fn clear_rect(&mut self, rect: Rect) {
        if rect.pos == Vec2::ZERO && rect.size == Vec2::new(self.width, self.height) {
            self.commands.clear();
        }
        self.commands.push(DrawCommand::ClearRect { rect });
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            paint: paint.clone(),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, paint: &Paint) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            paint: paint.clone(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            paint: paint.clone(),
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle, paint: &Paint) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            pos,
            style: style.clone(),
            paint: paint.clone(),
        });
    }
}
