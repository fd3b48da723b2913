//! Browser host capabilities (web-sys)

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlAudioElement, HtmlCanvasElement, Storage, Window};

use crate::audio::{AudioSink, Sound};
use crate::highscore::ScoreStore;
use crate::renderer::{Paint, Rect, Surface, TextStyle};
use crate::settings::AudioSettings;
use crate::style::Style;

/// Canvas 2D drawing surface
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl CanvasSurface {
    /// Wrap `canvas`, sizing it once to the window's inner size
    pub fn fill_window(window: &Window, canvas: &HtmlCanvasElement) -> Option<Self> {
        let width = window.inner_width().ok()?.as_f64()? as u32;
        let height = window.inner_height().ok()?.as_f64()? as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            width: width as f32,
            height: height as f32,
        })
    }

    fn apply(&self, paint: &Paint) {
        match &paint.glow {
            Some(glow) => {
                self.ctx.set_shadow_color(glow.color.as_str());
                self.ctx.set_shadow_blur(glow.blur as f64);
            }
            None => {
                self.ctx.set_shadow_color("transparent");
                self.ctx.set_shadow_blur(0.0);
            }
        }
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.ctx.clear_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.apply(paint);
        self.ctx.set_fill_style_str(paint.color.as_str());
        self.ctx.fill_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn stroke_rect(&mut self, rect: Rect, paint: &Paint) {
        self.apply(paint);
        self.ctx.set_stroke_style_str(paint.color.as_str());
        self.ctx.stroke_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.apply(paint);
        self.ctx.set_fill_style_str(paint.color.as_str());
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        {
            log::warn!("arc failed: {e:?}");
        }
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle, paint: &Paint) {
        self.apply(paint);
        self.ctx.set_font(&style.font);
        self.ctx.set_text_align(style.align.as_str());
        self.ctx.set_fill_style_str(paint.color.as_str());
        let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }
}

/// High score store over `window.localStorage`
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn new(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable - high score will not persist");
        }
        Self { storage }
    }
}

impl ScoreStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("Failed to store {key}: {e:?}");
            }
        }
    }
}

/// One shared `<audio>` element per sound
pub struct HtmlAudio {
    /// Indexed by `Sound as usize`
    clips: [Option<HtmlAudioElement>; 3],
    volume: f64,
}

impl HtmlAudio {
    pub fn new(settings: &AudioSettings) -> Self {
        let volume = settings.effective_volume() as f64;
        let clips = Sound::ALL.map(|sound| {
            let clip = HtmlAudioElement::new_with_src(settings.clip(sound)).ok();
            if clip.is_none() {
                log::warn!("Failed to create audio for {} - sound disabled", sound.as_str());
            }
            clip
        });
        Self { clips, volume }
    }
}

impl AudioSink for HtmlAudio {
    fn play(&mut self, sound: Sound) {
        if self.volume <= 0.0 {
            return;
        }
        let Some(clip) = &self.clips[sound as usize] else {
            return;
        };
        clip.set_volume(self.volume);
        clip.set_current_time(0.0);
        // Rejected promises (autoplay policy) are ignored
        let _ = clip.play();
    }
}

/// Resolve the theme from CSS custom properties on `<html>`
pub fn style_from_css(window: &Window, fallback: &Style) -> Style {
    let declaration = window
        .document()
        .and_then(|doc| doc.document_element())
        .and_then(|root| window.get_computed_style(&root).ok().flatten());

    let Some(declaration) = declaration else {
        log::warn!("No computed style available, using configured style");
        return fallback.clone();
    };

    fallback.with_properties(|name| {
        declaration
            .get_property_value(name)
            .ok()
            .filter(|v| !v.trim().is_empty())
    })
}
