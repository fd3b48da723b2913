//! Game settings and preferences
//!
//! Read as JSON: from LocalStorage on the web, from an optional file given on
//! the command line natively. The game never writes them back.

use serde::{Deserialize, Serialize};

use crate::audio::Sound;
use crate::style::Style;

/// Audio preferences and clip locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Silence every sound
    pub muted: bool,
    /// Playback volume (0.0 - 1.0)
    pub volume: f32,
    pub brick_hit: String,
    pub bounce: String,
    pub game_over: String,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            muted: false,
            volume: 1.0,
            brick_hit: "sounds/jeej.wav".to_string(),
            bounce: "sounds/boink.wav".to_string(),
            game_over: "sounds/aaww.wav".to_string(),
        }
    }
}

impl AudioSettings {
    /// URL or path of the clip for `sound`
    pub fn clip(&self, sound: Sound) -> &str {
        match sound {
            Sound::BrickHit => &self.brick_hit,
            Sound::Bounce => &self.bounce,
            Sound::GameOver => &self.game_over,
        }
    }

    /// Volume actually applied (0 when muted)
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume.clamp(0.0, 1.0)
        }
    }
}

/// Playfield size for hosts without a window to measure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Theme values; on the web, CSS custom properties take precedence
    pub style: Style,
    pub audio: AudioSettings,
    /// Fixed serve seed (random per launch when absent)
    pub seed: Option<u64>,
    /// Native only
    pub playfield: Playfield,
    /// Native only: where the high score file lives
    pub high_score_path: String,
    /// Native only: safety cap on the headless run
    pub max_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            style: Style::default(),
            audio: AudioSettings::default(),
            seed: None,
            playfield: Playfield::default(),
            high_score_path: "neon_breakout_highscore.json".to_string(),
            max_frames: 100_000,
        }
    }
}

impl Settings {
    /// Parse settings JSON, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Invalid settings ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Seed for this run: the configured one, or `fallback`
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "neon_breakout_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from a JSON file, defaults when `path` is `None`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path.display());
                Self::from_json(&json)
            }
            Err(e) => {
                log::warn!("Cannot read {} ({e}), using defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.audio.clip(Sound::BrickHit), "sounds/jeej.wav");
        assert_eq!(settings.audio.clip(Sound::Bounce), "sounds/boink.wav");
        assert_eq!(settings.audio.clip(Sound::GameOver), "sounds/aaww.wav");
        assert_eq!(settings.playfield, Playfield::default());
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_partial_json() {
        let settings = Settings::from_json(
            r#"{"seed": 99, "audio": {"muted": true}, "style": {"paddle_width": 140.0}}"#,
        );
        assert_eq!(settings.seed_or(1), 99);
        assert!(settings.audio.muted);
        assert_eq!(settings.audio.bounce, "sounds/boink.wav");
        assert_eq!(settings.style.paddle_width, 140.0);
        assert_eq!(settings.style.ball_radius, Style::default().ball_radius);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert_eq!(Settings::from_json("{not json"), Settings::default());
    }

    #[test]
    fn test_effective_volume() {
        let mut audio = AudioSettings::default();
        audio.volume = 1.7;
        assert_eq!(audio.effective_volume(), 1.0);
        audio.muted = true;
        assert_eq!(audio.effective_volume(), 0.0);
    }

    #[test]
    fn test_seed_fallback() {
        assert_eq!(Settings::default().seed_or(5), 5);
    }

    #[test]
    fn test_written_json_reads_back() {
        let mut settings = Settings::default();
        settings.seed = Some(7);
        settings.style.win_color = "gold".into();
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json), settings);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "neon_breakout_{}_settings.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"max_frames": 500, "playfield": {"width": 640.0, "height": 480.0}}"#)
            .unwrap();
        let settings = Settings::load_from(Some(&path));
        assert_eq!(settings.max_frames, 500);
        assert_eq!(settings.playfield.width, 640.0);
        assert_eq!(settings.audio, AudioSettings::default());
        let _ = std::fs::remove_file(&path);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_load_from_missing_file() {
        let path = std::env::temp_dir().join("neon_breakout_no_such_settings.json");
        assert_eq!(Settings::load_from(Some(&path)), Settings::default());
        assert_eq!(Settings::load_from(None), Settings::default());
    }
}
