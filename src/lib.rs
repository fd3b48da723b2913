//! Neon Breakout - A single-screen brick breaker
//!
//! Core modules:
//! - `sim`: Simulation (entities, physics, input, game phase)
//! - `renderer`: Drawing surface abstraction and the frame's draw calls
//! - `audio`: Sound trigger capability
//! - `highscore`: Persisted high score
//! - `style`: Theme values (radii, dimensions, colors)
//! - `settings`: Host configuration
//! - `platform`: Browser/native implementations of the host capabilities
//! - `game`: Per-frame sequencing and the terminal-state machine

pub mod audio;
pub mod game;
pub mod highscore;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod style;

pub use game::{FrameOutcome, Game};
pub use settings::Settings;
pub use style::Style;

/// Game configuration constants
pub mod consts {
    /// Brick grid dimensions
    pub const BRICK_ROWS: usize = 3;
    pub const BRICK_COLS: usize = 10;
    /// Distance from the top of the playfield to the first brick row
    pub const BRICK_TOP_OFFSET: f32 = 30.0;

    /// Ball speed component magnitude (pixels per frame)
    pub const BALL_SPEED: f32 = 4.0;
    /// Ball spawns this far above the bottom edge
    pub const BALL_START_RISE: f32 = 40.0;

    /// Paddle travel per key press
    pub const PADDLE_STEP: f32 = 8.0;

    /// Glow applied to bricks, ball and paddle
    pub const GLOW_COLOR: &str = "white";
    pub const GLOW_BLUR: f32 = 7.0;

    /// Score line placement (offset from the right edge, baseline)
    pub const SCORE_RIGHT_INSET: f32 = 200.0;
    pub const SCORE_BASELINE: f32 = 30.0;
    pub const SCORE_FONT: &str = "20px Arial";
    pub const MESSAGE_FONT_FAMILY: &str = "Arial";

    pub const GAME_OVER_TEXT: &str = "GAME OVER";
    pub const WIN_TEXT: &str = "WIN";
}
