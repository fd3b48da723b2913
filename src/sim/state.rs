//! Game session and entity records
//!
//! Everything a running game mutates lives in one `GameSession`; physics,
//! input and rendering all take it by reference.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;
use crate::style::{Color, Style};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ball in flight
    Playing,
    /// Every brick destroyed
    Won,
    /// Ball escaped past the bottom edge
    Lost,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement per frame
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Ball {
    /// Spawn centered horizontally just above the paddle, heading up with a
    /// random horizontal component in [-BALL_SPEED, BALL_SPEED)
    pub fn spawn<R: Rng>(width: f32, height: f32, style: &Style, rng: &mut R) -> Self {
        let dx = (rng.random::<f32>() * 2.0 - 1.0) * BALL_SPEED;
        Self {
            pos: Vec2::new(width / 2.0, height - BALL_START_RISE),
            vel: Vec2::new(dx, -BALL_SPEED),
            radius: style.ball_radius,
            color: style.ball_color.clone(),
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub color: Color,
    /// Horizontal travel per key press
    pub step: f32,
}

impl Paddle {
    /// Centered horizontally, resting on the bottom edge
    pub fn spawn(width: f32, height: f32, style: &Style) -> Self {
        Self {
            pos: Vec2::new(
                width / 2.0 - style.paddle_width / 2.0,
                height - style.paddle_height,
            ),
            width: style.paddle_width,
            height: style.paddle_height,
            color: style.paddle_color.clone(),
            step: PADDLE_STEP,
        }
    }

    /// Rightmost legal x for a playfield of `field_width`
    #[inline]
    pub fn max_x(&self, field_width: f32) -> f32 {
        (field_width - self.width).max(0.0)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }
}

/// A single brick; its size is shared through `BrickLayout`
#[derive(Debug, Clone)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub alive: bool,
}

/// Grid-level brick geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickLayout {
    pub rows: usize,
    pub cols: usize,
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub top_offset: f32,
}

impl BrickLayout {
    /// Fit `cols` bricks across the playfield, each separated by `padding`
    pub fn fit(field_width: f32, style: &Style) -> Self {
        Self {
            rows: BRICK_ROWS,
            cols: BRICK_COLS,
            width: field_width / BRICK_COLS as f32 - style.brick_padding,
            height: style.brick_height,
            padding: style.brick_padding,
            top_offset: BRICK_TOP_OFFSET,
        }
    }

    pub fn total(&self) -> usize {
        self.rows * self.cols
    }

    /// Top-left corner of the brick at (row, col)
    pub fn position(&self, row: usize, col: usize) -> Vec2 {
        Vec2::new(
            col as f32 * (self.width + self.padding) + self.padding / 2.0,
            row as f32 * (self.height + self.padding) + self.top_offset,
        )
    }
}

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Playfield size, fixed for the session
    pub width: f32,
    pub height: f32,
    pub ball: Ball,
    pub paddle: Paddle,
    pub layout: BrickLayout,
    /// Row-major: index = row * cols + col
    pub bricks: Vec<Brick>,
    pub score: u32,
    pub high_score: u32,
    pub phase: GamePhase,
}

impl GameSession {
    /// Start a new game on a `width` x `height` playfield
    pub fn new<R: Rng>(
        width: f32,
        height: f32,
        style: &Style,
        high_score: u32,
        rng: &mut R,
    ) -> Self {
        let mut session = Self {
            width,
            height,
            ball: Ball::spawn(width, height, style, rng),
            paddle: Paddle::spawn(width, height, style),
            layout: BrickLayout::fit(width, style),
            bricks: Vec::new(),
            score: 0,
            high_score,
            phase: GamePhase::Playing,
        };
        session.setup_bricks();
        session
    }

    /// (Re)populate the brick grid, all alive
    pub fn setup_bricks(&mut self) {
        let layout = self.layout;
        self.bricks.clear();
        self.bricks.reserve(layout.total());
        for row in 0..layout.rows {
            for col in 0..layout.cols {
                self.bricks.push(Brick {
                    pos: layout.position(row, col),
                    alive: true,
                });
            }
        }
    }

    pub fn total_bricks(&self) -> usize {
        self.layout.total()
    }

    pub fn bricks_remaining(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }

    /// True once the score accounts for every brick in the grid
    pub fn is_cleared(&self) -> bool {
        self.score as usize == self.total_bricks()
    }
}
