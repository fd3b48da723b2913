//! Per-frame ball integration and collision resolution
//!
//! Collisions are resolved purely by flipping the sign of a velocity
//! component. Each check below runs every frame regardless of the others, in
//! a fixed order: side walls, ceiling, paddle, bricks, bottom edge.

use super::state::{GamePhase, GameSession};
use crate::audio::Sound;

/// Something that happened during `advance`, in the order it happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball reflected off the left or right wall
    WallBounce,
    /// Ball reflected off the top edge
    CeilingBounce,
    /// Ball reflected off the paddle
    PaddleBounce,
    /// Brick at this grid index was destroyed
    BrickDestroyed { index: usize },
    /// Score passed the previous high score and must be persisted
    HighScore { score: u32 },
    /// Ball passed the bottom edge
    BallLost,
}

impl GameEvent {
    /// Sound triggered by this event, if any
    pub fn sound(&self) -> Option<Sound> {
        match self {
            GameEvent::WallBounce | GameEvent::CeilingBounce | GameEvent::PaddleBounce => {
                Some(Sound::Bounce)
            }
            GameEvent::BrickDestroyed { .. } => Some(Sound::BrickHit),
            GameEvent::BallLost => Some(Sound::GameOver),
            GameEvent::HighScore { .. } => None,
        }
    }
}

/// Advance the ball by one frame.
///
/// Does nothing once the game has reached a terminal phase.
pub fn advance(session: &mut GameSession) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if session.phase.is_terminal() {
        return events;
    }

    let width = session.width;
    let height = session.height;
    let ball = &mut session.ball;

    ball.pos += ball.vel;

    // Both walls share one flip
    if ball.pos.x + ball.radius > width || ball.pos.x - ball.radius < 0.0 {
        ball.vel.x = -ball.vel.x;
        events.push(GameEvent::WallBounce);
    }

    if ball.top() < 0.0 {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::CeilingBounce);
    }

    // No bound on paddle thickness: fires even when the ball is already below
    let paddle = &session.paddle;
    if ball.bottom() > paddle.pos.y && ball.pos.x > paddle.pos.x && ball.pos.x < paddle.right() {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::PaddleBounce);
    }

    let layout = session.layout;
    for (index, brick) in session.bricks.iter_mut().enumerate() {
        if !brick.alive {
            continue;
        }
        let hit = ball.pos.x > brick.pos.x
            && ball.pos.x < brick.pos.x + layout.width
            && ball.top() < brick.pos.y + layout.height
            && ball.bottom() > brick.pos.y;
        if !hit {
            continue;
        }

        // Simultaneous hits compound
        ball.vel.y = -ball.vel.y;
        brick.alive = false;
        session.score += 1;
        events.push(GameEvent::BrickDestroyed { index });

        if session.score > session.high_score {
            session.high_score = session.score;
            events.push(GameEvent::HighScore {
                score: session.score,
            });
        }
    }

    if ball.bottom() > height {
        session.phase = GamePhase::Lost;
        events.push(GameEvent::BallLost);
    }

    events
}
