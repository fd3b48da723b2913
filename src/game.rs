//! Frame sequencing and end-of-game handling
//!
//! `Game::frame` is the body of the animation loop. The host calls it once
//! per display refresh and schedules another call only while it returns
//! `FrameOutcome::Continue`.

use rand::Rng;

use crate::audio::AudioSink;
use crate::consts::{GAME_OVER_TEXT, WIN_TEXT};
use crate::highscore::{ScoreStore, load_high_score, save_high_score};
use crate::renderer::{Surface, draw_message, draw_scene};
use crate::sim::{GameEvent, GamePhase, GameSession, Key, advance, on_key};
use crate::style::Style;

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Request exactly one more frame
    Continue,
    /// Terminal message is on screen; request nothing
    Stop,
}

/// A running game and the host capabilities it talks to
pub struct Game<A: AudioSink, S: ScoreStore> {
    pub session: GameSession,
    pub style: Style,
    audio: A,
    store: S,
}

impl<A: AudioSink, S: ScoreStore> Game<A, S> {
    /// Start a game on a `width` x `height` playfield, reading the high score
    /// from `store`
    pub fn new<R: Rng>(width: f32, height: f32, style: Style, audio: A, store: S, rng: &mut R) -> Self {
        let high_score = load_high_score(&store);
        let session = GameSession::new(width, height, &style, high_score, rng);
        log::info!(
            "New game on {}x{} playfield, {} bricks",
            width,
            height,
            session.total_bricks()
        );
        Self {
            session,
            style,
            audio,
            store,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Key press from the host
    pub fn on_key(&mut self, key: Key) {
        on_key(&mut self.session, key);
    }

    /// Draw the current state, advance one step, then decide whether the
    /// game goes on
    pub fn frame<D: Surface + ?Sized>(&mut self, surface: &mut D) -> FrameOutcome {
        if self.session.phase.is_terminal() {
            self.draw_end_message(surface);
            return FrameOutcome::Stop;
        }

        draw_scene(surface, &self.session, &self.style);

        let events = advance(&mut self.session);
        self.dispatch(&events);

        if self.session.phase == GamePhase::Lost {
            log::info!("Game over with score {}", self.session.score);
            self.draw_end_message(surface);
            return FrameOutcome::Stop;
        }

        if self.session.is_cleared() {
            self.session.phase = GamePhase::Won;
            log::info!("All bricks cleared, score {}", self.session.score);
            self.draw_end_message(surface);
            return FrameOutcome::Stop;
        }

        FrameOutcome::Continue
    }

    /// Play sounds and persist high scores in the order they happened
    fn dispatch(&mut self, events: &[GameEvent]) {
        for event in events {
            log::debug!("{event:?}");
            if let Some(sound) = event.sound() {
                self.audio.play(sound);
            }
            if let GameEvent::HighScore { score } = *event {
                save_high_score(&mut self.store, score);
            }
        }
    }

    fn draw_end_message<D: Surface + ?Sized>(&self, surface: &mut D) {
        let (text, color) = match self.session.phase {
            GamePhase::Lost => (GAME_OVER_TEXT, &self.style.game_over_color),
            GamePhase::Won => (WIN_TEXT, &self.style.win_color),
            GamePhase::Playing => return,
        };
        draw_message(surface, &self.session, &self.style, text, color);
    }

    /// Drive frames back to back until the game ends or `max_frames` pass.
    ///
    /// Returns the number of frames run.
    pub fn run_until_end<D: Surface + ?Sized>(&mut self, surface: &mut D, max_frames: u64) -> u64 {
        let mut frames = 0;
        while frames < max_frames {
            frames += 1;
            if self.frame(surface) == FrameOutcome::Stop {
                break;
            }
        }
        frames
    }
}
