//! Sound trigger capability
//!
//! The game only ever fires one of three clips and never waits on them.
//! Playback is best-effort: backends swallow and log their own failures.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    /// Ball destroys a brick
    BrickHit,
    /// Ball hits a wall, the ceiling or the paddle
    Bounce,
    /// Ball lost past the bottom edge
    GameOver,
}

impl Sound {
    pub const ALL: [Sound; 3] = [Sound::BrickHit, Sound::Bounce, Sound::GameOver];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sound::BrickHit => "brick-hit",
            Sound::Bounce => "bounce",
            Sound::GameOver => "game-over",
        }
    }
}

/// Fire-and-forget playback.
///
/// Triggering a sound restarts it from the beginning; triggering the same
/// sound twice in one frame leaves only the last trigger audible.
pub trait AudioSink {
    fn play(&mut self, sound: Sound);
}

/// Records triggers in order (tests, headless runs)
impl AudioSink for Vec<Sound> {
    fn play(&mut self, sound: Sound) {
        self.push(sound);
    }
}

impl<A: AudioSink + ?Sized> AudioSink for &mut A {
    fn play(&mut self, sound: Sound) {
        (**self).play(sound);
    }
}
