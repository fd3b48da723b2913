//! Keyboard control of the paddle

use super::state::GameSession;

/// A key press as seen by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    /// Anything the game doesn't react to
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            _ => Key::Other,
        }
    }
}

/// Step the paddle one notch in response to a key press.
///
/// The guard looks at the paddle's position before the move; the result is
/// then clamped so the paddle never leaves the playfield.
pub fn on_key(session: &mut GameSession, key: Key) {
    let field_width = session.width;
    let paddle = &mut session.paddle;
    match key {
        Key::Left if paddle.pos.x > 0.0 => paddle.pos.x -= paddle.step,
        Key::Right if paddle.right() < field_width => paddle.pos.x += paddle.step,
        _ => return,
    }
    paddle.pos.x = paddle.pos.x.clamp(0.0, paddle.max_x(field_width));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GamePhase;
    use crate::style::Style;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn session() -> GameSession {
        let mut rng = Pcg32::seed_from_u64(1);
        GameSession::new(800.0, 600.0, &Style::default(), 0, &mut rng)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_dom("ArrowLeft"), Key::Left);
        assert_eq!(Key::from_dom("ArrowRight"), Key::Right);
        assert_eq!(Key::from_dom("a"), Key::Other);
        assert_eq!(Key::from_dom("Left"), Key::Other);
    }

    #[test]
    fn test_left_and_right_step() {
        let mut s = session();
        let start = s.paddle.pos.x;
        on_key(&mut s, Key::Left);
        assert_eq!(s.paddle.pos.x, start - 8.0);
        on_key(&mut s, Key::Right);
        on_key(&mut s, Key::Right);
        assert_eq!(s.paddle.pos.x, start + 8.0);
    }

    #[test]
    fn test_other_key_ignored() {
        let mut s = session();
        let start = s.paddle.pos.x;
        on_key(&mut s, Key::Other);
        assert_eq!(s.paddle.pos.x, start);
    }

    #[test]
    fn test_left_edge_is_reachable_not_crossable() {
        let mut s = session();
        s.paddle.pos.x = 3.0;
        on_key(&mut s, Key::Left);
        assert_eq!(s.paddle.pos.x, 0.0);
        on_key(&mut s, Key::Left);
        assert_eq!(s.paddle.pos.x, 0.0);
    }

    #[test]
    fn test_right_edge_lands_exactly() {
        let mut s = session();
        s.paddle.pos.x = 692.0;
        on_key(&mut s, Key::Right);
        assert_eq!(s.paddle.pos.x, 700.0);
        on_key(&mut s, Key::Right);
        assert_eq!(s.paddle.pos.x, 700.0);
    }

    #[test]
    fn test_keys_still_move_after_game_over() {
        let mut s = session();
        s.phase = GamePhase::Lost;
        let start = s.paddle.pos.x;
        on_key(&mut s, Key::Left);
        assert_eq!(s.paddle.pos.x, start - 8.0);
        assert_eq!(s.phase, GamePhase::Lost);
    }

    fn key_strategy() -> impl Strategy<Value = Key> {
        prop_oneof![Just(Key::Left), Just(Key::Right), Just(Key::Other)]
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_bounds(
            width in 120.0f32..1600.0,
            keys in prop::collection::vec(key_strategy(), 0..400),
        ) {
            let mut rng = Pcg32::seed_from_u64(9);
            let mut s = GameSession::new(width, 600.0, &Style::default(), 0, &mut rng);
            for key in keys {
                on_key(&mut s, key);
                prop_assert!(s.paddle.pos.x >= 0.0);
                prop_assert!(s.paddle.pos.x <= width - s.paddle.width);
            }
        }
    }
}
