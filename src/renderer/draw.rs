//! Draw calls for one frame

use glam::Vec2;

use super::{Glow, Paint, Rect, Surface, TextAlign, TextStyle};
use crate::consts::*;
use crate::sim::GameSession;
use crate::style::{Color, Style};

fn glow() -> Glow {
    Glow {
        color: Color::new(GLOW_COLOR),
        blur: GLOW_BLUR,
    }
}

/// Alive bricks: filled, then outlined, both glowing
pub fn draw_bricks<S: Surface + ?Sized>(surface: &mut S, session: &GameSession, style: &Style) {
    let fill = Paint::glowing(style.brick_color.clone(), glow());
    let outline = Paint::glowing(style.brick_outline_color.clone(), glow());
    let layout = session.layout;
    for brick in session.bricks.iter().filter(|b| b.alive) {
        let rect = Rect::new(brick.pos.x, brick.pos.y, layout.width, layout.height);
        surface.fill_rect(rect, &fill);
        surface.stroke_rect(rect, &outline);
    }
}

pub fn draw_ball<S: Surface + ?Sized>(surface: &mut S, session: &GameSession) {
    let ball = &session.ball;
    surface.fill_circle(ball.pos, ball.radius, &Paint::glowing(ball.color.clone(), glow()));
}

pub fn draw_paddle<S: Surface + ?Sized>(surface: &mut S, session: &GameSession) {
    let paddle = &session.paddle;
    let rect = Rect::new(paddle.pos.x, paddle.pos.y, paddle.width, paddle.height);
    surface.fill_rect(rect, &Paint::glowing(paddle.color.clone(), glow()));
}

/// Score line in the top-right corner
pub fn draw_score<S: Surface + ?Sized>(surface: &mut S, session: &GameSession, style: &Style) {
    let text = format!("Score: {} Highscore: {}", session.score, session.high_score);
    let pos = Vec2::new(session.width - SCORE_RIGHT_INSET, SCORE_BASELINE);
    let text_style = TextStyle {
        font: SCORE_FONT.to_string(),
        align: TextAlign::Left,
    };
    surface.fill_text(&text, pos, &text_style, &Paint::solid(style.score_color.clone()));
}

/// Centered end-of-game message
pub fn draw_message<S: Surface + ?Sized>(
    surface: &mut S,
    session: &GameSession,
    style: &Style,
    text: &str,
    color: &Color,
) {
    let pos = Vec2::new(session.width / 2.0, session.height / 2.0);
    let text_style = TextStyle {
        font: style.message_font(),
        align: TextAlign::Center,
    };
    surface.fill_text(text, pos, &text_style, &Paint::solid(color.clone()));
}

/// Clear the playfield and draw bricks, ball, paddle and score
pub fn draw_scene<S: Surface + ?Sized>(surface: &mut S, session: &GameSession, style: &Style) {
    surface.clear_rect(Rect::new(0.0, 0.0, session.width, session.height));
    draw_bricks(surface, session, style);
    draw_ball(surface, session);
    draw_paddle(surface, session);
    draw_score(surface, session, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, DrawList};
    use crate::sim::GameSession;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn session() -> GameSession {
        let mut rng = Pcg32::seed_from_u64(3);
        GameSession::new(800.0, 600.0, &Style::default(), 4, &mut rng)
    }

    #[test]
    fn test_scene_order() {
        let s = session();
        let mut list = DrawList::new(800.0, 600.0);
        draw_scene(&mut list, &s, &Style::default());

        let cmds = &list.commands;
        // clear + 30 * (fill + stroke) + ball + paddle + score
        assert_eq!(cmds.len(), 1 + 60 + 3);
        assert!(matches!(cmds[0], DrawCommand::ClearRect { .. }));
        assert!(matches!(cmds[1], DrawCommand::FillRect { .. }));
        assert!(matches!(cmds[2], DrawCommand::StrokeRect { .. }));
        assert!(matches!(cmds[61], DrawCommand::FillCircle { .. }));
        assert!(matches!(cmds[62], DrawCommand::FillRect { .. }));
        assert!(matches!(cmds[63], DrawCommand::FillText { .. }));
    }

    #[test]
    fn test_dead_bricks_not_drawn() {
        let mut s = session();
        s.bricks[0].alive = false;
        s.bricks[29].alive = false;
        let mut list = DrawList::new(800.0, 600.0);
        draw_bricks(&mut list, &s, &Style::default());
        assert_eq!(list.commands.len(), 56);
    }

    #[test]
    fn test_shapes_glow_text_does_not() {
        let s = session();
        let mut list = DrawList::new(800.0, 600.0);
        draw_scene(&mut list, &s, &Style::default());
        for cmd in &list.commands {
            match cmd {
                DrawCommand::FillRect { paint, .. }
                | DrawCommand::StrokeRect { paint, .. }
                | DrawCommand::FillCircle { paint, .. } => {
                    let glow = paint.glow.as_ref().expect("shapes glow");
                    assert_eq!(glow.blur, GLOW_BLUR);
                }
                DrawCommand::FillText { paint, .. } => assert!(paint.glow.is_none()),
                DrawCommand::ClearRect { .. } => {}
            }
        }
    }

    #[test]
    fn test_score_text_and_placement() {
        let s = session();
        let mut list = DrawList::new(800.0, 600.0);
        draw_score(&mut list, &s, &Style::default());
        assert_eq!(
            list.texts(),
            vec!["Score: 0 Highscore: 4".to_string()]
        );
        match &list.commands[0] {
            DrawCommand::FillText { pos, style, .. } => {
                assert_eq!(*pos, Vec2::new(600.0, 30.0));
                assert_eq!(style.font, "20px Arial");
                assert_eq!(style.align, TextAlign::Left);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_message_centered() {
        let s = session();
        let style = Style::default();
        let mut list = DrawList::new(800.0, 600.0);
        draw_message(&mut list, &s, &style, WIN_TEXT, &style.win_color);
        match &list.commands[0] {
            DrawCommand::FillText { text, pos, style: ts, paint } => {
                assert_eq!(text, "WIN");
                assert_eq!(*pos, Vec2::new(400.0, 300.0));
                assert_eq!(ts.align, TextAlign::Center);
                assert_eq!(ts.font, "48px Arial");
                assert_eq!(paint.color, style.win_color);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
