//! What a frame shows, expressed as calls on a [`Canvas`].

use glam::Vec2;

use crate::{Aabb, Canvas, Color, Game, Side};

const DIVIDER_DASH: f32 = 5.0;
const DIVIDER_SPACING: f32 = 10.0;
const DIVIDER_DASHES: u32 = 48;
const SCORE_TEXT_SIZE: f32 = 80.0;
const SCORE_TOP: f32 = 10.0;

/// Draw paddles, ball, the centre divider and both scores
pub fn draw<C: Canvas>(game: &Game, canvas: &mut C) {
    let config = game.config();
    let field = game.playfield();

    for side in [Side::Left, Side::Right] {
        if let Some(paddle) = game.paddle(side) {
            canvas.draw_rect(paddle.aabb(config), Color::WHITE);
        }
    }

    if let Some(ball) = game.ball() {
        canvas.draw_rect(ball.aabb(config), Color::WHITE);
    }

    let divider_x = (field.width - DIVIDER_DASH) / 2.0;
    for i in 0..DIVIDER_DASHES {
        let pos = Vec2::new(divider_x, DIVIDER_SPACING * i as f32);
        canvas.draw_rect(Aabb::from_pos_size(pos, Vec2::splat(DIVIDER_DASH)), Color::GREY);
    }

    let scores = game.scoreboard();
    for (side, x) in [(Side::Left, field.width / 4.0), (Side::Right, field.width * 0.75)] {
        canvas.draw_text(
            Vec2::new(x, SCORE_TOP),
            SCORE_TEXT_SIZE,
            &scores.label(side),
            Color::WHITE,
        );
    }
}
