use glam::Vec2;
use hecs::World;

use crate::{Aabb, Ball, Config, Events, Paddle, Side};

/// Outgoing ball velocity for a paddle contact, or `None` if the boxes do not overlap.
///
/// The angle comes only from where the ball meets the paddle: centre contact
/// is a flat return, either end gives `max_bounce_angle`. Speed is always
/// `config.ball_speed`. `vx` is positive (heading right); the caller flips
/// it for the right paddle.
pub fn resolve_bounce(paddle: &Aabb, ball: &Aabb, config: &Config) -> Option<Vec2> {
    if !paddle.intersects(ball) {
        return None;
    }

    let pad_half = paddle.size().y / 2.0;
    let distance = (paddle.center().y - ball.center().y).clamp(-pad_half, pad_half);
    let normalized = distance / pad_half;
    let angle = normalized * config.max_bounce_angle;

    Some(Vec2::new(
        angle.cos() * config.ball_speed,
        -angle.sin() * config.ball_speed,
    ))
}

/// Check the ball against the paddles, left first. The first hit wins.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let ball_box = {
        let mut ball_query = world.query::<&Ball>();
        let found = ball_query.iter().next().map(|(_e, ball)| ball.aabb(config));
        found
    };

    let Some(ball_box) = ball_box else {
        return; // No ball in world
    };

    let mut paddles: Vec<(Side, Aabb)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.aabb(config)))
        .collect();
    paddles.sort_by_key(|(side, _)| *side != Side::Left);

    for (side, paddle_box) in paddles {
        let Some(mut vel) = resolve_bounce(&paddle_box, &ball_box, config) else {
            continue;
        };
        if side == Side::Right {
            vel.x = -vel.x;
        }

        tracing::debug!(?side, vx = vel.x, vy = vel.y, "ball hit paddle");
        events.ball_hit_paddle = Some(side);

        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            ball.vel = vel;
        }
        return;
    }
}
