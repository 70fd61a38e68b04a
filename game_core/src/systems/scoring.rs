use hecs::World;

use crate::{Ball, Config, Paddle, RoundEvent, Scoreboard};

/// Award the point for a ball that left the field and serve it again
pub fn check_scoring(
    world: &mut World,
    event: RoundEvent,
    scoreboard: &mut Scoreboard,
    config: &Config,
) {
    let (Some(exited), Some(scorer)) = (event.exited(), event.scorer()) else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == scorer {
            paddle.score += 1;
            scoreboard.set(scorer, paddle.score);
        }
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.serve(exited, config);
    }

    tracing::info!(
        ?scorer,
        left = scoreboard.left,
        right = scoreboard.right,
        "point scored"
    );
}
