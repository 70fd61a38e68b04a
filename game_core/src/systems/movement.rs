use hecs::World;

use crate::{Ball, Config, Events, Paddle, PaddleIntent, Playfield, RoundEvent, Time};

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, time: &Time, field: &Playfield, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        paddle.update(time.dt, *intent, field, config);
    }
}

/// Move the ball and report whether it left the field this step
pub fn move_ball(
    world: &mut World,
    time: &Time,
    field: &Playfield,
    config: &Config,
    events: &mut Events,
) -> RoundEvent {
    let mut event = RoundEvent::None;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let vy = ball.vel.y;
        event = ball.update(time.dt, field, config);
        if ball.vel.y != vy {
            events.ball_hit_wall = true;
        }
    }
    events.round = event;
    event
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Side};
    use glam::Vec2;

    #[test]
    fn test_move_paddles_follows_intent() {
        let mut world = World::new();
        let config = Config::new();
        let field = Playfield::new(&config);
        let left = create_paddle(&mut world, Side::Left, &config);
        let right = create_paddle(&mut world, Side::Right, &config);
        world.get::<&mut PaddleIntent>(left).unwrap().dir = 1;

        let time = Time::new(0.1);
        move_paddles(&mut world, &time, &field, &config);

        let start = config.paddle_start_y();
        let left_y = world.get::<&Paddle>(left).unwrap().pos.y;
        let right_y = world.get::<&Paddle>(right).unwrap().pos.y;
        assert!((left_y - (start + config.paddle_speed * 0.1)).abs() < 1e-3);
        assert_eq!(right_y, start, "Idle paddle should not move");
    }

    #[test]
    fn test_move_ball_reports_exit() {
        let mut world = World::new();
        let config = Config::new();
        let field = Playfield::new(&config);
        create_ball(&mut world, Vec2::new(2.0, 100.0), Vec2::new(-400.0, 0.0));

        let mut events = Events::new();
        let event = move_ball(&mut world, &Time::new(0.1), &field, &config, &mut events);
        assert_eq!(event, RoundEvent::ScoredLeft);
        assert_eq!(events.round, RoundEvent::ScoredLeft);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_move_ball_flags_wall_hit() {
        let mut world = World::new();
        let config = Config::new();
        let field = Playfield::new(&config);
        create_ball(&mut world, Vec2::new(300.0, 5.0), Vec2::new(100.0, -400.0));

        let mut events = Events::new();
        let event = move_ball(&mut world, &Time::new(0.1), &field, &config, &mut events);
        assert_eq!(event, RoundEvent::None);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_move_ball_without_ball_is_quiet() {
        let mut world = World::new();
        let config = Config::new();
        let field = Playfield::new(&config);
        let mut events = Events::new();
        let event = move_ball(&mut world, &Time::new(0.1), &field, &config, &mut events);
        assert_eq!(event, RoundEvent::None);
    }
}
