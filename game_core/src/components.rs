use glam::Vec2;

use crate::{Aabb, Config, Playfield, RoundEvent};

/// Which half of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // top-left corner
    pub speed: f32,
    pub score: u32,
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            pos: Vec2::new(config.paddle_x(side), config.paddle_start_y()),
            speed: config.paddle_speed,
            score: 0,
        }
    }

    pub fn aabb(&self, config: &Config) -> Aabb {
        Aabb::from_pos_size(self.pos, config.paddle_size)
    }

    /// Move at constant speed while a direction is held. A move that would
    /// leave the playfield is dropped, so y stays in [0, H - paddle_height].
    pub fn update(&mut self, dt: f32, intent: PaddleIntent, field: &Playfield, config: &Config) {
        if intent.dir == 0 {
            return;
        }
        let ny = self.pos.y + intent.dir as f32 * self.speed * dt;
        if field.contains_y(ny, config.paddle_size.y) {
            self.pos.y = ny;
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // top-left corner
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn aabb(&self, config: &Config) -> Aabb {
        Aabb::from_pos_size(self.pos, config.ball_size)
    }

    /// Integrate one step and handle the playfield edges.
    ///
    /// Leaving through a side edge is checked first and reported as a
    /// [`RoundEvent`]; the position is left outside for the round controller
    /// to replace. Otherwise a top/bottom contact flips `vel.y` and clamps
    /// the ball back inside. At most one of the two happens per call.
    pub fn update(&mut self, dt: f32, field: &Playfield, config: &Config) -> RoundEvent {
        self.pos += self.vel * dt;

        if self.pos.x < 0.0 {
            self.vel.x = -self.vel.x;
            return RoundEvent::ScoredLeft;
        }
        if self.pos.x + config.ball_size.x > field.width {
            self.vel.x = -self.vel.x;
            return RoundEvent::ScoredRight;
        }

        if self.pos.y < 0.0 {
            self.vel.y = -self.vel.y;
            self.pos.y = 0.0;
        } else if self.pos.y + config.ball_size.y > field.height {
            self.vel.y = -self.vel.y;
            self.pos.y = field.height - config.ball_size.y;
        }
        RoundEvent::None
    }

    /// Put the ball back at the serve point for `exited` with the matching serve vector
    pub fn serve(&mut self, exited: Side, config: &Config) {
        self.pos = config.ball_spawn(exited);
        self.vel = config.ball_serve_velocity(exited);
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both or neither key held means no movement
    pub fn from_keys(up: bool, down: bool) -> Self {
        let dir = match (up, down) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        };
        Self { dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn setup() -> (Config, Playfield) {
        let config = Config::new();
        let field = Playfield::new(&config);
        (config, field)
    }

    #[test]
    fn test_intent_from_keys() {
        assert_eq!(PaddleIntent::from_keys(true, false).dir, -1);
        assert_eq!(PaddleIntent::from_keys(false, true).dir, 1);
        assert_eq!(PaddleIntent::from_keys(true, true).dir, 0);
        assert_eq!(PaddleIntent::from_keys(false, false).dir, 0);
    }

    #[test]
    fn test_paddle_moves_at_constant_speed() {
        let (config, field) = setup();
        let mut paddle = Paddle::new(Side::Left, &config);
        let start = paddle.pos.y;

        paddle.update(DT, PaddleIntent::from_keys(true, false), &field, &config);
        assert!((paddle.pos.y - (start - config.paddle_speed * DT)).abs() < 1e-3);

        paddle.update(DT, PaddleIntent::from_keys(false, true), &field, &config);
        paddle.update(DT, PaddleIntent::from_keys(false, true), &field, &config);
        assert!((paddle.pos.y - (start + config.paddle_speed * DT)).abs() < 1e-3);
    }

    #[test]
    fn test_paddle_ignores_both_keys() {
        let (config, field) = setup();
        let mut paddle = Paddle::new(Side::Right, &config);
        let start = paddle.pos;
        paddle.update(DT, PaddleIntent::from_keys(true, true), &field, &config);
        assert_eq!(paddle.pos, start);
    }

    #[test]
    fn test_paddle_stays_inside_playfield() {
        let (config, field) = setup();
        let mut paddle = Paddle::new(Side::Left, &config);
        let max_y = field.height - config.paddle_size.y;

        for _ in 0..200 {
            paddle.update(DT, PaddleIntent::from_keys(true, false), &field, &config);
            assert!(paddle.pos.y >= 0.0 && paddle.pos.y <= max_y);
        }
        for _ in 0..200 {
            paddle.update(DT, PaddleIntent::from_keys(false, true), &field, &config);
            assert!(paddle.pos.y >= 0.0 && paddle.pos.y <= max_y);
        }
    }

    #[test]
    fn test_paddle_drops_move_past_top() {
        let (config, field) = setup();
        let mut paddle = Paddle::new(Side::Left, &config);
        paddle.pos.y = 1.0;
        paddle.update(DT, PaddleIntent::from_keys(true, false), &field, &config);
        assert_eq!(paddle.pos.y, 1.0, "Move that would go negative is not applied");
    }

    #[test]
    fn test_ball_integrates_linearly() {
        let (config, field) = setup();
        let mut ball = Ball::new(Vec2::new(100.0, 100.0), Vec2::new(60.0, -30.0));
        let event = ball.update(0.5, &field, &config);
        assert_eq!(event, RoundEvent::None);
        assert_eq!(ball.pos, Vec2::new(130.0, 85.0));
        assert_eq!(ball.vel, Vec2::new(60.0, -30.0));
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (config, field) = setup();
        let mut ball = Ball::new(Vec2::new(300.0, 0.0), Vec2::new(100.0, -400.0));
        let event = ball.update(DT, &field, &config);
        assert_eq!(event, RoundEvent::None);
        assert!(ball.vel.y > 0.0, "Ball should bounce down after hitting top wall");
        assert_eq!(ball.vel.x, 100.0, "X velocity should be unchanged");
        assert!(ball.pos.y >= 0.0, "Ball should be clamped inside");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (config, field) = setup();
        let bottom = field.height - config.ball_size.y;
        let mut ball = Ball::new(Vec2::new(300.0, bottom), Vec2::new(100.0, 400.0));
        ball.update(DT, &field, &config);
        assert!(ball.vel.y < 0.0, "Ball should bounce up after hitting bottom wall");
        assert_eq!(ball.pos.y, bottom);
    }

    #[test]
    fn test_ball_exit_left_reports_scored_left() {
        let (config, field) = setup();
        let mut ball = Ball::new(Vec2::new(1.0, 200.0), Vec2::new(-400.0, 0.0));
        assert_eq!(ball.update(DT, &field, &config), RoundEvent::ScoredLeft);
        assert!(ball.vel.x > 0.0);
    }

    #[test]
    fn test_ball_exit_right_reports_scored_right() {
        let (config, field) = setup();
        let x = field.width - config.ball_size.x - 1.0;
        let mut ball = Ball::new(Vec2::new(x, 200.0), Vec2::new(400.0, 0.0));
        assert_eq!(ball.update(DT, &field, &config), RoundEvent::ScoredRight);
        assert!(ball.vel.x < 0.0);
    }

    #[test]
    fn test_side_exit_takes_priority_over_wall() {
        let (config, field) = setup();
        // Corner: leaves left and top in the same step
        let mut ball = Ball::new(Vec2::new(1.0, 1.0), Vec2::new(-400.0, -400.0));
        assert_eq!(ball.update(DT, &field, &config), RoundEvent::ScoredLeft);
        assert!(ball.vel.y < 0.0, "Vertical reflection is skipped on exit");
    }

    #[test]
    fn test_serve_after_left_exit() {
        let config = Config::new();
        let mut ball = Ball::new(Vec2::new(-5.0, 300.0), Vec2::new(123.0, -45.0));
        ball.serve(Side::Left, &config);
        assert_eq!(ball.pos, Vec2::new(10.0, 10.0));
        assert_eq!(ball.vel, Vec2::new(config.ball_speed, config.ball_speed));
    }
}
