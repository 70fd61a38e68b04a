use std::time::Duration;

use crate::Side;

/// Simulation clock, advanced once per fixed step
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32,   // Seconds covered by the current step
    pub now: f32,  // Simulated seconds since the match started
    pub tick: u64, // Steps run so far
}

impl Time {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            now: 0.0,
            tick: 0,
        }
    }

    pub fn advance(&mut self) {
        self.now += self.dt;
        self.tick += 1;
    }
}

/// Outcome of a ball update, consumed once per tick by the round controller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoundEvent {
    #[default]
    None,
    /// The ball left through the left edge; the right player takes the point
    ScoredLeft,
    /// The ball left through the right edge; the left player takes the point
    ScoredRight,
}

impl RoundEvent {
    /// Edge the ball left through
    pub fn exited(self) -> Option<Side> {
        match self {
            RoundEvent::None => None,
            RoundEvent::ScoredLeft => Some(Side::Left),
            RoundEvent::ScoredRight => Some(Side::Right),
        }
    }

    /// Player awarded the point
    pub fn scorer(self) -> Option<Side> {
        self.exited().map(Side::opponent)
    }
}

/// Score display state, refreshed by the round controller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub left: u32,
    pub right: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, side: Side, score: u32) {
        match side {
            Side::Left => self.left = score,
            Side::Right => self.right = score,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn label(&self, side: Side) -> String {
        self.get(side).to_string()
    }
}

/// Held keys for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleKeys {
    pub up: bool,
    pub down: bool,
}

/// Keyboard snapshot taken once per loop iteration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: PaddleKeys,
    pub right: PaddleKeys,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self, side: Side) -> PaddleKeys {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn keys_mut(&mut self, side: Side) -> &mut PaddleKeys {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Events that occurred during this step
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub ball_hit_paddle: Option<Side>,
    pub ball_hit_wall: bool,
    pub round: RoundEvent,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_paddle = None;
        self.ball_hit_wall = false;
        self.round = RoundEvent::None;
    }
}

/// Wall time received but not yet turned into simulation steps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accumulator {
    carried: Duration,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, elapsed: Duration) {
        self.carried = self.carried.saturating_add(elapsed);
    }

    /// Take one `step` out if enough time is banked
    pub fn consume(&mut self, step: Duration) -> bool {
        if self.carried >= step {
            self.carried -= step;
            true
        } else {
            false
        }
    }

    /// Throw away the backlog, returning how much was dropped
    pub fn drain(&mut self) -> Duration {
        std::mem::take(&mut self.carried)
    }

    pub fn remaining(&self) -> Duration {
        self.carried
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_event_scorer_is_opposite_of_exit() {
        assert_eq!(RoundEvent::ScoredLeft.exited(), Some(Side::Left));
        assert_eq!(RoundEvent::ScoredLeft.scorer(), Some(Side::Right));
        assert_eq!(RoundEvent::ScoredRight.scorer(), Some(Side::Left));
        assert_eq!(RoundEvent::None.scorer(), None);
    }

    #[test]
    fn test_scoreboard_set_and_label() {
        let mut board = Scoreboard::new();
        board.set(Side::Right, 12);
        assert_eq!(board.get(Side::Right), 12);
        assert_eq!(board.label(Side::Right), "12");
        assert_eq!(board.label(Side::Left), "0");
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.ball_hit_paddle = Some(Side::Left);
        events.ball_hit_wall = true;
        events.round = RoundEvent::ScoredRight;

        events.clear();

        assert!(events.ball_hit_paddle.is_none());
        assert!(!events.ball_hit_wall);
        assert_eq!(events.round, RoundEvent::None);
    }

    #[test]
    fn test_accumulator_consumes_whole_steps() {
        let step = Duration::from_millis(10);
        let mut acc = Accumulator::new();
        acc.push(Duration::from_millis(25));

        assert!(acc.consume(step));
        assert!(acc.consume(step));
        assert!(!acc.consume(step));
        assert_eq!(acc.remaining(), Duration::from_millis(5));
    }

    #[test]
    fn test_accumulator_drain() {
        let mut acc = Accumulator::new();
        acc.push(Duration::from_millis(70));
        assert_eq!(acc.drain(), Duration::from_millis(70));
        assert_eq!(acc.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_time_advance() {
        let mut time = Time::new(0.5);
        time.advance();
        time.advance();
        assert_eq!(time.tick, 2);
        assert_eq!(time.now, 1.0);
    }
}
