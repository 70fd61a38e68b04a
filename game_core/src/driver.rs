//! Fixed-timestep loop driver and the collaborators it talks to.

use std::time::{Duration, Instant};

use glam::Vec2;
use tracing::{debug, info, warn};

use crate::{scene, Aabb, Config, ConfigError, Game, InputState};

/// RGBA colour, components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const WHITE: Color = Color([1.0, 1.0, 1.0, 1.0]);
    pub const GREY: Color = Color([0.6, 0.6, 0.6, 1.0]);
    pub const BLACK: Color = Color([0.0, 0.0, 0.0, 1.0]);
}

/// Drawing surface for one frame
pub trait Canvas {
    fn draw_rect(&mut self, rect: Aabb, color: Color);

    /// `anchor` is the top-centre of the text, `size` its glyph height
    fn draw_text(&mut self, anchor: Vec2, size: f32, text: &str, color: Color);

    /// Finish the frame
    fn present(&mut self) {}
}

/// Monotonic time source
pub trait Clock {
    /// Time since the previous call (or since creation on the first call)
    fn elapsed(&mut self) -> Duration;
}

/// Wall clock backed by [`Instant`]
#[derive(Debug)]
pub struct SystemClock {
    last: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let dt = now.duration_since(self.last);
        self.last = now;
        dt
    }
}

/// Result of draining the window's pending events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Polled {
    pub close_requested: bool,
    pub input: InputState,
}

/// Non-blocking source of window events and key state
pub trait EventSource {
    fn poll(&mut self) -> Polled;
}

/// What one call to [`GameLoop::advance`] did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub steps: u32,
    /// Backlog thrown away because the step cap was hit
    pub dropped: Duration,
}

/// Totals over a [`GameLoop::run`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub frames: u64,
    pub steps: u64,
    pub dropped: Duration,
}

impl LoopStats {
    fn record(&mut self, report: FrameReport) {
        self.frames += 1;
        self.steps += u64::from(report.steps);
        self.dropped += report.dropped;
    }
}

/// Owns the match and the accumulator; turns frame time into fixed steps
pub struct GameLoop {
    game: Game,
    accumulator: crate::Accumulator,
    step: Duration,
    max_steps: Option<u32>,
}

impl GameLoop {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let step = config.fixed_step();
        let max_steps = config.max_steps_per_frame;
        let game = Game::new(config)?;
        Ok(Self {
            game,
            accumulator: crate::Accumulator::new(),
            step,
            max_steps,
        })
    }

    /// Bank `elapsed` and run as many whole steps as it covers
    pub fn advance(&mut self, elapsed: Duration, input: &InputState) -> FrameReport {
        self.accumulator.push(elapsed);

        let mut steps = 0u32;
        while self.max_steps.map_or(true, |cap| steps < cap) && self.accumulator.consume(self.step)
        {
            self.game.step(input);
            steps += 1;
        }

        let mut dropped = Duration::ZERO;
        if self.accumulator.remaining() >= self.step {
            dropped = self.accumulator.drain();
            warn!(
                steps,
                dropped_ms = dropped.as_secs_f64() * 1000.0,
                "simulation fell behind, dropping backlog"
            );
        }

        FrameReport { steps, dropped }
    }

    /// Draw the latest simulated state
    pub fn render<C: Canvas>(&self, canvas: &mut C) {
        scene::draw(&self.game, canvas);
    }

    /// Poll, step, render until the event source asks to close
    pub fn run<E, C, V>(&mut self, events: &mut E, clock: &mut C, canvas: &mut V) -> LoopStats
    where
        E: EventSource,
        C: Clock,
        V: Canvas,
    {
        let mut stats = LoopStats::default();
        loop {
            let polled = events.poll();
            if polled.close_requested {
                info!(frames = stats.frames, steps = stats.steps, "close requested");
                break;
            }

            let report = self.advance(clock.elapsed(), &polled.input);
            stats.record(report);

            self.render(canvas);
            canvas.present();
        }
        debug!(?stats, "loop finished");
        stats
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn accumulator(&self) -> Duration {
        self.accumulator.remaining()
    }

    pub fn fixed_step(&self) -> Duration {
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uncapped() -> Config {
        let mut config = Config::new();
        config.max_steps_per_frame = None;
        config
    }

    #[test]
    fn test_short_frames_bank_time() {
        let mut game_loop = GameLoop::new(uncapped()).unwrap();
        let step = game_loop.fixed_step();
        let input = InputState::new();

        assert_eq!(game_loop.advance(step / 2, &input).steps, 0);
        assert_eq!(game_loop.advance(step - step / 2, &input).steps, 1);
        assert_eq!(game_loop.accumulator(), Duration::ZERO);
        assert_eq!(game_loop.game().time().tick, 1);
    }

    #[test]
    fn test_long_frame_runs_several_steps() {
        let mut game_loop = GameLoop::new(uncapped()).unwrap();
        let step = game_loop.fixed_step();
        let report = game_loop.advance(step * 3 + step / 4, &InputState::new());

        assert_eq!(report.steps, 3);
        assert_eq!(report.dropped, Duration::ZERO);
        assert_eq!(game_loop.accumulator(), step / 4);
    }

    #[test]
    fn test_step_cap_drops_backlog() {
        let mut config = Config::new();
        config.max_steps_per_frame = Some(4);
        let mut game_loop = GameLoop::new(config).unwrap();
        let step = game_loop.fixed_step();

        let report = game_loop.advance(step * 10, &InputState::new());

        assert_eq!(report.steps, 4);
        assert_eq!(report.dropped, step * 6);
        assert_eq!(game_loop.accumulator(), Duration::ZERO);
    }

    #[test]
    fn test_step_cap_keeps_sub_step_remainder() {
        let mut config = Config::new();
        config.max_steps_per_frame = Some(2);
        let mut game_loop = GameLoop::new(config).unwrap();
        let step = game_loop.fixed_step();

        let report = game_loop.advance(step * 2 + step / 3, &InputState::new());

        assert_eq!(report.steps, 2);
        assert_eq!(report.dropped, Duration::ZERO);
        assert_eq!(game_loop.accumulator(), step / 3);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let mut clock = SystemClock::new();
        let a = clock.elapsed();
        let b = clock.elapsed();
        assert!(a >= Duration::ZERO && b >= Duration::ZERO);
    }
}
