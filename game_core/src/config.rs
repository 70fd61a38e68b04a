use std::time::Duration;

use glam::Vec2;
use thiserror::Error;

use crate::{Params, Side};

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("playfield must have a positive size, got {width}x{height}")]
    Playfield { width: f32, height: f32 },
    #[error("{what} must have a positive size, got {width}x{height}")]
    EntitySize {
        what: &'static str,
        width: f32,
        height: f32,
    },
    #[error("paddle height {paddle} does not fit in playfield height {playfield}")]
    PaddleTooTall { paddle: f32, playfield: f32 },
    #[error("{what} must be positive, got {value}")]
    Speed { what: &'static str, value: f32 },
    #[error("tick rate must be at least 1")]
    TickRate,
    #[error("step cap must be at least 1 when set")]
    StepCap,
}

/// Game configuration, fixed for the whole run
#[derive(Debug, Clone)]
pub struct Config {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub paddle_size: Vec2,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub ball_size: Vec2,
    pub ball_speed: f32,
    pub ball_spawn_margin: f32,
    pub max_bounce_angle: f32,
    pub tick_rate: u32,
    pub max_steps_per_frame: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playfield_width: Params::PLAYFIELD_WIDTH,
            playfield_height: Params::PLAYFIELD_HEIGHT,
            paddle_size: Vec2::new(Params::PADDLE_WIDTH, Params::PADDLE_HEIGHT),
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_size: Vec2::splat(Params::BALL_SIZE),
            ball_speed: Params::BALL_SPEED,
            ball_spawn_margin: Params::BALL_SPAWN_MARGIN,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            tick_rate: Params::TICK_RATE,
            max_steps_per_frame: Some(Params::MAX_STEPS_PER_FRAME),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the geometry and speeds the simulation divides by or clamps against
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.playfield_width > 0.0 && self.playfield_height > 0.0) {
            return Err(ConfigError::Playfield {
                width: self.playfield_width,
                height: self.playfield_height,
            });
        }
        for (what, size) in [("paddle", self.paddle_size), ("ball", self.ball_size)] {
            if !(size.x > 0.0 && size.y > 0.0) {
                return Err(ConfigError::EntitySize {
                    what,
                    width: size.x,
                    height: size.y,
                });
            }
        }
        if self.paddle_size.y > self.playfield_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_size.y,
                playfield: self.playfield_height,
            });
        }
        for (what, value) in [
            ("paddle speed", self.paddle_speed),
            ("ball speed", self.ball_speed),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::Speed { what, value });
            }
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::TickRate);
        }
        if self.max_steps_per_frame == Some(0) {
            return Err(ConfigError::StepCap);
        }
        Ok(())
    }

    /// Duration of one simulation step
    pub fn fixed_step(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate as f64)
    }

    /// Left edge of the paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.playfield_width - self.paddle_margin - self.paddle_size.x,
        }
    }

    /// Top edge that vertically centres a paddle
    pub fn paddle_start_y(&self) -> f32 {
        (self.playfield_height - self.paddle_size.y) / 2.0
    }

    /// Where the ball is served from after it leaves through `side`'s edge
    pub fn ball_spawn(&self, side: Side) -> Vec2 {
        let y = self.ball_spawn_margin;
        match side {
            Side::Left => Vec2::new(self.ball_spawn_margin, y),
            Side::Right => Vec2::new(
                self.playfield_width - self.ball_spawn_margin - self.ball_size.x,
                y,
            ),
        }
    }

    /// Serve velocity paired with `ball_spawn(side)`, always heading back into the field
    pub fn ball_serve_velocity(&self, side: Side) -> Vec2 {
        match side {
            Side::Left => Vec2::new(self.ball_speed, self.ball_speed),
            Side::Right => Vec2::new(-self.ball_speed, self.ball_speed),
        }
    }
}
