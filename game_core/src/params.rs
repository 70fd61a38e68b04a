/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield (pixels, origin top-left, y grows downward)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 480.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_SPEED: f32 = 360.0; // pixels per second
    pub const PADDLE_MARGIN: f32 = 10.0; // gap between paddle and side edge

    // Ball
    pub const BALL_SIZE: f32 = 15.0;
    pub const BALL_SPEED: f32 = 400.0; // every bounce resets to this magnitude
    pub const BALL_SPAWN_MARGIN: f32 = 10.0;
    pub const MAX_BOUNCE_ANGLE: f32 = 5.0 * std::f32::consts::PI / 12.0; // 75 degrees

    // Simulation
    pub const TICK_RATE: u32 = 60; // fixed steps per second
    pub const MAX_STEPS_PER_FRAME: u32 = 6; // 0.1s of catch-up at 60 Hz
}
