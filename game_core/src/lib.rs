pub mod components;
pub mod config;
pub mod driver;
pub mod game;
pub mod map;
pub mod params;
pub mod resources;
pub mod scene;
pub mod systems;

pub use components::*;
pub use config::*;
pub use driver::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the Pong simulation by exactly one fixed step of `time.dt`
pub fn step(
    world: &mut World,
    time: &mut Time,
    field: &Playfield,
    config: &Config,
    input: &InputState,
    scoreboard: &mut Scoreboard,
    events: &mut Events,
) {
    // Clear events at start of step
    events.clear();

    // 1. Ingest inputs (apply to paddle intents)
    ingest_inputs(world, input);

    // 2. Move paddles based on intents
    move_paddles(world, time, field, config);

    // 3. Move ball, noting a side exit
    let round = move_ball(world, time, field, config, events);

    // 4. Ball vs paddles
    check_collisions(world, config, events);

    // 5. Award the point and re-serve
    check_scoring(world, round, scoreboard, config);

    time.advance();
}

/// Helper to create a paddle entity at its starting position
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(side, config), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
