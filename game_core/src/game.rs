use hecs::World;

use crate::{
    create_ball, create_paddle, step, Ball, Config, ConfigError, Events, InputState, Paddle,
    Playfield, Scoreboard, Side, Time,
};

/// One match: both paddles, the ball and the score, owned in a single place
pub struct Game {
    world: World,
    time: Time,
    field: Playfield,
    config: Config,
    scoreboard: Scoreboard,
    events: Events,
}

impl Game {
    /// Set up paddles at mid-height and serve from the left spawn
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);
        create_ball(
            &mut world,
            config.ball_spawn(Side::Left),
            config.ball_serve_velocity(Side::Left),
        );

        Ok(Self {
            world,
            time: Time::new(config.fixed_step().as_secs_f32()),
            field: Playfield::new(&config),
            config,
            scoreboard: Scoreboard::new(),
            events: Events::new(),
        })
    }

    /// Run one fixed step with the given key snapshot
    pub fn step(&mut self, input: &InputState) -> Events {
        step(
            &mut self.world,
            &mut self.time,
            &self.field,
            &self.config,
            input,
            &mut self.scoreboard,
            &mut self.events,
        );
        self.events
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let mut query = self.world.query::<&Paddle>();
        let paddle = query
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p);
        paddle
    }

    pub fn ball(&self) -> Option<Ball> {
        let mut query = self.world.query::<&Ball>();
        let ball = query.iter().next().map(|(_e, b)| *b);
        ball
    }

    /// Mutable access for scripted setups
    pub fn ball_mut(&mut self) -> Option<hecs::RefMut<'_, Ball>> {
        let entity = {
            let mut query = self.world.query::<&Ball>();
            let entity = query.iter().next().map(|(e, _b)| e);
            entity
        }?;
        self.world.get::<&mut Ball>(entity).ok()
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn playfield(&self) -> &Playfield {
        &self.field
    }

    pub fn time(&self) -> &Time {
        &self.time
    }

    /// Events from the most recent step
    pub fn events(&self) -> &Events {
        &self.events
    }
}
