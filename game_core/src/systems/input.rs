use hecs::World;

use crate::{InputState, Paddle, PaddleIntent};

/// Turn this iteration's key snapshot into paddle intents
pub fn ingest_inputs(world: &mut World, input: &InputState) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        let keys = input.keys(paddle.side);
        *intent = PaddleIntent::from_keys(keys.up, keys.down);
    }
}
