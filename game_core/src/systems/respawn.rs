use hecs::World;

use crate::{Arena, Ball, Config, GameRng, Paddle};

/// Serve a new rally.
///
/// The ball goes back to the arena centre with a random heading on each axis
/// and both paddles return to their start offset. Ball speed is left alone;
/// only a session reset restores it.
pub fn reset_rally(world: &mut World, arena: &Arena, config: &Config, rng: &mut GameRng) {
    let center = arena.center();
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.serve(center, rng);
    }

    let start_y = arena.clamp_paddle_y(config.paddle_start_y, config.paddle_height);
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = start_y;
    }
}
